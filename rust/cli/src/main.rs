use std::io;

fn main() {
    let level = hilo_cli::config::load()
        .map(|c| c.log_level)
        .unwrap_or_else(|_| "warn".to_string());
    hilo_cli::logging::init_logging(&level);

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let code = hilo_cli::run(std::env::args(), &mut stdout, &mut stderr);
    std::process::exit(code);
}
