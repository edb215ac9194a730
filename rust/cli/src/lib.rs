//! # Hi-Lo CLI Library
//!
//! Command-line front end for the Hi-Lo card game bot. The bot itself
//! ([`bot::HiloBot`]) reads chat lines such as `!dealer spades Q` and answers
//! with the reply messages a chat platform would post.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the matching subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["hilo", "sim", "--seed", "42", "--rounds", "5"];
//! let code = hilo_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Chat with the bot over stdin
//! - `sim`: Feed a seeded shuffled deck through the bot
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod bot;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HiloCli};

pub use commands::{handle_cfg_command, handle_play_command, handle_sim_command};
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "cfg"];

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// let args = vec!["hilo", "sim", "--seed", "1", "--rounds", "3"];
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = hilo_cli::run(args, &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Rounds played: 3"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HiloCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Hi-Lo card game bot");
                    write_or_exit!(err, "Usage: hilo <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: hilo --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play { transcript } => match config::load() {
            Ok(cfg) => {
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                handle_play_command(transcript, &cfg, out, err, &mut stdin_lock)
            }
            Err(e) => Err(e.into()),
        },
        Commands::Sim {
            seed,
            rounds,
            transcript,
        } => match config::load() {
            Ok(cfg) => handle_sim_command(seed, rounds, transcript, &cfg, out, err),
            Err(e) => Err(e.into()),
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        // Already reported by the handler
        Err(CliError::InvalidInput(_)) => exit_code::ERROR,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
