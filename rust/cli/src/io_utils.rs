//! Line input helpers for the interactive `play` command.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Trims surrounding whitespace and returns `Ok(None)` on EOF.
///
/// # Errors
///
/// Read failures, including input that is not valid UTF-8, are returned
/// rather than treated as end of input.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use hilo_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  !startgame \n");
/// assert_eq!(read_stdin_line(&mut input).unwrap().as_deref(), Some("!startgame"));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    match stdin.read_line(&mut line)? {
        0 => Ok(None), // EOF
        _ => Ok(Some(line.trim().to_string())),
    }
}
