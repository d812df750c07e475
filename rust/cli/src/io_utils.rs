//! Line-oriented input helpers for interactive commands.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Trims surrounding whitespace and returns `None` on EOF or read errors.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use blackjack_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  500 \n2\n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("500"));
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("2"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(_) => None, // Read error
    }
}
