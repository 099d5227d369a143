//! Terminal output helpers.
//!
//! Results go to stdout and errors to stderr. Colour is applied through
//! `console`, which drops styling when the stream is not a terminal.

use console::style;

/// Force coloured output on or off for both streams
pub fn set_colors(enabled: bool) {
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

/// Print an operation result.
pub fn display_result(message: &str) {
    println!("{}", message);
}

/// Print an error message prefixed with a red `ERROR:`.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a success line with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").for_stderr().red().bold(), message)
}
