/// User interface and status output utilities
///
/// This module handles:
/// - Colored terminal text on stderr
/// - Error message formatting
///
/// Everything goes to stderr so CSV and YAML on stdout stay clean.
use std::io::Write;

/// Print colored text to stderr, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        if let Some(ref mut t) = term::stderr() {
            if t.fg(fg).is_err() {
                return false;
            }
            let _ = t.attr(term::Attr::Bold);
            if write!(t, "{}", s).is_err() {
                return false;
            }
            let _ = t.reset();
            return true;
        }

        false
    }
}

/// Print a status message with "birthday: " prefix
pub fn status(s: &str) {
    eprintln!("birthday: {}", s);
}

/// Print the one-line usage hint
pub fn print_usage() {
    eprintln!("Usage: birthday-table <csv|yaml|svg>");
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    print_color("error", term::color::BRIGHT_RED);
    eprintln!(": {}", msg);
}
