//! Styled terminal output helpers
//!
//! Colors follow the operation outcome: green for completed work, yellow for
//! informational skips, dim for command echoes under `--verbose`.

use console::Style;

/// A completed step
pub fn success(message: &str) {
    println!("{}", Style::new().green().bold().apply_to(message));
}

/// A step that had nothing to do; never an error
pub fn skip(message: &str) {
    println!("{}", Style::new().yellow().apply_to(message));
}

/// Progress narration
pub fn info(message: &str) {
    println!("{}", message);
}

/// Dim echo of an external command line
pub fn command_echo(line: &str) {
    println!("{}", Style::new().dim().apply_to(format!("$ {}", line)));
}
