//! Output formatting utilities for CLI commands

use is_terminal::IsTerminal;
use std::io::{self, Write};

/// Print a warning to stderr (respects quiet flag)
pub fn log_warning(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{} {}", color("33", "warning:"), msg);
    }
}

/// Write output to stdout
pub fn write_output(content: &str) -> Result<(), String> {
    let mut stdout = io::stdout();
    stdout
        .write_all(content.as_bytes())
        .map_err(|e| format!("Failed to write to stdout: {}", e))?;
    stdout
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {}", e))
}

/// Colorize text with ANSI escape codes (only if stdout is a terminal)
pub fn color(code: &str, text: &str) -> String {
    if io::stdout().is_terminal() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Format a [0, 1] score to four decimals, colored by threshold
pub fn metric_colored(value: f64) -> String {
    let code = if value >= 0.9 {
        "1;32"
    } else if value >= 0.7 {
        "1;33"
    } else if value >= 0.5 {
        "33"
    } else {
        "1;31"
    };
    color(code, &format!("{:.4}", value))
}
