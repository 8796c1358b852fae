//! # Error Handling
//!
//! User-friendly error display functions for the Strata CLI.

use colored::Colorize;
use strata_analysis::AnalyzerError;

/// Display a scan error with helpful suggestions
///
/// # Arguments
///
/// * `error` - The scan error to display
pub fn display_scan_error(error: &AnalyzerError) {
    eprintln!("{} Scan error: {}", "✗".red().bold(), error);
    eprintln!();
    eprintln!("{}", "Possible causes:".yellow());
    eprintln!("  • The path does not exist");
    eprintln!("  • The path is a file, not a directory");
    eprintln!("  • You lack read permission on the directory");
    eprintln!();
    eprintln!(
        "{} Pass a readable project directory, e.g. `strata scan ./my-project`.",
        "Tip:".cyan().bold()
    );
}

/// Display an invalid input error
///
/// # Arguments
///
/// * `message` - The error message to display
pub fn display_invalid_input(message: &str) {
    eprintln!("{} Invalid input: {}", "✗".red().bold(), message);
}
