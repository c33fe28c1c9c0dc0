//! Pure formatting functions for UI output.
//!
//! Display logic separated from user interaction; everything here takes its
//! inputs explicitly and only prints.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::CommitRecord;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow().bold(), warning);
}

/// Display the proposed version change (or initial version).
pub fn display_proposed_version(current: Option<&str>, next: &str) {
    match current {
        Some(current) => {
            println!("Current version: {}", style(current).cyan());
            println!("New version:     {}", style(next).green());
        }
        None => {
            println!("No existing versions found");
            println!("Initial version: {}", style(next).green());
        }
    }
}

/// Display up to 10 recent commit subjects.
pub fn display_commit_overview(commits: &[CommitRecord]) {
    println!("\n{}", style("Recent commits:").bold());
    for commit in commits.iter().take(10) {
        println!("  {} {}", style(&commit.hash).dim(), commit.subject);
    }
    if commits.len() > 10 {
        println!("  ... and {} more commits", commits.len() - 10);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_success() {
        // Visual verification test - output is printed to stdout
        display_success("test success");
    }

    #[test]
    fn test_display_proposed_version() {
        display_proposed_version(Some("v1.0.0"), "v1.1.0");
        display_proposed_version(None, "v0.1.0");
    }
}
