//! Formatting helpers for terminal output.

use console::style;

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

/// Display a proposed tag and its annotation message.
pub fn display_proposed_tag(tag: &str, message: &str) {
    println!("\n{} {}", style("Tag:").bold(), tag);
    println!("{}", style("Message:").bold());
    for line in message.lines() {
        println!("  {}", line);
    }
}
