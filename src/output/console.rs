//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the heading that opens a strategy run.
pub fn print_heading(heading: &str) {
    println!("{}", style(heading).bold());
}

pub fn print_download_started(url: &str) {
    println!("Starting download from url: {}", url);
}

pub fn print_download_finished(url: &str) {
    println!("Image from {} download successfully!", style(url).green());
}
