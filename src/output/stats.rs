//! Run timing reports.

use console::style;

use crate::download::RunSummary;

/// Print the result of one strategy run.
pub fn print_run_summary(summary: &RunSummary) {
    println!("Success! Time: {} ms", summary.elapsed.as_millis());
    println!(
        "  {}",
        style(format!(
            "{} images, {} bytes written to {}",
            summary.images,
            summary.bytes,
            summary.directory.display()
        ))
        .dim()
    );
}

/// Print how the parallel run compared to the sequential one.
pub fn print_comparison(sequential: &RunSummary, parallel: &RunSummary) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!(
        "  Sequential: {} ms",
        style(sequential.elapsed.as_millis()).yellow()
    );
    println!(
        "  Parallel:   {} ms",
        style(parallel.elapsed.as_millis()).green()
    );
    if let Some(speedup) = sequential.speedup_over(parallel) {
        println!("  Speed-up:   {:.1}x", speedup);
    }
    println!("{}", style("═".repeat(50)).dim());
}
