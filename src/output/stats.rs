//! Statistics reporting.

use console::style;

use crate::download::FetchSummary;

/// Print the result of a completed fetch run.
pub fn print_fetch_summary(summary: &FetchSummary) {
    println!();
    println!("{}", style("Puzzle assembled:").bold());
    println!("  Directory: {}", summary.dest_dir.display());
    println!("  Images:    {}", summary.images);
    println!("  Bytes:     {}", summary.bytes);
    if let Some(index) = &summary.index_path {
        println!("  Index:     {}", style(index.display()).green());
    }
}
