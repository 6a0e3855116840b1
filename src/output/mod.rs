//! Output module for console output.
//!
//! Provides:
//! - Colored console output
//! - Statistics reporting

pub mod console;
pub mod stats;

pub use console::{print_error, print_info, print_progress, print_success, print_warning};
pub use stats::print_fetch_summary;
