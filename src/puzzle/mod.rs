//! Puzzle URL extraction and ordering.
//!
//! Provides:
//! - Scanning log text for puzzle image fragments
//! - Ordering URLs by their trailing token

pub mod extract;
pub mod order;

pub use extract::{extract_urls, extract_urls_from_str, PUZZLE_HOST, PUZZLE_PATTERN};
pub use order::{sort_puzzle_urls, sort_token};
