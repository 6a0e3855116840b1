//! Logpuzzle - recover a sliced image from an Apache access log.
//!
//! The log contains requests for the tiles of a larger image. This library
//! finds those tile URLs, orders them by the token at the end of each file
//! name, and downloads them next to an `index.html` that lays them out.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use logpuzzle::{extract_urls, fetch_all};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let urls = extract_urls(Path::new("animal_code.google.com"))?;
//!     fetch_all(&urls, Path::new("animaldir")).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;
pub mod puzzle;

// Re-exports for convenience
pub use config::Config;
pub use download::{fetch_all, fetch_all_with, FetchSummary, ImageClient};
pub use error::{Error, Result};
pub use puzzle::{extract_urls, extract_urls_from_str, sort_token};
