//! Download module for puzzle tile retrieval.
//!
//! This module provides:
//! - The HTTP image client
//! - Sequential tile downloading
//! - Index page generation

pub mod client;
pub mod fetcher;
pub mod index;
pub mod summary;

pub use client::ImageClient;
pub use fetcher::{fetch_all, fetch_all_with};
pub use index::{render_index, IndexPage};
pub use summary::FetchSummary;
