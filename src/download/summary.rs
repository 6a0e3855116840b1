//! Fetch result tracking.

use std::path::{Path, PathBuf};

/// Outcome of a completed fetch run.
#[derive(Debug, Clone)]
pub struct FetchSummary {
    pub dest_dir: PathBuf,
    pub images: usize,
    pub bytes: u64,
    pub index_path: Option<PathBuf>,
}

impl FetchSummary {
    pub fn new(dest_dir: &Path) -> Self {
        Self {
            dest_dir: dest_dir.to_path_buf(),
            images: 0,
            bytes: 0,
            index_path: None,
        }
    }

    /// Record one downloaded tile of `bytes` length.
    pub fn record_image(&mut self, bytes: u64) {
        self.images += 1;
        self.bytes += bytes;
    }
}
