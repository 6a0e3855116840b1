//! Log scanning for puzzle image URLs.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::puzzle::order::sort_puzzle_urls;

/// Scheme and host prepended to every matched path.
pub const PUZZLE_HOST: &str = "http://code.google.com";

/// Path fragment pattern. The trailing `.*jpg` is greedy and stops at a newline,
/// so several fragments on one line collapse into a single match.
pub const PUZZLE_PATTERN: &str = r"/edu/languages/google-python-class/images/puzzle/.*jpg";

static PUZZLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PUZZLE_PATTERN).expect("puzzle pattern is a valid regex"));

/// Read a log file and return its puzzle URLs, deduplicated and in puzzle order.
pub fn extract_urls(log_path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(log_path).map_err(|source| Error::File {
        path: log_path.to_path_buf(),
        source,
    })?;

    // Apache logs occasionally carry stray non-UTF-8 bytes in user agents.
    let content = String::from_utf8_lossy(&bytes);
    let urls = extract_urls_from_str(&content);

    tracing::info!(
        "Found {} unique puzzle URLs in {}",
        urls.len(),
        log_path.display()
    );

    Ok(urls)
}

/// Extract puzzle URLs from in-memory log text.
pub fn extract_urls_from_str(content: &str) -> Vec<String> {
    let fragments: HashSet<&str> = PUZZLE_REGEX
        .find_iter(content)
        .map(|m| m.as_str())
        .collect();

    let mut urls: Vec<String> = fragments
        .into_iter()
        .map(|fragment| format!("{}{}", PUZZLE_HOST, fragment))
        .collect();

    sort_puzzle_urls(&mut urls);
    tracing::debug!("Extracted {} puzzle URLs", urls.len());
    urls
}
