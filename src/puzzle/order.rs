//! Puzzle reassembly order.

/// Return the sort token of a puzzle URL: everything after its final `-`.
///
/// For `http://code.google.com/.../p-bbbb-baaa.jpg` this is `baaa.jpg`.
/// A URL without any hyphen is its own token.
pub fn sort_token(url: &str) -> &str {
    match url.rfind('-') {
        Some(pos) => &url[pos + 1..],
        None => url,
    }
}

/// Sort URLs ascending by token, breaking ties on the full URL.
pub fn sort_puzzle_urls(urls: &mut [String]) {
    urls.sort_by(|a, b| {
        sort_token(a)
            .cmp(sort_token(b))
            .then_with(|| a.cmp(b))
    });
}
