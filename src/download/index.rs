//! Index page generation.

/// HTML page that lays out downloaded tiles in puzzle order.
#[derive(Debug, Default, Clone)]
pub struct IndexPage {
    tags: String,
}

impl IndexPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an `<img>` tag for a local file name.
    pub fn push_image(&mut self, file_name: &str) {
        self.tags.push_str(&format!("<img src=\"{}\" />", file_name));
    }

    /// Render the complete document.
    pub fn render(&self) -> String {
        format!("<html><body>{}</body></html>", self.tags)
    }
}

/// Render the index page for `count` tiles named `img0.jpg`, `img1.jpg`, ...
pub fn render_index(count: usize) -> String {
    let mut page = IndexPage::new();
    for index in 0..count {
        page.push_image(&crate::fs::image_file_name(index));
    }
    page.render()
}
