//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the generated index page inside the destination directory.
pub const INDEX_FILE_NAME: &str = "index.html";

/// Local file name of the tile at `index` in puzzle order.
pub fn image_file_name(index: usize) -> String {
    format!("img{}.jpg", index)
}

/// Full path of the tile at `index` inside `dest_dir`.
pub fn image_path(dest_dir: &Path, index: usize) -> PathBuf {
    dest_dir.join(image_file_name(index))
}

/// Full path of the index page inside `dest_dir`.
pub fn index_path(dest_dir: &Path) -> PathBuf {
    dest_dir.join(INDEX_FILE_NAME)
}

/// Ensure the destination directory exists, creating it if necessary.
///
/// An existing directory is accepted as-is; an existing non-directory is an error.
pub fn ensure_dest_dir(dest_dir: &Path) -> Result<()> {
    if dest_dir.exists() {
        if dest_dir.is_dir() {
            return Ok(());
        }
        return Err(Error::Directory {
            path: dest_dir.to_path_buf(),
            message: "path exists and is not a directory".to_string(),
        });
    }

    std::fs::create_dir_all(dest_dir).map_err(|e| Error::Directory {
        path: dest_dir.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!("Created destination directory {}", dest_dir.display());
    Ok(())
}
