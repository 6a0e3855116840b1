//! Filesystem module.
//!
//! Provides:
//! - Destination directory management
//! - Local names for downloaded tiles and the index page

pub mod paths;

pub use paths::{ensure_dest_dir, image_file_name, image_path, index_path, INDEX_FILE_NAME};
