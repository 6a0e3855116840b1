//! Error types for the logpuzzle application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Input errors
    #[error("Cannot read log file '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Destination errors
    #[error("Cannot create destination directory '{}': {message}", .path.display())]
    Directory { path: PathBuf, message: String },

    // Download errors
    #[error("Download of {url} failed: {message}")]
    Download { url: String, message: String },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a download error for `url` from any displayable cause.
    pub fn download(url: &str, cause: impl std::fmt::Display) -> Self {
        Error::Download {
            url: url.to_string(),
            message: cause.to_string(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::File { .. } => exit_codes::FILE_ERROR,
            Error::Directory { .. } => exit_codes::DIRECTORY_ERROR,
            Error::Download { .. } => exit_codes::DOWNLOAD_ERROR,
            Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                exit_codes::CONFIG_ERROR
            }
            Error::Io(_) => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USAGE: i32 = 1;
    // 2 is left to clap for argument parse errors
    pub const FILE_ERROR: i32 = 3;
    pub const DIRECTORY_ERROR: i32 = 4;
    pub const DOWNLOAD_ERROR: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
    pub const CONFIG_ERROR: i32 = 7;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_error_names_path() {
        let err = Error::File {
            path: PathBuf::from("/var/log/missing.log"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/var/log/missing.log"));
        assert_eq!(err.exit_code(), exit_codes::FILE_ERROR);
    }

    #[test]
    fn test_download_error_exit_code() {
        let err = Error::download("http://example.com/a.jpg", "HTTP 404 Not Found");
        assert_eq!(
            err.to_string(),
            "Download of http://example.com/a.jpg failed: HTTP 404 Not Found"
        );
        assert_eq!(err.exit_code(), exit_codes::DOWNLOAD_ERROR);
    }

    #[test]
    fn test_exit_code_mapping() {
        let directory = Error::Directory {
            path: PathBuf::from("/tmp/taken"),
            message: "path exists and is not a directory".to_string(),
        };
        assert_eq!(directory.exit_code(), exit_codes::DIRECTORY_ERROR);
        assert!(directory.to_string().contains("/tmp/taken"));

        assert_eq!(
            Error::Config("bad".to_string()).exit_code(),
            exit_codes::CONFIG_ERROR
        );
        assert_eq!(
            Error::ConfigValidation {
                field: "timeout_seconds".to_string(),
                message: "zero".to_string(),
            }
            .exit_code(),
            exit_codes::CONFIG_ERROR
        );
        assert_eq!(
            Error::Io(std::io::Error::other("disk full")).exit_code(),
            exit_codes::UNEXPECTED_ERROR
        );

        let codes = [
            exit_codes::SUCCESS,
            exit_codes::USAGE,
            exit_codes::FILE_ERROR,
            exit_codes::DIRECTORY_ERROR,
            exit_codes::DOWNLOAD_ERROR,
            exit_codes::UNEXPECTED_ERROR,
            exit_codes::CONFIG_ERROR,
        ];
        assert!(!codes.contains(&2));
    }
}
