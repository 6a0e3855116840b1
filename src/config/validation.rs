//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Maximum request timeout in seconds.
const MAX_TIMEOUT_SECONDS: u64 = 3600;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_timeout(config.fetch.timeout_seconds)?;
    validate_user_agent(&config.fetch.user_agent)?;

    if let Some(dir) = &config.options.download_directory {
        if dir.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                field: "download_directory".to_string(),
                message: "Destination directory cannot be empty".to_string(),
            });
        }
    }

    Ok(())
}

/// Validate the request timeout.
pub fn validate_timeout(seconds: u64) -> Result<()> {
    if seconds == 0 || seconds > MAX_TIMEOUT_SECONDS {
        return Err(Error::ConfigValidation {
            field: "timeout_seconds".to_string(),
            message: format!(
                "Timeout must be between 1 and {} seconds (got {})",
                MAX_TIMEOUT_SECONDS, seconds
            ),
        });
    }

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: "User agent cannot be empty".to_string(),
        });
    }

    // Must survive as an HTTP header value
    if user_agent.chars().any(|c| c.is_control()) {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: "User agent cannot contain control characters".to_string(),
        });
    }

    Ok(())
}
