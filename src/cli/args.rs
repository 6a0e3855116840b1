//! Command-line argument definitions using clap.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::Config;

/// Log puzzle CLI.
#[derive(Parser, Debug)]
#[command(
    name = "logpuzzle",
    version,
    about = "Recover puzzle image URLs from an Apache log",
    long_about = "Scans an Apache access log for puzzle image fragments and prints their URLs \
                  in puzzle order.\n\n\
                  With --todir, downloads every tile into the directory and writes an \
                  index.html that reassembles the full image."
)]
pub struct Args {
    /// Destination directory for downloaded images.
    #[arg(short = 'd', long = "todir")]
    pub todir: Option<PathBuf>,

    /// Apache logfile to extract URLs from.
    pub logfile: PathBuf,

    /// Path to an optional TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Per-request timeout in seconds.
    #[arg(long, env = "LOGPUZZLE_TIMEOUT")]
    pub timeout: Option<u64>,

    /// User agent sent with image requests.
    #[arg(long = "user-agent", env = "LOGPUZZLE_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.todir {
            config.options.download_directory = Some(dir.clone());
        }

        if let Some(timeout) = self.timeout {
            config.fetch.timeout_seconds = timeout;
        }

        if let Some(user_agent) = &self.user_agent {
            config.fetch.user_agent = user_agent.clone();
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}

/// One-line usage summary, as printed when the program is run without arguments.
pub fn usage() -> String {
    Args::command().render_usage().to_string()
}
