//! Logpuzzle - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use logpuzzle::{
    cli::{usage, Args},
    config::{validate_config, Config},
    download::{fetch_all_with, ImageClient},
    error::{exit_codes, Result},
    output::{print_error, print_fetch_summary, print_info, print_success, print_warning},
    puzzle::extract_urls,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if std::env::args_os().len() <= 1 {
        eprintln!("{}", usage());
        return ExitCode::from(exit_codes::USAGE as u8);
    }

    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging; stdout is reserved for URL output
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    args.merge_into_config(&mut config);
    validate_config(&config)?;

    let urls = extract_urls(&args.logfile)?;
    if urls.is_empty() {
        print_warning(&format!(
            "No puzzle URLs found in {}",
            args.logfile.display()
        ));
    }

    match &config.options.download_directory {
        Some(dest_dir) => {
            let show_progress = config.options.show_progress;
            if show_progress {
                print_info(&format!(
                    "Downloading {} images into {}",
                    urls.len(),
                    dest_dir.display()
                ));
            }

            let client = ImageClient::new(&config.fetch)?;
            let summary = fetch_all_with(&client, &urls, dest_dir, show_progress).await?;

            if show_progress {
                print_fetch_summary(&summary);
                print_success("Open index.html to view the assembled image");
            }
        }
        None => {
            for url in &urls {
                println!("{}", url);
            }
        }
    }

    Ok(())
}
