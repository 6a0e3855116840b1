//! Sequential tile downloading.

use std::path::Path;

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::config::FetchConfig;
use crate::download::client::ImageClient;
use crate::download::index::render_index;
use crate::download::summary::FetchSummary;
use crate::error::{Error, Result};
use crate::fs::{ensure_dest_dir, image_path, index_path};
use crate::output::print_progress;

/// Download every URL into `dest_dir` with default fetch settings.
pub async fn fetch_all(urls: &[String], dest_dir: &Path) -> Result<FetchSummary> {
    let client = ImageClient::new(&FetchConfig::default())?;
    fetch_all_with(&client, urls, dest_dir, true).await
}

/// Download every URL, in order, to `img<N>.jpg` under `dest_dir`, then write `index.html`.
///
/// The first failed download aborts the run; the index page is written only
/// after every tile has been saved. An `index.html` left by an earlier run is
/// removed up front, so its presence always marks a completed fetch.
pub async fn fetch_all_with(
    client: &ImageClient,
    urls: &[String],
    dest_dir: &Path,
    show_progress: bool,
) -> Result<FetchSummary> {
    ensure_dest_dir(dest_dir)?;

    let index_file = index_path(dest_dir);
    if index_file.exists() {
        tokio::fs::remove_file(&index_file).await?;
        tracing::debug!("Removed stale {}", index_file.display());
    }

    let mut summary = FetchSummary::new(dest_dir);

    for (index, url) in urls.iter().enumerate() {
        if show_progress {
            print_progress(index);
        }

        let output_path = image_path(dest_dir, index);
        tracing::debug!("Retrieving {} -> {}", url, output_path.display());

        let bytes = download_image(client, url, &output_path).await?;
        summary.record_image(bytes);
    }

    tokio::fs::write(&index_file, render_index(summary.images)).await?;
    tracing::info!(
        "Wrote {} referencing {} images",
        index_file.display(),
        summary.images
    );

    summary.index_path = Some(index_file);
    Ok(summary)
}

/// Stream one image to `output_path`, removing the partial file on failure.
async fn download_image(client: &ImageClient, url: &str, output_path: &Path) -> Result<u64> {
    let response = client.get_image(url).await?;

    let mut file = File::create(output_path).await?;
    let result = write_body(url, response, &mut file).await;
    drop(file);

    if result.is_err() {
        if let Err(e) = tokio::fs::remove_file(output_path).await {
            tracing::warn!(
                "Could not remove partial file {}: {}",
                output_path.display(),
                e
            );
        }
    }

    result
}

async fn write_body(url: &str, response: reqwest::Response, file: &mut File) -> Result<u64> {
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::download(url, format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;
    }

    file.flush().await?;
    Ok(downloaded)
}
