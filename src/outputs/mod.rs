//! Artifact persistence for a digest run.
//!
//! Each run writes into one date-keyed directory:
//!
//! ```text
//! output_dir/
//! └── 2025-08-06/
//!     ├── digest.md          # raw generated article
//!     ├── digest.html        # styled rendering of the article
//!     └── digest_tweet.txt   # trimmed tweet
//! ```
//!
//! Directory creation is idempotent and reruns for the same date overwrite.
//! Nothing here rolls back: a failure partway through leaves the artifacts
//! already written in place, and the next full run replaces them.

pub mod html;

use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// The dated directory all artifacts of a run land in.
pub fn dated_dir(output_dir: &str, run_date: &str) -> PathBuf {
    Path::new(output_dir).join(run_date)
}

/// Write the raw article and its styled HTML rendering.
///
/// # Errors
///
/// Filesystem failures are fatal and propagate to the caller.
#[instrument(level = "info", skip_all, fields(%output_dir, %run_date))]
pub async fn write_article_artifacts(
    output_dir: &str,
    run_date: &str,
    article: &str,
) -> Result<(), Box<dyn Error>> {
    let dir = dated_dir(output_dir, run_date);
    fs::create_dir_all(&dir).await?;

    let markdown_path = dir.join("digest.md");
    fs::write(&markdown_path, article).await?;
    info!(path = %markdown_path.display(), "Wrote article markdown");

    let html_path = dir.join("digest.html");
    fs::write(&html_path, html::render_styled_html(article, run_date)).await?;
    info!(path = %html_path.display(), "Wrote styled article");

    Ok(())
}

/// Write the trimmed tweet text.
///
/// # Errors
///
/// Filesystem failures are fatal and propagate to the caller.
#[instrument(level = "info", skip_all, fields(%output_dir, %run_date))]
pub async fn write_tweet(
    output_dir: &str,
    run_date: &str,
    tweet: &str,
) -> Result<(), Box<dyn Error>> {
    let dir = dated_dir(output_dir, run_date);
    fs::create_dir_all(&dir).await?;

    let tweet_path = dir.join("digest_tweet.txt");
    fs::write(&tweet_path, tweet.trim()).await?;
    info!(path = %tweet_path.display(), "Wrote tweet");

    Ok(())
}
