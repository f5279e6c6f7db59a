//! Feed ingestion with per-source fault isolation.
//!
//! Each configured feed is fetched and parsed independently, in listed order.
//! A dead feed, a malformed document, or a bad timestamp never aborts the
//! run: the offending source or item is logged and skipped, and every other
//! source contributes its entries untouched.
//!
//! Documents are parsed as RSS 2.0 first and Atom second. RSS items carry raw
//! `pubDate` strings, which go through [`crate::dates::normalize_timestamp`];
//! Atom timestamps arrive already timezone-aware and convert directly.

use crate::dates;
use crate::models::{RecencyWindow, UpdateEntry};
use crate::scrapers::summary;
use chrono::Utc;
use reqwest::Client;
use std::error::Error;
use tracing::{debug, info, warn};

/// Placeholder title for items whose feed omits one.
const NO_TITLE: &str = "No title";

/// Placeholder source name for feeds without a declared title.
const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Fetch every configured feed and return the entries that pass all filters,
/// sorted by publication instant descending.
///
/// Feeds are fetched sequentially in listed order. The sort is stable, so
/// entries published at the same instant keep that order.
pub async fn fetch_feed_updates(
    client: &Client,
    feed_urls: &[String],
    window: &RecencyWindow,
) -> Vec<UpdateEntry> {
    let mut entries = Vec::new();

    for feed_url in feed_urls {
        match fetch_one_feed(client, feed_url, window).await {
            Ok(mut batch) => {
                debug!(feed = %feed_url, count = batch.len(), "Ingested feed");
                entries.append(&mut batch);
            }
            Err(e) => {
                warn!(feed = %feed_url, error = %e, "Error with feed; skipping");
            }
        }
    }

    entries.sort_by(|a, b| b.published.cmp(&a.published));
    info!(count = entries.len(), "Collected feed updates");
    entries
}

/// Fetch and parse a single feed document.
///
/// Isolation boundary: any error returned here is downgraded to a warning by
/// [`fetch_feed_updates`] and affects this source only.
async fn fetch_one_feed(
    client: &Client,
    feed_url: &str,
    window: &RecencyWindow,
) -> Result<Vec<UpdateEntry>, Box<dyn Error>> {
    let bytes = client
        .get(feed_url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    if let Ok(channel) = rss::Channel::read_from(&bytes[..]) {
        return Ok(entries_from_channel(client, &channel, window).await);
    }

    if let Ok(feed) = atom_syndication::Feed::read_from(&bytes[..]) {
        return Ok(entries_from_atom(client, &feed, window).await);
    }

    Err(format!("not a recognized RSS or Atom document: {feed_url}").into())
}

async fn entries_from_channel(
    client: &Client,
    channel: &rss::Channel,
    window: &RecencyWindow,
) -> Vec<UpdateEntry> {
    let source = display_title(channel.title());
    let mut entries = Vec::new();

    for item in channel.items() {
        let Some(raw_date) = item.pub_date() else {
            debug!(source = %source, "Item without timestamp; skipping");
            continue;
        };
        let published = match dates::normalize_timestamp(raw_date) {
            Ok(instant) => instant,
            Err(e) => {
                debug!(source = %source, error = %e, "Item timestamp unparseable; skipping");
                continue;
            }
        };
        if !window.includes(published) {
            continue;
        }

        let Some(summary) = summary::resolve_summary(client, item.description(), item.link()).await
        else {
            debug!(source = %source, "Item without summary; skipping");
            continue;
        };

        entries.push(UpdateEntry {
            title: entry_title(item.title()),
            url: item.link().unwrap_or_default().to_string(),
            summary,
            published,
            source: source.clone(),
        });
    }

    entries
}

async fn entries_from_atom(
    client: &Client,
    feed: &atom_syndication::Feed,
    window: &RecencyWindow,
) -> Vec<UpdateEntry> {
    let source = display_title(feed.title().as_str());
    let mut entries = Vec::new();

    for entry in feed.entries() {
        // Atom requires <updated>, so published-or-updated is always present.
        let published = entry
            .published()
            .copied()
            .unwrap_or_else(|| *entry.updated())
            .with_timezone(&Utc);
        if !window.includes(published) {
            continue;
        }

        let link = entry.links().first().map(|l| l.href());
        let inline = entry
            .summary()
            .map(|text| text.as_str())
            .or_else(|| entry.content().and_then(|content| content.value()));

        let Some(summary) = summary::resolve_summary(client, inline, link).await else {
            debug!(source = %source, "Entry without summary; skipping");
            continue;
        };

        entries.push(UpdateEntry {
            title: entry_title(Some(entry.title().as_str())),
            url: link.unwrap_or_default().to_string(),
            summary,
            published,
            source: source.clone(),
        });
    }

    entries
}

fn display_title(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNKNOWN_SOURCE.to_string()
    } else {
        trimmed.to_string()
    }
}

fn entry_title(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => NO_TITLE.to_string(),
    }
}
