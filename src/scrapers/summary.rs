//! Summary resolution for feed entries.
//!
//! Feeds usually carry an inline summary, often HTML-formatted. When they
//! don't, the entry's own page is fetched and the text of its first few
//! paragraphs stands in. Resolution never filters: an entry that ends up with
//! no summary is reported as [`None`] and the caller decides to drop it.

use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::debug;

static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// How many paragraph elements the page fallback extracts.
const FALLBACK_PARAGRAPHS: usize = 3;

/// Strip HTML markup from a summary fragment, returning trimmed plain text.
pub fn strip_html(fragment: &str) -> String {
    let fragment = Html::parse_fragment(fragment);
    fragment
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}

/// Resolve an entry's summary from its inline field, falling back to the
/// linked page.
///
/// Returns `Some(text)` when a non-empty summary was acquired, `None` when
/// the caller should skip the entry. A network request happens only on the
/// fallback path.
pub async fn resolve_summary(
    client: &Client,
    inline: Option<&str>,
    link: Option<&str>,
) -> Option<String> {
    if let Some(inline) = inline {
        let text = strip_html(inline);
        if !text.is_empty() {
            return Some(text);
        }
    }

    if let Some(link) = link {
        let fetched = fetch_summary_from_link(client, link).await;
        if !fetched.is_empty() {
            return Some(fetched);
        }
    }

    None
}

/// Fetch an entry's page and extract the text of its first three paragraphs,
/// joined with single spaces.
///
/// Any fetch or parse failure degrades to an empty string; the entry will be
/// dropped by the caller rather than aborting the feed.
pub async fn fetch_summary_from_link(client: &Client, url: &str) -> String {
    match fetch_page(client, url).await {
        Ok(body) => first_paragraphs(&body),
        Err(e) => {
            debug!(%url, error = %e, "Summary fallback fetch failed");
            String::new()
        }
    }
}

async fn fetch_page(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}

fn first_paragraphs(html: &str) -> String {
    let document = Html::parse_document(html);
    let joined = document
        .select(&PARAGRAPH_SELECTOR)
        .take(FALLBACK_PARAGRAPHS)
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");
    joined.trim().to_string()
}
