//! Resource listing scanner.
//!
//! One fixed page is scanned for links to new workflow resources. The scan is
//! an optional garnish on the digest, so it never fails the run: any fetch or
//! parse problem collapses into a single sentinel link that makes the failure
//! visible in the output instead.

use crate::models::ResourceLink;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{info, warn};
use url::Url;

static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// File suffixes that mark a link target as a workflow resource.
const RESOURCE_SUFFIXES: [&str; 1] = [".json"];

/// Keywords that mark a link target or label as a workflow resource.
const RESOURCE_KEYWORDS: [&str; 1] = ["workflow"];

/// Title of the sentinel link emitted when the listing scan fails.
pub const LISTING_ERROR_TITLE: &str = "Error fetching resource listing";

/// Scan the listing page for workflow resource links.
///
/// On any failure, returns a single sentinel [`ResourceLink`] whose title is
/// [`LISTING_ERROR_TITLE`] and whose url carries the error description.
pub async fn scan_resource_listing(client: &Client, listing_url: &str) -> Vec<ResourceLink> {
    match scan(client, listing_url).await {
        Ok(links) => {
            info!(count = links.len(), page = %listing_url, "Scanned resource listing");
            links
        }
        Err(e) => {
            warn!(page = %listing_url, error = %e, "Resource listing scan failed");
            vec![ResourceLink {
                title: LISTING_ERROR_TITLE.to_string(),
                url: e.to_string(),
            }]
        }
    }
}

async fn scan(client: &Client, listing_url: &str) -> Result<Vec<ResourceLink>, Box<dyn Error>> {
    let html = client
        .get(listing_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let base = Url::parse(listing_url)?;
    Ok(links_from_html(&html, &base))
}

/// Extract matching anchors from the page, resolving targets against `base`.
fn links_from_html(html: &str, base: &Url) -> Vec<ResourceLink> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    for anchor in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let label = anchor.text().collect::<String>().trim().to_string();
        if !is_resource_link(href, &label) {
            continue;
        }

        let target = base
            .join(href)
            .map(|resolved| resolved.to_string())
            .unwrap_or_else(|_| href.to_string());
        let title = if label.is_empty() {
            href.to_string()
        } else {
            label
        };

        links.push(ResourceLink { title, url: target });
    }

    links
}

fn is_resource_link(href: &str, label: &str) -> bool {
    let href = href.to_lowercase();
    let label = label.to_lowercase();
    RESOURCE_SUFFIXES.iter().any(|suffix| href.ends_with(suffix))
        || RESOURCE_KEYWORDS
            .iter()
            .any(|keyword| href.contains(keyword) || label.contains(keyword))
}
