//! Data models for feed updates and the digest pipeline.
//!
//! This module defines the core data structures used throughout the application:
//! - [`UpdateEntry`]: One normalized update item taken from a feed
//! - [`ResourceLink`]: A workflow resource discovered on the listing page
//! - [`RecencyWindow`]: The lookback interval entries are filtered against
//!
//! Entries are constructed once during ingestion and never mutated afterwards;
//! ownership moves from the ingestor to the digest assembler.

use chrono::{DateTime, Duration, Utc};

/// One update item, normalized from a feed entry.
///
/// Every `UpdateEntry` that leaves ingestion satisfies two invariants:
/// `summary` is non-empty, and `published` falls inside the run's
/// [`RecencyWindow`].
#[derive(Debug, Clone)]
pub struct UpdateEntry {
    /// Trimmed display title, or `"No title"` when the feed omits one.
    pub title: String,
    /// Link to the item; may be empty.
    pub url: String,
    /// Plain-text summary. Non-empty by construction.
    pub summary: String,
    /// Timezone-aware publication instant.
    pub published: DateTime<Utc>,
    /// Display title of the originating feed, or `"Unknown Source"`.
    pub source: String,
}

/// A title/url pair found on the resource listing page.
///
/// Also used as the failure sentinel: when the listing page cannot be fetched
/// or parsed, a single `ResourceLink` carrying the error description stands in
/// for the whole section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    /// Visible link text, or the raw target when the anchor has no text.
    pub title: String,
    /// Fully qualified link target.
    pub url: String,
}

/// The lookback interval entries are filtered against.
///
/// Captured exactly once at run start and shared read-only by all ingestion
/// logic; recomputing it per feed would make the filter drift across feeds
/// fetched at different wall-clock moments.
///
/// Only the lower bound is checked. Entries dated in the future relative to
/// "now" pass the filter.
#[derive(Debug, Clone, Copy)]
pub struct RecencyWindow {
    start: DateTime<Utc>,
}

impl RecencyWindow {
    /// Capture a window reaching `days` back from the current instant.
    pub fn last_days(days: i64) -> Self {
        Self {
            start: Utc::now() - Duration::days(days),
        }
    }

    /// Build a window with an explicit lower bound.
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self { start }
    }

    /// The window's lower bound.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Whether `instant` falls inside the window (inclusive lower bound,
    /// unbounded above).
    pub fn includes(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_excludes_instants_before_start() {
        let window = RecencyWindow::last_days(3);
        let four_days_ago = Utc::now() - Duration::days(4);
        assert!(!window.includes(four_days_ago));
    }

    #[test]
    fn test_window_includes_recent_instants() {
        let window = RecencyWindow::last_days(3);
        let yesterday = Utc::now() - Duration::days(1);
        assert!(window.includes(yesterday));
    }

    #[test]
    fn test_window_start_is_inclusive() {
        let start = Utc::now() - Duration::days(3);
        let window = RecencyWindow::starting_at(start);
        assert!(window.includes(start));
    }

    #[test]
    fn test_window_accepts_future_instants() {
        // Upper bound is deliberately unchecked: clock skew or misissued
        // feeds may date entries slightly ahead of "now".
        let window = RecencyWindow::last_days(3);
        let tomorrow = Utc::now() + Duration::days(1);
        assert!(window.includes(tomorrow));
    }

    #[test]
    fn test_update_entry_construction() {
        let entry = UpdateEntry {
            title: "v1.2.0".to_string(),
            url: "https://example.com/releases/v1.2.0".to_string(),
            summary: "Bug fixes and performance improvements".to_string(),
            published: Utc::now(),
            source: "Example Releases".to_string(),
        };
        assert_eq!(entry.title, "v1.2.0");
        assert!(!entry.summary.is_empty());
    }

    #[test]
    fn test_resource_link_equality() {
        let a = ResourceLink {
            title: "Inpainting workflow".to_string(),
            url: "https://example.com/inpaint.json".to_string(),
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
