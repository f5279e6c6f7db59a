//! Digest assembly: grouping and deterministic rendering.
//!
//! Entries arrive sorted by publication instant descending; grouping keys
//! them by source in first-seen order and never re-sorts within a group. The
//! rendered text is the complete input handed to generation, so its shape is
//! part of the pipeline's contract rather than a presentation nicety.

use crate::config::DigestConfig;
use crate::models::{ResourceLink, UpdateEntry};
use std::fmt::Write;

/// Character budget applied to each entry's summary in the rendered digest.
pub const SUMMARY_BUDGET: usize = 400;

/// Group entries by source, preserving the first-seen order of sources.
///
/// The input order within each group is kept as-is; with entries sorted by
/// date descending, each group lists its newest entry first.
pub fn group_by_source(entries: &[UpdateEntry]) -> Vec<(&str, Vec<&UpdateEntry>)> {
    let mut groups: Vec<(&str, Vec<&UpdateEntry>)> = Vec::new();

    for entry in entries {
        match groups.iter_mut().find(|(source, _)| *source == entry.source) {
            Some((_, members)) => members.push(entry),
            None => groups.push((entry.source.as_str(), vec![entry])),
        }
    }

    groups
}

/// Render the digest text fed to the generation service.
pub fn assemble_digest(
    entries: &[UpdateEntry],
    resources: &[ResourceLink],
    config: &DigestConfig,
    run_date: &str,
) -> String {
    let mut digest = String::new();

    writeln!(digest, "# AI Digest — {run_date}\n").unwrap();
    writeln!(
        digest,
        "## Recent AI Updates (last {} days)\n",
        config.lookback_days
    )
    .unwrap();

    for (source, items) in group_by_source(entries) {
        writeln!(digest, "### {source}").unwrap();
        for item in items {
            writeln!(
                digest,
                "**{}**  \n[{}]({})  \n{}",
                item.title,
                item.url,
                item.url,
                item.published.format("%Y-%m-%d")
            )
            .unwrap();
            writeln!(digest, "> {}...\n", truncate_chars(&item.summary, SUMMARY_BUDGET)).unwrap();
        }
    }

    writeln!(digest, "\n## New Workflow Resources").unwrap();
    if resources.is_empty() {
        writeln!(digest, "_None this week._").unwrap();
    } else {
        for resource in resources {
            writeln!(digest, "- [{}]({})", resource.title, resource.url).unwrap();
        }
    }

    writeln!(
        digest,
        "\n---\n_Total feeds: {} | Entries: {}_",
        config.feed_urls.len(),
        entries.len()
    )
    .unwrap();

    digest
}

/// Cut a string to at most `max` characters, respecting char boundaries.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
