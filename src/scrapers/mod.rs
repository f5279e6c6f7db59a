//! Acquisition modules for the digest pipeline.
//!
//! Three concerns, one module each:
//!
//! - [`feeds`]: fetch and parse the configured RSS/Atom feeds, producing
//!   filtered, sorted update entries with per-source fault isolation
//! - [`summary`]: resolve an entry's plain-text summary, falling back to
//!   scraping the entry's own page
//! - [`listing`]: scan the fixed resource listing page for workflow links
//!
//! All fetches go through a shared short-timeout `reqwest::Client`; failures
//! are logged and degrade locally rather than aborting the run.

pub mod feeds;
pub mod listing;
pub mod summary;
