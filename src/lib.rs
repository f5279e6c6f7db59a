//! # AI Digest
//!
//! An aggregation-and-generation pipeline that collects recent AI tool and
//! model update announcements from a configured set of RSS/Atom feeds plus
//! one scraped workflow-listing page, assembles them into a structured daily
//! digest, and turns that digest into a blog-style article and a tweet via an
//! external generation endpoint.
//!
//! ## Pipeline
//!
//! 1. **Ingestion**: fetch each feed sequentially with per-source fault
//!    isolation, normalize timestamps, resolve summaries (scraping the entry
//!    page when the feed carries none), and filter to the recency window
//! 2. **Scanning**: collect workflow resource links from the listing page
//! 3. **Assembly**: group entries by source and render the digest text
//! 4. **Generation**: article from the digest, then a tweet from the article
//! 5. **Output**: dated directory with raw markdown, styled HTML, and the
//!    tweet
//!
//! The library target exists so integration tests can drive the pipeline
//! against mock HTTP servers; the `ai_digest` binary wires it to the CLI.

pub mod api;
pub mod cli;
pub mod config;
pub mod dates;
pub mod digest;
pub mod models;
pub mod outputs;
pub mod scrapers;
pub mod utils;
