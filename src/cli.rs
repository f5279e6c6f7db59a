//! Command-line interface definitions for the digest pipeline.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The generation endpoint and model can also be provided via environment
//! variables for cron-driven runs.

use clap::Parser;

/// Command-line arguments for the digest application.
///
/// # Examples
///
/// ```sh
/// # Stock feed set, artifacts under ./output/<date>/
/// ai_digest
///
/// # Custom feed set and a remote generation endpoint
/// ai_digest -c feeds.yaml --generation-url http://10.0.0.5:11434
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Base directory for dated digest artifacts
    #[arg(short, long, default_value = "output")]
    pub output_dir: String,

    /// Optional path to a YAML config file overriding the built-in feed set
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL of the generation service
    #[arg(long, env = "GENERATION_URL")]
    pub generation_url: Option<String>,

    /// Model identifier passed to the generation service
    #[arg(long, env = "GENERATION_MODEL")]
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["ai_digest"]);
        assert_eq!(cli.output_dir, "output");
        assert!(cli.config.is_none());
        assert!(cli.model.is_none());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "ai_digest",
            "--output-dir",
            "./digests",
            "--config",
            "./feeds.yaml",
            "--model",
            "llama3:8b",
        ]);

        assert_eq!(cli.output_dir, "./digests");
        assert_eq!(cli.config.as_deref(), Some("./feeds.yaml"));
        assert_eq!(cli.model.as_deref(), Some("llama3:8b"));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["ai_digest", "-o", "/tmp/digests", "-c", "/tmp/feeds.yaml"]);

        assert_eq!(cli.output_dir, "/tmp/digests");
        assert_eq!(cli.config.as_deref(), Some("/tmp/feeds.yaml"));
    }
}
