//! Generation service interaction.
//!
//! The digest is turned into prose by two sequential calls to one external
//! generation endpoint: first the long-form article, then a tweet condensed
//! from that article. Either call failing is fatal to the run. The article is
//! the prerequisite for every downstream artifact, so there is no partial
//! output to salvage, and retrying is left to the next scheduled run.
//!
//! The endpoint accepts `{model, prompt, stream: false}` and answers
//! `{response}`; any non-2xx status is an error. Generation latency is
//! significant, so this client carries its own timeout, far above the one
//! used for feed and page fetches.

use crate::utils::truncate_for_log;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

/// Bounded timeout for one generation call.
const GENERATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Request body for the generation endpoint.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response body of the generation endpoint.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Seam for the generation service, so tests can substitute a canned or
/// failing implementation.
pub trait Generate {
    /// Send a prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, Box<dyn Error>>;
}

/// HTTP client for an Ollama-style generation endpoint.
#[derive(Debug)]
pub struct GenerationClient {
    client: Client,
    base_url: String,
    model: String,
}

impl GenerationClient {
    /// Build a client for `base_url` (scheme + host, no trailing path) using
    /// `model` for every call.
    pub fn new(base_url: &str, model: &str) -> Self {
        let client = Client::builder()
            .timeout(GENERATION_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

impl Generate for GenerationClient {
    #[instrument(level = "info", skip_all, fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<String, Box<dyn Error>> {
        let t0 = Instant::now();
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: GenerateResponse = response.json().await?;
        info!(
            elapsed_ms = t0.elapsed().as_millis() as u128,
            bytes = body.response.len(),
            "Generation call succeeded"
        );
        Ok(body.response)
    }
}

/// Produce the long-form article from the rendered digest.
///
/// # Errors
///
/// Fatal: a transport failure, timeout, or non-2xx response propagates to the
/// caller and ends the run.
#[instrument(level = "info", skip_all)]
pub async fn generate_article<G: Generate>(
    generator: &G,
    digest: &str,
    run_date: &str,
) -> Result<String, Box<dyn Error>> {
    let prompt = format!(
        "You are an expert AI newsletter writer.\n\
         Today is {run_date}. Using the following AI tool/model updates from the last 3 days, \
         write a structured, well-written blog post.\n\n\
         Guidelines:\n\
         - Start with a short intro about trends this week in AI.\n\
         - Break down updates by tool or company.\n\
         - Explain *why* each update is important.\n\
         - Link to the source.\n\
         - Close with a reflection or insight.\n\n\
         Data:\n{digest}\n\n\
         Now write the blog post."
    );

    match generator.generate(&prompt).await {
        Ok(article) => {
            info!(preview = %truncate_for_log(&article, 200), "Generated article");
            Ok(article)
        }
        Err(e) => {
            error!(error = %e, "Article generation failed");
            Err(e)
        }
    }
}

/// Condense the article into a tweet.
///
/// # Errors
///
/// Fatal, same contract as [`generate_article`].
#[instrument(level = "info", skip_all)]
pub async fn generate_tweet<G: Generate>(
    generator: &G,
    article: &str,
) -> Result<String, Box<dyn Error>> {
    let prompt = format!(
        "Write a compelling tweet (≤280 characters) summarizing this daily AI digest. \
         Highlight 1-2 key updates developers would care about. No hashtags or emojis. \
         Write it like a real tweet.\n\n{article}"
    );

    match generator.generate(&prompt).await {
        Ok(tweet) => {
            info!(preview = %truncate_for_log(&tweet, 200), "Generated tweet");
            Ok(tweet)
        }
        Err(e) => {
            error!(error = %e, "Tweet generation failed");
            Err(e)
        }
    }
}
