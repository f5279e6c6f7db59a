//! Run configuration for the digest pipeline.
//!
//! All tunables live in [`DigestConfig`], which is constructed once at startup
//! and passed explicitly into the pipeline entry points. The defaults cover
//! the stock feed set and a local generation endpoint; a YAML file can
//! override any subset of fields.
//!
//! ```yaml
//! feed_urls:
//!   - https://github.com/ollama/ollama/releases.atom
//! model: gemma3:27b
//! lookback_days: 3
//! ```

use serde::Deserialize;
use std::error::Error;
use std::fs;

/// Configuration for one digest run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    /// Feed URLs polled for updates, fetched sequentially in listed order.
    pub feed_urls: Vec<String>,
    /// Listing page scanned for new workflow resources.
    pub listing_url: String,
    /// Base URL of the generation service.
    pub generation_url: String,
    /// Model identifier passed to the generation service.
    pub model: String,
    /// How many days back the recency window reaches.
    pub lookback_days: i64,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            feed_urls: default_feed_urls(),
            listing_url: "https://comfyanonymous.github.io/ComfyUI_examples/".to_string(),
            generation_url: "http://localhost:11434".to_string(),
            model: "gemma3:27b".to_string(),
            lookback_days: 3,
        }
    }
}

/// Load a [`DigestConfig`] from a YAML file.
///
/// Fields absent from the file keep their defaults.
pub fn load_config(path: &str) -> Result<DigestConfig, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&raw)?;
    Ok(config)
}

/// The stock feed set: release feeds for core tools and models, the Hugging
/// Face ecosystem, AI model companies, and a handful of AI blogs.
fn default_feed_urls() -> Vec<String> {
    [
        // Core tools/models
        "https://github.com/comfyui/comfyui/releases.atom",
        "https://github.com/ollama/ollama/releases.atom",
        "https://github.com/facebookresearch/llama/releases.atom",
        "https://github.com/QwenLM/Qwen/releases.atom",
        "https://github.com/QwenLM/Qwen-VL/releases.atom",
        "https://github.com/QwenLM/Qwen1.5/releases.atom",
        "https://github.com/mistralai/mistral-src/releases.atom",
        "https://github.com/huggingface/transformers/releases.atom",
        "https://github.com/huggingface/datasets/releases.atom",
        "https://github.com/Stability-AI/stablediffusion/releases.atom",
        "https://github.com/AUTOMATIC1111/stable-diffusion-webui/releases.atom",
        "https://github.com/ortis-ai/ToolKit/releases.atom",
        "https://github.com/midudev/llama-chat/releases.atom",
        "https://github.com/cocktailpeanut/dalai/releases.atom",
        // Hugging Face ecosystem
        "https://github.com/huggingface/accelerate/releases.atom",
        "https://github.com/huggingface/huggingface_hub/releases.atom",
        "https://github.com/huggingface/peft/releases.atom",
        "https://github.com/huggingface/text-generation-inference/releases.atom",
        "https://github.com/huggingface/optimum/releases.atom",
        "https://github.com/huggingface/evaluate/releases.atom",
        "https://github.com/huggingface/autotrain-advanced/releases.atom",
        // AI model companies
        "https://github.com/databrickslabs/dolly/releases.atom",
        "https://github.com/databricks/dbrx/releases.atom",
        "https://github.com/THUDM/ChatGLM3/releases.atom",
        "https://github.com/ZhipuAI/releases.atom",
        "https://github.com/mindsdb/mindsdb/releases.atom",
        "https://github.com/SeldonIO/seldon-core/releases.atom",
        "https://github.com/SeldonIO/alibi-detect/releases.atom",
        "https://github.com/Mintplex-Labs/anything-llm/releases.atom",
        "https://github.com/e2b-dev/awesome-ai-agents/releases.atom",
        "https://github.com/Shubhamsaboo/awesome-llm-apps/releases.atom",
        // AI blogs
        "https://openai.com/blog/rss.xml",
        "https://deepmind.com/blog/feed/basic",
        "https://github.blog/ai-and-ml/feed",
        "https://blog.clarifai.com/feed",
        "https://blog.datarobot.com/blog/feed",
        "https://iris.ai/feed",
        "https://www.singularityweblog.com/blog/feed",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
