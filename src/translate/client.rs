use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// French to English model
pub const FRENCH_TO_ENGLISH_MODEL: &str = "Helsinki-NLP/opus-mt-fr-en";
/// English to Shakespearean English model
pub const SHAKESPEARE_MODEL: &str = "Gorilla115/t5-shakespearify-lite";
/// Task prefix the Shakespeare model was trained with
pub const SHAKESPEARE_PREFIX: &str = "translate:";

const DEFAULT_API_URL: &str = "https://api-inference.huggingface.co";

/// Configuration for the hosted inference client
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// API token (from HF_API_TOKEN env var)
    pub api_token: String,
    /// Base URL of the inference API
    pub base_url: String,
    /// Maximum generated length in tokens
    pub max_length: u32,
    /// Beam width for generation
    pub num_beams: u32,
}

impl TranslatorConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let api_token = std::env::var("HF_API_TOKEN")
            .context("HF_API_TOKEN environment variable not set")?;
        let base_url =
            std::env::var("HF_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self::new(api_token, base_url))
    }

    pub fn new(api_token: String, base_url: String) -> Self {
        Self {
            api_token,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_length: 150,
            num_beams: 5,
        }
    }
}

/// Client for hosted sequence-to-sequence models
pub struct HuggingFaceClient {
    client: Client,
    config: TranslatorConfig,
}

impl HuggingFaceClient {
    pub fn new(config: TranslatorConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Run `text` through `model_id`, optionally behind a task prefix
    pub async fn translate(
        &self,
        text: &str,
        model_id: &str,
        prefix: Option<&str>,
    ) -> Result<String> {
        let inputs = with_prefix(text, prefix);
        let request = InferenceRequest {
            inputs,
            parameters: GenerationParameters {
                max_length: self.config.max_length,
                num_beams: self.config.num_beams,
                early_stopping: true,
            },
        };

        let url = format!("{}/models/{}", self.config.base_url, model_id);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_token)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to send request for model {}", model_id))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Inference API error for {}: {} - {}", model_id, status, body);
        }

        let outputs: Vec<InferenceOutput> = response
            .json()
            .await
            .context("Failed to parse inference response")?;

        outputs
            .into_iter()
            .next()
            .map(InferenceOutput::into_text)
            .context("No output in inference response")
    }
}

/// Prepend a task prefix the way the Shakespeare model expects it
pub fn with_prefix(text: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{} {}", prefix, text.trim()),
        _ => text.to_string(),
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest {
    inputs: String,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_length: u32,
    num_beams: u32,
    early_stopping: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceOutput {
    Translation { translation_text: String },
    Generation { generated_text: String },
}

impl InferenceOutput {
    fn into_text(self) -> String {
        match self {
            InferenceOutput::Translation { translation_text } => translation_text,
            InferenceOutput::Generation { generated_text } => generated_text,
        }
    }
}
