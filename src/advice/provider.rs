use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::accounting::Breakdown;

/// Structured data handed to an advice provider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdviceRequest {
    pub breakdown: Breakdown,
    pub total: f64,
}

/// Source of generated advice lines
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    async fn generate(&self, request: &AdviceRequest) -> Result<Vec<String>>;
}

const SYSTEM_PROMPT: &str = "You are a sustainability coach. The user message is a JSON object \
with an annual carbon footprint in kg CO2e: \"total\" and a per-category \"breakdown\". \
Reply with 3 to 6 short, practical recommendations, one per line, without numbering.";

/// Provider backed by any OpenAI-compatible chat-completions endpoint
pub struct OpenAiCompatibleProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiCompatibleProvider {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build advice HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl AdviceProvider for OpenAiCompatibleProvider {
    async fn generate(&self, request: &AdviceRequest) -> Result<Vec<String>> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": serde_json::to_string(request)? },
            ],
            "temperature": 0.4,
        });

        let mut http = self
            .client
            .post(format!("{}/chat/completions", self.base_url.trim_end_matches('/')))
            .json(&body);

        if let Some(ref key) = self.api_key {
            http = http.bearer_auth(key);
        }

        let res = http.send().await?.error_for_status()?;
        let json: serde_json::Value = res.json().await?;

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .context("Failed to parse content from advice response")?;

        let lines = split_advice(content);
        debug!("Advice provider returned {} line(s)", lines.len());
        Ok(lines)
    }
}

/// One recommendation per non-blank line, list markers stripped
pub(crate) fn split_advice(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| {
            let line = line.trim();
            let line = line.trim_start_matches(['-', '*', '•']);
            let unnumbered = line.trim_start_matches(|c: char| c.is_ascii_digit());
            let line = match unnumbered.strip_prefix(['.', ')']) {
                Some(rest) if unnumbered.len() < line.len() => rest,
                _ => line,
            };
            line.trim().to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}
