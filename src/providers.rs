//! Analyzer providers: the OpenAI-compatible chat endpoint and the
//! offline keyword rules behind one trait.

use crate::analysis::{Assessment, BurnoutLevel, MoodState, Sentiment};
use crate::classify::classify;
use crate::config::Config;
use crate::error::{Result, SteadyMindError};
use crate::prompts;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Confidence assumed when the model omits one.
const DEFAULT_CONFIDENCE: u8 = 75;

#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<Assessment>;
    fn name(&self) -> &'static str;
}

// OpenAI-compatible chat completions implementation
pub struct OpenAiAnalyzer {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
    timeout_ms: u64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

impl OpenAiAnalyzer {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeout_secs: u64,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SteadyMindError::Internal {
                message: format!("Failed to build reqwest client with timeout: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url,
            temperature,
            max_tokens,
            timeout_ms: timeout_secs * 1000,
        })
    }
}

#[async_trait]
impl Analyzer for OpenAiAnalyzer {
    async fn analyze(&self, text: &str) -> Result<Assessment> {
        debug!(
            "Requesting burnout assessment (model={}, chars={})",
            self.model,
            text.len()
        );

        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: prompts::SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompts::analysis_prompt(text),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SteadyMindError::Timeout {
                        operation: "chat completion".to_string(),
                        timeout_ms: self.timeout_ms,
                    }
                } else {
                    SteadyMindError::from(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SteadyMindError::Provider {
                message: format!("chat completions API error {status}: {error_text}"),
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| SteadyMindError::Provider {
                message: "no completion content returned".to_string(),
            })?;

        parse_assessment(&content)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

// Deterministic keyword implementation (no network)
pub struct KeywordAnalyzer;

#[async_trait]
impl Analyzer for KeywordAnalyzer {
    async fn analyze(&self, text: &str) -> Result<Assessment> {
        Ok(classify(text))
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAssessment {
    burnout_level: Option<BurnoutLevel>,
    sentiment: Option<Sentiment>,
    mood_state: Option<MoodState>,
    #[serde(default)]
    key_topics: Vec<String>,
    #[serde(default)]
    stress_indicators: Vec<String>,
    confidence: Option<f64>,
    reasoning: Option<String>,
}

/// Parse model output into an assessment.
///
/// Missing fields get safe defaults. Values outside the closed enums are
/// rejected so the caller can fall back to the keyword classifier instead
/// of shipping a made-up category.
pub fn parse_assessment(content: &str) -> Result<Assessment> {
    let raw: RawAssessment = serde_json::from_str(content.trim())?;
    Ok(Assessment {
        burnout_level: raw.burnout_level.unwrap_or(BurnoutLevel::Low),
        sentiment: raw.sentiment.unwrap_or(Sentiment::Neutral),
        mood_state: raw.mood_state,
        key_topics: raw.key_topics,
        stress_indicators: raw.stress_indicators,
        confidence: raw
            .confidence
            .map(|c| c.clamp(0.0, 100.0).round() as u8)
            .unwrap_or(DEFAULT_CONFIDENCE),
        reasoning: raw.reasoning,
    })
}

fn is_placeholder(s: &str) -> bool {
    let t = s.trim();
    t.is_empty()
        || t.contains("${")
        || t.eq_ignore_ascii_case("your-api-key-here")
        || t.eq_ignore_ascii_case("changeme")
}

/// Factory to pick an analyzer from configuration.
///
/// Selection order:
/// 1) Respect llm_provider when it names a provider
/// 2) Else use the LLM when a usable API key is present
/// 3) Else keyword rules (error instead when strict mode is on)
pub fn create_analyzer(config: &Config) -> anyhow::Result<Arc<dyn Analyzer>> {
    let provider = config.system.llm_provider.trim().to_lowercase();
    let key = config.runtime.openai_api_key.clone().unwrap_or_default();

    match provider.as_str() {
        "openai" => {
            if is_placeholder(&key) {
                anyhow::bail!("llm_provider=openai but OPENAI_API_KEY is not set");
            }
            info!(
                "Using OpenAI-compatible analyzer (model={})",
                config.system.llm_model
            );
            Ok(Arc::new(OpenAiAnalyzer::new(
                key,
                config.system.llm_model.clone(),
                config.system.llm_base_url.clone(),
                config.system.llm_timeout_secs,
                config.analysis.temperature,
                config.analysis.max_tokens,
            )?))
        }
        "keyword" => {
            info!("Using keyword analyzer (offline rules)");
            Ok(Arc::new(KeywordAnalyzer))
        }
        _ => {
            if !is_placeholder(&key) {
                info!(
                    "Using OpenAI-compatible analyzer (model={})",
                    config.system.llm_model
                );
                return Ok(Arc::new(OpenAiAnalyzer::new(
                    key,
                    config.system.llm_model.clone(),
                    config.system.llm_base_url.clone(),
                    config.system.llm_timeout_secs,
                    config.analysis.temperature,
                    config.analysis.max_tokens,
                )?));
            }
            if config.runtime.llm_strict {
                anyhow::bail!(
                    "No analyzer configured; set OPENAI_API_KEY or STEADY_LLM_PROVIDER=keyword."
                );
            }
            info!("Using keyword analyzer (no API key configured)");
            Ok(Arc::new(KeywordAnalyzer))
        }
    }
}
