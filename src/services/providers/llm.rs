//! OpenAI-compatible chat completion provider
//!
//! Asks the model for 4-6 `{title, reason}` picks and an explanation, constrained by a
//! JSON schema response format. Works with any endpoint implementing `/chat/completions`.
use crate::{
    error::{AppError, AppResult},
    models::{
        llm::{ChatMessage, ChatRequest, ChatResponse, JsonSchemaFormat, ResponseFormat},
        GeneratedPicks,
    },
    services::providers::LlmProvider,
};
use reqwest::Client as HttpClient;
use serde_json::{json, Value};

pub const MIN_PICKS: usize = 4;
pub const MAX_PICKS: usize = 6;

const SYSTEM_PROMPT: &str = r#"You are a film curator. The user describes a mood, an occasion or the kind of movie experience they want.

Recommend between 4 and 6 feature films that exist in TMDB and fit that mood.
- Use the film's original English release title, without the year.
- Give each pick a one-sentence reason addressed to the user.
- Finish with a short explanation (1-2 sentences) of the overall selection.

Respond with JSON only, matching the provided schema."#;

#[derive(Clone)]
pub struct OpenAiCompatibleProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    model: String,
}

impl OpenAiCompatibleProvider {
    pub fn new(
        http_client: HttpClient,
        api_key: Option<String>,
        api_url: String,
        model: String,
    ) -> Self {
        Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration("LLM_API_KEY not configured".to_string()))
    }

    fn build_request(&self, mood: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("My mood: {}", mood),
                },
            ],
            temperature: 0.7,
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: "mood_recommendations",
                    strict: false,
                    schema: picks_schema(),
                },
            },
        }
    }
}

fn picks_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "recommendations": {
                "type": "array",
                "minItems": MIN_PICKS,
                "maxItems": MAX_PICKS,
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "reason": { "type": "string" }
                    },
                    "required": ["title", "reason"],
                    "additionalProperties": false
                }
            },
            "explanation": { "type": "string" }
        },
        "required": ["recommendations", "explanation"],
        "additionalProperties": false
    })
}

/// Decodes the model's text, tolerating a markdown code fence around the JSON.
/// Blank titles are dropped and the list is capped at `MAX_PICKS`.
pub fn parse_picks(content: &str) -> AppResult<GeneratedPicks> {
    let content = content.trim();
    let content = content
        .strip_prefix("```json")
        .or_else(|| content.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or(content)
        .trim();

    let mut picks: GeneratedPicks = serde_json::from_str(content).map_err(|e| {
        AppError::ExternalApi(format!("Failed to parse LLM response: {}", e))
    })?;

    picks.recommendations.retain(|p| !p.title.trim().is_empty());
    picks.recommendations.truncate(MAX_PICKS);

    if picks.recommendations.is_empty() {
        return Err(AppError::ExternalApi(
            "LLM response contained no recommendations".to_string(),
        ));
    }

    if picks.recommendations.len() < MIN_PICKS {
        tracing::warn!(
            picks = picks.recommendations.len(),
            expected = MIN_PICKS,
            "LLM returned fewer picks than requested"
        );
    }

    Ok(picks)
}

#[async_trait::async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn ensure_configured(&self) -> AppResult<()> {
        self.api_key().map(|_| ())
    }

    async fn suggest_titles(&self, mood: &str) -> AppResult<GeneratedPicks> {
        let api_key = self.api_key()?;
        let url = format!("{}/chat/completions", self.api_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(&self.build_request(mood))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                provider = "llm",
                "LLM request failed"
            );
            return Err(AppError::ExternalApi(format!(
                "LLM API returned status {}",
                status
            )));
        }

        let data: ChatResponse = response.json().await?;
        let content = data
            .into_content()
            .ok_or_else(|| AppError::ExternalApi("LLM response had no content".to_string()))?;

        let picks = parse_picks(&content)?;

        tracing::info!(
            model = %self.model,
            picks = picks.recommendations.len(),
            provider = "llm",
            "Title suggestions generated"
        );

        Ok(picks)
    }

    fn name(&self) -> &'static str {
        "openai-compatible"
    }
}
