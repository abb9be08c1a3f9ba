use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use lingo_config::ai::AiConfig;
use lingo_types::{Meaning, TermDefinition};
use serde::Deserialize;
use serde_json::json;

use crate::schema;
use crate::{DefineError, Definer, ProviderMetadata};

/// Gemini `generateContent` client.
///
/// Configuration is fixed at construction and never mutated. Each call is
/// an independent request: no queueing, no retry, no rate limiting. The
/// caller serializes invocations for the same term.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(config: &AiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl Definer for GeminiClient {
    async fn define(&self, term: &str) -> Result<TermDefinition, DefineError> {
        if self.api_key.is_empty() {
            return Err(DefineError::AuthenticationError);
        }

        let body = json!({
            "contents": [{ "parts": [{ "text": schema::definition_prompt(term) }] }],
            "systemInstruction": { "parts": [{ "text": schema::SYSTEM_INSTRUCTION }] },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema::response_schema(),
            }
        });

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.as_str())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        if response.status() == 401 || response.status() == 403 {
            return Err(DefineError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(DefineError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let reply: GenerateContentResponse = response.json().await?;
        let payload = reply
            .first_text()
            .ok_or_else(|| DefineError::ApiError("Empty response".to_string()))?;

        Ok(decode_definition(payload, term, epoch_millis())?)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            model: self.model.clone(),
            requires_api_key: true,
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
    }
}

/// Shape the schema constraint guarantees for the model's text payload.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DefinitionPayload {
    pronunciation: String,
    meanings: Vec<Meaning>,
    category: String,
    tags: Vec<String>,
}

/// Decode the endpoint's text payload and stamp the caller-independent
/// fields onto it. No repair of malformed JSON: decode failure is failure.
fn decode_definition(
    payload: &str,
    term: &str,
    created_at: i64,
) -> Result<TermDefinition, serde_json::Error> {
    let decoded: DefinitionPayload = serde_json::from_str(payload)?;

    Ok(TermDefinition {
        term: term.to_string(),
        pronunciation: decoded.pronunciation,
        meanings: decoded.meanings,
        category: decoded.category,
        tags: decoded.tags,
        created_at,
        is_ai_generated: true,
    })
}

fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
