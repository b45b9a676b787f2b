//! Ollama-backed evaluation oracle.
//!
//! Talks to a local Ollama instance over `/api/chat`. Transport failures and
//! non-success statuses are retried with exponential backoff; a payload that
//! decodes but is not the expected structure fails immediately with
//! [`OracleError::Parse`] and is never retried.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Evaluation, EvaluationOracle, QuestDraft};
use crate::error::OracleError;
use crate::retry::{DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS, retry_with_backoff};
use crate::theme::Theme;
use crate::types::Quest;

/// Default Ollama API base URL.
pub const DEFAULT_ORACLE_URL: &str = "http://localhost:11434";

/// Default model used for evaluation.
pub const DEFAULT_ORACLE_MODEL: &str = "llama3";

/// Message in an Ollama chat request/response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Request body for Ollama's `/api/chat` endpoint.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

/// Response from Ollama's `/api/chat` endpoint. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

/// Score/feedback payload the oracle is instructed to return.
#[derive(Debug, Deserialize)]
struct ScorePayload {
    score: f64,
    feedback: String,
}

/// Ollama-backed implementation of [`EvaluationOracle`].
pub struct OllamaOracle {
    base_url: String,
    model: String,
    theme: Theme,
    client: reqwest::Client,
    max_attempts: u32,
    base_delay: Duration,
}

impl OllamaOracle {
    /// Create an oracle against the default URL and model.
    pub fn new(theme: Theme) -> Self {
        Self {
            base_url: DEFAULT_ORACLE_URL.to_string(),
            model: DEFAULT_ORACLE_MODEL.to_string(),
            theme,
            client: reqwest::Client::new(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the retry policy (mainly for tests).
    pub fn with_retry_policy(mut self, max_attempts: u32, base_delay: Duration) -> Self {
        self.max_attempts = max_attempts;
        self.base_delay = base_delay;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a prompt and return the assistant's reply, retrying transport
    /// and API failures per the configured policy.
    async fn chat(&self, prompt: &str) -> Result<String, OracleError> {
        retry_with_backoff(
            || self.chat_once(prompt),
            self.max_attempts,
            self.base_delay,
        )
        .await
    }

    async fn chat_once(&self, prompt: &str) -> Result<String, OracleError> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            stream: false,
        };

        debug!(url = %url, model = %self.model, prompt_len = prompt.len(), "oracle request");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| OracleError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Api(format!(
                "oracle returned {}: {}",
                status, body
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| OracleError::Request(e.to_string()))?;

        Ok(chat.message.content)
    }

    fn evaluation_prompt(&self, quest: &Quest, submission_text: &str) -> String {
        let oracle = self.theme.config().oracle_label;
        format!(
            "You are the {oracle} in a gamified learning system. \
             Evaluate this student submission.\n\n\
             Quest: {}\nDescription: {}\nStudent Response: {}\n\n\
             Provide:\n1. A score from 0-100\n\
             2. Constructive feedback in 2-3 sentences, speaking in character as the {oracle}\n\n\
             Format your response as JSON: {{\"score\": number, \"feedback\": \"string\"}}",
            quest.name, quest.description, submission_text
        )
    }

    fn study_guide_prompt(&self, quest: &Quest, submission_text: &str, score: u8) -> String {
        let oracle = self.theme.config().oracle_label;
        format!(
            "Create a Knowledge Crystal (study guide) for a student who struggled \
             with this quest.\n\n\
             Quest: {}\nDescription: {}\nStudent's Response: {}\nScore: {}\n\n\
             Write a 3-4 paragraph study guide that:\n\
             1. Explains the key concept they missed\n\
             2. Provides examples\n\
             3. Encourages them to try again\n\n\
             Keep the tone matching the {oracle} character.",
            quest.name, quest.description, submission_text, score
        )
    }

    fn redemption_prompt(&self, quest: &Quest) -> String {
        format!(
            "Create a simplified redemption quest based on the original quest.\n\n\
             Original Quest: {}\nDescription: {}\n\n\
             Create a simpler version that focuses on the core concept. Make it \
             achievable for a struggling student.\n\
             Just provide the quest name and description as JSON: \
             {{\"name\": \"string\", \"description\": \"string\"}}",
            quest.name, quest.description
        )
    }
}

/// Extract the JSON object embedded in a model reply.
///
/// Models wrap JSON in prose or code fences often enough that taking the
/// outermost brace pair is the reliable option.
fn extract_json(text: &str) -> Result<&str, OracleError> {
    let start = text.find('{');
    let end = text.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(&text[start..=end]),
        _ => Err(OracleError::Parse(format!(
            "no JSON object in oracle reply: {:.120}",
            text
        ))),
    }
}

/// Clamp a raw model score into 0..=100.
fn clamp_score(raw: f64) -> u8 {
    raw.clamp(0.0, 100.0).round() as u8
}

#[async_trait]
impl EvaluationOracle for OllamaOracle {
    async fn evaluate(
        &self,
        quest: &Quest,
        submission_text: &str,
    ) -> Result<Evaluation, OracleError> {
        let reply = self.chat(&self.evaluation_prompt(quest, submission_text)).await?;
        let payload: ScorePayload = serde_json::from_str(extract_json(&reply)?)
            .map_err(|e| OracleError::Parse(e.to_string()))?;

        Ok(Evaluation {
            score: clamp_score(payload.score),
            feedback: payload.feedback,
        })
    }

    async fn study_guide(
        &self,
        quest: &Quest,
        submission_text: &str,
        score: u8,
    ) -> Result<String, OracleError> {
        self.chat(&self.study_guide_prompt(quest, submission_text, score))
            .await
    }

    async fn redemption_draft(&self, quest: &Quest) -> Result<QuestDraft, OracleError> {
        let reply = self.chat(&self.redemption_prompt(quest)).await?;
        serde_json::from_str(extract_json(&reply)?).map_err(|e| OracleError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::types::QuestType;

    fn quest() -> Quest {
        Quest::new(
            Uuid::new_v4(),
            "Fractions of the Void",
            "Add the fractions",
            QuestType::Standard,
            100,
        )
    }

    // ==================== JSON Extraction Tests ====================

    #[test]
    fn extract_json_from_bare_object() {
        let text = r#"{"score": 85, "feedback": "ok"}"#;
        assert_eq!(extract_json(text).unwrap(), text);
    }

    #[test]
    fn extract_json_from_code_fence() {
        let text = "Here you go:\n```json\n{\"score\": 85, \"feedback\": \"ok\"}\n```";
        assert_eq!(extract_json(text).unwrap(), r#"{"score": 85, "feedback": "ok"}"#);
    }

    #[test]
    fn extract_json_from_surrounding_prose() {
        let text = "The verdict is {\"score\": 70, \"feedback\": \"fine\"} as requested.";
        let payload: ScorePayload = serde_json::from_str(extract_json(text).unwrap()).unwrap();
        assert_eq!(payload.score, 70.0);
    }

    #[test]
    fn extract_json_rejects_plain_prose() {
        let err = extract_json("I cannot evaluate this.").unwrap_err();
        assert!(matches!(err, OracleError::Parse(_)));
    }

    // ==================== Score Clamping Tests ====================

    #[test]
    fn scores_clamp_into_range() {
        assert_eq!(clamp_score(-5.0), 0);
        assert_eq!(clamp_score(84.6), 85);
        assert_eq!(clamp_score(100.0), 100);
        assert_eq!(clamp_score(140.0), 100);
    }

    // ==================== Prompt Tests ====================

    #[test]
    fn evaluation_prompt_embeds_quest_and_oracle_label() {
        let oracle = OllamaOracle::new(Theme::Scifi);
        let prompt = oracle.evaluation_prompt(&quest(), "my answer");
        assert!(prompt.contains("Fractions of the Void"));
        assert!(prompt.contains("my answer"));
        assert!(prompt.contains("AI Core"));
        assert!(prompt.contains("\"score\": number"));
    }

    #[test]
    fn study_guide_prompt_embeds_score() {
        let oracle = OllamaOracle::new(Theme::Fantasy);
        let prompt = oracle.study_guide_prompt(&quest(), "my answer", 42);
        assert!(prompt.contains("Score: 42"));
        assert!(prompt.contains("Oracle"));
    }

    #[test]
    fn redemption_prompt_embeds_original_quest() {
        let oracle = OllamaOracle::new(Theme::Modern);
        let prompt = oracle.redemption_prompt(&quest());
        assert!(prompt.contains("Original Quest: Fractions of the Void"));
    }

    // ==================== Construction Tests ====================

    #[test]
    fn new_uses_defaults() {
        let oracle = OllamaOracle::new(Theme::Fantasy);
        assert_eq!(oracle.base_url(), DEFAULT_ORACLE_URL);
        assert_eq!(oracle.model, DEFAULT_ORACLE_MODEL);
    }

    #[test]
    fn builders_override_url_and_model() {
        let oracle = OllamaOracle::new(Theme::Fantasy)
            .with_base_url("http://192.168.1.50:11434")
            .with_model("mistral:7b");
        assert_eq!(oracle.base_url(), "http://192.168.1.50:11434");
        assert_eq!(oracle.model, "mistral:7b");
    }

    // ==================== Integration Tests (require Ollama) ====================

    #[tokio::test]
    #[ignore = "requires Ollama running locally with a model installed"]
    async fn integration_evaluate_returns_score_in_range() {
        let base_url =
            std::env::var("OLLAMA_HOST").unwrap_or_else(|_| DEFAULT_ORACLE_URL.to_string());
        let oracle = OllamaOracle::new(Theme::Fantasy).with_base_url(base_url);

        let eval = oracle
            .evaluate(&quest(), "1/2 + 1/4 = 3/4 because the common denominator is 4.")
            .await
            .expect("evaluation should succeed");
        assert!(eval.score <= 100);
        assert!(!eval.feedback.is_empty());
    }
}
