//! # Generation
//!
//! The model that writes flashcards is a collaborator behind the
//! [`Generator`] trait: topic in, raw text out. What the text looks like is
//! the parser's problem, not the generator's.
//!
//! [`HttpGenerator`] talks to any OpenAI-compatible `chat/completions`
//! endpoint. Requests are made once; there is no retry.

use crate::config::FlashConfig;
use crate::error::{FlashError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const TOPIC_PLACEHOLDER: &str = "{topic}";

/// Something that can turn a topic into model output.
pub trait Generator {
    /// Returns the raw response text, which may be empty.
    fn generate(&self, topic: &str) -> Result<String>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

impl ChatResponse {
    /// Text of the first choice; empty when the model sent nothing back.
    pub fn first_content(&self) -> String {
        self.choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default()
    }
}

pub struct HttpGenerator {
    client: reqwest::blocking::Client,
    api_endpoint: String,
    model: String,
    api_key: Option<String>,
    prompt: String,
}

impl HttpGenerator {
    pub fn new(
        api_endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        prompt: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| FlashError::Config(format!("unable to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_endpoint: api_endpoint.into(),
            model: model.into(),
            api_key,
            prompt: prompt.into(),
        })
    }

    pub fn from_config(config: &FlashConfig) -> Result<Self> {
        Self::new(
            config.api_endpoint.clone(),
            config.model.clone(),
            config.api_key(),
            config.prompt.clone(),
        )
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.api_endpoint.trim().trim_end_matches('/')
        )
    }
}

impl Generator for HttpGenerator {
    fn generate(&self, topic: &str) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            FlashError::Generation(
                "no API key configured (set the variable named by `api-key-env`)".to_string(),
            )
        })?;

        let url = self.completions_url();
        let request = build_request(&self.model, &self.prompt, topic);
        debug!(%url, model = %self.model, "requesting flashcards");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .map_err(|e| FlashError::Generation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(%status, "model request rejected");
            return Err(FlashError::Generation(format!("HTTP {}: {}", status, body.trim())));
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| FlashError::Generation(format!("unreadable response: {}", e)))?;
        Ok(parsed.first_content())
    }
}

/// Substitute the topic into a prompt template.
pub fn build_prompt(template: &str, topic: &str) -> String {
    template.replace(TOPIC_PLACEHOLDER, topic)
}

fn build_request<'a>(model: &'a str, template: &str, topic: &str) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: Some(build_prompt(template, topic)),
        }],
        stream: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::serve_once;
    use serde_json::json;

    #[test]
    fn test_build_prompt() {
        assert_eq!(
            build_prompt("Cards about {topic}, please", "volcanoes"),
            "Cards about volcanoes, please"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let request = build_request("gpt-test", "about {topic}", "rust");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "gpt-test",
                "messages": [{"role": "user", "content": "about rust"}],
                "stream": false
            })
        );
    }

    #[test]
    fn test_first_content() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "A: b"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        }))
        .unwrap();
        assert_eq!(response.first_content(), "A: b");
    }

    #[test]
    fn test_first_content_when_model_sends_nothing() {
        let no_choices: ChatResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(no_choices.first_content(), "");

        let null_content: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert_eq!(null_content.first_content(), "");
    }

    #[test]
    fn test_completions_url_trims_slash() {
        let generator =
            HttpGenerator::new("https://api.example.com/v1/", "m", None, "{topic}").unwrap();
        assert_eq!(
            generator.completions_url(),
            "https://api.example.com/v1/chat/completions"
        );
    }

    fn generator_for(base: &str) -> HttpGenerator {
        HttpGenerator::new(
            format!("{}/v1", base),
            "gpt-test",
            Some("sk-test".to_string()),
            "Cards about {topic}",
        )
        .unwrap()
    }

    #[test]
    fn test_generate_returns_first_choice() {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": "Lava: molten rock"}}]
        })
        .to_string();
        let (base, server) = serve_once("200 OK", &body);

        let text = generator_for(&base).generate("volcanoes").unwrap();
        assert_eq!(text, "Lava: molten rock");

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /v1/chat/completions HTTP/1.1"));
        assert!(request.to_lowercase().contains("authorization: bearer sk-test"));
        assert!(request.contains("Cards about volcanoes"));
    }

    #[test]
    fn test_generate_server_error_is_generation_failure() {
        let (base, server) = serve_once("500 Internal Server Error", "model overloaded");

        let err = generator_for(&base).generate("volcanoes").unwrap_err();
        server.join().unwrap();

        match err {
            FlashError::Generation(msg) => {
                assert!(msg.contains("500"), "{msg}");
                assert!(msg.contains("model overloaded"), "{msg}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_generate_unreadable_body_is_generation_failure() {
        let (base, server) = serve_once("200 OK", "<html>not json</html>");

        let err = generator_for(&base).generate("volcanoes").unwrap_err();
        server.join().unwrap();

        match err {
            FlashError::Generation(msg) => assert!(msg.contains("unreadable response"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_api_key_fails_before_any_request() {
        let generator = HttpGenerator::new("http://127.0.0.1:9", "m", None, "{topic}").unwrap();
        match generator.generate("anything") {
            Err(FlashError::Generation(msg)) => assert!(msg.contains("no API key")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
