// src/generation/client.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::AiConfig;

use super::{CompletionRequest, GenerationError, TextGenerator};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// OpenAI-compatible chat-completions client.
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(config: &AiConfig, api_key: String) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let endpoint = config
            .base_url
            .join("chat/completions")
            .map_err(|e| GenerationError::Upstream(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            max_tokens: request.max_tokens,
            response_format: request.json.then_some(ResponseFormat { kind: "json_object" }),
        };

        let res = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(GenerationError::Upstream(format!("{}: {}", status, text)));
        }

        let reply: ChatResponse = res.json().await?;

        reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GenerationError::Validation("response has no content".to_string()))
    }
}

/// Used when no API key is configured. Every call fails, so every request is
/// served from fallback content.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableGenerator;

#[async_trait]
impl TextGenerator for UnavailableGenerator {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, GenerationError> {
        Err(GenerationError::Upstream("no API key configured".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_base_url;

    #[test]
    fn endpoint_is_joined_onto_base() {
        let config = AiConfig {
            api_key: None,
            base_url: parse_base_url("https://llm.internal/openai/v1").unwrap(),
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 5,
        };
        let generator = OpenAiGenerator::new(&config, "key".to_string()).unwrap();
        assert_eq!(
            generator.endpoint.as_str(),
            "https://llm.internal/openai/v1/chat/completions"
        );
    }

    #[test]
    fn json_mode_sets_response_format() {
        let body = ChatRequest {
            model: "m",
            messages: [ChatMessage { role: "user", content: "hi" }],
            max_tokens: 10,
            response_format: Some(ResponseFormat { kind: "json_object" }),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[tokio::test]
    async fn unavailable_generator_always_fails_upstream() {
        let err = UnavailableGenerator
            .complete(CompletionRequest {
                prompt: "p".into(),
                max_tokens: 1,
                json: false,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Upstream(_)));
    }
}
