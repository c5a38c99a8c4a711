//! OpenAI LLM synthesis adapter
//!
//! Implements the SynthesizerPort against the chat completions API.
//! One prompt in, one free-text report out; the response is never parsed
//! beyond extracting the message content.

use crate::error::{AppError, Result, Stage};
use crate::ports::synthesis::SynthesizerPort;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// OpenAI service implementation
pub struct OpenAIService {
    client: Client,
    api_key: String,
    model: String,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAIService {
    /// Create a new OpenAI service with the given API key, model, and
    /// sampling temperature
    pub fn new(api_key: String, model: String, temperature: f32, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            model,
            temperature,
        })
    }

    /// Check if the service is configured (has API key)
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[async_trait]
impl SynthesizerPort for OpenAIService {
    async fn synthesize(&self, prompt: &str) -> Result<String> {
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
        };

        log::info!("Calling chat completion with model: {}", self.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", OPENAI_API_BASE))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::stage(Stage::Synthesis, format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::stage(
                Stage::Synthesis,
                format!("service returned {}: {}", status, error_text),
            ));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::stage(Stage::Synthesis, format!("invalid response: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::stage(Stage::Synthesis, "no completion choices returned".to_string())
            })?;

        log::info!("Completion successful, generated {} characters", content.len());
        Ok(content)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let service = OpenAIService::new(
            "sk-test".to_string(),
            "gpt-4.1-mini".to_string(),
            0.8,
            Duration::from_secs(120),
        )
        .unwrap();
        assert_eq!(service.provider_name(), "openai");
        assert!(service.is_configured());
    }

    #[test]
    fn test_service_not_configured() {
        let service = OpenAIService::new(
            String::new(),
            "gpt-4.1-mini".to_string(),
            0.8,
            Duration::from_secs(120),
        )
        .unwrap();
        assert!(!service.is_configured());
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"strong close"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content, "strong close");
    }
}
