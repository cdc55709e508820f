use crate::domain::ports::TextGenerator;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    model: &'a str,
    #[serde(rename = "maxTokens")]
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    text: String,
}

/// Client for the hosted text-generation endpoint.
pub struct HostedTextGenerator {
    client: Client,
    endpoint: String,
}

impl HostedTextGenerator {
    pub fn new(endpoint: String) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl TextGenerator for HostedTextGenerator {
    async fn generate(&self, prompt: &str, model: &str, max_tokens: u32) -> Result<String> {
        tracing::debug!("Requesting completion from: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest {
                prompt,
                model,
                max_tokens,
            })
            .send()
            .await?;

        tracing::debug!("AI response status: {}", response.status());

        if !response.status().is_success() {
            return Err(AppError::AiStatus {
                status: response.status().as_u16(),
            });
        }

        let body: GenerateResponse = response.json().await?;
        Ok(body.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn returns_generated_text_on_success() {
        let server = MockServer::start();
        let ai_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/generate")
                .json_body_partial(r#"{"model": "gpt-4o-mini", "maxTokens": 500}"#);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"text": "Drink fluids and rest."}));
        });

        let generator = HostedTextGenerator::new(server.url("/generate")).unwrap();
        let text = generator
            .generate("I have a fever", "gpt-4o-mini", 500)
            .await
            .unwrap();

        ai_mock.assert();
        assert_eq!(text, "Drink fluids and rest.");
    }

    #[tokio::test]
    async fn maps_server_errors_to_ai_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/generate");
            then.status(429);
        });

        let generator = HostedTextGenerator::new(server.url("/generate")).unwrap();
        let err = generator
            .generate("I have a fever", "gpt-4o-mini", 500)
            .await
            .unwrap_err();

        match err {
            AppError::AiStatus { status } => assert_eq!(status, 429),
            other => panic!("unexpected error: {other}"),
        }
    }
}
