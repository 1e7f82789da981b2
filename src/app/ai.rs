//! AI Message Generation
//!
//! Single call to OpenAI's chat-completions endpoint: the first choice's
//! message content becomes the campaign text. The key comes from the
//! settings screen, never from the environment.

use reqwest::Client;
use serde_json::{json, Value};
use tokio::runtime::Runtime;

use crate::shared::error::AppError;

const DEFAULT_API_BASE: &str = "https://api.openai.com";

const SYSTEM_PROMPT: &str = "Você é um especialista em marketing digital. Transforme descrições \
simples de promoções em mensagens atraentes e persuasivas para campanhas promocionais. Use \
linguagem envolvente, crie senso de urgência quando apropriado, e inclua calls-to-action. \
Mantenha o tom profissional mas acessível.";

/// OpenAI chat-completions client
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Point at a different host (tests)
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Turn a plain promotion description into a campaign message
    pub fn generate_campaign_message(&self, description: &str) -> Result<String, AppError> {
        let url = format!("{}/v1/chat/completions", self.api_base);

        let request_body = json!({
            "model": "gpt-4",
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {
                    "role": "user",
                    "content": format!(
                        "Transforme esta descrição em uma mensagem promocional atraente: \"{}\"",
                        description
                    )
                }
            ],
            "max_tokens": 500,
            "temperature": 0.7,
        });

        let rt = Runtime::new()
            .map_err(|e| AppError::network(format!("Failed to create runtime: {}", e)))?;

        rt.block_on(async {
            let response = self
                .client
                .post(&url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .header("Content-Type", "application/json")
                .json(&request_body)
                .send()
                .await
                .map_err(|e| AppError::network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let error_text = response.text().await.unwrap_or_default();
                tracing::error!("OpenAI API error ({}): {}", status, error_text);
                return Err(AppError::api(
                    status.as_u16(),
                    "Verifique sua chave da API e tente novamente.",
                ));
            }

            let json_response: Value = response
                .json()
                .await
                .map_err(|e| AppError::serialization(format!("Failed to parse response: {}", e)))?;

            let content = json_response
                .get("choices")
                .and_then(|c| c.get(0))
                .and_then(|choice| choice.get("message"))
                .and_then(|msg| msg.get("content"))
                .and_then(|c| c.as_str())
                .ok_or_else(|| {
                    AppError::serialization("Invalid OpenAI response format".to_string())
                })?;

            tracing::info!("campaign message generated: {} chars", content.len());
            Ok(content.to_string())
        })
    }
}
