use std::time::Duration;

use async_trait::async_trait;
use mnemo_types::MnemonicResult;
use serde::{Deserialize, Serialize};

use crate::parse::parse_reply;
use crate::prompt::{SYSTEM_PROMPT, user_prompt};
use crate::provider::Provider;
use crate::{GenerateError, MnemonicGenerator, ProviderMetadata};

const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 1000;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// Chat-completion client shared by both providers
#[derive(Clone)]
pub struct ChatCompletionGenerator {
    client: reqwest::Client,
    provider: Provider,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl ChatCompletionGenerator {
    pub fn new(provider: Provider, api_key: &str, model: &str) -> Result<Self, GenerateError> {
        Self::with_timeout(provider, api_key, model, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        provider: Provider,
        api_key: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, GenerateError> {
        if api_key.trim().is_empty() {
            return Err(GenerateError::MissingApiKey(provider.display_name()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| GenerateError::Network {
                provider: provider.display_name(),
                source,
            })?;

        Ok(Self {
            client,
            provider,
            endpoint: provider.endpoint().to_string(),
            api_key: api_key.trim().to_string(),
            model: model.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        })
    }

    /// Point requests at another chat-completion URL (proxies, local servers)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_sampling(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    pub(crate) fn build_request<'a>(&'a self, user_prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// Send one prompt and return the raw reply text
    async fn complete(&self, user_prompt: &str) -> Result<String, GenerateError> {
        let provider = self.provider.display_name();
        let (auth_name, auth_value) = self.provider.auth_header(&self.api_key);

        tracing::debug!("POST {} (model={})", self.endpoint, self.model);
        let response = self
            .client
            .post(&self.endpoint)
            .header(auth_name, auth_value)
            .json(&self.build_request(user_prompt))
            .send()
            .await
            .map_err(|source| GenerateError::Network { provider, source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| GenerateError::Network { provider, source })?;

        if !status.is_success() {
            return Err(GenerateError::Api {
                provider,
                status: status.as_u16(),
                body,
            });
        }

        extract_content(provider, &body)
    }
}

/// `choices[0].message.content` from a chat-completion response body
fn extract_content(provider: &'static str, body: &str) -> Result<String, GenerateError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| GenerateError::MalformedResponse {
            provider,
            detail: e.to_string(),
        })?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| GenerateError::MalformedResponse {
            provider,
            detail: "no message content in first choice".to_string(),
        })
}

#[async_trait]
impl MnemonicGenerator for ChatCompletionGenerator {
    async fn create_mnemonic(
        &self,
        word: &str,
        definition: &str,
        native_language: &str,
        target_language: &str,
    ) -> Result<MnemonicResult, GenerateError> {
        let prompt = user_prompt(word, definition, native_language, target_language);
        let reply = self.complete(&prompt).await?;
        tracing::debug!("Reply from {}: {} chars", self.provider, reply.len());

        let result = parse_reply(reply.trim());
        if result.mnemonic.is_empty() {
            tracing::warn!("Reply from {} had no mnemonic line", self.provider);
        }
        Ok(result)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: self.provider.display_name().to_string(),
            model: self.model.clone(),
        }
    }
}
