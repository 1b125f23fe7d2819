mod chat;
mod parse;
mod prompt;
mod provider;

pub use chat::ChatCompletionGenerator;
pub use parse::parse_reply;
pub use prompt::{SYSTEM_PROMPT, user_prompt};
pub use provider::Provider;

use mnemo_types::MnemonicResult;

/// Mnemonic provider interface
#[async_trait::async_trait]
pub trait MnemonicGenerator: Send + Sync {
    /// Generate a mnemonic, synonym and antonym for `word`
    async fn create_mnemonic(
        &self,
        word: &str,
        definition: &str,
        native_language: &str,
        target_language: &str,
    ) -> Result<MnemonicResult, GenerateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Cannot access {provider}: {source}")]
    Network {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned HTTP {status}: {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("Malformed response from {provider}: {detail}")]
    MalformedResponse {
        provider: &'static str,
        detail: String,
    },

    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("No API key configured for {0}")]
    MissingApiKey(&'static str),
}

/// One-shot generation with the provider's default endpoint and sampling
pub async fn generate(
    word: &str,
    definition: &str,
    native_language: &str,
    target_language: &str,
    provider: &str,
    model: &str,
    api_key: &str,
) -> Result<MnemonicResult, GenerateError> {
    let provider: Provider = provider.parse()?;
    let generator = ChatCompletionGenerator::new(provider, api_key, model)?;
    generator
        .create_mnemonic(word, definition, native_language, target_language)
        .await
}
