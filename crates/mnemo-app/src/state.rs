use anyhow::Context;
use mnemo_anki::AnkiConnectClient;
use mnemo_config::Config;
use mnemo_dictionary::CambridgeDictionary;
use mnemo_llm::{ChatCompletionGenerator, Provider};

/// Config plus the clients built from it for one run
pub struct AppState {
    pub config: Config,
    pub interactive: bool,
}

impl AppState {
    pub fn new(config: Config, interactive: bool) -> Self {
        Self { config, interactive }
    }

    pub fn dictionary(&self) -> CambridgeDictionary {
        CambridgeDictionary::new(&self.config.dictionary, &self.config.network)
    }

    pub fn anki_client(&self) -> Option<AnkiConnectClient> {
        if self.config.anki.enabled {
            Some(AnkiConnectClient::new(self.config.anki.url.clone()))
        } else {
            None
        }
    }

    /// Model to use for `provider`: explicit choice, then config, then the catalog default
    pub fn model_for(&self, provider: Provider, explicit: Option<&str>) -> String {
        let configured = self
            .config
            .llm
            .provider_config(provider.key())
            .map(|p| p.model.as_str())
            .filter(|m| !m.is_empty());

        explicit
            .filter(|m| !m.trim().is_empty())
            .or(configured)
            .unwrap_or(provider.models()[0])
            .to_string()
    }

    pub fn generator(&self, provider: Provider, model: &str) -> anyhow::Result<ChatCompletionGenerator> {
        let llm = &self.config.llm;
        let provider_config = llm
            .provider_config(provider.key())
            .with_context(|| format!("No settings for provider {provider}"))?;

        let timeout = std::time::Duration::from_secs(llm.timeout_seconds);
        let mut generator =
            ChatCompletionGenerator::with_timeout(provider, &provider_config.api_key, model, timeout)?
                .with_sampling(llm.temperature, llm.max_tokens);

        if let Some(endpoint) = &provider_config.endpoint {
            generator = generator.with_endpoint(endpoint.clone());
        }

        Ok(generator)
    }
}
