use std::env;

use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::dictionary::DictionaryConfig;
use self::llm::LlmConfig;
use self::network::NetworkConfig;
use self::ui::UiConfig;

pub mod anki;
pub mod dictionary;
pub mod llm;
pub mod network;
pub mod ui;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub ui: UiConfig,
    pub anki: AnkiConfig,
    pub dictionary: DictionaryConfig,
    pub llm: LlmConfig,
}

impl Config {
    /// Stored profile with environment overrides applied on top
    pub fn from_profile(stored: Config) -> Self {
        stored.with_overrides(|key| env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        self.apply_overrides(lookup);
        self
    }

    /// Overlay values from any key lookup; empty values are ignored
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get("GROQ_API_KEY") {
            self.llm.groq.api_key = key;
        }
        if let Some(key) = get("OPENAI_API_KEY") {
            self.llm.openai.api_key = key;
        }
        if let Some(provider) = get("MNEMO_PROVIDER") {
            self.llm.provider = provider.to_lowercase();
        }
        if let Some(url) = get("ANKI_CONNECT_URL") {
            self.anki.url = url;
        }
        if let Some(deck) = get("MNEMO_DECK") {
            self.anki.deck = deck;
        }
        if let Some(timeout) = get("MNEMO_LLM_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.llm.timeout_seconds = timeout;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_match_dictionary_and_provider_settings() {
        let config = Config::default();

        assert_eq!(config.llm.provider, "groq");
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.llm.max_tokens, 1000);
        assert_eq!(config.dictionary.delay_window(), (3000, 5000));
        assert_eq!(config.anki.model, "Basic");
        assert!(config.anki.allow_duplicate);
        assert!(!config.ui.dark_theme);
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let json = r#"{ "anki": { "deck": "Words" }, "ui": { "dark_theme": true } }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.anki.deck, "Words");
        assert_eq!(config.anki.url, "http://localhost:8765");
        assert!(config.ui.dark_theme);
        assert_eq!(config.llm.groq.model, "llama-3.3-70b-versatile");
    }

    #[test]
    fn overrides_replace_keys_and_skip_blank_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("GROQ_API_KEY", "gsk_test"),
            ("OPENAI_API_KEY", "   "),
            ("MNEMO_PROVIDER", "OpenAI"),
            ("MNEMO_LLM_TIMEOUT_SECONDS", "12"),
        ]);
        let mut config = Config::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.llm.groq.api_key, "gsk_test");
        assert!(config.llm.openai.api_key.is_empty());
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.timeout_seconds, 12);
    }

    #[test]
    fn overrides_layer_on_top_of_stored_profile() {
        let mut stored = Config::default();
        stored.anki.deck = "Stored".to_string();
        stored.llm.groq.api_key = "gsk_stored".to_string();
        stored.ui.native_language = "turkish".to_string();

        let vars: HashMap<&str, &str> = HashMap::from([("MNEMO_DECK", "French::Verbs")]);
        let config = stored.with_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.anki.deck, "French::Verbs");
        assert_eq!(config.llm.groq.api_key, "gsk_stored");
        assert_eq!(config.ui.native_language, "turkish");
    }

    #[test]
    fn provider_config_lookup_is_case_insensitive() {
        let config = Config::default();

        assert_eq!(config.llm.provider_config("OpenAI").unwrap().model, "gpt-4o-mini");
        assert!(config.llm.provider_config("anthropic").is_none());
    }

    #[test]
    fn inverted_delay_bounds_are_reordered() {
        let config = DictionaryConfig {
            delay_min_ms: 5000,
            delay_max_ms: 2000,
            ..Default::default()
        };
        assert_eq!(config.delay_window(), (2000, 5000));
    }
}
