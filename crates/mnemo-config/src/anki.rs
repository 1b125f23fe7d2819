use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_url() -> String {
    "http://localhost:8765".to_string()
}

fn default_deck() -> String {
    "Default".to_string()
}

fn default_model() -> String {
    "Basic".to_string()
}

fn default_allow_duplicate() -> bool {
    true
}

fn default_tags() -> Vec<String> {
    vec!["cambridge_dictionary".to_string()]
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AnkiConfig {
    /// Enable Anki integration
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// AnkiConnect URL
    #[serde(default = "default_url")]
    pub url: String,
    /// Default deck name
    #[serde(default = "default_deck")]
    pub deck: String,
    /// Default model name
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_allow_duplicate")]
    pub allow_duplicate: bool,
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            url: default_url(),
            deck: default_deck(),
            model: default_model(),
            allow_duplicate: default_allow_duplicate(),
            tags: default_tags(),
        }
    }
}
