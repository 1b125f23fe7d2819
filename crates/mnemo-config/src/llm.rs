use serde::{Deserialize, Serialize};

fn default_provider() -> String {
    "groq".to_string()
}

fn default_groq() -> ProviderConfig {
    ProviderConfig {
        api_key: String::new(),
        model: "llama-3.3-70b-versatile".to_string(),
        endpoint: None,
    }
}

fn default_openai() -> ProviderConfig {
    ProviderConfig {
        api_key: String::new(),
        model: "gpt-4o-mini".to_string(),
        endpoint: None,
    }
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Credentials and model for one provider
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_key: String,
    pub model: String,
    /// Replaces the vendor's chat-completion URL when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LlmConfig {
    /// Selected provider: "groq" or "openai"
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_groq")]
    pub groq: ProviderConfig,
    #[serde(default = "default_openai")]
    pub openai: ProviderConfig,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Applies to generation requests only
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl LlmConfig {
    /// Settings for a provider by name, case-insensitive
    pub fn provider_config(&self, name: &str) -> Option<&ProviderConfig> {
        match name.trim().to_ascii_lowercase().as_str() {
            "groq" => Some(&self.groq),
            "openai" => Some(&self.openai),
            _ => None,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            groq: default_groq(),
            openai: default_openai(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
