use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://dictionary.cambridge.org/dictionary".to_string()
}

fn default_referer() -> String {
    "https://dictionary.cambridge.org/".to_string()
}

fn default_delay_min_ms() -> u64 {
    3000
}

fn default_delay_max_ms() -> u64 {
    5000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary root, the language-pair path is appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_referer")]
    pub referer: String,
    /// Randomized pause before each page fetch, in milliseconds
    #[serde(default = "default_delay_min_ms")]
    pub delay_min_ms: u64,
    #[serde(default = "default_delay_max_ms")]
    pub delay_max_ms: u64,
}

impl DictionaryConfig {
    /// Delay window with the bounds put in order
    pub fn delay_window(&self) -> (u64, u64) {
        if self.delay_min_ms <= self.delay_max_ms {
            (self.delay_min_ms, self.delay_max_ms)
        } else {
            (self.delay_max_ms, self.delay_min_ms)
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            referer: default_referer(),
            delay_min_ms: default_delay_min_ms(),
            delay_max_ms: default_delay_max_ms(),
        }
    }
}
