use serde::{Deserialize, Serialize};

fn default_native_language() -> String {
    "english".to_string()
}

fn default_target_language() -> String {
    "french".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Render cards with the night-mode palette
    pub dark_theme: bool,
    #[serde(default = "default_native_language")]
    pub native_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_theme: false,
            native_language: default_native_language(),
            target_language: default_target_language(),
        }
    }
}
