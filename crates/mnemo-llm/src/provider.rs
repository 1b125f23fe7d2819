use std::fmt;
use std::str::FromStr;

use crate::GenerateError;

/// Supported chat-completion vendors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Groq,
    OpenAi,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Groq, Provider::OpenAi];

    /// Config key, e.g. "groq"
    pub fn key(&self) -> &'static str {
        match self {
            Provider::Groq => "groq",
            Provider::OpenAi => "openai",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Groq => "Groq",
            Provider::OpenAi => "OpenAI",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Provider::Groq => "https://api.groq.com/openai/v1/chat/completions",
            Provider::OpenAi => "https://api.openai.com/v1/chat/completions",
        }
    }

    /// Header name and value carrying the API key
    pub fn auth_header(&self, api_key: &str) -> (&'static str, String) {
        match self {
            Provider::Groq | Provider::OpenAi => ("Authorization", format!("Bearer {api_key}")),
        }
    }

    /// Models offered in the picker, first one is the default
    pub fn models(&self) -> &'static [&'static str] {
        match self {
            Provider::Groq => &["llama-3.3-70b-versatile", "deepseek-r1-distill-llama-70b"],
            Provider::OpenAi => &["o1-mini", "gpt-4o", "gpt-4o-mini", "gpt-3.5-turbo"],
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Provider {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Provider::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(name) || p.display_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| GenerateError::UnsupportedProvider(name.to_string()))
    }
}
