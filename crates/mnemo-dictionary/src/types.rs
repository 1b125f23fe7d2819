use mnemo_types::WordRecord;

/// Online dictionary source
#[async_trait::async_trait]
pub trait Dictionary: Send + Sync {
    /// Fetch and extract the entry for `word` found under `path`
    /// (a language-pair/slug fragment such as "english-french/bonjour").
    ///
    /// `Ok(None)` means the page has no recognizable entry.
    async fn lookup(&self, word: &str, path: &str) -> Result<Option<WordRecord>, LookupError>;

    /// Human readable source name
    fn name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Cannot access Cambridge Dictionary: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("Cannot access Cambridge Dictionary: HTTP {status} for {url}")]
    Blocked { status: u16, url: String },
}
