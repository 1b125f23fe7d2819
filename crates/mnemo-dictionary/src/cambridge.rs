use std::time::Duration;

use async_trait::async_trait;
use mnemo_config::dictionary::DictionaryConfig;
use mnemo_config::network::NetworkConfig;
use mnemo_types::WordRecord;
use rand::Rng;
use reqwest::header::{ACCEPT_LANGUAGE, REFERER, USER_AGENT};

use crate::parse::parse_entry;
use crate::types::{Dictionary, LookupError};

/// Cambridge Dictionary page scraper
#[derive(Clone)]
pub struct CambridgeDictionary {
    client: reqwest::Client,
    base_url: String,
    referer: String,
    user_agent: String,
    accept_language: String,
    delay_window: (u64, u64),
}

impl CambridgeDictionary {
    pub fn new(dictionary: &DictionaryConfig, network: &NetworkConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: dictionary.base_url.clone(),
            referer: dictionary.referer.clone(),
            user_agent: network.user_agent.clone(),
            accept_language: network.accept_language.clone(),
            delay_window: dictionary.delay_window(),
        }
    }

    /// Full page URL for a language-pair/slug path
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Random pause taken before each request to look less like a bot
    fn pause(&self) -> Duration {
        let (min, max) = self.delay_window;
        if max == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }
}

#[async_trait]
impl Dictionary for CambridgeDictionary {
    async fn lookup(&self, word: &str, path: &str) -> Result<Option<WordRecord>, LookupError> {
        let url = self.url_for(path);

        let pause = self.pause();
        tracing::debug!("Waiting {:?} before fetching {}", pause, url);
        tokio::time::sleep(pause).await;

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.user_agent)
            .header(REFERER, &self.referer)
            .header(ACCEPT_LANGUAGE, &self.accept_language)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Dictionary returned HTTP {} for {}", status, url);
            return Err(LookupError::Blocked {
                status: status.as_u16(),
                url,
            });
        }

        let html = response.text().await?;
        tracing::debug!("Fetched {} bytes from {}", html.len(), url);

        let record = parse_entry(word, &html);
        match &record {
            Some(r) => tracing::info!("Found {} definition(s) for '{}'", r.entries.len(), word),
            None => tracing::warn!("No dictionary entry for '{}'", word),
        }

        Ok(record)
    }

    fn name(&self) -> &str {
        "Cambridge Dictionary"
    }
}
