use anyhow::{Context, Result};
use mnemo_types::NoteRequest;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
}

impl AnkiConnectClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Check if AnkiConnect is available
    pub async fn check_connection(&self) -> Result<u32> {
        let response: AnkiResponse<u32> = self.invoke("version", json!({})).await?;
        response.into_result()
    }

    /// Get list of deck names
    pub async fn deck_names(&self) -> Result<Vec<String>> {
        let response: AnkiResponse<Vec<String>> = self.invoke("deckNames", json!({})).await?;
        response.into_result()
    }

    /// Get list of model (note type) names
    pub async fn model_names(&self) -> Result<Vec<String>> {
        let response: AnkiResponse<Vec<String>> = self.invoke("modelNames", json!({})).await?;
        response.into_result()
    }

    /// Insert a rendered card as a note, returns the new note id
    pub async fn add_note(&self, note: &NoteRequest) -> Result<u64> {
        let note = serde_json::to_value(note)?;
        let params = json!({ "note": note });

        let response: AnkiResponse<u64> = self.invoke("addNote", params).await?;
        response.into_result()
    }

    /// POST one action in the version 6 envelope `{action, version, params}`.
    /// `addNote` carries a serialized `NoteRequest` under `params.note`; any
    /// non-null `error` in the reply is surfaced by `into_result`.
    async fn invoke<T>(&self, action: &str, params: serde_json::Value) -> Result<AnkiResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = AnkiRequest {
            action: action.to_string(),
            version: 6,
            params,
        };

        tracing::debug!("AnkiConnect action={} url={}", action, self.base_url);
        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to AnkiConnect")?;

        response
            .json::<AnkiResponse<T>>()
            .await
            .context("Failed to parse AnkiConnect response")
    }
}

#[derive(Serialize)]
struct AnkiRequest {
    action: String,
    version: u32,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    fn into_result(self) -> Result<T> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }

        self.result
            .context("AnkiConnect returned null result")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_wins_over_result() {
        let response: AnkiResponse<u64> =
            serde_json::from_str(r#"{"result": null, "error": "deck was not found: Nope"}"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.to_string(), "AnkiConnect error: deck was not found: Nope");
    }

    #[test]
    fn null_result_without_error_fails() {
        let response: AnkiResponse<Vec<String>> =
            serde_json::from_str(r#"{"result": null, "error": null}"#).unwrap();
        assert!(response.into_result().is_err());
    }

    #[test]
    fn request_envelope_uses_version_six() {
        let request = AnkiRequest {
            action: "deckNames".to_string(),
            version: 6,
            params: json!({}),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, json!({"action": "deckNames", "version": 6, "params": {}}));
    }
}
