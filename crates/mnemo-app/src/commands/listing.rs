use anyhow::{Context, Result};
use mnemo_core::{LANGUAGES, Language};
use mnemo_llm::Provider;

use crate::state::AppState;

pub fn handle_languages() {
    for lang in LANGUAGES {
        let targets: Vec<&str> = lang
            .can_learn
            .iter()
            .filter_map(|k| Language::find(k))
            .map(|l| l.display_name)
            .collect();
        println!("{:<12} -> {}", lang.display_name, targets.join(", "));
    }
}

pub fn handle_models(state: &AppState, provider: Option<&str>) -> Result<()> {
    let providers = match provider {
        Some(name) => vec![name.parse::<Provider>()?],
        None => Provider::ALL.to_vec(),
    };

    for provider in providers {
        let configured = state.model_for(provider, None);
        println!("{provider}:");
        for model in provider.models() {
            let marker = if *model == configured { "*" } else { " " };
            println!("  {marker} {model}");
        }
    }

    Ok(())
}

pub async fn handle_decks(state: &AppState) -> Result<()> {
    let client = state
        .anki_client()
        .context("Anki integration is disabled in the profile")?;

    let version = client
        .check_connection()
        .await
        .context("Cannot reach AnkiConnect; is Anki running?")?;
    tracing::debug!("AnkiConnect version {}", version);

    let models = client.model_names().await?;
    if !models.contains(&state.config.anki.model) {
        tracing::warn!(
            "Note type '{}' is not in this collection; adding cards will fail",
            state.config.anki.model
        );
    }

    for deck in client.deck_names().await? {
        let marker = if deck == state.config.anki.deck { "*" } else { " " };
        println!("{marker} {deck}");
    }

    Ok(())
}
