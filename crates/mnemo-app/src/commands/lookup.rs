use anyhow::Result;
use mnemo_core::{DefaultPreprocessor, Preprocessor};
use mnemo_dictionary::Dictionary;

use crate::cli::LanguageArgs;
use crate::commands::resolve_languages;
use crate::state::AppState;

pub async fn handle_lookup(state: &AppState, word: &str, languages: &LanguageArgs) -> Result<()> {
    let pair = resolve_languages(state, languages)?;
    let word = DefaultPreprocessor.process(word);
    let path = pair.lookup_path(&word);

    let dictionary = state.dictionary();
    match dictionary.lookup(&word, &path).await? {
        Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
        None => {
            tracing::warn!("Nothing found at {}", dictionary.url_for(&path));
            println!("No dictionary entry for '{word}'");
        }
    }

    Ok(())
}
