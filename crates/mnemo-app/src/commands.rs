use anyhow::Result;
use mnemo_core::{Language, LanguagePair};

use crate::cli::LanguageArgs;
use crate::prompts;
use crate::state::AppState;

pub mod config;
pub mod create_card;
pub mod listing;
pub mod lookup;

pub use config::handle_config;
pub use create_card::handle_card_creation;
pub use listing::{handle_decks, handle_languages, handle_models};
pub use lookup::handle_lookup;

/// Native/target pair from flags, prompts or the profile, in that order
pub fn resolve_languages(state: &AppState, args: &LanguageArgs) -> Result<LanguagePair> {
    let ui = &state.config.ui;

    let native = match &args.native {
        Some(native) => native.clone(),
        None if state.interactive => {
            let all: Vec<&'static Language> = mnemo_core::LANGUAGES.iter().collect();
            prompts::select_language("I speak", &all, &ui.native_language)?
                .key
                .to_string()
        }
        None => ui.native_language.clone(),
    };

    let target = match &args.target {
        Some(target) => target.clone(),
        None if state.interactive => {
            let speaker = Language::find(&native)
                .ok_or_else(|| mnemo_core::LanguageError::UnknownLanguage(native.clone()))?;
            let choices: Vec<&'static Language> =
                speaker.can_learn.iter().filter_map(|k| Language::find(k)).collect();
            prompts::select_language("I am learning", &choices, &ui.target_language)?
                .key
                .to_string()
        }
        None => ui.target_language.clone(),
    };

    Ok(LanguagePair::new(&native, &target)?)
}

#[cfg(test)]
mod tests {
    use mnemo_config::Config;

    use super::*;

    #[test]
    fn flags_override_profile_languages() {
        let state = AppState::new(Config::default(), false);
        let args = LanguageArgs {
            native: Some("french".to_string()),
            target: Some("english".to_string()),
        };

        let pair = resolve_languages(&state, &args).unwrap();
        assert_eq!(pair.dict_format(), "english-french");
    }

    #[test]
    fn non_interactive_falls_back_to_profile() {
        let state = AppState::new(Config::default(), false);
        let pair = resolve_languages(&state, &LanguageArgs::default()).unwrap();

        assert_eq!(pair.native.key, "english");
        assert_eq!(pair.target.key, "french");
    }

    #[test]
    fn unroutable_profile_pair_is_an_error() {
        let mut config = Config::default();
        config.ui.native_language = "german".to_string();
        config.ui.target_language = "french".to_string();
        let state = AppState::new(config, false);

        let err = resolve_languages(&state, &LanguageArgs::default()).unwrap_err();
        assert!(err.to_string().contains("cannot study"));
    }
}
