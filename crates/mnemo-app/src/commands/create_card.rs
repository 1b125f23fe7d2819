use anyhow::{Context, Result, bail};
use mnemo_core::{DefaultPreprocessor, LanguagePair, Preprocessor};
use mnemo_dictionary::Dictionary;
use mnemo_llm::{MnemonicGenerator, Provider};
use mnemo_types::{CardContent, NoteRequest, WordRecord};

use crate::cli::AddArgs;
use crate::commands::resolve_languages;
use crate::prompts;
use crate::state::AppState;

/// Everything needed to produce one card
#[derive(Debug, Clone)]
pub struct CardRequest {
    pub word: String,
    pub pair: LanguagePair,
    pub deck: String,
    pub dark_theme: bool,
    /// Used only when the dictionary has no entry
    pub definition: Option<String>,
}

/// Lookup, generation and rendering for a single word.
///
/// `ask_definition` is consulted when the dictionary has no entry and the
/// request carries no fallback definition.
pub async fn build_card<F>(
    dictionary: &dyn Dictionary,
    generator: &dyn MnemonicGenerator,
    request: &CardRequest,
    ask_definition: F,
) -> Result<(WordRecord, CardContent)>
where
    F: FnOnce(&str) -> Result<Option<String>>,
{
    let word = request.word.trim();
    let normalized = DefaultPreprocessor.process(word);
    if normalized.is_empty() {
        bail!("No word given");
    }

    let path = request.pair.lookup_path(&normalized);
    tracing::info!("Looking up '{}' in {} ({})", word, dictionary.name(), path);

    let record = match dictionary.lookup(word, &path).await? {
        Some(record) => record,
        None => {
            let definition = match &request.definition {
                Some(definition) => Some(definition.clone()),
                None => ask_definition(word)?,
            };
            match definition.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
                Some(definition) => {
                    tracing::info!("Using manual definition for '{}'", word);
                    WordRecord::manual(word, definition)
                }
                None => bail!("No dictionary entry for '{word}' and no definition was given"),
            }
        }
    };

    let definition = record.primary_definition().unwrap_or_default();
    let meta = generator.metadata();
    tracing::info!("Generating mnemonic with {} ({})", meta.name, meta.model);

    let mnemonic = generator
        .create_mnemonic(
            word,
            definition,
            request.pair.native.display_name,
            request.pair.target.display_name,
        )
        .await?;

    let card = mnemo_anki::render(
        &record,
        &request.deck,
        &mnemonic.mnemonic,
        &mnemonic.synonym,
        &mnemonic.antonym,
        request.dark_theme,
    );

    Ok((record, card))
}

pub async fn handle_card_creation(state: &AppState, args: AddArgs) -> Result<()> {
    let config = &state.config;
    let pair = resolve_languages(state, &args.languages)?;

    let provider: Provider = match &args.provider {
        Some(name) => name.parse()?,
        None => {
            let configured: Provider = config.llm.provider.parse()?;
            if state.interactive {
                prompts::select_provider(configured)?
            } else {
                configured
            }
        }
    };

    let model = match (&args.model, state.interactive) {
        (Some(model), _) => model.clone(),
        (None, true) => prompts::select_model(provider, &state.model_for(provider, None))?,
        (None, false) => state.model_for(provider, None),
    };

    // Fail on a missing key before the dictionary delay
    let generator = state.generator(provider, &model)?;

    let word = match args.word {
        Some(word) => word,
        None if state.interactive => prompts::input_word()?,
        None => bail!("No word given; pass it as an argument"),
    };

    let deck = resolve_deck(state, args.deck.as_deref()).await?;

    let request = CardRequest {
        word,
        pair,
        deck,
        dark_theme: args.theme.map(|t| t.is_dark()).unwrap_or(config.ui.dark_theme),
        definition: args.definition,
    };

    let dictionary = state.dictionary();
    let interactive = state.interactive;
    let (record, card) = build_card(&dictionary, &generator, &request, |word| {
        if interactive {
            prompts::ask_manual_definition(word)
        } else {
            Ok(None)
        }
    })
    .await?;

    match deliver_note(state, card, args.dry_run).await? {
        Delivery::Added { note_id, note } => println!(
            "Added '{}' to deck '{}' ({} definition(s), note {})",
            record.word,
            note.deck_name,
            record.entries.len(),
            note_id
        ),
        Delivery::Printed(note) => println!("{}", serde_json::to_string_pretty(&note)?),
    }

    Ok(())
}

/// Deck from `--deck`, an interactive pick, or the profile
pub async fn resolve_deck(state: &AppState, explicit: Option<&str>) -> Result<String> {
    let configured = &state.config.anki.deck;

    if let Some(deck) = explicit {
        return Ok(deck.to_string());
    }

    let client = match state.anki_client() {
        Some(client) if state.interactive => client,
        _ => return Ok(configured.clone()),
    };

    match client.deck_names().await {
        Ok(decks) if !decks.is_empty() => prompts::select_deck(&decks, configured),
        Ok(_) => Ok(configured.clone()),
        Err(e) => {
            tracing::warn!("Could not list decks: {e:#}");
            Ok(configured.clone())
        }
    }
}

/// What happened to the note built from a card
#[derive(Debug)]
pub enum Delivery {
    Added { note_id: u64, note: NoteRequest },
    Printed(NoteRequest),
}

/// Send the card to AnkiConnect, or hand the note back for printing when
/// this is a dry run or Anki integration is disabled
pub async fn deliver_note(state: &AppState, card: CardContent, dry_run: bool) -> Result<Delivery> {
    let anki = &state.config.anki;
    let note = NoteRequest::from_card(card, &anki.model, anki.allow_duplicate, &anki.tags);

    if dry_run {
        return Ok(Delivery::Printed(note));
    }

    let Some(client) = state.anki_client() else {
        tracing::warn!("Anki integration disabled, printing note instead");
        return Ok(Delivery::Printed(note));
    };

    let note_id = client
        .add_note(&note)
        .await
        .context("Failed to add card to Anki")?;
    tracing::info!("Added card to Anki: note_id={}", note_id);

    Ok(Delivery::Added { note_id, note })
}
