use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use mnemo_core::Language;
use mnemo_llm::Provider;

fn position_or_zero<T: PartialEq>(items: &[T], current: &T) -> usize {
    items.iter().position(|i| i == current).unwrap_or(0)
}

pub fn select_language(prompt: &str, choices: &[&'static Language], current: &str) -> Result<&'static Language> {
    let names: Vec<&str> = choices.iter().map(|l| l.display_name).collect();
    let default = choices
        .iter()
        .position(|l| l.key.eq_ignore_ascii_case(current))
        .unwrap_or(0);

    let idx = Select::new()
        .with_prompt(prompt)
        .items(&names)
        .default(default)
        .interact()?;
    Ok(choices[idx])
}

pub fn select_provider(current: Provider) -> Result<Provider> {
    let names: Vec<&str> = Provider::ALL.iter().map(|p| p.display_name()).collect();
    let idx = Select::new()
        .with_prompt("LLM provider")
        .items(&names)
        .default(position_or_zero(&Provider::ALL, &current))
        .interact()?;
    Ok(Provider::ALL[idx])
}

pub fn select_model(provider: Provider, current: &str) -> Result<String> {
    let models = provider.models();
    let idx = Select::new()
        .with_prompt(format!("{provider} model"))
        .items(models)
        .default(position_or_zero(models, &current))
        .interact()?;
    Ok(models[idx].to_string())
}

pub fn select_deck(decks: &[String], current: &str) -> Result<String> {
    let idx = Select::new()
        .with_prompt("Deck")
        .items(decks)
        .default(position_or_zero(decks, &current.to_string()))
        .interact()?;
    Ok(decks[idx].clone())
}

pub fn input_word() -> Result<String> {
    let word: String = Input::new().with_prompt("Word").interact_text()?;
    Ok(word.trim().to_string())
}

/// Offer manual entry when the dictionary has nothing for `word`
pub fn ask_manual_definition(word: &str) -> Result<Option<String>> {
    let enter = Confirm::new()
        .with_prompt(format!("No dictionary entry for '{word}'. Enter a definition manually?"))
        .default(true)
        .interact()?;
    if !enter {
        return Ok(None);
    }

    let definition: String = Input::new()
        .with_prompt("Definition")
        .allow_empty(true)
        .interact_text()?;
    let definition = definition.trim();

    Ok((!definition.is_empty()).then(|| definition.to_string()))
}
