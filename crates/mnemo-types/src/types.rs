use serde::{Deserialize, Serialize};

/// Dictionary lookup result for a single word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,               // as queried, e.g. "Bonjour"
    pub parts_of_speech: Vec<String>, // e.g. ["exclamation"]
    pub pronunciation: Option<String>,
    pub entries: Vec<DefinitionEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_examples: Vec<String>,
}

impl WordRecord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            parts_of_speech: Vec::new(),
            pronunciation: None,
            entries: Vec::new(),
            other_examples: Vec::new(),
        }
    }

    /// Record built from a definition typed in by the user
    pub fn manual(word: impl Into<String>, definition: impl Into<String>) -> Self {
        let mut record = Self::new(word);
        record.entries.push(DefinitionEntry {
            definition: Some(definition.into()),
            translation: None,
            examples: Vec::new(),
        });
        record
    }

    /// A record without entries counts as "not found"
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Definition of the first sense, falling back to its translation
    pub fn primary_definition(&self) -> Option<&str> {
        let first = self.entries.first()?;
        first
            .definition
            .as_deref()
            .or(first.translation.as_deref())
    }
}

/// One sense of a word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionEntry {
    pub definition: Option<String>,
    pub translation: Option<String>,
    pub examples: Vec<String>,
}

impl DefinitionEntry {
    pub fn has_content(&self) -> bool {
        self.definition.as_deref().is_some_and(|d| !d.is_empty())
            || self.translation.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MnemonicResult {
    pub mnemonic: String,
    pub synonym: String,
    pub antonym: String,
}

/// Rendered flashcard, ready for the note-creation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub deck: String,
    pub front: String,
    pub back: String,
}

/// Note payload in the shape AnkiConnect's `addNote` expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRequest {
    pub deck_name: String,
    pub model_name: String,
    pub fields: NoteFields,
    pub options: NoteOptions,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFields {
    #[serde(rename = "Front")]
    pub front: String,
    #[serde(rename = "Back")]
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteOptions {
    pub allow_duplicate: bool,
}

impl NoteRequest {
    pub fn from_card(card: CardContent, model: &str, allow_duplicate: bool, tags: &[String]) -> Self {
        Self {
            deck_name: card.deck,
            model_name: model.to_string(),
            fields: NoteFields {
                front: card.front,
                back: card.back,
            },
            options: NoteOptions { allow_duplicate },
            tags: tags.to_vec(),
        }
    }
}
