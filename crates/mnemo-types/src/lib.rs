pub mod types;

pub use types::{CardContent, DefinitionEntry, MnemonicResult, NoteFields, NoteOptions, NoteRequest, WordRecord};
