use std::fmt;

use crate::preprocess::slugify;

/// A language the dictionary can route to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Identifier used in dictionary paths, e.g. "french"
    pub key: &'static str,
    /// Name embedded in prompts, e.g. "French"
    pub display_name: &'static str,
    /// Languages a speaker of this one can study
    pub can_learn: &'static [&'static str],
    /// Dictionary path template; `{target}` is replaced by the studied language
    dict_format: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language {
        key: "turkish",
        display_name: "Turkish",
        can_learn: &["english"],
        // semi-bilingual, fixed format
        dict_format: "english-turkish",
    },
    Language {
        key: "english",
        display_name: "English",
        can_learn: &["french", "spanish", "german", "italian", "portuguese"],
        dict_format: "{target}-english",
    },
    Language {
        key: "french",
        display_name: "French",
        can_learn: &["english"],
        dict_format: "{target}-french",
    },
    Language {
        key: "spanish",
        display_name: "Spanish",
        can_learn: &["english"],
        dict_format: "{target}-spanish",
    },
    Language {
        key: "german",
        display_name: "German",
        can_learn: &["english"],
        dict_format: "{target}-german",
    },
    Language {
        key: "italian",
        display_name: "Italian",
        can_learn: &["english"],
        dict_format: "{target}-italian",
    },
    Language {
        key: "portuguese",
        display_name: "Portuguese",
        can_learn: &["english"],
        dict_format: "{target}-portuguese",
    },
];

impl Language {
    /// Find a language by key or display name, case-insensitive
    pub fn find(name: &str) -> Option<&'static Language> {
        let name = name.trim();
        LANGUAGES
            .iter()
            .find(|l| l.key.eq_ignore_ascii_case(name) || l.display_name.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Unsupported language: {0}")]
    UnknownLanguage(String),

    #[error("{native} speakers cannot study {target} with this dictionary")]
    UnsupportedPair { native: String, target: String },
}

/// Native/target pair, validated against the routing table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePair {
    pub native: &'static Language,
    pub target: &'static Language,
}

impl LanguagePair {
    pub fn new(native: &str, target: &str) -> Result<Self, LanguageError> {
        let native_lang =
            Language::find(native).ok_or_else(|| LanguageError::UnknownLanguage(native.to_string()))?;
        let target_lang =
            Language::find(target).ok_or_else(|| LanguageError::UnknownLanguage(target.to_string()))?;

        if !native_lang.can_learn.contains(&target_lang.key) {
            return Err(LanguageError::UnsupportedPair {
                native: native_lang.display_name.to_string(),
                target: target_lang.display_name.to_string(),
            });
        }

        Ok(Self {
            native: native_lang,
            target: target_lang,
        })
    }

    /// Dictionary section for this pair, e.g. "english-french"
    pub fn dict_format(&self) -> String {
        self.native.dict_format.replace("{target}", self.target.key)
    }

    /// Path fragment appended to the dictionary root for `word`
    pub fn lookup_path(&self, word: &str) -> String {
        format!("{}/{}", self.dict_format(), slugify(word))
    }
}
