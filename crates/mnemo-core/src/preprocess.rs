use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default word cleanup before lookup
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        // Collapse newlines and runs of whitespace into single spaces
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// URL path segment for a word: lower-cased, spaces become hyphens
pub fn slugify(word: &str) -> String {
    DefaultPreprocessor
        .process(word)
        .to_lowercase()
        .replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_trims_and_collapses_whitespace() {
        assert_eq!(DefaultPreprocessor.process("  look \n  up  "), "look up");
        assert_eq!(DefaultPreprocessor.process("   "), "");
    }

    #[test]
    fn process_applies_nfkc() {
        // fullwidth latin letters fold to ascii
        assert_eq!(DefaultPreprocessor.process("ｗｏｒｄ"), "word");
    }

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Bonjour"), "bonjour");
        assert_eq!(slugify("Give Up"), "give-up");
        assert_eq!(slugify(" take  off "), "take-off");
    }
}
