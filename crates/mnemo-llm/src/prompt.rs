pub const SYSTEM_PROMPT: &str = "You are an expert in creating memorable mnemonics and providing vocabulary insights.
You understand that mnemonics are most effective when provided in the user's native language,
while synonyms and antonyms should be in the target learning language.";

/// Prompt asking for a mnemonic plus one synonym and one antonym in three labeled lines
pub fn user_prompt(word: &str, definition: &str, native_language: &str, target_language: &str) -> String {
    format!(
        "Create a memorable mnemonic for the word '{word}'.
Definition: {definition}

Requirements:
1. Create the mnemonic in {native_language} (user's native language)
2. Make it easy to remember for {native_language} speakers
3. Use culturally relevant word associations or stories that make sense to {native_language} speakers
4. Keep it concise (max 2 sentences)
5. Use simple language appropriate for a 5-year-old
6. Connect clearly to the word's meaning
7. Provide one synonym and one antonym in {target_language}

Output format:
- Mnemonic: (in {native_language})
- Synonym: (in {target_language})
- Antonym: (in {target_language})"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_word_definition_and_languages() {
        let prompt = user_prompt("ubiquitous", "present everywhere", "English", "English");

        assert!(prompt.contains("the word 'ubiquitous'"));
        assert!(prompt.contains("Definition: present everywhere"));
        assert!(prompt.contains("Create the mnemonic in English"));
        assert!(prompt.contains("one antonym in English"));
    }

    #[test]
    fn asks_for_three_labeled_lines() {
        let prompt = user_prompt("chat", "cat", "English", "French");

        assert!(prompt.contains("- Mnemonic: (in English)"));
        assert!(prompt.contains("- Synonym: (in French)"));
        assert!(prompt.contains("- Antonym: (in French)"));
    }
}
