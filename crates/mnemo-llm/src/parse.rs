use mnemo_types::MnemonicResult;

const MNEMONIC_LABEL: &str = "- Mnemonic:";
const SYNONYM_LABEL: &str = "- Synonym:";
const ANTONYM_LABEL: &str = "- Antonym:";

/// Pull the three labeled lines out of a free-text reply.
/// Labels that never appear leave their field empty.
pub fn parse_reply(reply: &str) -> MnemonicResult {
    let mut result = MnemonicResult::default();

    for line in reply.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(MNEMONIC_LABEL) {
            result.mnemonic = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(SYNONYM_LABEL) {
            result.synonym = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(ANTONYM_LABEL) {
            result.antonym = rest.trim().to_string();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ubiquitous_reply() {
        let reply = "- Mnemonic: U-biquitous means U see it everywhere you go.\n- Synonym: omnipresent\n- Antonym: rare";
        let result = parse_reply(reply);

        assert_eq!(result.mnemonic, "U-biquitous means U see it everywhere you go.");
        assert_eq!(result.synonym, "omnipresent");
        assert_eq!(result.antonym, "rare");
    }

    #[test]
    fn order_and_surrounding_chatter_do_not_matter() {
        let reply = "Sure! Here you go:\n\n  - Antonym:  scarce \n- Mnemonic: Think of a ubiquitous pigeon.\n- Synonym: pervasive\nHope this helps.";
        let result = parse_reply(reply);

        assert_eq!(result.mnemonic, "Think of a ubiquitous pigeon.");
        assert_eq!(result.synonym, "pervasive");
        assert_eq!(result.antonym, "scarce");
    }

    #[test]
    fn missing_label_leaves_field_empty() {
        let result = parse_reply("- Mnemonic: a hook\r\n- Synonym: alike\r\n");

        assert_eq!(result.mnemonic, "a hook");
        assert_eq!(result.synonym, "alike");
        assert_eq!(result.antonym, "");
    }

    #[test]
    fn unlabeled_reply_is_all_empty() {
        assert_eq!(parse_reply("I cannot help with that."), MnemonicResult::default());
    }

    #[test]
    fn keeps_colons_after_the_label() {
        let result = parse_reply("- Mnemonic: Remember: it is everywhere");
        assert_eq!(result.mnemonic, "Remember: it is everywhere");
    }
}
