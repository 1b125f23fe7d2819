use std::sync::LazyLock;

use mnemo_types::{DefinitionEntry, WordRecord};
use scraper::{ElementRef, Html, Selector};

/// Cambridge page layout, matched by class name only
struct Selectors {
    entry_body: Selector,
    dictionary_entry: Selector,
    part_of_speech: Selector,
    ipa: Selector,
    def_block: Selector,
    definition: Selector,
    translation: Selector,
    example: Selector,
    extra_examples: Selector,
    extra_example: Selector,
}

fn css(selector: &str) -> Selector {
    Selector::parse(selector).expect("hardcoded selector must parse")
}

static SELECTORS: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    entry_body: css(".entry-body"),
    dictionary_entry: css(".dictionary-entry"),
    part_of_speech: css(".dpos"),
    ipa: css(".ipa.dipa"),
    def_block: css(".def-block"),
    definition: css(".def"),
    translation: css(".trans"),
    example: css(".eg"),
    extra_examples: css(".degs"),
    extra_example: css(".deg"),
});

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(text_of)
        .filter(|t| !t.is_empty())
}

/// Extract a word record from a dictionary page.
///
/// Returns `None` when the page has neither an `entry-body` nor a
/// `dictionary-entry` container, or when no definition block carries a
/// definition or translation.
pub fn parse_entry(word: &str, html: &str) -> Option<WordRecord> {
    let document = Html::parse_document(html);
    let s = &*SELECTORS;
    let root = document.root_element();

    let has_entry = root.select(&s.entry_body).next().is_some()
        || root.select(&s.dictionary_entry).next().is_some();
    if !has_entry {
        return None;
    }

    let mut record = WordRecord::new(word);

    if let Some(pos) = first_text(root, &s.part_of_speech) {
        record.parts_of_speech.push(pos);
    }
    record.pronunciation = first_text(root, &s.ipa);

    for block in root.select(&s.def_block) {
        let entry = DefinitionEntry {
            definition: first_text(block, &s.definition),
            translation: first_text(block, &s.translation),
            examples: block
                .select(&s.example)
                .map(text_of)
                .filter(|e| !e.is_empty())
                .collect(),
        };

        // Only add if there's content
        if entry.has_content() {
            record.entries.push(entry);
        }
    }

    record.other_examples = root
        .select(&s.extra_examples)
        .flat_map(|group| group.select(&s.extra_example))
        .map(text_of)
        .filter(|e| !e.is_empty())
        .take(1)
        .collect();

    if record.is_empty() {
        return None;
    }

    Some(record)
}
