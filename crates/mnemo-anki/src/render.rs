use mnemo_types::{CardContent, WordRecord};

/// Card colors for one display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub card_bg: &'static str,
    pub heading: &'static str,
    pub index_badge: &'static str,
    pub pronunciation: &'static str,
    pub structure: &'static str,
    pub mnemonic_bg: &'static str,
    pub mnemonic_border: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub example_border: &'static str,
    pub translation: &'static str,
    pub box_border: &'static str,
    pub synonym_bg: &'static str,
    pub synonym_border: &'static str,
    pub antonym_bg: &'static str,
    pub antonym_border: &'static str,
}

pub const LIGHT: Palette = Palette {
    card_bg: "#FFFFFF",
    heading: "#2C3E50",
    index_badge: "#2C3E50",
    pronunciation: "#7F8C8D",
    structure: "#95A5A6",
    mnemonic_bg: "#F0F9FF",
    mnemonic_border: "#3498DB",
    text_primary: "#2C3E50",
    text_secondary: "#7F8C8D",
    example_border: "#E5E7EB",
    translation: "#3498DB",
    box_border: "#E5E7EB",
    synonym_bg: "#E6F4EA",
    synonym_border: "#4CAF50",
    antonym_bg: "#FFEBEE",
    antonym_border: "#BF616A",
};

pub const DARK: Palette = Palette {
    card_bg: "#2c2c2c",
    heading: "#D8DEE9",
    index_badge: "#8F9CB5",
    pronunciation: "#808080",
    structure: "#81A1C1",
    mnemonic_bg: "#363636",
    mnemonic_border: "#81A1C1",
    text_primary: "#D8DEE9",
    text_secondary: "#808080",
    example_border: "#4C566A",
    translation: "#2d82c6",
    box_border: "#363636",
    synonym_bg: "#363636",
    synonym_border: "#81A1C1",
    antonym_bg: "#363636",
    antonym_border: "#BF616A",
};

impl Palette {
    pub fn for_theme(dark_theme: bool) -> &'static Palette {
        if dark_theme { &DARK } else { &LIGHT }
    }
}

/// Build the front and back HTML of a vocabulary card.
///
/// Text is interpolated as-is, without HTML escaping.
pub fn render(
    record: &WordRecord,
    deck_name: &str,
    mnemonic: &str,
    synonym: &str,
    antonym: &str,
    dark_theme: bool,
) -> CardContent {
    let palette = Palette::for_theme(dark_theme);

    CardContent {
        deck: deck_name.to_string(),
        front: render_front(record, palette),
        back: render_back(record, mnemonic, synonym, antonym, palette),
    }
}

fn render_front(record: &WordRecord, p: &Palette) -> String {
    format!(
        r#"<div style="text-align: center; padding: 20px; background-color: {card_bg};">
        <h1 style="font-size: 2.5em; color: {heading}; margin-bottom: 10px;">{word}</h1>
        <div style="color: {pronunciation}; font-family: monospace; margin-bottom: 10px;">/{ipa}/</div>
        <div style="color: {structure}; font-style: italic;">{pos}</div>
    </div>"#,
        card_bg = p.card_bg,
        heading = p.heading,
        word = record.word,
        pronunciation = p.pronunciation,
        ipa = record.pronunciation.as_deref().unwrap_or_default(),
        structure = p.structure,
        pos = record.parts_of_speech.join(", "),
    )
}

fn render_back(record: &WordRecord, mnemonic: &str, synonym: &str, antonym: &str, p: &Palette) -> String {
    let mut back = format!(
        r#"<div style="max-width: 600px; margin: 0 auto; padding: 20px; background-color: {card_bg};">
        <!-- Mnemonic Section -->
        <div style="background-color: {mnemonic_bg}; border-left: 4px solid {mnemonic_border}; padding: 15px; margin-bottom: 20px; border-radius: 4px;">
            <div style="color: {mnemonic_border}; font-weight: bold; margin-bottom: 5px;">💡 Memory Hook</div>
            <div style="font-style: italic; color: {text_primary};">{mnemonic}</div>
        </div>

        <!-- Synonym & Antonym Section -->
        <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 15px; margin-bottom: 20px;">
            <div style="background-color: {synonym_bg}; border: 1px solid {synonym_border}; padding: 10px; border-radius: 4px;">
                <div style="display: flex; flex-direction: column; justify-content: center; height: 100%;">
                    <div style="color: {synonym_border}; font-weight: bold; margin-bottom: 5px;">🔗 Synonym</div>
                    <div style="color: {text_primary};">{synonym}</div>
                </div>
            </div>
            <div style="background-color: {antonym_bg}; border: 1px solid {antonym_border}; padding: 10px; border-radius: 4px;">
                <div style="display: flex; flex-direction: column; justify-content: center; height: 100%;">
                    <div style="color: {antonym_border}; font-weight: bold; margin-bottom: 5px;">🧭 Antonym</div>
                    <div style="color: {text_primary};">{antonym}</div>
                </div>
            </div>
        </div>
        <!-- Definitions Section -->
        <div style="display: grid; gap: 20px;">"#,
        card_bg = p.card_bg,
        mnemonic_bg = p.mnemonic_bg,
        mnemonic_border = p.mnemonic_border,
        text_primary = p.text_primary,
        synonym_bg = p.synonym_bg,
        synonym_border = p.synonym_border,
        antonym_bg = p.antonym_bg,
        antonym_border = p.antonym_border,
    );

    for (idx, entry) in record.entries.iter().enumerate() {
        back.push_str(&format!(
            r#"
            <div style="border: 1px solid {box_border}; padding: 15px; border-radius: 8px;">
                <div style="display: flex; gap: 10px; align-items: baseline; margin-bottom: 10px;">
                    <span style="background-color: {badge}; color: white; padding: 2px 8px; border-radius: 12px; font-size: 0.8em;">#{number}</span>
                    <div style="font-weight: 500; color: {heading};">{definition}</div>
                </div>

                <div style="color: {translation_color}; margin-bottom: 10px; padding-left: 25px;">
                    {translation}
                </div>"#,
            box_border = p.box_border,
            badge = p.index_badge,
            number = idx + 1,
            heading = p.heading,
            definition = entry.definition.as_deref().unwrap_or_default(),
            translation_color = p.translation,
            translation = entry.translation.as_deref().unwrap_or_default(),
        ));

        if !entry.examples.is_empty() {
            back.push_str(&format!(
                r#"<div style="margin-top: 10px; padding-left: 25px;">
                <div style="color: {}; font-size: 0.9em; margin-bottom: 5px;">Examples:</div>
                <ul style="list-style-type: none; padding: 0; margin: 0;">"#,
                p.text_secondary
            ));
            for example in &entry.examples {
                back.push_str(&format!(
                    r#"<li style="margin-bottom: 5px; color: {}; padding-left: 15px; border-left: 2px solid {};">
                    {}
                </li>"#,
                    p.text_primary, p.example_border, example
                ));
            }
            back.push_str("</ul></div>");
        }

        back.push_str("</div>");
    }

    back.push_str("</div></div>");
    back
}
