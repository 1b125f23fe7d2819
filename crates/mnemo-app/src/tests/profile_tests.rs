use mnemo_config::Config;

use crate::profile::{init_user_config, load_user_profile, open_profile, profile_path, save_profile};

#[test]
fn test_init_creates_main_profile_once() {
    let dir = tempfile::tempdir().unwrap();

    let path = init_user_config(dir.path()).unwrap();
    assert!(path.exists());
    assert_eq!(path, profile_path(dir.path(), "main"));

    // edits survive a second init
    let mut config = Config::default();
    config.anki.deck = "Edited".to_string();
    save_profile(dir.path(), "main", &config).unwrap();
    init_user_config(dir.path()).unwrap();

    assert_eq!(load_user_profile(dir.path(), "main").unwrap().anki.deck, "Edited");
}

#[test]
fn test_missing_profile_falls_back_to_main() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.ui.dark_theme = true;
    save_profile(dir.path(), "main", &config).unwrap();

    let loaded = load_user_profile(dir.path(), "travel").unwrap();
    assert!(loaded.ui.dark_theme);
}

#[test]
fn test_first_run_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = load_user_profile(dir.path(), "main").unwrap();

    assert_eq!(loaded.anki.url, "http://localhost:8765");
    assert_eq!(loaded.llm.provider, "groq");
}

#[test]
fn test_named_profile_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.llm.provider = "openai".to_string();
    config.llm.openai.model = "gpt-4o".to_string();
    config.ui.native_language = "turkish".to_string();
    config.ui.target_language = "english".to_string();

    let file = save_profile(dir.path(), "work", &config).unwrap();
    let raw = std::fs::read_to_string(file).unwrap();
    assert!(raw.contains("\"name\": \"work\""));

    let loaded = load_user_profile(dir.path(), "work").unwrap();
    assert_eq!(loaded.llm.provider, "openai");
    assert_eq!(loaded.llm.openai.model, "gpt-4o");
    assert_eq!(loaded.ui.native_language, "turkish");
}

#[test]
fn test_corrupt_profile_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    init_user_config(dir.path()).unwrap();
    std::fs::write(profile_path(dir.path(), "main"), "{ not json").unwrap();

    let err = load_user_profile(dir.path(), "main").unwrap_err();
    assert!(err.to_string().starts_with("Invalid profile"));
}

#[test]
fn test_first_run_writes_main_profile() {
    let dir = tempfile::tempdir().unwrap();
    let main = dir.path().join("profiles").join("main.json");
    assert!(!main.exists());

    let config = open_profile(dir.path(), "main").unwrap();
    assert!(main.exists());
    assert_eq!(config.anki.deck, "Default");

    // a named profile that is missing still leaves main on disk
    let other = tempfile::tempdir().unwrap();
    open_profile(other.path(), "travel").unwrap();
    assert!(profile_path(other.path(), "main").exists());
    assert!(!profile_path(other.path(), "travel").exists());
}
