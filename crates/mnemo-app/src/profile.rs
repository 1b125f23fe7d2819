use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use mnemo_config::Config;
use serde::{Deserialize, Serialize};

/// Per-user config folder, e.g. ~/.config/mnemo
pub fn mnemo_root() -> anyhow::Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine the user config directory")?;
    Ok(dir.join("mnemo"))
}

fn profiles_dir(root: &Path) -> PathBuf {
    root.join("profiles")
}

pub fn profile_path(root: &Path, name: &str) -> PathBuf {
    profiles_dir(root).join(format!("{name}.json"))
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Initialize user config folders and main profile if missing
pub fn init_user_config(root: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(profiles_dir(root))?;

    let main_profile = profile_path(root, "main");

    if !main_profile.exists() {
        save_profile(root, "main", &Config::default())?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(main_profile)
}

/// Profile for this run; writes the main profile on first run
pub fn open_profile(root: &Path, name: &str) -> anyhow::Result<Config> {
    init_user_config(root)?;
    load_user_profile(root, name)
}

/// Load a user profile by name, defaulting to main if name not found
pub fn load_user_profile(root: &Path, name: &str) -> anyhow::Result<Config> {
    let profile_file = profile_path(root, name);

    if profile_file.exists() {
        return read_profile(&profile_file);
    }

    tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
    let main_file = profile_path(root, "main");
    if main_file.exists() {
        read_profile(&main_file)
    } else {
        // First-run fallback
        Ok(Config::default())
    }
}

pub fn save_profile(root: &Path, name: &str, config: &Config) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(profiles_dir(root))?;

    let profile = Profile {
        name: name.into(),
        value: config.clone(),
    };
    let file = profile_path(root, name);
    fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
    Ok(file)
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(profile.value)
}
