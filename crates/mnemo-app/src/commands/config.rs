use std::path::Path;

use anyhow::Result;
use mnemo_config::Config;

use crate::profile;

fn mask(key: &mut String) {
    if !key.is_empty() {
        *key = "********".to_string();
    }
}

/// Print a profile with API keys hidden, creating it first when `init` is set.
///
/// `config` is the profile as stored on disk, without environment overrides.
pub fn handle_config(config: &Config, root: &Path, name: &str, init: bool, path_only: bool) -> Result<()> {
    let path = profile::profile_path(root, name);

    if init {
        profile::init_user_config(root)?;
        if !path.exists() {
            profile::save_profile(root, name, config)?;
            tracing::info!("Created profile {name}");
        }
    }

    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    if !path.exists() {
        tracing::warn!("{} does not exist yet, showing defaults (use --init to create it)", path.display());
    }

    let mut shown = config.clone();
    mask(&mut shown.llm.groq.api_key);
    mask(&mut shown.llm.openai.api_key);
    println!("{}", serde_json::to_string_pretty(&shown)?);
    Ok(())
}
