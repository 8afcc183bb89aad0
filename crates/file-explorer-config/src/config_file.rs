use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".file-explorer.toml";

/// Find the config file to use
///
/// Searches in order:
/// 1. `.file-explorer.toml` in the current working directory
/// 2. `.file-explorer.toml` in the home directory
/// 3. `config.toml` in the platform config directory
pub fn find_config_file() -> Option<PathBuf> {
    let candidates = [
        Some(PathBuf::from(CONFIG_FILE)),
        get_home_config_path(),
        crate::paths::global_config_path().ok(),
    ];

    candidates.into_iter().flatten().find(|path| path.is_file())
}

/// Load config file content from the first location that has one
pub fn load_config_file() -> Option<String> {
    let path = find_config_file()?;
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(e) => {
            log::warn!("Failed to read config file {}: {}", path.display(), e);
            None
        }
    }
}

/// Get the path to the config file in the home directory
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
