//! XDG Base Directory paths for aetheria.
//!
//! The CLI uses XDG paths for cross-platform consistency rather than
//! platform-native paths. This matches tools like gh, docker, kubectl.

use std::path::PathBuf;

/// Get the aetheria config directory.
///
/// Returns `$XDG_CONFIG_HOME/aetheria` if set, otherwise `~/.config/aetheria`.
/// This is where `config.toml` lives.
///
/// # Examples
///
/// ```
/// use aetheria_paths::config_dir;
///
/// let config = config_dir();
/// let config_file = config.join("config.toml");
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("aetheria")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config/aetheria")
    } else {
        PathBuf::from(".config/aetheria")
    }
}

/// Get the aetheria data directory.
///
/// Returns `$XDG_DATA_HOME/aetheria` if set, otherwise
/// `~/.local/share/aetheria`. This is where the content store keeps its
/// JSON collections (realms, quests, submissions, crystals, profile).
///
/// # Examples
///
/// ```
/// use aetheria_paths::data_dir;
///
/// let data = data_dir();
/// let quests = data.join("quests.json");
/// ```
pub fn data_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg_data).join("aetheria")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".local/share/aetheria")
    } else {
        PathBuf::from(".local/share/aetheria")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_aetheria() {
        let path = config_dir();
        assert!(path.ends_with("aetheria"));
    }

    #[test]
    fn test_data_dir_ends_with_aetheria() {
        let path = data_dir();
        assert!(path.ends_with("aetheria"));
    }
}
