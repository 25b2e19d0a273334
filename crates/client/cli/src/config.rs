//! CLI configuration read from the process environment.
use std::path::PathBuf;

/// Data directory used when `ITEM_DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "crates/game/content/data";

/// Paths the CLI needs to build a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub save_file: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            save_file: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ITEM_DATA_DIR` - Directory holding `items.ron` and `rules.toml`
    ///   (default: `crates/game/content/data`)
    /// - `ITEM_SAVE_FILE` - JSON save file to inspect (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("ITEM_DATA_DIR").filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        config.save_file = lookup("ITEM_SAVE_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config_from(&[]), CliConfig::default());
    }

    #[test]
    fn reads_both_paths() {
        let config = config_from(&[("ITEM_DATA_DIR", "/srv/items"), ("ITEM_SAVE_FILE", "save.json")]);
        assert_eq!(config.data_dir, PathBuf::from("/srv/items"));
        assert_eq!(config.save_file, Some(PathBuf::from("save.json")));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = config_from(&[("ITEM_DATA_DIR", " "), ("ITEM_SAVE_FILE", "")]);
        assert_eq!(config, CliConfig::default());
    }
}
