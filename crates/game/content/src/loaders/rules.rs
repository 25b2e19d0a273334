//! Engine rules loader.

use std::path::Path;

use item_core::ItemRules;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`ItemRules`] from TOML files.
///
/// Every key is optional; missing keys keep their default value.
pub struct RulesLoader;

impl RulesLoader {
    /// Load rules from a TOML file.
    pub fn load(path: &Path) -> LoadResult<ItemRules> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse rules from TOML text.
    pub fn parse(content: &str) -> LoadResult<ItemRules> {
        let rules: ItemRules = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;

        if rules.trigger_prefix.is_empty() {
            anyhow::bail!("trigger_prefix must not be empty");
        }
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(RulesLoader::parse("").unwrap(), ItemRules::default());
    }

    #[test]
    fn partial_file_overrides_named_keys() {
        let rules = RulesLoader::parse(
            r##"
            storage_variable = "camp_chest"
            flavour_colour = "#a0a0a0"
            "##,
        )
        .unwrap();

        assert_eq!(rules.storage_variable, "camp_chest");
        assert_eq!(rules.flavour_colour, "#a0a0a0");
        assert_eq!(rules.ground_variable, ItemRules::DEFAULT_GROUND_VARIABLE);
    }

    #[test]
    fn empty_trigger_prefix_is_rejected() {
        let err = RulesLoader::parse(r#"trigger_prefix = """#).unwrap_err();
        assert!(err.to_string().contains("trigger_prefix"));
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = RulesLoader::parse("storage_variable = [").unwrap_err();
        assert!(err.to_string().contains("Failed to parse rules TOML"));
    }
}
