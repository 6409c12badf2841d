use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.ingredient-checkr/config.toml`.
///
/// This is the immutable reference data the classifier works against; it is
/// loaded once at startup and passed by reference through the pipeline.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// The reference denylist.
    #[serde(default)]
    pub reference: ReferenceConfig,
    /// Per-ingredient display descriptions keyed by lowercased name.
    #[serde(default = "default_descriptions")]
    pub descriptions: HashMap<String, String>,
}

/// Known-harmful ingredient name fragments.
#[derive(Debug, Deserialize)]
pub struct ReferenceConfig {
    /// Matched against candidates by case-insensitive substring containment
    /// in either direction.
    #[serde(default)]
    pub harmful: Vec<String>,
}

impl Default for ReferenceConfig {
    /// Built-in denylist used when no config file overrides it.
    fn default() -> Self {
        ReferenceConfig {
            harmful: vec![
                "Sodium Lauryl Sulfate".to_string(),
                "Sodium Laureth Sulfate".to_string(),
                "Dimethicone".to_string(),
                "Parabens".to_string(),
                "Formaldehyde".to_string(),
                "Phthalates".to_string(),
                "Isopropyl Alcohol".to_string(),
            ],
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            reference: ReferenceConfig::default(),
            descriptions: default_descriptions(),
        }
    }
}

/// Built-in description table for the default denylist entries.
fn default_descriptions() -> HashMap<String, String> {
    let mut descriptions = HashMap::new();
    descriptions.insert(
        "sodium lauryl sulfate".to_string(),
        "Can cause skin irritation, strips natural oils, and may damage hair \
         follicles. Commonly found in shampoos and cleansers."
            .to_string(),
    );
    descriptions.insert(
        "sodium laureth sulfate".to_string(),
        "Similar to SLS, can dry out skin and hair, potentially contaminated \
         with carcinogenic byproducts during manufacturing."
            .to_string(),
    );
    descriptions.insert(
        "dimethicone".to_string(),
        "Silicone-based polymer that can clog pores, prevent skin from \
         breathing, and cause buildup on hair and skin."
            .to_string(),
    );
    descriptions.insert(
        "parabens".to_string(),
        "Endocrine disruptors that can mimic estrogen. Linked to hormonal \
         imbalances and potential breast cancer risk."
            .to_string(),
    );
    descriptions.insert(
        "formaldehyde".to_string(),
        "Known carcinogen that can cause allergic reactions, respiratory \
         issues, and skin irritation."
            .to_string(),
    );
    descriptions.insert(
        "phthalates".to_string(),
        "Endocrine disruptors linked to reproductive issues, developmental \
         problems, and cancer."
            .to_string(),
    );
    descriptions.insert(
        "isopropyl alcohol".to_string(),
        "Drying agent that strips natural oils, causing skin dryness, \
         irritation, and premature aging."
            .to_string(),
    );
    descriptions
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.ingredient-checkr/config.toml`
/// 3. `~/.config/ingredient-checkr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let local_config = Path::new(".ingredient-checkr").join("config.toml");
    if local_config.exists() {
        let content = std::fs::read_to_string(&local_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("ingredient-checkr")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_denylist() {
        let config = Config::default();
        assert_eq!(config.reference.harmful.len(), 7);
        assert!(config
            .reference
            .harmful
            .iter()
            .any(|e| e == "Parabens"));
        // Every description key refers to a denylist entry
        for key in config.descriptions.keys() {
            assert!(config
                .reference
                .harmful
                .iter()
                .any(|e| e.to_lowercase() == *key));
        }
    }

    #[test]
    fn test_parse_full_config() {
        let content = r#"
[reference]
harmful = ["Lead", "Mercury"]

[descriptions]
lead = "Heavy metal with no safe exposure level."
"#;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.reference.harmful, vec!["Lead", "Mercury"]);
        assert_eq!(config.descriptions.len(), 1);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.reference.harmful.len(), 7);
        assert_eq!(config.descriptions.len(), 7);
    }

    #[test]
    fn test_load_config_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[reference]\nharmful = [\"Triclosan\"]").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.reference.harmful, vec!["Triclosan"]);
    }
}
