use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub browse: BrowseConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Region used for availability checks when browsing.
    #[serde(default = "default_region")]
    pub region: String,

    /// Name of the profile to select at startup. Falls back to the first
    /// profile when unset or unknown.
    #[serde(default)]
    pub default_profile: Option<String>,
}

fn default_region() -> String {
    "US".to_string()
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            default_profile: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.browse.region.trim().is_empty() {
            return Err(anyhow::anyhow!("browse.region must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.browse.region, "US");
        assert!(config.browse.default_profile.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            browse: BrowseConfig {
                region: "FR".to_string(),
                default_profile: Some("Kids Profile".to_string()),
            },
        };

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.browse.region, "FR");
        assert_eq!(
            loaded.browse.default_profile.as_deref(),
            Some("Kids Profile")
        );
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.browse.region, "US");

        let config: Config = toml::from_str("[browse]\ndefault_profile = \"Adult Profile\"\n").unwrap();
        assert_eq!(config.browse.region, "US");
        assert_eq!(
            config.browse.default_profile.as_deref(),
            Some("Adult Profile")
        );
    }

    #[test]
    fn test_validate_rejects_blank_region() {
        let config = Config {
            browse: BrowseConfig {
                region: "  ".to_string(),
                default_profile: None,
            },
        };
        assert!(config.validate().is_err());
    }
}
