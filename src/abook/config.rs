use crate::error::{AbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for abook, stored as config.json in the platform config dir
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbookConfig {
    /// Overrides the snapshot file location when set.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl AbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AbookError::Io)?;
        let config: AbookConfig =
            serde_json::from_str(&content).map_err(AbookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AbookError::Serialization)?;
        fs::write(config_path, content).map_err(AbookError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_override() {
        assert_eq!(AbookConfig::default().data_file, None);
    }

    #[test]
    fn load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = AbookConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, AbookConfig::default());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = AbookConfig {
            data_file: Some(PathBuf::from("/tmp/contacts.json")),
        };
        config.save(dir.path()).unwrap();

        let loaded = AbookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn serialization_roundtrip() {
        let config = AbookConfig {
            data_file: Some(PathBuf::from("book.json")),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AbookConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
