use crate::error::{AddressBookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORAGE_FILE: &str = "addressbook.json";

/// Configuration for addrbook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Storage file name, relative to the data directory unless absolute
    #[serde(default = "default_storage_file")]
    pub storage_file: String,

    /// Render private details in `list` and `find` output
    #[serde(default)]
    pub show_private_in_listings: bool,
}

fn default_storage_file() -> String {
    DEFAULT_STORAGE_FILE.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_file: default_storage_file(),
            show_private_in_listings: false,
        }
    }
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddressBookError::Io)?;
        let config: AppConfig =
            serde_json::from_str(&content).map_err(AddressBookError::Serialization)?;
        Ok(config)
    }

    /// Where the storage file lives for the given data directory.
    pub fn storage_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        let file = Path::new(&self.storage_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.as_ref().join(file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage_file, "addressbook.json");
        assert!(!config.show_private_in_listings);
    }

    #[test]
    fn test_load_missing_config_returns_default() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"show_private_in_listings": true}"#,
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.storage_file, "addressbook.json");
        assert!(config.show_private_in_listings);
    }

    #[test]
    fn test_storage_path_resolution() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::default();
        assert_eq!(
            config.storage_path(dir.path()),
            dir.path().join("addressbook.json")
        );

        let absolute = dir.path().join("elsewhere").join("book.json");
        let config = AppConfig {
            storage_file: absolute.display().to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.storage_path("/unused"), absolute);
    }
}
