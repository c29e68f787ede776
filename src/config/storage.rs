//! Storage and reference-data configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where records live and how the workspace is initialised
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per collection
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Fill empty contact/deal collections with demo records on first run
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,

    /// Optional JSON price list replacing the built-in agency catalog
    pub catalog_path: Option<PathBuf>,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDataDir);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            seed_demo_data: default_seed(),
            catalog_path: None,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_seed() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert!(config.seed_demo_data);
        assert!(config.catalog_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_data_dir_rejected() {
        let config = StorageConfig {
            data_dir: PathBuf::new(),
            ..StorageConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyDataDir));
    }
}
