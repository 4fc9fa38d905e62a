//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineMetadata, LevelTable, LevelsConfig};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides access to the engine metadata and the validated seniority
/// level ladder.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/craftd/
/// ├── engine.yaml   # Engine metadata
/// └── levels.yaml   # Seniority level ladder
/// ```
///
/// # Example
///
/// ```no_run
/// use career_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/craftd").unwrap();
/// for level in loader.levels().levels() {
///     println!("{} from {} years", level.name, level.min_years);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: EngineMetadata,
    levels: LevelTable,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either required file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML (`ConfigParseError`)
    /// - The level ladder fails validation (`InvalidLevelConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let levels_config = Self::load_yaml::<LevelsConfig>(&path.join("levels.yaml"))?;
        let levels = LevelTable::new(levels_config.levels)?;

        Ok(Self { metadata, levels })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the validated seniority ladder.
    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_repository_config() {
        let loader = ConfigLoader::load("./config/craftd").unwrap();

        assert!(!loader.metadata().name.is_empty());
        assert_eq!(loader.levels().levels().len(), 4);
        assert_eq!(loader.levels().base_level().code, "junior");
    }

    #[test]
    fn test_missing_directory_returns_config_not_found() {
        let result = ConfigLoader::load("./config/does_not_exist");

        match result.unwrap_err() {
            EngineError::ConfigNotFound { path } => {
                assert!(path.contains("engine.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }
}
