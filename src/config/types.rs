//! Configuration types for the Career Progression Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the engine deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineMetadata {
    /// The human-readable name of the engine.
    pub name: String,
    /// The version or effective date of the configuration.
    pub version: String,
}

/// One rung of the seniority ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeniorityLevel {
    /// Stable identifier for the level (e.g., "mid_level").
    pub code: String,
    /// The display name of the level (e.g., "Mid-level").
    pub name: String,
    /// The minimum total years of experience for this level.
    pub min_years: Decimal,
}

/// Levels configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelsConfig {
    /// The seniority ladder, ascending by `min_years`.
    pub levels: Vec<SeniorityLevel>,
}

/// The validated seniority ladder.
///
/// Construction enforces that the ladder is non-empty and strictly
/// ascending in `min_years`, so lookups can rely on ordering.
#[derive(Debug, Clone)]
pub struct LevelTable {
    levels: Vec<SeniorityLevel>,
}

impl LevelTable {
    /// Creates a validated level table.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidLevelConfig`] when the ladder is empty
    /// or any level fails to increase `min_years` over its predecessor.
    pub fn new(levels: Vec<SeniorityLevel>) -> EngineResult<Self> {
        if levels.is_empty() {
            return Err(EngineError::InvalidLevelConfig {
                message: "level table is empty".to_string(),
            });
        }
        for pair in levels.windows(2) {
            if pair[1].min_years <= pair[0].min_years {
                return Err(EngineError::InvalidLevelConfig {
                    message: format!(
                        "level '{}' does not increase min_years over '{}'",
                        pair[1].code, pair[0].code
                    ),
                });
            }
        }
        Ok(Self { levels })
    }

    /// Returns the levels, ascending by `min_years`.
    pub fn levels(&self) -> &[SeniorityLevel] {
        &self.levels
    }

    /// Returns the lowest level of the ladder.
    pub fn base_level(&self) -> &SeniorityLevel {
        // Non-empty by construction.
        &self.levels[0]
    }
}
