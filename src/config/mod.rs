//! Configuration loading and management for the Career Progression Engine.
//!
//! This module provides functionality to load engine configuration from
//! YAML files: engine metadata and the seniority level ladder.
//!
//! # Example
//!
//! ```no_run
//! use career_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/craftd").unwrap();
//! println!("Loaded engine: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineMetadata, LevelTable, LevelsConfig, SeniorityLevel};
