//! Core data models for the Career Progression Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod career_event;
mod employment;
mod summary;

pub use career_event::{CareerEvent, CareerEventKind};
pub use employment::EmploymentPeriod;
pub use summary::{
    CareerProgressionSummary, LevelChange, ProgressionResult, SalaryIncrease, SalaryYearPoint,
};
