//! Career Progression Engine for Craftd
//!
//! This crate provides the calculation core behind Craftd career dashboards:
//! fractional months worked per employment period, prorated compensation,
//! aggregate career summaries, and chronological career timelines.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
