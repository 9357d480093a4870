//! Tribes Match - Compatibility scoring service for the Tribes social app
//!
//! This library provides the compatibility scorer used by Tribes discovery.
//! It compares two profiles across weighted dimensions (hobbies, passions,
//! languages, personality, lifestyle, diet, age and distance) and ranks
//! candidate lists by the resulting score.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{Matcher, calculate_compatibility, distance::haversine_distance};
pub use models::{Profile, Preferences, ImportanceWeights, CompatibilityScore, Breakdown, RankedCandidate};
