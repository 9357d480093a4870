// Core algorithm exports
pub mod distance;
pub mod gates;
pub mod matcher;
pub mod reasons;
pub mod scoring;
pub mod similarity;

pub use distance::{haversine_distance, location_distance, resolve_distance};
pub use gates::{effective_max_distance, within_age_preferences, within_distance_preferences};
pub use matcher::Matcher;
pub use reasons::generate_reasons;
pub use scoring::{calculate_breakdown, calculate_compatibility, weighted_overall};
pub use similarity::{jaccard_similarity, lifestyle_similarity, personality_similarity};
