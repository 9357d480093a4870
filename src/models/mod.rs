// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeRange, Breakdown, CompatibilityScore, ImportanceWeights, Lifestyle, Location, Personality,
    Preferences, Profile, RankedCandidate,
};
pub use requests::{RankRequest, ScoreRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse, ScoreResponse};
