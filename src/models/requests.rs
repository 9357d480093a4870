use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Profile;

/// Request to score one candidate against a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(nested)]
    pub user: Profile,
    #[validate(nested)]
    pub candidate: Profile,
}

/// Request to rank a list of candidates for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    #[validate(nested)]
    pub user: Profile,
    #[serde(default)]
    #[validate(nested)]
    pub candidates: Vec<Profile>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0))]
    pub min_score: Option<f64>,
}
