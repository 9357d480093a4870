use crate::models::{CompatibilityScore, ImportanceWeights, Profile, RankedCandidate};
use crate::core::scoring::calculate_compatibility;

/// Main matching orchestrator - scores pairs and ranks candidate lists
///
/// Holds the importance weights applied when the ranking user states none.
#[derive(Debug, Clone)]
pub struct Matcher {
    default_weights: ImportanceWeights,
}

impl Matcher {
    pub fn new(default_weights: ImportanceWeights) -> Self {
        Self { default_weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            default_weights: ImportanceWeights::default(),
        }
    }

    pub fn default_weights(&self) -> &ImportanceWeights {
        &self.default_weights
    }

    /// Compare `user1` against `user2`
    ///
    /// `user1` supplies the importance weights and `user2` the pairwise
    /// distance, so the result is not symmetric in general.
    pub fn calculate_compatibility(&self, user1: &Profile, user2: &Profile) -> CompatibilityScore {
        calculate_compatibility(user1, user2, &self.default_weights)
    }

    /// Rank candidates for a user by descending overall score
    ///
    /// # Arguments
    /// * `current_user` - The profile the ranking is computed for
    /// * `candidates` - Profiles to score; duplicates are kept
    ///
    /// # Returns
    /// Every candidate with its score attached. Equal scores keep their input
    /// order.
    pub fn rank_users(&self, current_user: &Profile, candidates: Vec<Profile>) -> Vec<RankedCandidate> {
        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .map(|profile| {
                let compatibility = self.calculate_compatibility(current_user, &profile);
                RankedCandidate { profile, compatibility }
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| {
            b.compatibility
                .overall
                .partial_cmp(&a.compatibility.overall)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            "Ranked {} candidates for user {}",
            ranked.len(),
            current_user.id
        );

        ranked
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
