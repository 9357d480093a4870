use crate::models::Profile;

/// Max distance assumed for a side that states no preference, in km
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 100.0;

/// Check that each profile's age sits inside the other's preferred range
///
/// Either side can veto; a side with no stated range accepts any age.
#[inline]
pub fn within_age_preferences(user1: &Profile, user2: &Profile) -> bool {
    let user1_fits = user2
        .age_range()
        .map_or(true, |range| range.contains(user1.age));
    let user2_fits = user1
        .age_range()
        .map_or(true, |range| range.contains(user2.age));

    user1_fits && user2_fits
}

/// Tighter of the two sides' max distance preferences
#[inline]
pub fn effective_max_distance(user1: &Profile, user2: &Profile) -> f64 {
    let max1 = user1.max_distance().unwrap_or(DEFAULT_MAX_DISTANCE_KM);
    let max2 = user2.max_distance().unwrap_or(DEFAULT_MAX_DISTANCE_KM);
    max1.min(max2)
}

/// Pairwise distance, always read from the second profile
#[inline]
pub fn pairwise_distance(user2: &Profile) -> f64 {
    user2.distance.unwrap_or(0.0)
}

/// Check that the pairwise distance is inside both sides' limits
#[inline]
pub fn within_distance_preferences(user1: &Profile, user2: &Profile) -> bool {
    pairwise_distance(user2) <= effective_max_distance(user1, user2)
}
