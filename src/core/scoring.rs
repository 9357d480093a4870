use crate::models::{Breakdown, CompatibilityScore, ImportanceWeights, Profile};
use crate::core::{
    gates::{effective_max_distance, pairwise_distance, within_age_preferences},
    reasons::generate_reasons,
    similarity::{dietary_similarity, jaccard_similarity, lifestyle_similarity, personality_similarity},
};

/// Fixed weight of the age dimension, added on top of the importance weights
pub const AGE_WEIGHT: f64 = 0.1;

/// Fixed weight of the distance dimension, added on top of the importance weights
pub const DISTANCE_WEIGHT: f64 = 0.05;

/// Age score when either side's preferred range excludes the other
pub const AGE_OUT_OF_RANGE_SCORE: f64 = 0.2;

/// Distance score when the pair is further apart than either side allows
pub const DISTANCE_OUT_OF_RANGE_SCORE: f64 = 0.1;

/// Compare two profiles and produce an overall score, breakdown and reasons
///
/// Importance weights come from `user1` only; `default_weights` applies when
/// `user1` states none. The pairwise distance is read from `user2`.
///
/// Scoring formula:
/// overall = min(1,
///     hobbies * w.hobbies + passions * w.passions + languages * w.languages
///     + personality * w.personality + lifestyle * w.lifestyle + dietary * w.dietary
///     + age * 0.1 + distance * 0.05
/// )
pub fn calculate_compatibility(
    user1: &Profile,
    user2: &Profile,
    default_weights: &ImportanceWeights,
) -> CompatibilityScore {
    let breakdown = calculate_breakdown(user1, user2);
    let weights = user1.importance_weights().unwrap_or(*default_weights);
    let overall = weighted_overall(&breakdown, &weights);
    let reasons = generate_reasons(&breakdown);

    CompatibilityScore {
        overall,
        breakdown,
        reasons,
    }
}

/// Score every dimension for a pair of profiles
pub fn calculate_breakdown(user1: &Profile, user2: &Profile) -> Breakdown {
    Breakdown {
        hobbies: jaccard_similarity(&user1.hobbies, &user2.hobbies),
        passions: jaccard_similarity(&user1.passions, &user2.passions),
        languages: jaccard_similarity(&user1.languages, &user2.languages),
        personality: personality_similarity(user1.personality.as_ref(), user2.personality.as_ref()),
        lifestyle: lifestyle_similarity(user1.lifestyle.as_ref(), user2.lifestyle.as_ref()),
        dietary: dietary_similarity(&user1.dietary_preference, &user2.dietary_preference),
        age: age_score(user1, user2),
        distance: distance_score(user1, user2),
    }
}

/// Weighted sum of a breakdown, capped at 1
#[inline]
pub fn weighted_overall(breakdown: &Breakdown, weights: &ImportanceWeights) -> f64 {
    let total = breakdown.hobbies * weights.hobbies
        + breakdown.passions * weights.passions
        + breakdown.languages * weights.languages
        + breakdown.personality * weights.personality
        + breakdown.lifestyle * weights.lifestyle
        + breakdown.dietary * weights.dietary
        + breakdown.age * AGE_WEIGHT
        + breakdown.distance * DISTANCE_WEIGHT;

    total.min(1.0)
}

/// Calculate age score (0-1)
/// Range preferences gate first, then closer ages score higher in tiers
#[inline]
pub fn age_score(user1: &Profile, user2: &Profile) -> f64 {
    if !within_age_preferences(user1, user2) {
        return AGE_OUT_OF_RANGE_SCORE;
    }

    match user1.age.abs_diff(user2.age) {
        0..=2 => 1.0,
        3..=5 => 0.8,
        6..=10 => 0.6,
        _ => 0.4,
    }
}

/// Calculate distance score (0-1)
/// The tighter max distance gates first, then nearer pairs score higher in tiers
#[inline]
pub fn distance_score(user1: &Profile, user2: &Profile) -> f64 {
    let distance = pairwise_distance(user2);

    if distance > effective_max_distance(user1, user2) {
        return DISTANCE_OUT_OF_RANGE_SCORE;
    }

    if distance <= 5.0 {
        1.0
    } else if distance <= 15.0 {
        0.8
    } else if distance <= 30.0 {
        0.6
    } else if distance <= 50.0 {
        0.4
    } else {
        0.2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeRange, Preferences};

    fn create_test_profile(id: &str, age: u32, distance: Option<f64>) -> Profile {
        Profile {
            id: id.to_string(),
            age,
            hobbies: vec!["Hiking".to_string(), "Art".to_string()],
            passions: vec!["Music".to_string()],
            languages: vec!["English".to_string()],
            dietary_preference: "vegetarian".to_string(),
            distance,
            ..Default::default()
        }
    }

    fn with_preferences(mut profile: Profile, preferences: Preferences) -> Profile {
        profile.preferences = Some(preferences);
        profile
    }

    #[test]
    fn test_age_tiers() {
        let base = create_test_profile("a", 30, None);
        let tiers = [(31, 1.0), (32, 1.0), (35, 0.8), (40, 0.6), (41, 0.4), (18, 0.4)];

        for (age, expected) in tiers {
            let other = create_test_profile("b", age, None);
            assert_eq!(age_score(&base, &other), expected, "age {}", age);
        }
    }

    #[test]
    fn test_age_gate_overrides_closeness() {
        let picky = with_preferences(
            create_test_profile("a", 25, None),
            Preferences { age_range: Some(AgeRange(27, 35)), ..Default::default() },
        );
        let other = create_test_profile("b", 26, None);

        assert_eq!(age_score(&picky, &other), AGE_OUT_OF_RANGE_SCORE);
        assert_eq!(age_score(&other, &picky), AGE_OUT_OF_RANGE_SCORE);
    }

    #[test]
    fn test_distance_tiers() {
        let user = create_test_profile("a", 30, None);
        let tiers = [(0.0, 1.0), (5.0, 1.0), (5.5, 0.8), (15.0, 0.8), (30.0, 0.6), (50.0, 0.4), (75.0, 0.2), (100.0, 0.2)];

        for (distance, expected) in tiers {
            let other = create_test_profile("b", 30, Some(distance));
            assert_eq!(distance_score(&user, &other), expected, "distance {}", distance);
        }
    }

    #[test]
    fn test_distance_gate() {
        let user = with_preferences(
            create_test_profile("a", 30, None),
            Preferences { max_distance: Some(10.0), ..Default::default() },
        );
        let near = create_test_profile("b", 30, Some(10.0));
        let far = create_test_profile("c", 30, Some(12.0));
        let beyond_default = create_test_profile("d", 30, Some(150.0));
        let open = create_test_profile("e", 30, None);

        assert_eq!(distance_score(&user, &near), 0.8);
        assert_eq!(distance_score(&user, &far), DISTANCE_OUT_OF_RANGE_SCORE);
        assert_eq!(distance_score(&open, &beyond_default), DISTANCE_OUT_OF_RANGE_SCORE);
    }

    #[test]
    fn test_weights_come_from_first_profile() {
        let hobby_focused = with_preferences(
            create_test_profile("a", 30, None),
            Preferences {
                importance_weights: Some(ImportanceWeights {
                    hobbies: 1.0,
                    passions: 0.0,
                    languages: 0.0,
                    personality: 0.0,
                    lifestyle: 0.0,
                    dietary: 0.0,
                }),
                ..Default::default()
            },
        );
        let mut other = create_test_profile("b", 30, Some(1.0));
        other.hobbies = vec!["Chess".to_string()];

        let forward = calculate_compatibility(&hobby_focused, &other, &ImportanceWeights::default());
        let backward = calculate_compatibility(&other, &hobby_focused, &ImportanceWeights::default());

        // hobbies 0, age 1, distance 1 under the hobby-only weights
        assert!((forward.overall - 0.15).abs() < 1e-9);
        assert!((backward.overall - forward.overall).abs() > 0.1);
    }

    #[test]
    fn test_overall_clamped_to_one() {
        let weights = ImportanceWeights {
            hobbies: 1.0,
            passions: 1.0,
            languages: 1.0,
            personality: 1.0,
            lifestyle: 1.0,
            dietary: 1.0,
        };
        let a = with_preferences(
            create_test_profile("a", 30, None),
            Preferences { importance_weights: Some(weights), ..Default::default() },
        );
        let b = create_test_profile("b", 30, Some(1.0));

        let score = calculate_compatibility(&a, &b, &ImportanceWeights::default());
        assert_eq!(score.overall, 1.0);
    }

    #[test]
    fn test_default_weights_override() {
        let a = create_test_profile("a", 30, None);
        let mut b = create_test_profile("b", 30, Some(1.0));
        b.hobbies.clear();

        let defaults = ImportanceWeights::default();
        let no_hobbies = ImportanceWeights { hobbies: 0.0, ..defaults };

        let with_defaults = calculate_compatibility(&a, &b, &defaults);
        let without_hobbies = calculate_compatibility(&a, &b, &no_hobbies);

        assert_eq!(with_defaults.breakdown, without_hobbies.breakdown);
        assert!((with_defaults.overall - without_hobbies.overall).abs() < 1e-9);
    }
}
