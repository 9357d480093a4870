use crate::models::Breakdown;

pub const SHARED_HOBBIES: &str = "You share many hobbies";
pub const SIMILAR_PASSIONS: &str = "You have similar passions";
pub const COMMON_LANGUAGES: &str = "You speak common languages";
pub const COMPATIBLE_PERSONALITIES: &str = "Your personalities complement each other";
pub const SIMILAR_LIFESTYLES: &str = "You have similar lifestyles";
pub const SAME_DIET: &str = "You have the same dietary preferences";
pub const SIMILAR_AGE: &str = "You're in similar age ranges";
pub const CLOSE_BY: &str = "You're close by";
pub const INTERESTING_DIFFERENCES: &str = "You might have interesting differences to explore";

/// Build the human-readable explanations for a breakdown
///
/// Every qualifying reason is included, always in the same dimension order.
/// Never returns an empty list.
pub fn generate_reasons(breakdown: &Breakdown) -> Vec<String> {
    let checks = [
        (breakdown.hobbies > 0.7, SHARED_HOBBIES),
        (breakdown.passions > 0.7, SIMILAR_PASSIONS),
        (breakdown.languages > 0.5, COMMON_LANGUAGES),
        (breakdown.personality > 0.8, COMPATIBLE_PERSONALITIES),
        (breakdown.lifestyle > 0.8, SIMILAR_LIFESTYLES),
        (breakdown.dietary == 1.0, SAME_DIET),
        (breakdown.age > 0.8, SIMILAR_AGE),
        (breakdown.distance > 0.8, CLOSE_BY),
    ];

    let mut reasons: Vec<String> = checks
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, reason)| reason.to_string())
        .collect();

    if reasons.is_empty() {
        reasons.push(INTERESTING_DIFFERENCES.to_string());
    }

    reasons
}
