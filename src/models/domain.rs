use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Profile of one person taking part in a compatibility comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(range(min = 1))]
    pub age: u32,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub passions: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub dietary_preference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub personality: Option<Personality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub lifestyle: Option<Lifestyle>,
    /// Pairwise distance to the other profile, in km
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub preferences: Option<Preferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub location: Option<Location>,
}

impl Profile {
    pub fn age_range(&self) -> Option<AgeRange> {
        self.preferences.as_ref().and_then(|p| p.age_range)
    }

    pub fn max_distance(&self) -> Option<f64> {
        self.preferences.as_ref().and_then(|p| p.max_distance)
    }

    pub fn importance_weights(&self) -> Option<ImportanceWeights> {
        self.preferences.as_ref().and_then(|p| p.importance_weights)
    }
}

/// Big-five personality traits, each on a 1-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    #[validate(range(min = 1.0, max = 10.0))]
    pub extroversion: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub openness: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub conscientiousness: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub agreeableness: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub neuroticism: f64,
}

impl Personality {
    pub fn traits(&self) -> [f64; 5] {
        [
            self.extroversion,
            self.openness,
            self.conscientiousness,
            self.agreeableness,
            self.neuroticism,
        ]
    }
}

/// Lifestyle traits, each on a 1-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Lifestyle {
    #[validate(range(min = 1.0, max = 10.0))]
    pub fitness_level: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub social_level: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub adventure_level: f64,
    #[validate(range(min = 1.0, max = 10.0))]
    pub creativity_level: f64,
}

impl Lifestyle {
    pub fn traits(&self) -> [f64; 4] {
        [
            self.fitness_level,
            self.social_level,
            self.adventure_level,
            self.creativity_level,
        ]
    }
}

/// Inclusive `[min, max]` age window, serialized as a two-element array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange(pub u32, pub u32);

impl AgeRange {
    pub fn min(&self) -> u32 {
        self.0
    }

    pub fn max(&self) -> u32 {
        self.1
    }

    #[inline]
    pub fn contains(&self, age: u32) -> bool {
        age >= self.0 && age <= self.1
    }
}

/// Matching preferences attached to a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_age_range"))]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<AgeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub max_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub importance_weights: Option<ImportanceWeights>,
}

fn validate_age_range(preferences: &Preferences) -> Result<(), ValidationError> {
    match preferences.age_range {
        Some(range) if range.min() > range.max() => {
            let mut err = ValidationError::new("age_range_order");
            err.message = Some("ageRange minimum must not exceed maximum".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

/// Per-category importance weights, each in [0, 1]
///
/// Fields missing from a payload fall back to the default weight for that
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ImportanceWeights {
    #[validate(range(min = 0.0, max = 1.0))]
    pub hobbies: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub passions: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub languages: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub personality: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub lifestyle: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub dietary: f64,
}

impl ImportanceWeights {
    pub fn sum(&self) -> f64 {
        self.hobbies + self.passions + self.languages + self.personality + self.lifestyle + self.dietary
    }
}

impl Default for ImportanceWeights {
    fn default() -> Self {
        Self {
            hobbies: 0.2,
            passions: 0.25,
            languages: 0.1,
            personality: 0.2,
            lifestyle: 0.15,
            dietary: 0.1,
        }
    }
}

/// Geographic coordinates in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Per-dimension similarity, each value in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub hobbies: f64,
    pub passions: f64,
    pub languages: f64,
    pub personality: f64,
    pub lifestyle: f64,
    pub dietary: f64,
    pub age: f64,
    pub distance: f64,
}

/// Result of comparing two profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub overall: f64,
    pub breakdown: Breakdown,
    pub reasons: Vec<String>,
}

/// Candidate profile with its score against the ranking user attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub profile: Profile,
    pub compatibility: CompatibilityScore,
}
