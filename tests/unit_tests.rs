// Unit tests for Tribes Match

use tribes_match::core::{
    gates::{effective_max_distance, within_age_preferences},
    reasons::generate_reasons,
    scoring::{age_score, distance_score, weighted_overall, calculate_breakdown},
    similarity::{jaccard_similarity, personality_similarity, lifestyle_similarity},
    Matcher,
};
use tribes_match::models::{
    AgeRange, ImportanceWeights, Lifestyle, Personality, Preferences, Profile,
};

fn full_profile(id: &str, age: u32) -> Profile {
    Profile {
        id: id.to_string(),
        age,
        hobbies: vec!["Hiking".to_string(), "Art".to_string(), "Chess".to_string()],
        passions: vec!["Music".to_string(), "Climate".to_string()],
        languages: vec!["English".to_string(), "Spanish".to_string()],
        dietary_preference: "vegetarian".to_string(),
        personality: Some(Personality {
            extroversion: 7.0,
            openness: 8.0,
            conscientiousness: 5.0,
            agreeableness: 6.0,
            neuroticism: 3.0,
        }),
        lifestyle: Some(Lifestyle {
            fitness_level: 6.0,
            social_level: 7.0,
            adventure_level: 8.0,
            creativity_level: 9.0,
        }),
        distance: Some(12.0),
        preferences: None,
        location: None,
    }
}

#[test]
fn test_jaccard_is_symmetric() {
    let samples: Vec<Vec<&str>> = vec![
        vec![],
        vec!["a"],
        vec!["a", "b"],
        vec!["b", "c", "d"],
        vec!["a", "a", "e"],
    ];

    for a in &samples {
        for b in &samples {
            assert_eq!(jaccard_similarity(a, b), jaccard_similarity(b, a), "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn test_jaccard_empty_set_convention() {
    let empty: Vec<String> = vec![];
    let one = vec!["x".to_string()];

    assert_eq!(jaccard_similarity(&empty, &empty), 1.0);
    assert_eq!(jaccard_similarity(&empty, &one), 0.0);
}

#[test]
fn test_identity_scores() {
    let profile = full_profile("p", 30);
    let score = Matcher::default().calculate_compatibility(&profile, &profile);

    assert_eq!(score.breakdown.hobbies, 1.0);
    assert_eq!(score.breakdown.passions, 1.0);
    assert_eq!(score.breakdown.languages, 1.0);
    assert_eq!(score.breakdown.dietary, 1.0);
    assert_eq!(score.breakdown.personality, 1.0);
    assert_eq!(score.breakdown.lifestyle, 1.0);
    assert_eq!(score.breakdown.age, 1.0);
}

#[test]
fn test_scores_stay_in_bounds() {
    let matcher = Matcher::default();
    let heavy = ImportanceWeights {
        hobbies: 1.0,
        passions: 1.0,
        languages: 1.0,
        personality: 1.0,
        lifestyle: 1.0,
        dietary: 1.0,
    };

    let mut profiles = Vec::new();
    for (i, age) in [18u32, 25, 31, 47, 70].iter().enumerate() {
        let mut p = full_profile(&format!("p{}", i), *age);
        p.distance = Some(i as f64 * 30.0);
        if i % 2 == 0 {
            p.personality = None;
            p.hobbies.truncate(i);
        }
        if i == 3 {
            p.preferences = Some(Preferences {
                age_range: Some(AgeRange(20, 30)),
                max_distance: Some(25.0),
                importance_weights: Some(heavy),
            });
        }
        profiles.push(p);
    }

    for a in &profiles {
        for b in &profiles {
            let score = matcher.calculate_compatibility(a, b);
            let d = score.breakdown;
            for value in [d.hobbies, d.passions, d.languages, d.personality, d.lifestyle, d.dietary, d.age, d.distance, score.overall] {
                assert!((0.0..=1.0).contains(&value), "{} out of bounds for {} vs {}", value, a.id, b.id);
            }
            assert!(d.dietary == 1.0 || d.dietary == 0.3);
            assert!(!score.reasons.is_empty());
        }
    }
}

#[test]
fn test_age_gate_beats_closeness() {
    let mut a = full_profile("a", 25);
    let b = full_profile("b", 26);
    a.preferences = Some(Preferences {
        age_range: Some(AgeRange(30, 40)),
        ..Default::default()
    });

    assert!(!within_age_preferences(&a, &b));
    assert_eq!(age_score(&a, &b), 0.2);
    assert_eq!(age_score(&b, &a), 0.2);
}

#[test]
fn test_distance_gate_beats_tiers() {
    let mut a = full_profile("a", 30);
    let mut b = full_profile("b", 30);
    a.preferences = Some(Preferences {
        max_distance: Some(3.0),
        ..Default::default()
    });
    b.distance = Some(4.0);

    assert_eq!(effective_max_distance(&a, &b), 3.0);
    // 4 km would be a top-tier distance without the gate
    assert_eq!(distance_score(&a, &b), 0.1);
}

#[test]
fn test_personality_similarity_partial() {
    let a = full_profile("a", 30).personality;
    let mut b = a;
    if let Some(p) = b.as_mut() {
        p.extroversion = 2.0;
        p.neuroticism = 7.0;
    }

    // differences 5 + 4 = 9 over 45
    let expected = 1.0 - 9.0 / 45.0;
    assert!((personality_similarity(a.as_ref(), b.as_ref()) - expected).abs() < 1e-9);
    assert_eq!(lifestyle_similarity(None, full_profile("c", 30).lifestyle.as_ref()), 0.5);
}

#[test]
fn test_weighted_overall_matches_formula() {
    let a = full_profile("a", 30);
    let mut b = full_profile("b", 34);
    b.hobbies = vec!["Hiking".to_string()];
    b.dietary_preference = "vegan".to_string();

    let breakdown = calculate_breakdown(&a, &b);
    let weights = ImportanceWeights::default();
    let expected = breakdown.hobbies * 0.2
        + breakdown.passions * 0.25
        + breakdown.languages * 0.1
        + breakdown.personality * 0.2
        + breakdown.lifestyle * 0.15
        + breakdown.dietary * 0.1
        + breakdown.age * 0.1
        + breakdown.distance * 0.05;

    assert!((weighted_overall(&breakdown, &weights) - expected.min(1.0)).abs() < 1e-9);
}

#[test]
fn test_reasons_follow_breakdown() {
    let a = full_profile("a", 30);
    let mut b = full_profile("b", 30);
    b.distance = Some(40.0);

    let breakdown = calculate_breakdown(&a, &b);
    let reasons = generate_reasons(&breakdown);

    assert!(reasons.contains(&"You share many hobbies".to_string()));
    assert!(!reasons.contains(&"You're close by".to_string()));
    assert!(!reasons.contains(&"You might have interesting differences to explore".to_string()));
}
