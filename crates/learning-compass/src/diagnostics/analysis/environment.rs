use serde::Serialize;

use super::super::domain::ImpactMap;

/// Categorical learning environment preferences derived from the normalized
/// learning style and behavior pattern scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearningEnvironment {
    pub structure: &'static str,
    pub social: &'static str,
    pub pace: &'static str,
    pub feedback: &'static str,
}

/// Apply the four fixed environment rules. Each rule is a weighted sum of at
/// most two normalized trait scores mapped through the same >7 / >5 thresholds;
/// a missing input trait contributes zero.
pub(crate) fn infer_environment(
    learning_styles: &ImpactMap,
    behavior_patterns: &ImpactMap,
) -> LearningEnvironment {
    let score_of = |map: &ImpactMap, trait_name: &str| map.get(trait_name).copied().unwrap_or(0.0);

    let structure_score = score_of(learning_styles, "logical") * 0.7
        + score_of(behavior_patterns, "organization") * 0.3;
    let structure = if structure_score > 7.0 {
        "Highly structured"
    } else if structure_score > 5.0 {
        "Moderately structured"
    } else {
        "Flexible and unstructured"
    };

    let social_score = score_of(learning_styles, "social") * 0.6
        + score_of(behavior_patterns, "collaboration") * 0.4;
    let social = if social_score > 7.0 {
        "Collaborative group settings"
    } else if social_score > 5.0 {
        "Balance of group and independent work"
    } else {
        "Independent study"
    };

    let pace_score = score_of(behavior_patterns, "independence") * 0.5
        + score_of(behavior_patterns, "adaptability") * 0.5;
    let pace = if pace_score > 7.0 {
        "Self-paced learning"
    } else if pace_score > 5.0 {
        "Flexible deadlines with guidance"
    } else {
        "Structured schedule with clear deadlines"
    };

    // Low confidence intentionally raises the feedback score: students unsure of
    // themselves are steered toward frequent feedback.
    let feedback_score = (10.0 - score_of(behavior_patterns, "confidence")) * 0.7
        + score_of(behavior_patterns, "risk_taking") * 0.3;
    let feedback = if feedback_score > 7.0 {
        "Frequent, immediate feedback"
    } else if feedback_score > 5.0 {
        "Regular check-ins with constructive feedback"
    } else {
        "Space for self-reflection with periodic guidance"
    };

    LearningEnvironment {
        structure,
        social,
        pace,
        feedback,
    }
}
