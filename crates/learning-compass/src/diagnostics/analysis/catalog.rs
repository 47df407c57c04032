//! Documented trait catalogs for the four scored dimensions.
//!
//! The catalogs describe the keys authors are expected to use in option impact
//! maps. Aggregation never rejects a key outside these lists; an unrecognized
//! trait simply scores as a new ad-hoc entry.

/// Learning style traits.
pub const LEARNING_STYLES: [&str; 6] = [
    "visual",
    "auditory",
    "kinesthetic",
    "logical",
    "social",
    "solitary",
];

/// Cognitive strength traits.
pub const COGNITIVE_STRENGTHS: [&str; 8] = [
    "memory",
    "attention",
    "problem_solving",
    "creativity",
    "critical_thinking",
    "spatial_reasoning",
    "verbal_reasoning",
    "numerical_reasoning",
];

/// Behavior pattern traits.
pub const BEHAVIOR_PATTERNS: [&str; 8] = [
    "persistence",
    "confidence",
    "independence",
    "collaboration",
    "organization",
    "adaptability",
    "focus",
    "risk_taking",
];

/// Interest traits.
pub const INTERESTS: [&str; 10] = [
    "math",
    "technology",
    "arts",
    "language",
    "science",
    "entrepreneurship",
    "humanities",
    "sports",
    "music",
    "nature",
];

/// One of the four trait groups the engine scores independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    LearningStyle,
    CognitiveStrength,
    BehaviorPattern,
    Interest,
}

impl Dimension {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::LearningStyle,
            Self::CognitiveStrength,
            Self::BehaviorPattern,
            Self::Interest,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Dimension::LearningStyle => "learning_styles",
            Dimension::CognitiveStrength => "cognitive_strengths",
            Dimension::BehaviorPattern => "behavior_patterns",
            Dimension::Interest => "interests",
        }
    }

    pub const fn catalog(self) -> &'static [&'static str] {
        match self {
            Dimension::LearningStyle => &LEARNING_STYLES,
            Dimension::CognitiveStrength => &COGNITIVE_STRENGTHS,
            Dimension::BehaviorPattern => &BEHAVIOR_PATTERNS,
            Dimension::Interest => &INTERESTS,
        }
    }

    /// Whether the trait name belongs to the documented catalog for this dimension.
    pub fn recognizes(self, trait_name: &str) -> bool {
        self.catalog().contains(&trait_name)
    }
}
