//! Deterministic course recommendations derived from a learner profile.
//!
//! Courses come from a grade-banded catalog; the learner's normalized interest
//! scores reorder the band so the closest-matching categories surface first.
//! The AI-backed recommendation provider remains an external collaborator and
//! is not modeled here.

use serde::{Deserialize, Serialize};

use super::analysis::LearnerProfile;
use super::domain::Grade;

/// Program categories offered by the course catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseCategory {
    Math,
    Coding,
    Robotics,
    Ai,
    Entrepreneurship,
    Communication,
    CreativeArts,
    Science,
    Language,
    VedicMath,
    Abacus,
}

impl CourseCategory {
    /// The interest trait this category draws on when ranking recommendations.
    pub const fn affinity_interest(self) -> &'static str {
        match self {
            CourseCategory::Math | CourseCategory::VedicMath | CourseCategory::Abacus => "math",
            CourseCategory::Coding | CourseCategory::Robotics | CourseCategory::Ai => "technology",
            CourseCategory::Entrepreneurship => "entrepreneurship",
            CourseCategory::Communication => "humanities",
            CourseCategory::CreativeArts => "arts",
            CourseCategory::Science => "science",
            CourseCategory::Language => "language",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// One recommended course, ready for JSON serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecommendation {
    pub course_name: &'static str,
    pub category: CourseCategory,
    pub description: &'static str,
    pub fit_reason: &'static str,
    pub learning_outcomes: &'static [&'static str],
    pub difficulty: CourseDifficulty,
    pub age_range: &'static str,
    pub duration_weeks: u8,
}

/// Catalog-backed recommender. Stateless; the same profile always produces the
/// same ordered recommendations.
#[derive(Debug, Clone)]
pub struct CourseRecommender {
    default_count: usize,
}

impl Default for CourseRecommender {
    fn default() -> Self {
        Self { default_count: 3 }
    }
}

impl CourseRecommender {
    pub fn new(default_count: usize) -> Self {
        Self { default_count }
    }

    /// Recommend courses for the profile's grade band, ordered by the learner's
    /// interest score for each course's affinity category. Ties keep catalog
    /// order, so output is deterministic.
    pub fn recommend(
        &self,
        profile: &LearnerProfile,
        count: Option<usize>,
    ) -> Vec<CourseRecommendation> {
        let count = count.unwrap_or(self.default_count);
        let mut courses = catalog_for_grade(profile.grade).to_vec();

        courses.sort_by(|left, right| {
            let left_score = profile
                .interests
                .score_of(left.category.affinity_interest());
            let right_score = profile
                .interests
                .score_of(right.category.affinity_interest());
            right_score.total_cmp(&left_score)
        });

        courses.truncate(count);
        courses
    }
}

fn catalog_for_grade(grade: Grade) -> &'static [CourseRecommendation] {
    match grade.approximate_age() {
        0..=7 => EARLY_ELEMENTARY_COURSES,
        8..=10 => UPPER_ELEMENTARY_COURSES,
        11..=13 => MIDDLE_SCHOOL_COURSES,
        _ => HIGH_SCHOOL_COURSES,
    }
}

const EARLY_ELEMENTARY_COURSES: &[CourseRecommendation] = &[
    CourseRecommendation {
        course_name: "Junior Coding Adventures",
        category: CourseCategory::Coding,
        description: "An introductory coding course for young learners using block-based programming.",
        fit_reason: "Perfect for developing logical thinking and creativity in early learners.",
        learning_outcomes: &[
            "Basic coding concepts",
            "Problem-solving skills",
            "Sequential thinking",
        ],
        difficulty: CourseDifficulty::Beginner,
        age_range: "5-7 years",
        duration_weeks: 8,
    },
    CourseRecommendation {
        course_name: "Math Explorers",
        category: CourseCategory::Math,
        description: "A fun, hands-on approach to early mathematics concepts.",
        fit_reason: "Builds a strong foundation in mathematical thinking through play-based learning.",
        learning_outcomes: &["Number sense", "Basic operations", "Spatial reasoning"],
        difficulty: CourseDifficulty::Beginner,
        age_range: "5-7 years",
        duration_weeks: 10,
    },
    CourseRecommendation {
        course_name: "Creative Storytelling",
        category: CourseCategory::CreativeArts,
        description: "A course that develops imagination and communication through storytelling.",
        fit_reason: "Enhances creativity and language skills in a supportive environment.",
        learning_outcomes: &[
            "Narrative skills",
            "Vocabulary development",
            "Creative expression",
        ],
        difficulty: CourseDifficulty::Beginner,
        age_range: "5-7 years",
        duration_weeks: 6,
    },
];

const UPPER_ELEMENTARY_COURSES: &[CourseRecommendation] = &[
    CourseRecommendation {
        course_name: "Scratch Programming Fundamentals",
        category: CourseCategory::Coding,
        description: "Learn to code using Scratch to create interactive stories and games.",
        fit_reason: "Develops computational thinking and creativity through visual programming.",
        learning_outcomes: &[
            "Basic programming concepts",
            "Game design",
            "Interactive storytelling",
        ],
        difficulty: CourseDifficulty::Beginner,
        age_range: "8-10 years",
        duration_weeks: 12,
    },
    CourseRecommendation {
        course_name: "Abacus Math Mastery",
        category: CourseCategory::Abacus,
        description: "Learn mental math techniques using the abacus method.",
        fit_reason: "Enhances calculation speed, concentration, and numerical fluency.",
        learning_outcomes: &[
            "Mental calculation",
            "Number manipulation",
            "Concentration skills",
        ],
        difficulty: CourseDifficulty::Intermediate,
        age_range: "8-10 years",
        duration_weeks: 16,
    },
    CourseRecommendation {
        course_name: "Junior Robotics",
        category: CourseCategory::Robotics,
        description: "Introduction to robotics using LEGO WeDo or similar platforms.",
        fit_reason: "Combines coding with hands-on building to develop STEM skills.",
        learning_outcomes: &[
            "Basic robotics concepts",
            "Simple programming",
            "Engineering principles",
        ],
        difficulty: CourseDifficulty::Beginner,
        age_range: "8-10 years",
        duration_weeks: 10,
    },
];

const MIDDLE_SCHOOL_COURSES: &[CourseRecommendation] = &[
    CourseRecommendation {
        course_name: "Python Programming for Beginners",
        category: CourseCategory::Coding,
        description: "Introduction to text-based programming using Python.",
        fit_reason: "Transitions from block-based to text-based coding with a versatile language.",
        learning_outcomes: &["Python syntax", "Program structure", "Basic algorithms"],
        difficulty: CourseDifficulty::Intermediate,
        age_range: "11-13 years",
        duration_weeks: 14,
    },
    CourseRecommendation {
        course_name: "Vedic Mathematics",
        category: CourseCategory::VedicMath,
        description: "Ancient Indian mathematical techniques for rapid calculation.",
        fit_reason: "Enhances mathematical fluency and provides alternative problem-solving approaches.",
        learning_outcomes: &[
            "Speed mathematics",
            "Mental calculation",
            "Alternative algorithms",
        ],
        difficulty: CourseDifficulty::Intermediate,
        age_range: "11-13 years",
        duration_weeks: 12,
    },
    CourseRecommendation {
        course_name: "LEGO Robotics Engineering",
        category: CourseCategory::Robotics,
        description: "Design, build, and program robots using LEGO Mindstorms.",
        fit_reason: "Develops engineering skills and computational thinking through hands-on projects.",
        learning_outcomes: &[
            "Mechanical design",
            "Sensor integration",
            "Programming logic",
        ],
        difficulty: CourseDifficulty::Intermediate,
        age_range: "11-13 years",
        duration_weeks: 16,
    },
];

const HIGH_SCHOOL_COURSES: &[CourseRecommendation] = &[
    CourseRecommendation {
        course_name: "Advanced Programming with Python",
        category: CourseCategory::Coding,
        description: "Develop sophisticated applications and algorithms using Python.",
        fit_reason: "Builds on programming fundamentals to create complex, real-world applications.",
        learning_outcomes: &[
            "Object-oriented programming",
            "Data structures",
            "Algorithm design",
        ],
        difficulty: CourseDifficulty::Advanced,
        age_range: "14-17 years",
        duration_weeks: 16,
    },
    CourseRecommendation {
        course_name: "Introduction to AI and Machine Learning",
        category: CourseCategory::Ai,
        description: "Explore the fundamentals of artificial intelligence and machine learning.",
        fit_reason: "Introduces cutting-edge technology concepts with practical applications.",
        learning_outcomes: &["AI concepts", "Basic ML algorithms", "Ethical considerations"],
        difficulty: CourseDifficulty::Advanced,
        age_range: "14-17 years",
        duration_weeks: 14,
    },
    CourseRecommendation {
        course_name: "Young Entrepreneurs",
        category: CourseCategory::Entrepreneurship,
        description: "Learn to develop business ideas and create a business plan.",
        fit_reason: "Develops business acumen, creativity, and presentation skills.",
        learning_outcomes: &["Business planning", "Marketing basics", "Financial literacy"],
        difficulty: CourseDifficulty::Intermediate,
        age_range: "14-17 years",
        duration_weeks: 12,
    },
];
