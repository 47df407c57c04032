use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for assessment sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for students.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Grade levels served by the diagnostic question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    K,
    G1,
    G2,
    G3,
    G4,
    G5,
    G6,
    G7,
    G8,
    G9,
    G10,
    G11,
    G12,
}

impl Grade {
    pub const fn label(self) -> &'static str {
        match self {
            Grade::K => "Kindergarten",
            Grade::G1 => "Grade 1",
            Grade::G2 => "Grade 2",
            Grade::G3 => "Grade 3",
            Grade::G4 => "Grade 4",
            Grade::G5 => "Grade 5",
            Grade::G6 => "Grade 6",
            Grade::G7 => "Grade 7",
            Grade::G8 => "Grade 8",
            Grade::G9 => "Grade 9",
            Grade::G10 => "Grade 10",
            Grade::G11 => "Grade 11",
            Grade::G12 => "Grade 12",
        }
    }

    /// Typical student age for the grade, used to band course recommendations.
    pub const fn approximate_age(self) -> u8 {
        match self {
            Grade::K => 5,
            Grade::G1 => 6,
            Grade::G2 => 7,
            Grade::G3 => 8,
            Grade::G4 => 9,
            Grade::G5 => 10,
            Grade::G6 => 11,
            Grade::G7 => 12,
            Grade::G8 => 13,
            Grade::G9 => 14,
            Grade::G10 => 15,
            Grade::G11 => 16,
            Grade::G12 => 17,
        }
    }
}

/// Lifecycle status of one assessment session. An assessment starts in progress and
/// transitions to completed or abandoned exactly once; only completed assessments
/// may be scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    InProgress,
    Completed,
    Abandoned,
}

impl AssessmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentStatus::InProgress => "in_progress",
            AssessmentStatus::Completed => "completed",
            AssessmentStatus::Abandoned => "abandoned",
        }
    }
}

/// Trait groups a question may probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    LearningStyle,
    Behavior,
    Cognitive,
    Creativity,
    TimeManagement,
    Communication,
    Interest,
}

/// Presentation formats for diagnostic questions. Open-ended questions collect free
/// text and never contribute to scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    Situational,
    LogicPuzzle,
    VisualReasoning,
    VerbalReasoning,
    OpenEnded,
}

/// Open-ended trait-name to weight mapping attached to answer options at authoring
/// time. Weights are small non-negative numbers; a trait absent from the map
/// contributes zero. Keys outside the documented catalogs still aggregate, so the
/// mapping stays forward compatible with new traits.
pub type ImpactMap = BTreeMap<String, f64>;

/// One selectable answer for a question, carrying its scoring impacts across the
/// four trait dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    #[serde(default)]
    pub learning_style_impact: ImpactMap,
    #[serde(default)]
    pub cognitive_impact: ImpactMap,
    #[serde(default)]
    pub behavior_impact: ImpactMap,
    #[serde(default)]
    pub interest_impact: ImpactMap,
}

impl QuestionOption {
    /// An option with no scoring impact in any dimension.
    pub fn neutral(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            learning_style_impact: ImpactMap::new(),
            cognitive_impact: ImpactMap::new(),
            behavior_impact: ImpactMap::new(),
            interest_impact: ImpactMap::new(),
        }
    }
}

/// Authored diagnostic question with its answer options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub category: QuestionCategory,
    pub question_type: QuestionType,
    pub grade_level: Grade,
    pub difficulty: u8,
    pub time_limit_secs: u32,
    pub is_active: bool,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Record an answer to this question. The chosen option is snapshotted into
    /// the response so scoring never has to look the question back up. Returns
    /// `None` when the index does not name one of the question's options.
    pub fn answer(&self, option_index: usize) -> Option<Response> {
        let option = self.options.get(option_index)?.clone();
        Some(Response {
            question_type: self.question_type,
            category: self.category,
            selected_option: Some(option),
            open_response: None,
            response_time_secs: 0,
        })
    }

    /// Record a free-text answer. Open-ended responses carry no option and never
    /// contribute to scoring.
    pub fn answer_open(&self, text: impl Into<String>) -> Response {
        Response {
            question_type: self.question_type,
            category: self.category,
            selected_option: None,
            open_response: Some(text.into()),
            response_time_secs: 0,
        }
    }
}

/// One recorded answer within an assessment. Non-open-ended responses snapshot the
/// selected option (and its impacts); open-ended responses hold free text instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub question_type: QuestionType,
    pub category: QuestionCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<QuestionOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_response: Option<String>,
    pub response_time_secs: u32,
}

impl Response {
    pub fn selected(category: QuestionCategory, option: QuestionOption) -> Self {
        Self {
            question_type: QuestionType::MultipleChoice,
            category,
            selected_option: Some(option),
            open_response: None,
            response_time_secs: 0,
        }
    }

    pub fn open_ended(category: QuestionCategory, text: impl Into<String>) -> Self {
        Self {
            question_type: QuestionType::OpenEnded,
            category,
            selected_option: None,
            open_response: Some(text.into()),
            response_time_secs: 0,
        }
    }
}

/// Student identity carried on an assessment so profiles can be assembled without a
/// second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSnapshot {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub grade: Grade,
}

impl StudentSnapshot {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One evaluation session for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: AssessmentId,
    pub student: StudentSnapshot,
    pub status: AssessmentStatus,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}
