//! Scoring and profiling engine for completed assessments.
//!
//! The pipeline is aggregate -> normalize -> rank, run once per dimension, then
//! environment inference and tip generation over the normalized results. Every
//! step is pure; the engine holds no state and reads nothing beyond the
//! assessment and responses handed to it, so analysis is deterministic and
//! idempotent for unchanged inputs.

mod aggregate;
mod catalog;
mod environment;
mod rank;
mod tips;

#[cfg(test)]
mod tests;

pub use catalog::{
    Dimension, BEHAVIOR_PATTERNS, COGNITIVE_STRENGTHS, INTERESTS, LEARNING_STYLES,
};
pub use environment::LearningEnvironment;

use serde::Serialize;

use super::domain::{
    Assessment, AssessmentId, AssessmentStatus, Grade, ImpactMap, Response, StudentId,
};

/// Scores and top traits for one dimension. A dimension with no contributing
/// responses has an empty score map and no primary/secondary; that is a valid
/// result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionProfile {
    pub scores: ImpactMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

impl DimensionProfile {
    fn from_raw(raw: &ImpactMap) -> Self {
        let scores = rank::normalize_scores(raw);
        let (primary, secondary) = rank::rank(&scores);
        Self {
            scores,
            primary,
            secondary,
        }
    }

    pub fn score_of(&self, trait_name: &str) -> f64 {
        self.scores.get(trait_name).copied().unwrap_or(0.0)
    }
}

/// Full derived output of the engine for one completed assessment. Recomputed on
/// every analysis request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearnerProfile {
    pub assessment_id: AssessmentId,
    pub student_id: StudentId,
    pub student_name: String,
    pub grade: Grade,
    pub learning_styles: DimensionProfile,
    pub cognitive_strengths: DimensionProfile,
    pub behavior_patterns: DimensionProfile,
    pub interests: DimensionProfile,
    pub ideal_learning_environment: LearningEnvironment,
    pub learning_effectiveness_tips: Vec<String>,
}

/// Terminal failures of the analyze operation. Surfaced as values; no panic
/// crosses the engine boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("assessment {0} not found")]
    NotFound(AssessmentId),
    #[error("assessment {id} is not completed yet (status: {})", .status.label())]
    NotCompleted {
        id: AssessmentId,
        status: AssessmentStatus,
    },
    #[error("no responses found for assessment {0}")]
    NoResponses(AssessmentId),
}

/// Stateless analyzer turning a completed assessment's responses into a
/// [`LearnerProfile`].
pub struct LearningStyleAnalyzer;

impl LearningStyleAnalyzer {
    /// Score one assessment. Fails with [`AnalysisError::NotCompleted`] unless
    /// the assessment has finished, and [`AnalysisError::NoResponses`] when no
    /// response records exist at all. An assessment holding only open-ended
    /// responses succeeds with four empty dimensions.
    pub fn analyze(
        assessment: &Assessment,
        responses: &[Response],
    ) -> Result<LearnerProfile, AnalysisError> {
        if assessment.status != AssessmentStatus::Completed {
            return Err(AnalysisError::NotCompleted {
                id: assessment.id.clone(),
                status: assessment.status,
            });
        }

        if responses.is_empty() {
            return Err(AnalysisError::NoResponses(assessment.id.clone()));
        }

        let totals = aggregate::aggregate_responses(responses);
        let learning_styles = DimensionProfile::from_raw(&totals.learning_styles);
        let cognitive_strengths = DimensionProfile::from_raw(&totals.cognitive_strengths);
        let behavior_patterns = DimensionProfile::from_raw(&totals.behavior_patterns);
        let interests = DimensionProfile::from_raw(&totals.interests);

        let ideal_learning_environment =
            environment::infer_environment(&learning_styles.scores, &behavior_patterns.scores);
        let learning_effectiveness_tips = tips::learning_tips(
            learning_styles.primary.as_deref(),
            cognitive_strengths.primary.as_deref(),
        );

        Ok(LearnerProfile {
            assessment_id: assessment.id.clone(),
            student_id: assessment.student.id.clone(),
            student_name: assessment.student.full_name(),
            grade: assessment.student.grade,
            learning_styles,
            cognitive_strengths,
            behavior_patterns,
            interests,
            ideal_learning_environment,
            learning_effectiveness_tips,
        })
    }
}
