use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::analysis::{AnalysisError, LearnerProfile, LearningStyleAnalyzer};
use super::domain::{AssessmentId, Grade, StudentId};
use super::recommendation::{CourseRecommendation, CourseRecommender};
use super::repository::{AssessmentRepository, RepositoryError};

/// Service facade over the repository and the scoring engine. One call reads the
/// stored record and runs the full aggregate -> normalize -> rank -> infer pass;
/// nothing is cached between calls.
pub struct AnalysisService<R> {
    repository: Arc<R>,
    recommender: CourseRecommender,
}

impl<R> AnalysisService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>, recommender: CourseRecommender) -> Self {
        Self {
            repository,
            recommender,
        }
    }

    /// Analyze one assessment into a learner profile.
    pub fn analyze(&self, id: &AssessmentId) -> Result<LearnerProfile, AnalysisServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or_else(|| AnalysisError::NotFound(id.clone()))?;

        let profile = LearningStyleAnalyzer::analyze(&record.assessment, &record.responses)?;
        debug!(assessment = %id, student = %profile.student_id, "assessment analyzed");
        Ok(profile)
    }

    /// Recommend courses for an analyzed assessment. `count` falls back to the
    /// recommender's configured default.
    pub fn recommend(
        &self,
        id: &AssessmentId,
        count: Option<usize>,
    ) -> Result<CourseRecommendations, AnalysisServiceError> {
        let profile = self.analyze(id)?;
        let recommendations = self.recommender.recommend(&profile, count);

        Ok(CourseRecommendations {
            assessment_id: profile.assessment_id,
            student_name: profile.student_name,
            grade: profile.grade,
            recommendations,
        })
    }

    /// Profile history across a student's completed assessments, most recent
    /// first. Assessments that fail analysis (e.g. recorded without responses)
    /// are skipped rather than failing the whole listing.
    pub fn history(&self, student_id: &StudentId) -> Result<AnalysisHistory, AnalysisServiceError> {
        let records = self.repository.completed_for_student(student_id)?;
        if records.is_empty() {
            return Err(AnalysisServiceError::StudentNotFound(student_id.clone()));
        }

        let student_name = records[0].assessment.student.full_name();
        let grade = records[0].assessment.student.grade;

        let entries = records
            .iter()
            .filter_map(|record| {
                LearningStyleAnalyzer::analyze(&record.assessment, &record.responses)
                    .ok()
                    .map(|profile| AnalysisHistoryEntry {
                        assessment_id: record.assessment.id.clone(),
                        completed_at: record.assessment.completed_at,
                        profile,
                    })
            })
            .collect();

        Ok(AnalysisHistory {
            student_id: student_id.clone(),
            student_name,
            grade,
            entries,
        })
    }
}

/// Course recommendations assembled for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecommendations {
    pub assessment_id: AssessmentId,
    pub student_name: String,
    pub grade: Grade,
    pub recommendations: Vec<CourseRecommendation>,
}

/// One analyzed entry in a student's history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisHistoryEntry {
    pub assessment_id: AssessmentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub profile: LearnerProfile,
}

/// A student's analysis history across completed assessments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisHistory {
    pub student_id: StudentId,
    pub student_name: String,
    pub grade: Grade,
    pub entries: Vec<AnalysisHistoryEntry>,
}

/// Error raised by the analysis service.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error("no assessments on record for student {0}")]
    StudentNotFound(StudentId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
