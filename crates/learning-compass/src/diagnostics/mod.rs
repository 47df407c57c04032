//! Diagnostic assessment workflow: domain model, scoring engine, recommendations,
//! and the HTTP surface consumed by the API service.

pub mod analysis;
pub mod domain;
pub mod recommendation;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use analysis::{
    AnalysisError, DimensionProfile, LearnerProfile, LearningEnvironment, LearningStyleAnalyzer,
};
pub use domain::{
    Assessment, AssessmentId, AssessmentStatus, Grade, ImpactMap, Question, QuestionCategory,
    QuestionOption, QuestionType, Response, StudentId, StudentSnapshot,
};
pub use recommendation::{CourseCategory, CourseRecommendation, CourseRecommender};
pub use repository::{AssessmentRecord, AssessmentRepository, RepositoryError};
pub use router::diagnostics_router;
pub use service::{
    AnalysisHistory, AnalysisHistoryEntry, AnalysisService, AnalysisServiceError,
    CourseRecommendations,
};
