use serde::{Deserialize, Serialize};

use super::domain::{Assessment, AssessmentId, Response, StudentId};

/// Stored assessment together with its recorded responses. This is the unit the
/// analysis service reads; profiles derived from it are never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub assessment: Assessment,
    pub responses: Vec<Response>,
}

/// Storage abstraction so the analysis service can be exercised in isolation.
/// Implementations own durability and consistency; the engine only reads.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    /// Completed assessments for one student, most recently completed first.
    fn completed_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
