use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response as HttpResponse;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::diagnostics::domain::{
    Assessment, AssessmentId, AssessmentStatus, Grade, ImpactMap, Question, QuestionCategory,
    QuestionOption, QuestionType, StudentId, StudentSnapshot,
};
use crate::diagnostics::recommendation::CourseRecommender;
use crate::diagnostics::repository::{AssessmentRecord, AssessmentRepository, RepositoryError};
use crate::diagnostics::router::diagnostics_router;
use crate::diagnostics::service::AnalysisService;

pub(super) fn impacts(pairs: &[(&str, f64)]) -> ImpactMap {
    pairs
        .iter()
        .map(|(name, weight)| ((*name).to_string(), *weight))
        .collect()
}

fn diagram_question() -> Question {
    Question {
        text: "A new topic is introduced in class. What helps you most?".to_string(),
        category: QuestionCategory::LearningStyle,
        question_type: QuestionType::MultipleChoice,
        grade_level: Grade::G6,
        difficulty: 2,
        time_limit_secs: 45,
        is_active: true,
        options: vec![
            QuestionOption {
                learning_style_impact: impacts(&[("visual", 9.0), ("logical", 4.0)]),
                ..QuestionOption::neutral("A labelled diagram on the board")
            },
            QuestionOption {
                learning_style_impact: impacts(&[("auditory", 8.0)]),
                ..QuestionOption::neutral("Hearing the teacher talk it through")
            },
        ],
    }
}

fn project_question() -> Question {
    Question {
        text: "Which weekend project would you pick?".to_string(),
        category: QuestionCategory::Interest,
        question_type: QuestionType::MultipleChoice,
        grade_level: Grade::G6,
        difficulty: 1,
        time_limit_secs: 30,
        is_active: true,
        options: vec![
            QuestionOption {
                interest_impact: impacts(&[("arts", 6.0)]),
                ..QuestionOption::neutral("Painting a mural")
            },
            QuestionOption {
                interest_impact: impacts(&[("technology", 7.0), ("science", 3.0)]),
                ..QuestionOption::neutral("Programming a small robot")
            },
        ],
    }
}

fn student() -> StudentSnapshot {
    StudentSnapshot {
        id: StudentId("student-route".to_string()),
        first_name: "Priya".to_string(),
        last_name: "Raman".to_string(),
        grade: Grade::G6,
    }
}

pub(super) fn completed_record(id: &str) -> AssessmentRecord {
    let started_at = Utc
        .with_ymd_and_hms(2026, 4, 20, 10, 0, 0)
        .single()
        .expect("valid timestamp");
    AssessmentRecord {
        assessment: Assessment {
            id: AssessmentId(id.to_string()),
            student: student(),
            status: AssessmentStatus::Completed,
            started_at,
            completed_at: Some(started_at + chrono::Duration::minutes(20)),
        },
        responses: vec![
            diagram_question().answer(0).expect("option exists"),
            project_question().answer(1).expect("option exists"),
        ],
    }
}

pub(super) fn in_progress_record(id: &str) -> AssessmentRecord {
    let mut record = completed_record(id);
    record.assessment.status = AssessmentStatus::InProgress;
    record.assessment.completed_at = None;
    record
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.assessment.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.assessment.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn completed_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut completed: Vec<AssessmentRecord> = guard
            .values()
            .filter(|record| {
                record.assessment.student.id == *student_id
                    && record.assessment.status == AssessmentStatus::Completed
            })
            .cloned()
            .collect();
        completed.sort_by(|left, right| {
            right
                .assessment
                .completed_at
                .cmp(&left.assessment.completed_at)
        });
        Ok(completed)
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn completed_for_student(
        &self,
        _student_id: &StudentId,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> Arc<AnalysisService<MemoryRepository>> {
    let repository = MemoryRepository::default();
    repository
        .insert(completed_record("assess-route"))
        .expect("record seeds");
    repository
        .insert(in_progress_record("assess-route-open"))
        .expect("record seeds");
    Arc::new(AnalysisService::new(
        Arc::new(repository),
        CourseRecommender::default(),
    ))
}

pub(super) fn router_with_service(service: Arc<AnalysisService<MemoryRepository>>) -> axum::Router {
    diagnostics_router(service)
}

pub(super) async fn read_json_body(response: HttpResponse) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
