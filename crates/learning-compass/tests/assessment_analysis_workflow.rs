//! End-to-end scenarios for the assessment analysis workflow driven through the
//! public service facade and an in-memory repository, without reaching into
//! private modules.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use chrono::{TimeZone, Utc};

    use learning_compass::diagnostics::{
        Assessment, AssessmentId, AssessmentRecord, AssessmentRepository, AssessmentStatus,
        Grade, ImpactMap, QuestionCategory, QuestionOption, RepositoryError, Response, StudentId,
        StudentSnapshot,
    };

    #[derive(Default, Clone)]
    pub struct InMemoryRepository {
        records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
    }

    impl AssessmentRepository for InMemoryRepository {
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

    pub fn student() -> StudentSnapshot {
        StudentSnapshot {
            id: StudentId("student-42".to_string()),
            first_name: "Leila".to_string(),
            last_name: "Nasser".to_string(),
            grade: Grade::G8,
        }
    }

    pub fn assessment(id: &str, status: AssessmentStatus, day: u32) -> Assessment {
        let started_at = Utc
            .with_ymd_and_hms(2026, 4, day, 15, 0, 0)
            .single()
            .expect("valid timestamp");
        let completed_at = matches!(status, AssessmentStatus::Completed)
            .then(|| started_at + chrono::Duration::minutes(30));
        Assessment {
            id: AssessmentId(id.to_string()),
            student: student(),
            status,
            started_at,
            completed_at,
        }
    }

    pub fn impacts(pairs: &[(&str, f64)]) -> ImpactMap {
        pairs
            .iter()
            .map(|(name, weight)| ((*name).to_string(), *weight))
            .collect()
    }

    pub fn style_response(pairs: &[(&str, f64)]) -> Response {
        Response::selected(
            QuestionCategory::LearningStyle,
            QuestionOption {
                learning_style_impact: impacts(pairs),
                ..QuestionOption::neutral("style option")
            },
        )
    }

    pub fn behavior_response(pairs: &[(&str, f64)]) -> Response {
        Response::selected(
            QuestionCategory::Behavior,
            QuestionOption {
                behavior_impact: impacts(pairs),
                ..QuestionOption::neutral("behavior option")
            },
        )
    }
}

use std::sync::Arc;

use common::*;
use learning_compass::diagnostics::{
    AnalysisError, AnalysisService, AssessmentId, AssessmentRecord, AssessmentRepository,
    AssessmentStatus, CourseRecommender, QuestionCategory, Response, StudentId,
};
use learning_compass::diagnostics::service::AnalysisServiceError;

fn service_with(
    records: Vec<AssessmentRecord>,
) -> AnalysisService<InMemoryRepository> {
    let repository = InMemoryRepository::default();
    for record in records {
        repository.insert(record).expect("record seeds");
    }
    AnalysisService::new(Arc::new(repository), CourseRecommender::default())
}

#[test]
fn completed_assessment_produces_a_full_profile() {
    let service = service_with(vec![AssessmentRecord {
        assessment: assessment("assess-1", AssessmentStatus::Completed, 10),
        responses: vec![
            style_response(&[("visual", 8.0), ("auditory", 2.0)]),
            behavior_response(&[("organization", 6.0), ("confidence", 9.0)]),
        ],
    }]);

    let profile = service
        .analyze(&AssessmentId("assess-1".to_string()))
        .expect("analysis succeeds");

    assert_eq!(profile.student_name, "Leila Nasser");
    assert_eq!(profile.learning_styles.primary.as_deref(), Some("visual"));
    assert_eq!(profile.learning_styles.score_of("auditory"), 2.5);
    assert_eq!(profile.behavior_patterns.score_of("confidence"), 10.0);
    // no cognitive or interest signal in this assessment
    assert!(profile.cognitive_strengths.scores.is_empty());
    assert!(profile.interests.scores.is_empty());
}

#[test]
fn unknown_assessment_reports_not_found() {
    let service = service_with(Vec::new());

    let error = service
        .analyze(&AssessmentId("assess-missing".to_string()))
        .expect_err("analysis must fail");

    assert!(matches!(
        error,
        AnalysisServiceError::Analysis(AnalysisError::NotFound(_))
    ));
}

#[test]
fn abandoned_assessment_is_not_scored() {
    let service = service_with(vec![AssessmentRecord {
        assessment: assessment("assess-2", AssessmentStatus::Abandoned, 11),
        responses: vec![style_response(&[("visual", 5.0)])],
    }]);

    let error = service
        .analyze(&AssessmentId("assess-2".to_string()))
        .expect_err("analysis must fail");

    match error {
        AnalysisServiceError::Analysis(AnalysisError::NotCompleted { status, .. }) => {
            assert_eq!(status, AssessmentStatus::Abandoned);
        }
        other => panic!("expected NotCompleted, got {other:?}"),
    }
}

#[test]
fn completed_assessment_without_responses_reports_no_responses() {
    let service = service_with(vec![AssessmentRecord {
        assessment: assessment("assess-3", AssessmentStatus::Completed, 12),
        responses: Vec::new(),
    }]);

    let error = service
        .analyze(&AssessmentId("assess-3".to_string()))
        .expect_err("analysis must fail");

    assert!(matches!(
        error,
        AnalysisServiceError::Analysis(AnalysisError::NoResponses(_))
    ));
}

#[test]
fn open_ended_only_assessment_succeeds_with_empty_dimensions() {
    let service = service_with(vec![AssessmentRecord {
        assessment: assessment("assess-4", AssessmentStatus::Completed, 13),
        responses: vec![Response::open_ended(
            QuestionCategory::Creativity,
            "I invented a board game last summer.",
        )],
    }]);

    let profile = service
        .analyze(&AssessmentId("assess-4".to_string()))
        .expect("analysis succeeds");

    assert!(profile.learning_styles.scores.is_empty());
    assert_eq!(profile.learning_styles.primary, None);
    assert_eq!(profile.interests.secondary, None);
}

#[test]
fn history_lists_completed_assessments_most_recent_first() {
    let service = service_with(vec![
        AssessmentRecord {
            assessment: assessment("assess-old", AssessmentStatus::Completed, 5),
            responses: vec![style_response(&[("auditory", 4.0)])],
        },
        AssessmentRecord {
            assessment: assessment("assess-new", AssessmentStatus::Completed, 20),
            responses: vec![style_response(&[("visual", 4.0)])],
        },
        AssessmentRecord {
            assessment: assessment("assess-open", AssessmentStatus::InProgress, 25),
            responses: Vec::new(),
        },
        // completed but empty: skipped from history rather than failing it
        AssessmentRecord {
            assessment: assessment("assess-blank", AssessmentStatus::Completed, 22),
            responses: Vec::new(),
        },
    ]);

    let history = service
        .history(&StudentId("student-42".to_string()))
        .expect("history builds");

    assert_eq!(history.student_name, "Leila Nasser");
    let ids: Vec<&str> = history
        .entries
        .iter()
        .map(|entry| entry.assessment_id.0.as_str())
        .collect();
    assert_eq!(ids, vec!["assess-new", "assess-old"]);
}

#[test]
fn history_for_unknown_student_reports_not_found() {
    let service = service_with(Vec::new());

    let error = service
        .history(&StudentId("student-ghost".to_string()))
        .expect_err("history must fail");

    assert!(matches!(error, AnalysisServiceError::StudentNotFound(_)));
}
