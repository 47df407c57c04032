use chrono::{TimeZone, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use learning_compass::diagnostics::{
    Assessment, AssessmentId, AssessmentRecord, AssessmentRepository, AssessmentStatus, Grade,
    ImpactMap, Question, QuestionCategory, QuestionOption, QuestionType, RepositoryError, Response,
    StudentId, StudentSnapshot,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
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

fn impacts(pairs: &[(&str, f64)]) -> ImpactMap {
    pairs
        .iter()
        .map(|(name, weight)| ((*name).to_string(), *weight))
        .collect()
}

fn bank_question(
    text: &str,
    category: QuestionCategory,
    question_type: QuestionType,
    options: Vec<QuestionOption>,
) -> Question {
    Question {
        text: text.to_string(),
        category,
        question_type,
        grade_level: Grade::G7,
        difficulty: 2,
        time_limit_secs: 60,
        is_active: true,
        options,
    }
}

/// Demo slice of the question bank: each response snapshots the option the
/// student picked, so the bank itself is never consulted again after seeding.
fn demo_responses() -> Vec<Response> {
    let approach = bank_question(
        "A new topic is introduced. What do you do first?",
        QuestionCategory::LearningStyle,
        QuestionType::MultipleChoice,
        vec![
            QuestionOption {
                learning_style_impact: impacts(&[("visual", 8.0), ("logical", 6.0)]),
                ..QuestionOption::neutral("I sketch a diagram before starting")
            },
            QuestionOption::neutral("I wait to see what my classmates do"),
        ],
    );
    let homework = bank_question(
        "Homework is easiest when...",
        QuestionCategory::LearningStyle,
        QuestionType::Situational,
        vec![
            QuestionOption::neutral("Someone talks me through it"),
            QuestionOption {
                learning_style_impact: impacts(&[("logical", 5.0), ("solitary", 3.0)]),
                ..QuestionOption::neutral("I work through the steps on my own")
            },
        ],
    );
    let puzzle = bank_question(
        "A puzzle is too big to solve at once. What next?",
        QuestionCategory::Cognitive,
        QuestionType::LogicPuzzle,
        vec![
            QuestionOption {
                cognitive_impact: impacts(&[("problem_solving", 7.0), ("attention", 4.0)]),
                ..QuestionOption::neutral("I try smaller versions of the puzzle first")
            },
            QuestionOption::neutral("I move on to something else"),
        ],
    );
    let planning = bank_question(
        "How does your school week usually start?",
        QuestionCategory::Behavior,
        QuestionType::Situational,
        vec![
            QuestionOption {
                behavior_impact: impacts(&[
                    ("organization", 7.0),
                    ("independence", 6.0),
                    ("confidence", 4.0),
                ]),
                ..QuestionOption::neutral("I plan my week before it starts")
            },
            QuestionOption::neutral("I take each day as it comes"),
        ],
    );
    let project = bank_question(
        "Which class project sounds most exciting?",
        QuestionCategory::Interest,
        QuestionType::MultipleChoice,
        vec![
            QuestionOption {
                interest_impact: impacts(&[("technology", 8.0), ("math", 5.0)]),
                ..QuestionOption::neutral("Building an app sounds exciting")
            },
            QuestionOption::neutral("Putting on a class play"),
        ],
    );
    let explain = bank_question(
        "How would you explain a hard idea to a friend?",
        QuestionCategory::Communication,
        QuestionType::OpenEnded,
        Vec::new(),
    );

    vec![
        approach.answer(0).expect("demo option exists"),
        homework.answer(1).expect("demo option exists"),
        puzzle.answer(0).expect("demo option exists"),
        planning.answer(0).expect("demo option exists"),
        project.answer(0).expect("demo option exists"),
        explain.answer_open("I would explain it with a drawing on the whiteboard."),
    ]
}

/// Seed a repository with one completed assessment rich enough to exercise every
/// dimension, plus an in-progress session for error-path demos.
pub(crate) fn seed_demo_data(repository: &InMemoryAssessmentRepository) {
    let student = StudentSnapshot {
        id: StudentId("student-demo".to_string()),
        first_name: "Maya".to_string(),
        last_name: "Okafor".to_string(),
        grade: Grade::G7,
    };

    let started_at = Utc
        .with_ymd_and_hms(2026, 5, 12, 14, 30, 0)
        .single()
        .expect("valid timestamp");

    let responses = demo_responses();

    repository
        .insert(AssessmentRecord {
            assessment: Assessment {
                id: AssessmentId("assess-demo".to_string()),
                student: student.clone(),
                status: AssessmentStatus::Completed,
                started_at,
                completed_at: Some(started_at + chrono::Duration::minutes(22)),
            },
            responses,
        })
        .expect("demo assessment seeds");

    repository
        .insert(AssessmentRecord {
            assessment: Assessment {
                id: AssessmentId("assess-demo-open".to_string()),
                student,
                status: AssessmentStatus::InProgress,
                started_at: started_at + chrono::Duration::days(7),
                completed_at: None,
            },
            responses: Vec::new(),
        })
        .expect("in-progress assessment seeds");
}
