use chrono::{TimeZone, Utc};

use crate::diagnostics::domain::{
    Assessment, AssessmentId, AssessmentStatus, Grade, ImpactMap, QuestionCategory,
    QuestionOption, Response, StudentId, StudentSnapshot,
};

pub(super) fn student() -> StudentSnapshot {
    StudentSnapshot {
        id: StudentId("student-001".to_string()),
        first_name: "Priya".to_string(),
        last_name: "Raman".to_string(),
        grade: Grade::G6,
    }
}

pub(super) fn completed_assessment(id: &str) -> Assessment {
    let started_at = Utc
        .with_ymd_and_hms(2026, 3, 14, 9, 0, 0)
        .single()
        .expect("valid start timestamp");
    Assessment {
        id: AssessmentId(id.to_string()),
        student: student(),
        status: AssessmentStatus::Completed,
        started_at,
        completed_at: Some(started_at + chrono::Duration::minutes(25)),
    }
}

pub(super) fn in_progress_assessment(id: &str) -> Assessment {
    Assessment {
        status: AssessmentStatus::InProgress,
        completed_at: None,
        ..completed_assessment(id)
    }
}

pub(super) fn impacts(pairs: &[(&str, f64)]) -> ImpactMap {
    pairs
        .iter()
        .map(|(name, weight)| ((*name).to_string(), *weight))
        .collect()
}

pub(super) fn style_response(pairs: &[(&str, f64)]) -> Response {
    let option = QuestionOption {
        learning_style_impact: impacts(pairs),
        ..QuestionOption::neutral("style option")
    };
    Response::selected(QuestionCategory::LearningStyle, option)
}

pub(super) fn behavior_response(pairs: &[(&str, f64)]) -> Response {
    let option = QuestionOption {
        behavior_impact: impacts(pairs),
        ..QuestionOption::neutral("behavior option")
    };
    Response::selected(QuestionCategory::Behavior, option)
}

pub(super) fn cognitive_response(pairs: &[(&str, f64)]) -> Response {
    let option = QuestionOption {
        cognitive_impact: impacts(pairs),
        ..QuestionOption::neutral("cognitive option")
    };
    Response::selected(QuestionCategory::Cognitive, option)
}

pub(super) fn interest_response(pairs: &[(&str, f64)]) -> Response {
    let option = QuestionOption {
        interest_impact: impacts(pairs),
        ..QuestionOption::neutral("interest option")
    };
    Response::selected(QuestionCategory::Interest, option)
}
