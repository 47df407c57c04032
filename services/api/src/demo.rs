use crate::infra::{seed_demo_data, InMemoryAssessmentRepository};
use clap::Args;
use std::sync::Arc;
use learning_compass::diagnostics::{
    AnalysisService, AssessmentId, CourseRecommender, StudentId,
};
use learning_compass::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// How many course recommendations to print
    #[arg(long)]
    pub(crate) recommendations: Option<usize>,
    /// Also print the student's full analysis history
    #[arg(long)]
    pub(crate) include_history: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    seed_demo_data(&repository);

    let service = AnalysisService::new(repository, CourseRecommender::default());
    let assessment_id = AssessmentId("assess-demo".to_string());

    println!("Learning Compass demo");

    let profile = service.analyze(&assessment_id)?;
    println!(
        "\nLearner profile for {} ({})",
        profile.student_name,
        profile.grade.label()
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&profile).expect("profile serializes")
    );

    let recommendations = service.recommend(&assessment_id, args.recommendations)?;
    println!("\nCourse recommendations");
    println!(
        "{}",
        serde_json::to_string_pretty(&recommendations.recommendations)
            .expect("recommendations serialize")
    );

    if args.include_history {
        let history = service.history(&StudentId("student-demo".to_string()))?;
        println!("\nAnalysis history ({} entries)", history.entries.len());
        println!(
            "{}",
            serde_json::to_string_pretty(&history).expect("history serializes")
        );
    }

    Ok(())
}
