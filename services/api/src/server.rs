use crate::cli::ServeArgs;
use crate::infra::{seed_demo_data, AppState, InMemoryAssessmentRepository};
use crate::routes::with_diagnostics_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use learning_compass::config::AppConfig;
use learning_compass::diagnostics::{AnalysisService, CourseRecommender};
use learning_compass::error::AppError;
use learning_compass::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    if args.seed_demo_data {
        seed_demo_data(&repository);
    }

    let recommender = CourseRecommender::new(config.analysis.default_recommendations);
    let analysis_service = Arc::new(AnalysisService::new(repository, recommender));

    let app = with_diagnostics_routes(analysis_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "assessment analysis service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
