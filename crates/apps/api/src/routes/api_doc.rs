use crate::jobs::{JobStatus, TrainingJob};
use crate::routes::{analyze, models, root, train, webhooks};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        root::handlers::health_check,
        // Analysis handlers
        analyze::handlers::analyze_image,
        // Training handlers
        train::handlers::start_training,
        train::handlers::get_training_status,
        // Catalog handlers
        models::handlers::get_models,
        // Webhook handlers
        webhooks::handlers::training_webhook,
        webhooks::handlers::prediction_webhook,
    ),
    components(
        schemas(
            inspection::ImageAnalysisRecord,
            analyze::interfaces::AnalyzeRequest,
            analyze::interfaces::AnalyzeResponse,
            training::TrainRequest,
            training::TrainingConfig,
            training::SubjectType,
            train::interfaces::TrainResponse,
            train::interfaces::TrainingStatusResponse,
            app_state::BaseModel,
            TrainingJob,
            JobStatus,
        ),
    ),
    tags(
        (name = "Analysis", description = "Per-photo characteristic extraction"),
        (name = "Training", description = "Model training jobs"),
        (name = "Models", description = "Base-model catalog"),
        (name = "Webhooks", description = "Provider webhook receivers"),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;
