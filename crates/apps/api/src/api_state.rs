use crate::jobs::TrainingJobStore;
use app_state::AppSettings;
use axum::extract::FromRef;
use inspection::ImageAnalyzer;
use replicate::ReplicateClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiContext {
    pub settings: AppSettings,
    pub analyzer: Arc<ImageAnalyzer>,
    pub provider: ReplicateClient,
    pub jobs: TrainingJobStore,
}

// These impls allow Axum to extract parts of the state directly, for
// handlers and extractors that only need one of them.
impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}

impl FromRef<ApiContext> for ReplicateClient {
    fn from_ref(state: &ApiContext) -> Self {
        state.provider.clone()
    }
}

impl FromRef<ApiContext> for TrainingJobStore {
    fn from_ref(state: &ApiContext) -> Self {
        state.jobs.clone()
    }
}
