use chrono::{DateTime, Utc};
use replicate::TrainingEvent;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;
use utoipa::ToSchema;

/// Lifecycle of a training job as seen by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Training,
    Finished,
    Failed,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrainingJob {
    pub training_id: String,
    pub model_name: String,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trained_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// In-memory registry of training jobs, updated by provider webhooks.
/// Stands in for the external datastore this service does not own.
#[derive(Clone, Default)]
pub struct TrainingJobStore {
    inner: Arc<RwLock<HashMap<String, TrainingJob>>>,
}

impl TrainingJobStore {
    pub async fn insert(&self, training_id: String, model_name: String) {
        let job = TrainingJob {
            training_id: training_id.clone(),
            model_name,
            status: JobStatus::Pending,
            trained_version: None,
            error: None,
            updated_at: Utc::now(),
        };
        self.inner.write().await.insert(training_id, job);
    }

    pub async fn get(&self, training_id: &str) -> Option<TrainingJob> {
        self.inner.read().await.get(training_id).cloned()
    }

    /// Applies a provider training event to the registered job. Events for
    /// unknown training ids are dropped with a warning; the provider may
    /// retry webhooks long after a restart wiped the registry.
    pub async fn apply_training_event(&self, training_id: &str, event: &TrainingEvent) {
        let mut jobs = self.inner.write().await;
        let Some(job) = jobs.get_mut(training_id) else {
            warn!("training webhook for unknown job {training_id}");
            return;
        };
        match event {
            TrainingEvent::Start => {
                job.status = JobStatus::Training;
            }
            TrainingEvent::Completed { output } => {
                job.status = JobStatus::Finished;
                job.trained_version = output.as_ref().and_then(|o| o.version.clone());
                job.error = None;
            }
            TrainingEvent::Failed { error } => {
                job.status = JobStatus::Failed;
                job.error = Some(
                    error
                        .clone()
                        .unwrap_or_else(|| "Training failed".to_string()),
                );
            }
        }
        job.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replicate::TrainingEventOutput;

    #[tokio::test]
    async fn jobs_progress_through_the_lifecycle() {
        let store = TrainingJobStore::default();
        store
            .insert("t1".to_string(), "my-model".to_string())
            .await;
        assert_eq!(store.get("t1").await.map(|j| j.status), Some(JobStatus::Pending));

        store.apply_training_event("t1", &TrainingEvent::Start).await;
        assert_eq!(store.get("t1").await.map(|j| j.status), Some(JobStatus::Training));

        store
            .apply_training_event(
                "t1",
                &TrainingEvent::Completed {
                    output: Some(TrainingEventOutput {
                        version: Some("acme/my-model:abc".to_string()),
                    }),
                },
            )
            .await;
        let job = store.get("t1").await.expect("job exists");
        assert_eq!(job.status, JobStatus::Finished);
        assert_eq!(job.trained_version.as_deref(), Some("acme/my-model:abc"));
    }

    #[tokio::test]
    async fn failure_keeps_a_message_even_without_provider_detail() {
        let store = TrainingJobStore::default();
        store.insert("t2".to_string(), "m".to_string()).await;
        store
            .apply_training_event("t2", &TrainingEvent::Failed { error: None })
            .await;
        let job = store.get("t2").await.expect("job exists");
        assert_eq!(job.status, JobStatus::Failed);
        assert_eq!(job.error.as_deref(), Some("Training failed"));
    }

    #[tokio::test]
    async fn events_for_unknown_jobs_are_dropped() {
        let store = TrainingJobStore::default();
        store
            .apply_training_event("ghost", &TrainingEvent::Start)
            .await;
        assert!(store.get("ghost").await.is_none());
    }
}
