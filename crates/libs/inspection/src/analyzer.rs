use crate::inspect;
use crate::record::ImageAnalysisRecord;
use replicate::ReplicateClient;
use tracing::warn;

fn analysis_prompt(analysis_type: &str) -> String {
    format!(
        "Analyze this image for {analysis_type}. Provide details about the person's \
        appearance, including age, gender, facial features, hair, and any accessories."
    )
}

/// Runs the vision model against uploaded photos and normalizes its
/// free-text answers into [`ImageAnalysisRecord`]s.
pub struct ImageAnalyzer {
    client: ReplicateClient,
    model_version: String,
}

impl ImageAnalyzer {
    #[must_use]
    pub fn new(client: ReplicateClient, model_version: impl Into<String>) -> Self {
        Self {
            client,
            model_version: model_version.into(),
        }
    }

    /// Describes and normalizes a single photo.
    ///
    /// Never fails: when the provider call errors or returns no usable
    /// text, the all-defaults record is returned and the condition is
    /// logged for operators, so callers always receive a structurally
    /// valid record.
    pub async fn inspect_image(&self, image_url: &str, analysis_type: &str) -> ImageAnalysisRecord {
        match self
            .client
            .describe_image(&self.model_version, image_url, &analysis_prompt(analysis_type))
            .await
        {
            Ok(description) => inspect(&description),
            Err(error) => {
                warn!("image analysis unavailable for {image_url}: {error}; using defaults");
                ImageAnalysisRecord::default()
            }
        }
    }
}
