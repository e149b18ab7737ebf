use inspection::ImageAnalysisRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_analysis_type() -> String {
    "person".to_string()
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Publicly reachable URL of the uploaded photo.
    pub image_url: String,
    /// Subject type the user picked for the model ("man", "woman", "person").
    #[serde(default = "default_analysis_type")]
    pub analysis_type: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub characteristics: ImageAnalysisRecord,
    /// Warnings shown next to the photo ("Selfie", "Image is blurry", ...).
    pub issues: Vec<String>,
}
