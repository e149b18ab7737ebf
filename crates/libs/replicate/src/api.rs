use bon::bon;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::time::Duration;
use thiserror::Error;
use tokio::time::{Instant, sleep};

#[derive(Error, Debug)]
pub enum ReplicateError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error (status {status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("prediction {id} did not finish within {waited:?}")]
    Timeout { id: String, waited: Duration },
    #[error("prediction {id} failed: {error}")]
    PredictionFailed { id: String, error: String },
    #[error("prediction {id} returned no usable text output")]
    NoTextOutput { id: String },
}

pub type ReplicateResult<T> = Result<T, ReplicateError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
}

impl PredictionStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Canceled)
    }
}

/// Vision models stream their answer back as a list of text fragments;
/// generation models return a single string or a list of output URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionOutput {
    Text(String),
    Fragments(Vec<String>),
    Other(Value),
}

impl PredictionOutput {
    /// Free-text output, fragments joined with single spaces. `None` when
    /// the model produced something that is not text.
    #[must_use]
    pub fn joined_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Fragments(fragments) => Some(fragments.join(" ")),
            Self::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub id: String,
    pub status: PredictionStatus,
    #[serde(default)]
    pub output: Option<PredictionOutput>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
}

impl TrainingStatus {
    /// Wire name of the status, as the provider reports it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Processing => "processing",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrainingOutput {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub weights: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Training {
    pub id: String,
    pub status: TrainingStatus,
    #[serde(default)]
    pub output: Option<TrainingOutput>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoraType {
    Subject,
    Style,
}

/// Input document sent when starting a training job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingInput {
    pub input_images: Vec<String>,
    pub model_name: String,
    pub trigger_word: String,
    pub lora_type: LoraType,
    pub training_steps: u32,
    pub learning_rate: f64,
    pub resolution: u32,
    pub style_prompt: String,
    pub subject_type: String,
}

#[derive(Serialize)]
struct CreatePredictionRequest<'a> {
    version: &'a str,
    input: Value,
}

#[derive(Serialize)]
struct CreateTrainingRequest<'a> {
    destination: String,
    input: &'a TrainingInput,
}

#[derive(Clone)]
pub struct ReplicateClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    username: String,
    poll_interval: Duration,
    poll_timeout: Duration,
}

#[bon]
impl ReplicateClient {
    #[builder(start_fn = with_base_url)]
    #[must_use]
    pub fn new(
        #[builder(start_fn)] base_url: &str,
        token: String,
        username: String,
        poll_interval: Option<Duration>,
        poll_timeout: Option<Duration>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            username,
            poll_interval: poll_interval.unwrap_or(Duration::from_secs(1)),
            poll_timeout: poll_timeout.unwrap_or(Duration::from_secs(120)),
        }
    }

    pub async fn create_prediction(
        &self,
        version: &str,
        input: Value,
    ) -> ReplicateResult<Prediction> {
        let url = format!("{}/v1/predictions", self.base_url);
        let body = CreatePredictionRequest { version, input };
        self.post_json(&url, &body).await
    }

    pub async fn get_prediction(&self, id: &str) -> ReplicateResult<Prediction> {
        let url = format!("{}/v1/predictions/{id}", self.base_url);
        self.get_json(&url).await
    }

    /// Polls a prediction until it reaches a terminal status.
    pub async fn wait_for_prediction(&self, id: &str) -> ReplicateResult<Prediction> {
        let started = Instant::now();
        loop {
            let prediction = self.get_prediction(id).await?;
            if prediction.status.is_terminal() {
                return Ok(prediction);
            }
            if started.elapsed() >= self.poll_timeout {
                return Err(ReplicateError::Timeout {
                    id: id.to_string(),
                    waited: started.elapsed(),
                });
            }
            sleep(self.poll_interval).await;
        }
    }

    /// Runs a vision model against an image URL and returns its free-text
    /// answer, output fragments joined with single spaces.
    pub async fn describe_image(
        &self,
        version: &str,
        image_url: &str,
        prompt: &str,
    ) -> ReplicateResult<String> {
        let prediction = self
            .create_prediction(version, json!({ "image": image_url, "prompt": prompt }))
            .await?;
        let finished = self.wait_for_prediction(&prediction.id).await?;
        match finished.status {
            PredictionStatus::Succeeded => finished
                .output
                .as_ref()
                .and_then(PredictionOutput::joined_text)
                .ok_or(ReplicateError::NoTextOutput { id: finished.id }),
            _ => Err(ReplicateError::PredictionFailed {
                id: finished.id,
                error: finished.error.unwrap_or_else(|| "unknown error".to_string()),
            }),
        }
    }

    /// Starts a training job; the destination model lives under the
    /// configured account as `<username>/<model-name>`.
    pub async fn start_training(
        &self,
        trainer_model: &str,
        trainer_version: &str,
        model_name: &str,
        input: &TrainingInput,
    ) -> ReplicateResult<Training> {
        let url = format!(
            "{}/v1/models/{trainer_model}/versions/{trainer_version}/trainings",
            self.base_url
        );
        let body = CreateTrainingRequest {
            destination: format!("{}/{model_name}", self.username),
            input,
        };
        self.post_json(&url, &body).await
    }

    pub async fn get_training(&self, id: &str) -> ReplicateResult<Training> {
        let url = format!("{}/v1/trainings/{id}", self.base_url);
        self.get_json(&url).await
    }

    /// Creates a generation prediction against a trained model version.
    #[builder]
    pub async fn generate(
        &self,
        #[builder(start_fn)] version: &str,
        #[builder(start_fn)] prompt: &str,
        negative_prompt: Option<&str>,
        num_outputs: Option<u32>,
    ) -> ReplicateResult<Prediction> {
        self.create_prediction(
            version,
            json!({
                "prompt": prompt,
                "negative_prompt": negative_prompt.unwrap_or_default(),
                "num_outputs": num_outputs.unwrap_or(1),
            }),
        )
        .await
    }

    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        body: &impl Serialize,
    ) -> ReplicateResult<T> {
        let response = self
            .http
            .post(url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .json(body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> ReplicateResult<T> {
        let response = self
            .http
            .get(url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> ReplicateResult<T> {
        if !response.status().is_success() {
            return Err(ReplicateError::Api {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(response.json().await?)
    }

    fn auth_header(&self) -> String {
        format!("Token {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_join_with_single_spaces() {
        let output = PredictionOutput::Fragments(vec![
            "A photo".to_string(),
            "of a man".to_string(),
            "with brown hair.".to_string(),
        ]);
        assert_eq!(
            output.joined_text().as_deref(),
            Some("A photo of a man with brown hair.")
        );
    }

    #[test]
    fn non_text_output_yields_none() {
        let output = PredictionOutput::Other(json!({ "images": ["https://x/1.png"] }));
        assert_eq!(output.joined_text(), None);
    }

    #[test]
    fn prediction_statuses_deserialize_from_wire_names() {
        let prediction: Prediction = serde_json::from_value(json!({
            "id": "p1",
            "status": "succeeded",
            "output": ["a", "b"],
        }))
        .expect("valid prediction payload");
        assert_eq!(prediction.status, PredictionStatus::Succeeded);
        assert!(prediction.status.is_terminal());
        assert_eq!(
            prediction.output.expect("output").joined_text().as_deref(),
            Some("a b")
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = serde_json::from_value::<Prediction>(json!({
            "id": "p1",
            "status": "exploded",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn training_input_serializes_lora_type_lowercase() {
        let input = TrainingInput {
            input_images: vec!["https://x/1.jpg".to_string()],
            model_name: "my-model".to_string(),
            trigger_word: "sksmy-m".to_string(),
            lora_type: LoraType::Style,
            training_steps: 1000,
            learning_rate: 1e-6,
            resolution: 768,
            style_prompt: "professional corporate headshot".to_string(),
            subject_type: "male".to_string(),
        };
        let value = serde_json::to_value(&input).expect("serializable input");
        assert_eq!(value["lora_type"], "style");
        assert_eq!(value["training_steps"], 1000);
    }
}
