use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("malformed webhook payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Training lifecycle events posted by the provider. Unknown event names
/// or wrongly-typed fields are rejected at parse time rather than coerced.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum TrainingEvent {
    Start,
    Completed {
        #[serde(default)]
        output: Option<TrainingEventOutput>,
    },
    Failed {
        #[serde(default)]
        error: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrainingEventOutput {
    #[serde(default)]
    pub version: Option<String>,
}

/// Prediction status updates posted by the provider, discriminated by the
/// `status` field of the prediction document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PredictionUpdate {
    Starting {
        id: String,
    },
    Processing {
        id: String,
    },
    Succeeded {
        id: String,
        #[serde(default)]
        output: Option<crate::PredictionOutput>,
    },
    Failed {
        id: String,
        #[serde(default)]
        error: Option<String>,
    },
    Canceled {
        id: String,
    },
}

impl PredictionUpdate {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Starting { id }
            | Self::Processing { id }
            | Self::Succeeded { id, .. }
            | Self::Failed { id, .. }
            | Self::Canceled { id } => id,
        }
    }
}

pub fn parse_training_event(body: &[u8]) -> Result<TrainingEvent, WebhookError> {
    Ok(serde_json::from_slice(body)?)
}

pub fn parse_prediction_update(body: &[u8]) -> Result<PredictionUpdate, WebhookError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_training_event_carries_trained_version() {
        let body = br#"{"event": "completed", "output": {"version": "owner/model:abc123"}}"#;
        let event = parse_training_event(body).expect("valid event");
        assert_eq!(
            event,
            TrainingEvent::Completed {
                output: Some(TrainingEventOutput {
                    version: Some("owner/model:abc123".to_string())
                })
            }
        );
    }

    #[test]
    fn unknown_training_event_is_rejected() {
        let body = br#"{"event": "paused"}"#;
        assert!(matches!(
            parse_training_event(body),
            Err(WebhookError::Malformed(_))
        ));
    }

    #[test]
    fn prediction_update_discriminates_on_status() {
        let body = br#"{"id": "p1", "status": "succeeded", "output": ["https://x/1.png"]}"#;
        let update = parse_prediction_update(body).expect("valid update");
        assert_eq!(update.id(), "p1");
        assert!(matches!(update, PredictionUpdate::Succeeded { .. }));
    }

    #[test]
    fn prediction_update_without_id_is_rejected() {
        let body = br#"{"status": "processing"}"#;
        assert!(parse_prediction_update(body).is_err());
    }

    #[test]
    fn failed_event_defaults_missing_error_to_none() {
        let event = parse_training_event(br#"{"event": "failed"}"#).expect("valid event");
        assert_eq!(event, TrainingEvent::Failed { error: None });
    }
}
