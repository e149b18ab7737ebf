use crate::packs::find_pack;
use regex::Regex;
use replicate::LoraType;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;
use utoipa::ToSchema;

static MODEL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid model name regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainRequestError {
    #[error("at least one image is required")]
    NoImages,
    #[error("model name must be lowercase alphanumeric with hyphens only (e.g., my-model-name)")]
    InvalidModelName,
    #[error("unknown pack slug: {0}")]
    UnknownPack(String),
    #[error("pack {pack} requires at least {min} images, got {got}")]
    NotEnoughImages {
        pack: String,
        min: usize,
        got: usize,
    },
    #[error("at most {max} images can be submitted, got {got}")]
    TooManyImages { max: usize, got: usize },
}

/// The kind of subject the model is trained on, as picked by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubjectType {
    Man,
    Woman,
    #[default]
    Person,
}

impl SubjectType {
    /// The token the provider's trainer expects.
    #[must_use]
    pub const fn provider_name(self) -> &'static str {
        match self {
            Self::Man => "male",
            Self::Woman => "female",
            Self::Person => "person",
        }
    }

    /// The gender token the vision model reports for matching subjects,
    /// used to flag photos of somebody else.
    #[must_use]
    pub const fn detected_name(self) -> &'static str {
        match self {
            Self::Man => "man",
            Self::Woman => "woman",
            Self::Person => "person",
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TrainRequest {
    pub image_urls: Vec<String>,
    pub model_name: String,
    #[serde(default)]
    pub pack_slug: Option<String>,
    #[serde(default)]
    pub subject_type: SubjectType,
    #[serde(default)]
    pub training_config: Option<TrainingConfig>,
}

/// Optional overrides for the trainer; every field has a usable default.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(default)]
pub struct TrainingConfig {
    pub trigger_word: Option<String>,
    /// "subject" or "style"; pack presets override this.
    #[schema(value_type = String)]
    pub lora_type: LoraType,
    pub resolution: u32,
    pub learning_rate: f64,
    pub training_steps: u32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            trigger_word: None,
            lora_type: LoraType::Subject,
            resolution: 768,
            learning_rate: 1e-6,
            training_steps: 1000,
        }
    }
}

impl TrainRequest {
    /// Validates the request against the naming rules, the pack's minimum
    /// image count and the configured upload ceiling.
    pub fn validate(&self, max_images: usize) -> Result<(), TrainRequestError> {
        if self.image_urls.is_empty() {
            return Err(TrainRequestError::NoImages);
        }
        if self.image_urls.len() > max_images {
            return Err(TrainRequestError::TooManyImages {
                max: max_images,
                got: self.image_urls.len(),
            });
        }
        if !MODEL_NAME_RE.is_match(&self.model_name) {
            return Err(TrainRequestError::InvalidModelName);
        }
        if let Some(slug) = &self.pack_slug {
            let pack = find_pack(slug)
                .ok_or_else(|| TrainRequestError::UnknownPack(slug.clone()))?;
            if self.image_urls.len() < pack.min_images {
                return Err(TrainRequestError::NotEnoughImages {
                    pack: pack.slug.to_string(),
                    min: pack.min_images,
                    got: self.image_urls.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(model_name: &str, images: usize, pack_slug: Option<&str>) -> TrainRequest {
        TrainRequest {
            image_urls: (0..images).map(|i| format!("https://x/{i}.jpg")).collect(),
            model_name: model_name.to_string(),
            pack_slug: pack_slug.map(str::to_string),
            subject_type: SubjectType::default(),
            training_config: None,
        }
    }

    #[rstest]
    #[case("my-model")]
    #[case("model7")]
    #[case("a-b-c-1")]
    fn accepts_valid_model_names(#[case] name: &str) {
        assert_eq!(request(name, 1, None).validate(10), Ok(()));
    }

    #[rstest]
    #[case("My-Model")]
    #[case("my_model")]
    #[case("-leading")]
    #[case("trailing-")]
    #[case("")]
    fn rejects_invalid_model_names(#[case] name: &str) {
        assert_eq!(
            request(name, 1, None).validate(10),
            Err(TrainRequestError::InvalidModelName)
        );
    }

    #[test]
    fn rejects_empty_image_list() {
        assert_eq!(
            request("my-model", 0, None).validate(10),
            Err(TrainRequestError::NoImages)
        );
    }

    #[test]
    fn rejects_more_images_than_the_ceiling() {
        assert_eq!(
            request("my-model", 11, None).validate(10),
            Err(TrainRequestError::TooManyImages { max: 10, got: 11 })
        );
    }

    #[test]
    fn rejects_unknown_pack() {
        assert_eq!(
            request("my-model", 5, Some("wedding-headshots")).validate(10),
            Err(TrainRequestError::UnknownPack("wedding-headshots".to_string()))
        );
    }

    #[test]
    fn enforces_pack_minimum_image_count() {
        assert_eq!(
            request("my-model", 3, Some("actor-headshots")).validate(10),
            Err(TrainRequestError::NotEnoughImages {
                pack: "actor-headshots".to_string(),
                min: 5,
                got: 3
            })
        );
        assert_eq!(
            request("my-model", 5, Some("actor-headshots")).validate(10),
            Ok(())
        );
    }

    #[test]
    fn training_config_defaults_match_the_trainer() {
        let config: TrainingConfig = serde_json::from_str("{}").expect("empty config");
        assert_eq!(config.trigger_word, None);
        assert_eq!(config.lora_type, LoraType::Subject);
        assert_eq!(config.resolution, 768);
        assert_eq!(config.training_steps, 1000);
        assert!((config.learning_rate - 1e-6).abs() < f64::EPSILON);
    }

    #[test]
    fn subject_type_deserializes_lowercase() {
        let subject: SubjectType = serde_json::from_str("\"woman\"").expect("valid subject");
        assert_eq!(subject, SubjectType::Woman);
        assert_eq!(subject.provider_name(), "female");
        assert_eq!(subject.detected_name(), "woman");
    }
}
