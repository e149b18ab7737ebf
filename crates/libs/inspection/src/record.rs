use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured description of a single portrait photo, derived from the
/// free-text answer of the vision model.
///
/// Boolean fields are always present and default to `false`. String fields
/// are `None` when the description did not determine them; `facial_hair`,
/// `glasses` and `is_bald` carry an explicit `"no"` whenever a non-empty
/// description was inspected.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImageAnalysisRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    pub blurry: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facial_hair: Option<String>,
    pub full_body_image_or_longshot: bool,
    pub funny_face: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glasses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_style: Option<String>,
    pub includes_multiple_people: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bald: Option<String>,
    /// Gender/person token detected in the description ("man", "woman", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub selfie: bool,
    pub wearing_hat: bool,
    pub wearing_sunglasses: bool,
}

impl ImageAnalysisRecord {
    /// The string-valued fields that take part in aggregation, in a fixed
    /// field-name order. Boolean fields never aggregate.
    pub(crate) fn string_fields(&self) -> [(&'static str, Option<&str>); 10] {
        [
            ("age", self.age.as_deref()),
            ("ethnicity", self.ethnicity.as_deref()),
            ("eye_color", self.eye_color.as_deref()),
            ("facial_hair", self.facial_hair.as_deref()),
            ("glasses", self.glasses.as_deref()),
            ("hair_color", self.hair_color.as_deref()),
            ("hair_length", self.hair_length.as_deref()),
            ("hair_style", self.hair_style.as_deref()),
            ("is_bald", self.is_bald.as_deref()),
            ("name", self.name.as_deref()),
        ]
    }

    /// User-facing warnings for a photo that makes a poor training input.
    /// `expected_subject` is the subject type the user picked for the
    /// model; a mismatching detected gender token is flagged too.
    #[must_use]
    pub fn issues(&self, expected_subject: Option<&str>) -> Vec<String> {
        let mut issues = Vec::new();
        if self.selfie {
            issues.push("Selfie".to_string());
        }
        if self.blurry {
            issues.push("Image is blurry".to_string());
        }
        if self.includes_multiple_people {
            issues.push("Multiple people".to_string());
        }
        if self.full_body_image_or_longshot {
            issues.push("Image is not a close-up".to_string());
        }
        if self.wearing_sunglasses {
            issues.push("Wearing sunglasses".to_string());
        }
        if self.wearing_hat {
            issues.push("Wearing hat".to_string());
        }
        if self.funny_face {
            issues.push("Funny face".to_string());
        }
        if let (Some(expected), Some(detected)) = (expected_subject, self.name.as_deref()) {
            if !detected.eq_ignore_ascii_case(expected) {
                issues.push(format!("Detected {detected}, expected {expected}"));
            }
        }
        issues
    }
}
