use crate::normalizer::scan;
use crate::record::ImageAnalysisRecord;

fn yes_no(value: bool) -> Option<String> {
    Some(if value { "yes" } else { "no" }.to_string())
}

/// Derives a structured record from a free-text photo description.
///
/// Total and pure: unmatched patterns yield defaults, and empty or
/// whitespace-only input yields the all-defaults record (every boolean
/// `false`, every string field absent).
#[must_use]
pub fn inspect(description: &str) -> ImageAnalysisRecord {
    if description.trim().is_empty() {
        return ImageAnalysisRecord::default();
    }

    let matches = scan(description);
    let glasses = if matches.sunglasses {
        "sunglasses"
    } else if matches.plain_glasses {
        "yes"
    } else {
        "no"
    };

    ImageAnalysisRecord {
        age: matches.age,
        blurry: matches.blurry,
        ethnicity: matches.ethnicity,
        eye_color: matches.eye_color,
        facial_hair: yes_no(matches.facial_hair),
        full_body_image_or_longshot: matches.full_body,
        funny_face: matches.funny,
        glasses: Some(glasses.to_string()),
        hair_color: matches.hair_color,
        hair_length: matches.hair_length,
        hair_style: matches.hair_style,
        includes_multiple_people: matches.people_mentions > 1,
        is_bald: yes_no(matches.bald),
        name: matches.gender,
        selfie: matches.selfie,
        wearing_hat: matches.hat,
        wearing_sunglasses: matches.sunglasses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a selfie at the beach")]
    #[case("A SELFIE at the beach")]
    #[case("Looks like a Selfie.")]
    fn selfie_is_detected_in_any_case(#[case] text: &str) {
        assert!(inspect(text).selfie);
    }

    #[rstest]
    #[case("a person standing alone", false)]
    #[case("an empty hallway", false)]
    #[case("a person next to another person", true)]
    #[case("several people with visible faces", true)]
    fn multiple_people_requires_more_than_one_mention(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(inspect(text).includes_multiple_people, expected);
    }

    #[test]
    fn empty_input_yields_all_defaults() {
        let record = inspect("");
        assert_eq!(record, ImageAnalysisRecord::default());
        assert!(record.facial_hair.is_none());
        assert!(record.glasses.is_none());
        assert!(record.is_bald.is_none());
        assert!(!record.blurry);
    }

    #[test]
    fn whitespace_only_input_yields_all_defaults() {
        assert_eq!(inspect("  \n\t "), ImageAnalysisRecord::default());
    }

    #[test]
    fn non_empty_input_always_sets_yes_no_fields() {
        let record = inspect("an empty hallway");
        assert_eq!(record.facial_hair.as_deref(), Some("no"));
        assert_eq!(record.glasses.as_deref(), Some("no"));
        assert_eq!(record.is_bald.as_deref(), Some("no"));
    }

    #[test]
    fn inspect_is_idempotent() {
        let text = "A 34 years old man with a beard, wearing glasses, slightly blurry.";
        assert_eq!(inspect(text), inspect(text));
    }

    #[test]
    fn sunglasses_win_over_plain_glasses() {
        let record = inspect("wearing sunglasses outside");
        assert_eq!(record.glasses.as_deref(), Some("sunglasses"));
        assert!(record.wearing_sunglasses);
    }

    #[test]
    fn plain_glasses_are_reported_as_yes() {
        // "glasses" alone, without a sunglasses trigger.
        let record = inspect("black rimmed glasses on his nose");
        assert_eq!(record.glasses.as_deref(), Some("yes"));
        assert!(!record.wearing_sunglasses);
    }

    #[test]
    fn end_to_end_scenario() {
        let record =
            inspect("A photo of a man with short brown hair, wearing sunglasses, looks like a selfie.");
        let expected = ImageAnalysisRecord {
            name: Some("man".to_string()),
            hair_length: Some("short".to_string()),
            hair_color: Some("brown".to_string()),
            glasses: Some("sunglasses".to_string()),
            wearing_sunglasses: true,
            selfie: true,
            facial_hair: Some("no".to_string()),
            is_bald: Some("no".to_string()),
            ..Default::default()
        };
        assert_eq!(record, expected);
    }

    #[test]
    fn facial_hair_and_baldness_are_detected() {
        let record = inspect("a bald man with a gray beard and brown eyes");
        assert_eq!(record.is_bald.as_deref(), Some("yes"));
        assert_eq!(record.facial_hair.as_deref(), Some("yes"));
        assert_eq!(record.eye_color.as_deref(), Some("brown"));
    }

    #[test]
    fn full_body_and_funny_face_triggers() {
        let record = inspect("a full-body shot pulling a silly grin");
        assert!(record.full_body_image_or_longshot);
        assert!(record.funny_face);
    }
}
