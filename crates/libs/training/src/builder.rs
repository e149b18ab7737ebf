use crate::packs::{default_pack, find_pack};
use crate::request::TrainRequest;
use inspection::AggregatedCharacteristics;
use replicate::TrainingInput;

/// Derives the trigger word from the model name when the config does not
/// supply one: `sks` plus the first four characters of the name.
#[must_use]
pub fn derive_trigger_word(model_name: &str) -> String {
    let prefix: String = model_name.chars().take(4).collect();
    format!("sks{prefix}")
}

/// Builds the provider training input from a validated request and the
/// aggregated characteristics of its photos. The pack preset decides the
/// style prompt and LoRA type; the consensus characteristics are folded
/// into the prompt so the trained model reflects the subject's appearance.
#[must_use]
pub fn build_training_input(
    request: &TrainRequest,
    characteristics: &AggregatedCharacteristics,
) -> TrainingInput {
    let pack = request
        .pack_slug
        .as_deref()
        .and_then(find_pack)
        .unwrap_or_else(default_pack);
    let config = request.training_config.clone().unwrap_or_default();
    let trigger_word = config
        .trigger_word
        .unwrap_or_else(|| derive_trigger_word(&request.model_name));

    TrainingInput {
        input_images: request.image_urls.clone(),
        model_name: request.model_name.clone(),
        trigger_word,
        lora_type: pack.lora_type,
        training_steps: config.training_steps,
        learning_rate: config.learning_rate,
        resolution: config.resolution,
        style_prompt: render_style_prompt(pack.style_prompt, characteristics),
        subject_type: request.subject_type.provider_name().to_string(),
    }
}

fn render_style_prompt(base: &str, characteristics: &AggregatedCharacteristics) -> String {
    if characteristics.is_empty() {
        return base.to_string();
    }
    let hints = characteristics
        .iter()
        .map(|(field, value)| format!("{}: {value}", field.replace('_', " ")))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{base}, subject characteristics: {hints}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{SubjectType, TrainingConfig};
    use inspection::{ImageAnalysisRecord, aggregate};
    use replicate::LoraType;

    fn request(pack_slug: Option<&str>) -> TrainRequest {
        TrainRequest {
            image_urls: vec![
                "https://x/1.jpg".to_string(),
                "https://x/2.jpg".to_string(),
            ],
            model_name: "my-pro-headshots".to_string(),
            pack_slug: pack_slug.map(str::to_string),
            subject_type: SubjectType::Man,
            training_config: None,
        }
    }

    #[test]
    fn trigger_word_is_derived_from_the_model_name() {
        assert_eq!(derive_trigger_word("my-pro-headshots"), "sksmy-p");
        assert_eq!(derive_trigger_word("ab"), "sksab");
    }

    #[test]
    fn configured_trigger_word_wins_over_derivation() {
        let mut request = request(None);
        request.training_config = Some(TrainingConfig {
            trigger_word: Some("skszzz".to_string()),
            ..Default::default()
        });
        let input = build_training_input(&request, &AggregatedCharacteristics::default());
        assert_eq!(input.trigger_word, "skszzz");
    }

    #[test]
    fn pack_preset_decides_style_prompt_and_lora_type() {
        let input = build_training_input(
            &request(Some("actor-headshots")),
            &AggregatedCharacteristics::default(),
        );
        assert_eq!(input.lora_type, LoraType::Style);
        assert_eq!(
            input.style_prompt,
            "professional actor headshot, dramatic lighting, cinematic, high detail, 85mm"
        );
    }

    #[test]
    fn missing_pack_falls_back_to_corporate() {
        let input = build_training_input(&request(None), &AggregatedCharacteristics::default());
        assert!(input.style_prompt.starts_with("professional corporate headshot"));
    }

    #[test]
    fn characteristics_are_folded_into_the_style_prompt() {
        let records = vec![
            ImageAnalysisRecord {
                hair_color: Some("brown".to_string()),
                name: Some("man".to_string()),
                ..Default::default()
            },
            ImageAnalysisRecord {
                hair_color: Some("brown".to_string()),
                ..Default::default()
            },
        ];
        let input = build_training_input(&request(None), &aggregate(&records));
        assert!(input.style_prompt.contains("subject characteristics:"));
        assert!(input.style_prompt.contains("hair color: brown"));
        assert!(input.style_prompt.contains("name: man"));
    }

    #[test]
    fn request_fields_flow_through() {
        let input = build_training_input(&request(None), &AggregatedCharacteristics::default());
        assert_eq!(input.input_images.len(), 2);
        assert_eq!(input.model_name, "my-pro-headshots");
        assert_eq!(input.subject_type, "male");
        assert_eq!(input.training_steps, 1000);
        assert_eq!(input.resolution, 768);
    }
}
