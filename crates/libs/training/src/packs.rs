use replicate::LoraType;

/// A curated headshot style the user can train towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackPreset {
    pub slug: &'static str,
    pub title: &'static str,
    pub style_prompt: &'static str,
    pub lora_type: LoraType,
    pub min_images: usize,
}

pub const PACKS: &[PackPreset] = &[
    PackPreset {
        slug: "actor-headshots",
        title: "Actor Headshots Pack",
        style_prompt: "professional actor headshot, dramatic lighting, cinematic, high detail, 85mm",
        lora_type: LoraType::Style,
        min_images: 5,
    },
    PackPreset {
        slug: "corporate-headshots",
        title: "Corporate Headshots Pack",
        style_prompt: "professional corporate headshot, clean background, business attire, professional lighting",
        lora_type: LoraType::Style,
        min_images: 5,
    },
];

#[must_use]
pub fn find_pack(slug: &str) -> Option<&'static PackPreset> {
    PACKS.iter().find(|pack| pack.slug == slug)
}

/// Requests without a pack slug fall back to the corporate look.
#[must_use]
pub fn default_pack() -> &'static PackPreset {
    &PACKS[1]
}
