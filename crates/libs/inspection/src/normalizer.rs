//! Pattern matching over a lower-cased photo description.
//!
//! Every detector is independent and best-effort. Combined alternations
//! keep the order they are listed in; the leftmost-earliest match wins,
//! which is the documented rule rather than an accident. All patterns run
//! against the lower-cased text, so none of them need `(?i)`.

use regex::Regex;
use std::sync::LazyLock;

static PEOPLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"person|people|faces?").expect("valid people regex"));
static WEARING_HAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"wearing a (?:hat|cap)").expect("valid hat regex"));
static AGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:year|yr)s?\s*old").expect("valid age regex"));
static GENDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"man|woman|male|female|person|boy|girl").expect("valid gender regex")
});
static HAIR_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(blonde|brunette|black|brown|red|gray|grey|white) hair")
        .expect("valid hair color regex")
});
static EYE_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(blue|brown|green|hazel|gray|grey) eyes?").expect("valid eye color regex")
});
static ETHNICITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"caucasian|asian|african|hispanic|latino|middle eastern|indian")
        .expect("valid ethnicity regex")
});
// Length descriptions usually carry a color or style between the length
// word and "hair" ("short brown hair"), so a couple of words may intervene.
static HAIR_LENGTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(short|medium|long)(?:\s+\w+){0,2}\s+hair").expect("valid hair length regex")
});
static HAIR_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"straight|curly|wavy|braided|dreadlocks|afro").expect("valid hair style regex")
});

/// Raw matches of the detection rules against one description.
pub(crate) struct TextMatches {
    pub selfie: bool,
    pub blurry: bool,
    pub people_mentions: usize,
    pub full_body: bool,
    pub sunglasses: bool,
    pub plain_glasses: bool,
    pub hat: bool,
    pub funny: bool,
    pub facial_hair: bool,
    pub bald: bool,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub ethnicity: Option<String>,
    pub hair_length: Option<String>,
    pub hair_style: Option<String>,
}

/// Scans a description for every detection rule. Pure; absence of a match
/// simply leaves the corresponding field undetected.
pub(crate) fn scan(description: &str) -> TextMatches {
    let text = description.to_lowercase();
    TextMatches {
        selfie: text.contains("selfie") || text.contains("self-portrait"),
        blurry: text.contains("blur") || text.contains("unclear"),
        people_mentions: PEOPLE_RE.find_iter(&text).count(),
        full_body: text.contains("full body") || text.contains("full-body"),
        sunglasses: text.contains("sunglasses") || text.contains("wearing glasses"),
        plain_glasses: text.contains("glasses"),
        hat: text.contains("hat") || WEARING_HAT_RE.is_match(&text),
        funny: text.contains("funny") || text.contains("silly"),
        facial_hair: text.contains("beard") || text.contains("mustache"),
        bald: text.contains("bald"),
        age: AGE_RE.captures(&text).map(|c| c[1].to_string()),
        gender: GENDER_RE.find(&text).map(|m| m.as_str().to_string()),
        hair_color: HAIR_COLOR_RE.captures(&text).map(|c| c[1].to_string()),
        eye_color: EYE_COLOR_RE.captures(&text).map(|c| c[1].to_string()),
        ethnicity: ETHNICITY_RE.find(&text).map(|m| m.as_str().to_string()),
        hair_length: HAIR_LENGTH_RE.captures(&text).map(|c| c[1].to_lowercase()),
        hair_style: HAIR_STYLE_RE.find(&text).map(|m| m.as_str().to_lowercase()),
    }
}
