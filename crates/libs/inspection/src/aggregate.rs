use crate::record::ImageAnalysisRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Consensus over several per-photo records: for every string field set in
/// at least one record, the most frequent value. Boolean fields never take
/// part in aggregation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregatedCharacteristics {
    values: BTreeMap<String, String>,
}

impl AggregatedCharacteristics {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }
}

/// Reduces an ordered sequence of records to one consensus mapping.
///
/// Per field, the value with the highest occurrence count wins. Ties go to
/// the tied value seen first in the input sequence; the choice is
/// deterministic for a given input order but carries no semantic
/// preference. An empty input yields an empty mapping.
#[must_use]
pub fn aggregate(records: &[ImageAnalysisRecord]) -> AggregatedCharacteristics {
    let mut collected: BTreeMap<&'static str, Vec<&str>> = BTreeMap::new();
    for record in records {
        for (field, value) in record.string_fields() {
            if let Some(value) = value {
                collected.entry(field).or_default().push(value);
            }
        }
    }

    let values = collected
        .into_iter()
        .filter_map(|(field, candidates)| {
            majority(&candidates).map(|winner| (field.to_string(), winner.to_string()))
        })
        .collect();
    AggregatedCharacteristics { values }
}

/// Most frequent value; ties resolve to the value whose first occurrence
/// comes earliest.
fn majority<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for candidate in candidates {
        match counts.iter_mut().find(|(value, _)| value == candidate) {
            Some(entry) => entry.1 += 1,
            None => counts.push((candidate, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        // Strictly greater keeps the first-seen value on ties.
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_hair_color(color: &str) -> ImageAnalysisRecord {
        ImageAnalysisRecord {
            hair_color: Some(color.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn empty_input_yields_empty_mapping() {
        let aggregated = aggregate(&[]);
        assert!(aggregated.is_empty());
        assert_eq!(aggregated.len(), 0);
    }

    #[test]
    fn majority_value_wins() {
        let records = vec![
            record_with_hair_color("brown"),
            record_with_hair_color("brown"),
            record_with_hair_color("black"),
        ];
        assert_eq!(aggregate(&records).get("hair_color"), Some("brown"));
    }

    #[test]
    fn ties_are_deterministic_and_first_seen_wins() {
        let records = vec![
            record_with_hair_color("black"),
            record_with_hair_color("brown"),
        ];
        let first = aggregate(&records);
        for _ in 0..10 {
            assert_eq!(aggregate(&records), first);
        }
        assert_eq!(first.get("hair_color"), Some("black"));
    }

    #[test]
    fn boolean_fields_are_never_aggregated() {
        let records = vec![ImageAnalysisRecord {
            selfie: true,
            blurry: true,
            ..Default::default()
        }];
        let aggregated = aggregate(&records);
        assert_eq!(aggregated.get("selfie"), None);
        assert_eq!(aggregated.get("blurry"), None);
        assert!(aggregated.is_empty());
    }

    #[test]
    fn only_fields_present_in_some_record_appear() {
        let records = vec![
            ImageAnalysisRecord {
                hair_color: Some("brown".to_string()),
                name: Some("man".to_string()),
                ..Default::default()
            },
            ImageAnalysisRecord {
                name: Some("man".to_string()),
                ..Default::default()
            },
        ];
        let aggregated = aggregate(&records);
        assert_eq!(aggregated.get("name"), Some("man"));
        assert_eq!(aggregated.get("hair_color"), Some("brown"));
        assert_eq!(aggregated.get("eye_color"), None);
        assert_eq!(aggregated.len(), 2);
    }

    #[test]
    fn absent_values_do_not_dilute_the_majority() {
        let records = vec![
            record_with_hair_color("red"),
            ImageAnalysisRecord::default(),
            record_with_hair_color("red"),
            record_with_hair_color("gray"),
        ];
        assert_eq!(aggregate(&records).get("hair_color"), Some("red"));
    }

    #[test]
    fn serializes_as_a_plain_object() {
        let records = vec![record_with_hair_color("brown")];
        let json = serde_json::to_value(aggregate(&records)).expect("serializable aggregate");
        assert_eq!(json, serde_json::json!({ "hair_color": "brown" }));
    }
}
