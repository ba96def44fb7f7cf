//! Feature names must be unique within one device.

use xrinput_device_types::FeatureUsage;

use crate::{FeatureView, Violation, ViolationKind};

/// Names that occur more than once, with their occurrence count.
///
/// Sorted by name, so the output is deterministic regardless of the
/// order the provider listed the usages in.
pub fn duplicated_names(features: &[FeatureUsage]) -> Vec<(&str, usize)> {
    let mut names: Vec<&str> = features.iter().map(|usage| usage.name.as_str()).collect();
    names.sort_unstable();
    names
        .chunk_by(|a, b| a == b)
        .filter(|run| run.len() > 1)
        .filter_map(|run| run.first().map(|name| (*name, run.len())))
        .collect()
}

/// One violation per duplicated feature name.
pub fn check_unique(view: &FeatureView<'_>) -> Vec<Violation> {
    duplicated_names(view.features())
        .into_iter()
        .map(|(feature, occurrences)| {
            Violation::for_device(
                view.device(),
                ViolationKind::DuplicateFeature {
                    feature: feature.to_string(),
                    occurrences,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicates() {
        let features = vec![FeatureUsage::bool("A"), FeatureUsage::bool("B")];
        assert!(duplicated_names(&features).is_empty());
    }

    #[test]
    fn test_duplicates_sorted_with_counts() {
        let features = vec![
            FeatureUsage::bool("Trigger"),
            FeatureUsage::float("Grip"),
            FeatureUsage::float("Trigger"),
            FeatureUsage::bool("Grip"),
            FeatureUsage::bool("Trigger"),
        ];
        assert_eq!(duplicated_names(&features), vec![("Grip", 2), ("Trigger", 3)]);
    }

    #[test]
    fn test_empty_feature_list() {
        assert!(duplicated_names(&[]).is_empty());
    }
}
