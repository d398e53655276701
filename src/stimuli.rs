//! Stimulus classification
//!
//! Partitions the discovered stimulus filenames into a fixed training set and
//! the remaining test set. Filenames are opaque tokens; membership is exact
//! string match.

use std::collections::HashSet;

/// Result of classifying discovered stimuli against a training specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StimulusSets {
    /// Training stimuli: discovered ∩ specification, sorted ascending by name.
    /// Shown identically and in the same order to every subject.
    pub training: Vec<String>,
    /// Test stimuli: discovered \ specification, in discovery order.
    /// Each subject sees these in a per-subject random order.
    pub test: Vec<String>,
}

/// Partition `discovered` into `(training, test)` against `training_spec`.
///
/// An empty specification, or one with no overlap with the discovered names,
/// simply yields an empty training set.
pub fn classify(discovered: &[String], training_spec: &[String]) -> StimulusSets {
    let spec: HashSet<&str> = training_spec.iter().map(String::as_str).collect();

    let mut training: Vec<String> = discovered
        .iter()
        .filter(|name| spec.contains(name.as_str()))
        .cloned()
        .collect();
    training.sort();

    let test: Vec<String> = discovered
        .iter()
        .filter(|name| !spec.contains(name.as_str()))
        .cloned()
        .collect();

    StimulusSets { training, test }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partition_is_disjoint_and_exhaustive() {
        let discovered = names(&["c.mp4", "a.mp4", "t2.mp4", "b.mp4", "t1.mp4"]);
        let spec = names(&["t1.mp4", "t2.mp4", "t3.mp4"]);

        let sets = classify(&discovered, &spec);

        assert_eq!(sets.training, names(&["t1.mp4", "t2.mp4"]));
        assert_eq!(sets.test, names(&["c.mp4", "a.mp4", "b.mp4"]));
        assert_eq!(sets.training.len() + sets.test.len(), discovered.len());
        for name in &sets.training {
            assert!(!sets.test.contains(name));
        }
    }

    #[test]
    fn test_training_sorted_regardless_of_discovery_order() {
        let discovered = names(&["02_tr.mp4", "01_tr.mp4"]);
        let spec = names(&["01_tr.mp4", "02_tr.mp4"]);
        let sets = classify(&discovered, &spec);
        assert_eq!(sets.training, names(&["01_tr.mp4", "02_tr.mp4"]));
        assert!(sets.test.is_empty());
    }

    #[test]
    fn test_empty_spec_contributes_nothing() {
        let discovered = names(&["a.mp4", "b.mp4"]);
        let sets = classify(&discovered, &[]);
        assert!(sets.training.is_empty());
        assert_eq!(sets.test, discovered);
    }

    #[test]
    fn test_spec_entries_absent_from_discovery_are_ignored() {
        let discovered = names(&["a.mp4"]);
        let spec = names(&["missing.mp4"]);
        let sets = classify(&discovered, &spec);
        assert!(sets.training.is_empty());
        assert_eq!(sets.test, names(&["a.mp4"]));
    }
}
