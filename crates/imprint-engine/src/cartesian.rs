//! Mixed-radix enumeration of class combinations.
//!
//! Selecting exactly one equivalence class per result type yields one
//! combination: the result set of one physical document. Enumeration uses an
//! iterative odometer over per-type class indices, so iteration order is
//! stable and reproducible (last type varies fastest).

use imprint_core::ResultEntry;
use smallvec::{smallvec, SmallVec};

use crate::grouper::TypeClasses;

/// One selected class per result type.
#[derive(Clone, Debug)]
pub struct Combination {
    /// (result type, chosen class key), in type-processing order.
    pub selection: Vec<(String, String)>,
    /// Members of all chosen classes, concatenated in type order.
    pub entries: Vec<ResultEntry>,
}

impl Combination {
    /// Number of result entries carried by this combination.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// The class key chosen for a result type, if that type participates.
    pub fn class_key_for(&self, result_type_id: &str) -> Option<&str> {
        self.selection
            .iter()
            .find(|(type_id, _)| type_id == result_type_id)
            .map(|(_, key)| key.as_str())
    }
}

/// Expected combination count: the overflow-checked product of fan-out
/// factors. `None` when the product does not fit in a u64.
pub fn expected_combinations(groups: &[TypeClasses]) -> Option<u64> {
    groups
        .iter()
        .try_fold(1u64, |acc, group| acc.checked_mul(group.fan_out() as u64))
}

/// Enumerates every selection of one class per type.
///
/// Returns an empty vector when `groups` is empty (nothing to expand) or any
/// group has no classes (an empty product has no assignments).
pub fn enumerate_combinations(groups: &[TypeClasses]) -> Vec<Combination> {
    if groups.is_empty() {
        return Vec::new();
    }
    let radices: SmallVec<[usize; 8]> = groups.iter().map(TypeClasses::fan_out).collect();
    if radices.iter().any(|&r| r == 0) {
        return Vec::new();
    }

    let mut counters: SmallVec<[usize; 8]> = smallvec![0; groups.len()];
    let mut combinations = Vec::new();
    loop {
        combinations.push(build_combination(groups, &counters));

        // Odometer increment with carry, rightmost position fastest.
        let mut position = counters.len();
        loop {
            if position == 0 {
                return combinations;
            }
            position -= 1;
            counters[position] += 1;
            if counters[position] < radices[position] {
                break;
            }
            counters[position] = 0;
        }
    }
}

fn build_combination(groups: &[TypeClasses], counters: &[usize]) -> Combination {
    let mut selection = Vec::with_capacity(groups.len());
    let mut entries = Vec::new();
    for (group, &index) in groups.iter().zip(counters) {
        if let Some((key, members)) = group.classes.get_index(index) {
            selection.push((group.result_type_id.clone(), key.clone()));
            entries.extend(members.iter().cloned());
        }
    }
    Combination { selection, entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn classes(type_id: &str, keys: &[&str]) -> TypeClasses {
        let mut map: IndexMap<String, Vec<ResultEntry>> = IndexMap::new();
        for (i, key) in keys.iter().enumerate() {
            map.insert(
                key.to_string(),
                vec![ResultEntry::new(format!("{type_id}-{i}"), type_id)],
            );
        }
        TypeClasses {
            result_type_id: type_id.to_string(),
            classes: map,
        }
    }

    #[test]
    fn enumerates_full_product_in_stable_order() {
        let groups = vec![classes("a", &["a1", "a2"]), classes("b", &["b1", "b2", "b3"])];

        let combinations = enumerate_combinations(&groups);
        assert_eq!(combinations.len(), 6);
        assert_eq!(expected_combinations(&groups), Some(6));

        let keys: Vec<Vec<&str>> = combinations
            .iter()
            .map(|c| c.selection.iter().map(|(_, k)| k.as_str()).collect())
            .collect();
        assert_eq!(
            keys,
            vec![
                vec!["a1", "b1"],
                vec!["a1", "b2"],
                vec!["a1", "b3"],
                vec!["a2", "b1"],
                vec!["a2", "b2"],
                vec!["a2", "b3"],
            ]
        );
    }

    #[test]
    fn single_type_yields_one_combination_per_class() {
        let groups = vec![classes("a", &["a1", "a2", "a3"])];
        let combinations = enumerate_combinations(&groups);

        assert_eq!(combinations.len(), 3);
        for combination in &combinations {
            assert_eq!(combination.selection.len(), 1);
            assert_eq!(combination.entry_count(), 1);
        }
    }

    #[test]
    fn combination_concatenates_members_in_type_order() {
        let mut first = classes("a", &["a1"]);
        first.classes[0].push(ResultEntry::new("a-extra", "a"));
        let groups = vec![first, classes("b", &["b1"])];

        let combinations = enumerate_combinations(&groups);
        assert_eq!(combinations.len(), 1);
        let ids: Vec<_> = combinations[0].entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a-0", "a-extra", "b-0"]);
        assert_eq!(combinations[0].class_key_for("a"), Some("a1"));
        assert_eq!(combinations[0].class_key_for("missing"), None);
    }

    #[test]
    fn empty_groups_skip_generation() {
        assert!(enumerate_combinations(&[]).is_empty());
        assert_eq!(expected_combinations(&[]), Some(1));
    }

    #[test]
    fn generated_count_matches_expected_product() {
        let groups = vec![
            classes("a", &["a1", "a2"]),
            classes("b", &["b1", "b2", "b3"]),
            classes("c", &["c1", "c2"]),
        ];

        let expected = expected_combinations(&groups).unwrap();
        assert_eq!(enumerate_combinations(&groups).len() as u64, expected);
    }
}
