//! Equivalence-class grouping of expandable entries.
//!
//! Within one root, expandable entries are grouped by result type, and each
//! group collapses into distinct classes keyed by the joined variant tuple.
//! The class count of a type is its fan-out factor for that root.

use imprint_core::{ResultEntry, TemplateDescriptor};
use indexmap::IndexMap;

use crate::tuple;

/// Entries of one result type collapsed into value-combination classes.
///
/// Class keys and member lists both keep insertion order.
#[derive(Clone, Debug, Default)]
pub struct TypeClasses {
    /// The result type shared by every member.
    pub result_type_id: String,
    /// Class key to members.
    pub classes: IndexMap<String, Vec<ResultEntry>>,
}

impl TypeClasses {
    /// Number of distinct value combinations observed for this type.
    pub fn fan_out(&self) -> usize {
        self.classes.len()
    }
}

/// Groups expandable entries by result type (first-seen order) and collapses
/// each group into equivalence classes.
///
/// Entries are marked variant-bearing as a side effect of tuple building.
pub fn group_by_type(
    descriptor: &TemplateDescriptor,
    expandable: Vec<ResultEntry>,
) -> Vec<TypeClasses> {
    let mut grouped: IndexMap<String, TypeClasses> = IndexMap::new();
    for mut entry in expandable {
        let field_ids = descriptor
            .variant_fields(&entry.result_type_id)
            .unwrap_or(&[]);
        let key = tuple::class_key(&mut entry, field_ids);
        let type_id = entry.result_type_id.clone();
        grouped
            .entry(type_id.clone())
            .or_insert_with(|| TypeClasses {
                result_type_id: type_id,
                classes: IndexMap::new(),
            })
            .classes
            .entry(key)
            .or_default()
            .push(entry);
    }
    grouped.into_values().collect()
}
