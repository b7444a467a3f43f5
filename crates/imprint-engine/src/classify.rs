//! Partitioning of candidate entries into fixed and expandable.

use imprint_core::{ResultEntry, TemplateDescriptor};

/// A candidate's entries split against its template descriptor.
///
/// Relative order within each side follows the input entry order.
#[derive(Clone, Debug, Default)]
pub struct Partition {
    /// Entries copied verbatim into every output clone.
    pub fixed: Vec<ResultEntry>,
    /// Entries that participate in grouping and cartesian expansion.
    pub expandable: Vec<ResultEntry>,
}

impl Partition {
    /// Returns true when at least one entry participates in expansion.
    pub fn is_expandable(&self) -> bool {
        !self.expandable.is_empty()
    }

    /// Recombines both sides, fixed first. Used for passthrough, where the
    /// expandable side is empty and input order is preserved.
    pub fn into_entries(self) -> Vec<ResultEntry> {
        let mut entries = self.fixed;
        entries.extend(self.expandable);
        entries
    }
}

/// Splits `entries` into fixed and expandable.
///
/// An entry expands iff its result type carries variant-bearing fields in
/// `descriptor` and the entry is not individually excluded. When the
/// descriptor is empty everything is fixed.
pub fn partition_entries(descriptor: &TemplateDescriptor, entries: Vec<ResultEntry>) -> Partition {
    let mut partition = Partition::default();
    if descriptor.is_empty() {
        partition.fixed = entries;
        return partition;
    }
    for entry in entries {
        if descriptor.covers(&entry.result_type_id) && !entry.exclude_from_expansion {
            partition.expandable.push(entry);
        } else {
            partition.fixed.push(entry);
        }
    }
    partition
}
