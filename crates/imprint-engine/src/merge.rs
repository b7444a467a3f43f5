//! Cross-root folding of structurally identical combinations.
//!
//! When root filtering is on, each root expands independently; combinations
//! from different roots that carry the same variant signature share one
//! physical document, with their members concatenated into one result list.

use imprint_core::{DocumentVariantCandidate, ResultEntry};

use crate::cartesian::Combination;

/// Structural identity of one combination's variant-bearing entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombinationSignature {
    template_id: String,
    variant_entry_count: usize,
    /// (result type, chosen class key), in type order.
    class_keys: Vec<(String, String)>,
}

impl CombinationSignature {
    /// Builds the signature of a freshly generated combination.
    pub fn of(template_id: &str, combination: &Combination) -> Self {
        Self {
            template_id: template_id.to_string(),
            variant_entry_count: combination.entry_count(),
            class_keys: combination.selection.clone(),
        }
    }

    /// Returns true when two combinations may share one document.
    ///
    /// Template id and variant-entry count must match, and every result type
    /// present on both sides must have chosen the same class key. A type
    /// present on only one side does not block the match; the entry-count
    /// check is the only cross-type guard.
    pub fn matches(&self, other: &Self) -> bool {
        if self.template_id != other.template_id
            || self.variant_entry_count != other.variant_entry_count
        {
            return false;
        }
        self.class_keys.iter().all(|(type_id, key)| {
            match other.class_keys.iter().find(|(t, _)| t == type_id) {
                Some((_, other_key)) => key == other_key,
                None => true,
            }
        })
    }
}

/// Outcome of offering one combination to the merger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    /// A new clone was emitted.
    Emitted,
    /// The combination was folded into an existing clone.
    Folded,
}

/// Accumulates output clones for one candidate, folding combinations whose
/// signature matches an already-emitted clone.
///
/// With merging disabled every combination is emitted unconditionally.
#[derive(Debug)]
pub struct RootMerger<P> {
    merging_enabled: bool,
    emitted: Vec<(CombinationSignature, DocumentVariantCandidate<P>)>,
}

impl<P: Clone> RootMerger<P> {
    /// Creates a merger; `merging_enabled` follows the template's root
    /// filtering flag.
    pub fn new(merging_enabled: bool) -> Self {
        Self {
            merging_enabled,
            emitted: Vec::new(),
        }
    }

    /// Offers one combination.
    ///
    /// On a signature match the combination's entries are appended to the
    /// matching clone's result list. Otherwise a new clone is emitted: a deep
    /// copy of `base` whose result list is the combination followed by all
    /// fixed entries.
    pub fn offer(
        &mut self,
        signature: CombinationSignature,
        combination: Combination,
        base: &DocumentVariantCandidate<P>,
        fixed: &[ResultEntry],
    ) -> MergeOutcome {
        if self.merging_enabled {
            if let Some((_, existing)) = self
                .emitted
                .iter_mut()
                .find(|(emitted, _)| emitted.matches(&signature))
            {
                existing.results.extend(combination.entries);
                return MergeOutcome::Folded;
            }
        }

        let mut results = combination.entries;
        results.extend_from_slice(fixed);
        self.emitted.push((signature, base.clone_with_results(results)));
        MergeOutcome::Emitted
    }

    /// Number of clones emitted so far.
    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    /// Returns true when nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }

    /// Finishes the fold, returning clones in first-seen order.
    pub fn into_clones(self) -> Vec<DocumentVariantCandidate<P>> {
        self.emitted.into_iter().map(|(_, clone)| clone).collect()
    }
}
