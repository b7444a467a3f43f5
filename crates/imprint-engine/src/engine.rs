//! Variant expansion orchestrator.

use std::sync::Arc;

use imprint_config::ExpansionConfig;
use imprint_core::{
    DescriptorCache, DocumentVariantCandidate, ResultEntry, TemplateDescriptor,
};
use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, error, trace};

use crate::cartesian;
use crate::classify;
use crate::error::{ExpansionError, Result};
use crate::grouper;
use crate::merge::{CombinationSignature, MergeOutcome, RootMerger};

/// Aggregate counters for one expansion invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpansionOutcome {
    /// Candidates received.
    pub candidates_in: usize,
    /// Clones produced, passthroughs included.
    pub candidates_out: usize,
    /// Candidates that passed through unexpanded.
    pub passthrough_candidates: usize,
    /// Combinations generated across all roots.
    pub combinations_generated: usize,
    /// Combinations folded into an already-emitted clone.
    pub combinations_folded: usize,
}

/// Expands document candidates into physically distinct documents.
///
/// The engine holds configuration only; all bookkeeping lives in
/// invocation-scoped state, so one engine can serve any number of `expand`
/// calls, including concurrent ones.
///
/// # Example
///
/// ```
/// use imprint_config::ExpansionConfig;
/// use imprint_core::{
///     DocumentTemplate, DocumentVariantCandidate, FieldDefinition, RequirementNode, ResultEntry,
/// };
/// use imprint_engine::VariantExpansionEngine;
///
/// let template = DocumentTemplate::new("notice", "Fine notice").with_requirement(
///     RequirementNode::new("fine").with_field(FieldDefinition::variant("amount")),
/// );
/// let candidate = DocumentVariantCandidate::from_template(template)
///     .with_result(ResultEntry::new("e1", "fine").with_field_value("amount", "120"))
///     .with_result(ResultEntry::new("e2", "fine").with_field_value("amount", "240"));
///
/// let engine = VariantExpansionEngine::new(ExpansionConfig::default());
/// let expanded = engine.expand(vec![candidate]).unwrap();
/// assert_eq!(expanded.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VariantExpansionEngine {
    config: ExpansionConfig,
}

impl VariantExpansionEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: ExpansionConfig) -> Self {
        Self { config }
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    /// Expands a batch of candidates, preserving candidate order and, within
    /// a candidate, combination emission order.
    ///
    /// # Errors
    ///
    /// Fails fast on malformed templates or entries, on a cartesian product
    /// over the configured limit, and (in fail-fast mode) on an
    /// internal-consistency fault.
    pub fn expand<P: Clone>(
        &self,
        candidates: Vec<DocumentVariantCandidate<P>>,
    ) -> Result<Vec<DocumentVariantCandidate<P>>> {
        self.expand_with_outcome(candidates).map(|(expanded, _)| expanded)
    }

    /// Expands a batch and reports aggregate counters alongside the output.
    pub fn expand_with_outcome<P: Clone>(
        &self,
        candidates: Vec<DocumentVariantCandidate<P>>,
    ) -> Result<(Vec<DocumentVariantCandidate<P>>, ExpansionOutcome)> {
        let mut cache = DescriptorCache::new();
        let mut outcome = ExpansionOutcome {
            candidates_in: candidates.len(),
            ..ExpansionOutcome::default()
        };
        debug!(event = "expansion_start", candidates = candidates.len());

        let mut output = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let descriptor = cache.descriptor(&candidate.template)?;
            output.extend(self.expand_candidate(&descriptor, candidate, &mut outcome)?);
        }
        outcome.candidates_out = output.len();

        debug!(
            event = "expansion_end",
            candidates_in = outcome.candidates_in,
            candidates_out = outcome.candidates_out,
            combinations = outcome.combinations_generated,
            folded = outcome.combinations_folded,
        );
        Ok((output, outcome))
    }

    /// Expands candidates in parallel, one rayon task per candidate.
    ///
    /// Descriptors are built up front so the tasks share a read-only cache;
    /// output order matches input order.
    pub fn expand_parallel<P>(
        &self,
        candidates: Vec<DocumentVariantCandidate<P>>,
    ) -> Result<Vec<DocumentVariantCandidate<P>>>
    where
        P: Clone + Send + Sync,
    {
        let mut cache = DescriptorCache::new();
        for candidate in &candidates {
            cache.descriptor(&candidate.template)?;
        }
        let cache = &cache;

        let expanded: Vec<Result<Vec<DocumentVariantCandidate<P>>>> = candidates
            .into_par_iter()
            .map(|candidate| {
                let descriptor = match cache.get(candidate.template_id()) {
                    Some(descriptor) => descriptor,
                    None => Arc::new(TemplateDescriptor::build(&candidate.template)?),
                };
                let mut outcome = ExpansionOutcome::default();
                self.expand_candidate(&descriptor, candidate, &mut outcome)
            })
            .collect();

        let mut output = Vec::new();
        for clones in expanded {
            output.extend(clones?);
        }
        Ok(output)
    }

    /// Expands one candidate with fresh bookkeeping.
    fn expand_candidate<P: Clone>(
        &self,
        descriptor: &TemplateDescriptor,
        candidate: DocumentVariantCandidate<P>,
        outcome: &mut ExpansionOutcome,
    ) -> Result<Vec<DocumentVariantCandidate<P>>> {
        for entry in &candidate.results {
            entry.validate()?;
        }

        let mut candidate = candidate;
        let entries = std::mem::take(&mut candidate.results);
        let partition = classify::partition_entries(descriptor, entries);

        if !partition.is_expandable() {
            trace!(event = "candidate_passthrough", template = %candidate.template_id());
            outcome.passthrough_candidates += 1;
            candidate.results = partition.into_entries();
            return Ok(vec![candidate]);
        }

        let template_id = candidate.template.id.clone();
        let root_filtering = candidate.template.apply_root_filtering;
        let mut merger = RootMerger::new(root_filtering);

        for (root_key, entries) in split_roots(partition.expandable, root_filtering) {
            let groups = grouper::group_by_type(descriptor, entries);
            if groups.is_empty() {
                continue;
            }

            let expected = cartesian::expected_combinations(&groups).ok_or_else(|| {
                ExpansionError::CombinationOverflow {
                    template_id: template_id.clone(),
                }
            })?;
            if let Some(limit) = self.config.combination_limit {
                if expected > limit {
                    return Err(ExpansionError::CombinationLimitExceeded {
                        template_id: template_id.clone(),
                        combinations: expected,
                        limit,
                    });
                }
            }

            let combinations = cartesian::enumerate_combinations(&groups);
            self.verify_combination_count(&template_id, combinations.len(), expected)?;
            trace!(
                event = "root_expanded",
                template = %template_id,
                root = root_key.as_deref().unwrap_or("<implicit>"),
                combinations = combinations.len(),
            );
            outcome.combinations_generated += combinations.len();

            for combination in combinations {
                let signature = CombinationSignature::of(&template_id, &combination);
                let merged = merger.offer(signature, combination, &candidate, &partition.fixed);
                if merged == MergeOutcome::Folded {
                    outcome.combinations_folded += 1;
                }
            }
        }

        let clones = merger.into_clones();
        debug!(event = "candidate_expanded", template = %template_id, clones = clones.len());
        Ok(clones)
    }

    /// Surfaces a generated-count mismatch per the configured mode. The
    /// generated combinations are never dropped.
    fn verify_combination_count(
        &self,
        template_id: &str,
        generated: usize,
        expected: u64,
    ) -> Result<()> {
        if generated as u64 == expected {
            return Ok(());
        }
        if self.config.environment_mode.fail_fast() {
            return Err(ExpansionError::CombinationCountMismatch {
                template_id: template_id.to_string(),
                generated,
                expected,
            });
        }
        error!(
            event = "combination_count_mismatch",
            template = %template_id,
            generated,
            expected,
        );
        Ok(())
    }
}

/// Partitions expandable entries by root key, in first-seen root order.
/// Entries without a root key share the implicit `None` root. With root
/// filtering disabled the whole candidate is one root.
fn split_roots(
    expandable: Vec<ResultEntry>,
    root_filtering: bool,
) -> IndexMap<Option<String>, Vec<ResultEntry>> {
    let mut roots: IndexMap<Option<String>, Vec<ResultEntry>> = IndexMap::new();
    if !root_filtering {
        roots.insert(None, expandable);
        return roots;
    }
    for entry in expandable {
        roots.entry(entry.root_key.clone()).or_default().push(entry);
    }
    roots
}
