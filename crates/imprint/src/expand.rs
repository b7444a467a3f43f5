//! Convenience entrypoint over the engine.

use imprint_core::DocumentVariantCandidate;
use imprint_engine::{Result, VariantExpansionEngine};

/// Expands a batch of candidates with the default configuration.
///
/// Build a [`VariantExpansionEngine`] directly to control environment mode
/// or the combination limit.
///
/// # Errors
///
/// Propagates [`imprint_engine::ExpansionError`] for malformed input or a
/// cartesian product over the default limit.
pub fn expand<P: Clone>(
    candidates: Vec<DocumentVariantCandidate<P>>,
) -> Result<Vec<DocumentVariantCandidate<P>>> {
    VariantExpansionEngine::default().expand(candidates)
}
