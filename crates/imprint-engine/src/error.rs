//! Error types for the expansion engine

use imprint_core::TemplateError;
use thiserror::Error;

/// Errors surfaced by variant expansion.
#[derive(Debug, Error)]
pub enum ExpansionError {
    /// Malformed template or entry detected before expansion.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The cartesian product for one root exceeds the configured cap.
    #[error(
        "template '{template_id}': root would expand into {combinations} combinations, \
         over the configured limit of {limit}"
    )]
    CombinationLimitExceeded {
        template_id: String,
        combinations: u64,
        limit: u64,
    },

    /// The cartesian product does not fit in a u64. Pathological input.
    #[error("template '{template_id}': combination count overflowed while sizing the cartesian product")]
    CombinationOverflow { template_id: String },

    /// Internal-consistency fault: enumeration produced a different number of
    /// combinations than the product of fan-out factors predicts.
    #[error(
        "template '{template_id}': generated {generated} combinations where {expected} were expected"
    )]
    CombinationCountMismatch {
        template_id: String,
        generated: usize,
        expected: u64,
    },
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, ExpansionError>;
