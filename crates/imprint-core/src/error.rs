//! Error types for imprint-core

use thiserror::Error;

/// Errors raised while validating templates and result entries.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The requirement tree exceeded the flattening walk budget.
    #[error(
        "requirement tree of template '{template_id}' exceeded {budget} nodes during flattening"
    )]
    RunawayRequirementTree { template_id: String, budget: usize },

    /// A result entry declares the same field id more than once, so its
    /// value tuple cannot be resolved unambiguously.
    #[error("result entry '{entry_id}' declares field '{field_id}' more than once")]
    AmbiguousEntry { entry_id: String, field_id: String },
}

/// Result type alias for imprint-core operations
pub type Result<T> = std::result::Result<T, TemplateError>;
