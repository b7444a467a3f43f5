//! Imprint - variant expansion for document production
//!
//! Given logical document candidates and the adjudication result entries
//! attached to them, imprint determines how many physically distinct
//! documents must be produced and which entries belong to each.
//!
//! # Example
//!
//! Three entries coloured `[red, blue, red]` collapse into two physical
//! documents; fixed entries ride along on both:
//!
//! ```
//! use imprint::prelude::*;
//!
//! let template = DocumentTemplate::new("notice", "Penalty notice").with_requirement(
//!     RequirementNode::new("offence").with_field(FieldDefinition::variant("colour")),
//! );
//! let candidate = DocumentVariantCandidate::from_template(template)
//!     .with_result(ResultEntry::new("r1", "offence").with_field_value("colour", "red"))
//!     .with_result(ResultEntry::new("r2", "offence").with_field_value("colour", "blue"))
//!     .with_result(ResultEntry::new("r3", "offence").with_field_value("colour", "red"))
//!     .with_result(ResultEntry::new("s1", "costs"));
//!
//! let expanded = imprint::expand(vec![candidate]).unwrap();
//! assert_eq!(expanded.len(), 2);
//! assert_eq!(expanded[0].results.len(), 3); // both red entries + costs
//! assert_eq!(expanded[1].results.len(), 2); // the blue entry + costs
//! ```

// Domain model
pub use imprint_core::{
    DescriptorCache, DocumentTemplate, DocumentVariantCandidate, FieldDefinition, FieldValue,
    RequirementNode, ResultEntry, TemplateDescriptor, TemplateError,
};

// Configuration
pub use imprint_config::{ConfigError, EnvironmentMode, ExpansionConfig};

// Engine
pub use imprint_engine::{ExpansionError, ExpansionOutcome, VariantExpansionEngine};

mod expand;
pub use expand::expand;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use imprint_config::{EnvironmentMode, ExpansionConfig};
    pub use imprint_core::{
        DocumentTemplate, DocumentVariantCandidate, FieldDefinition, RequirementNode, ResultEntry,
    };
    pub use imprint_engine::{ExpansionOutcome, VariantExpansionEngine};
}
