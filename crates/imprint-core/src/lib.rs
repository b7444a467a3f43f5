//! Imprint Core - domain model and template metadata for variant expansion
//!
//! This crate provides the data types shared across the imprint workspace:
//! - Templates and requirement trees describing which fields split documents
//! - Result entries and the candidates that carry them
//! - Flattened template descriptors and their invocation-scoped cache
//! - Error types for malformed templates and entries

pub mod descriptor;
pub mod error;
pub mod model;

pub use descriptor::{DescriptorCache, TemplateDescriptor, MAX_REQUIREMENT_NODES};
pub use error::{Result, TemplateError};
pub use model::{
    DocumentTemplate, DocumentVariantCandidate, FieldDefinition, FieldValue, RequirementNode,
    ResultEntry,
};
