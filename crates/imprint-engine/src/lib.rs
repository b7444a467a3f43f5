//! Imprint Engine - variant expansion for document candidates
//!
//! Given one logical document-to-produce and its result entries, the engine
//! determines how many physically distinct documents must be generated and
//! which entries belong to each:
//!
//! - [`classify`] splits entries into fixed and expandable against the
//!   template's variant-field metadata
//! - [`tuple`] and [`grouper`] collapse expandable entries into per-type
//!   equivalence classes
//! - [`cartesian`] enumerates one combination per class selection
//! - [`merge`] folds structurally identical combinations across roots
//! - [`engine`] orchestrates the pipeline per candidate

pub mod cartesian;
pub mod classify;
pub mod engine;
pub mod error;
pub mod grouper;
pub mod merge;
pub mod tuple;


pub use cartesian::Combination;
pub use classify::Partition;
pub use engine::{ExpansionOutcome, VariantExpansionEngine};
pub use error::{ExpansionError, Result};
pub use grouper::TypeClasses;
pub use merge::{CombinationSignature, MergeOutcome, RootMerger};
pub use tuple::{ABSENT_VALUE, TUPLE_SEPARATOR};
