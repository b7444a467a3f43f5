//! Result entries: the adjudicated outcome items attached to a candidate.

use std::collections::HashSet;

use crate::error::{Result, TemplateError};

/// A single field value carried by a result entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldValue {
    /// Field identifier, unique within the entry.
    pub field_id: String,
    /// The field's value as produced upstream.
    pub value: String,
    /// Set during expansion when this value fed a variant tuple.
    #[cfg_attr(feature = "serde", serde(default))]
    pub variant_bearing: bool,
}

impl FieldValue {
    /// Creates a new field value.
    pub fn new(field_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            value: value.into(),
            variant_bearing: false,
        }
    }
}

/// One adjudicated outcome item attached to a document candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultEntry {
    /// Entry identifier.
    pub id: String,
    /// The result type this entry is an instance of.
    pub result_type_id: String,
    /// Groups entries from the same underlying occurrence. Entries without
    /// a root key share one implicit root.
    #[cfg_attr(feature = "serde", serde(default))]
    pub root_key: Option<String>,
    /// Excludes this entry from expansion even when its result type carries
    /// variant-bearing fields.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exclude_from_expansion: bool,
    /// Field values in upstream order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub field_values: Vec<FieldValue>,
}

impl ResultEntry {
    /// Creates a new entry of the given result type.
    pub fn new(id: impl Into<String>, result_type_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            result_type_id: result_type_id.into(),
            root_key: None,
            exclude_from_expansion: false,
            field_values: Vec::new(),
        }
    }

    /// Tags this entry with a root key.
    pub fn with_root_key(mut self, key: impl Into<String>) -> Self {
        self.root_key = Some(key.into());
        self
    }

    /// Adds a field value.
    pub fn with_field_value(mut self, field_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.field_values.push(FieldValue::new(field_id, value));
        self
    }

    /// Marks this entry as excluded from expansion.
    pub fn excluded(mut self) -> Self {
        self.exclude_from_expansion = true;
        self
    }

    /// Finds a field value by id.
    pub fn field_value(&self, field_id: &str) -> Option<&FieldValue> {
        self.field_values.iter().find(|fv| fv.field_id == field_id)
    }

    /// Finds a field value by id, mutably.
    pub fn field_value_mut(&mut self, field_id: &str) -> Option<&mut FieldValue> {
        self.field_values
            .iter_mut()
            .find(|fv| fv.field_id == field_id)
    }

    /// Returns true if any field value was marked variant-bearing during
    /// expansion.
    pub fn is_variant_bearing(&self) -> bool {
        self.field_values.iter().any(|fv| fv.variant_bearing)
    }

    /// Checks that field ids are unique within this entry.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::AmbiguousEntry`] naming the first duplicated
    /// field id.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.field_values.len());
        for fv in &self.field_values {
            if !seen.insert(fv.field_id.as_str()) {
                return Err(TemplateError::AmbiguousEntry {
                    entry_id: self.id.clone(),
                    field_id: fv.field_id.clone(),
                });
            }
        }
        Ok(())
    }
}
