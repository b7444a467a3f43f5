//! Document templates and their requirement trees.
//!
//! A template is immutable reference data: it names the result types a
//! document may carry and, per result type, which fields force separate
//! physical documents when their values differ.

/// A field declared by a requirement node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDefinition {
    /// Field identifier, unique within its result type.
    pub id: String,
    /// Whether differing values of this field split documents apart.
    pub variant_bearing: bool,
}

impl FieldDefinition {
    /// Creates a new field definition.
    pub fn new(id: impl Into<String>, variant_bearing: bool) -> Self {
        Self {
            id: id.into(),
            variant_bearing,
        }
    }

    /// Creates a variant-bearing field definition.
    pub fn variant(id: impl Into<String>) -> Self {
        Self::new(id, true)
    }

    /// Creates a field definition that does not affect expansion.
    pub fn fixed(id: impl Into<String>) -> Self {
        Self::new(id, false)
    }
}

/// One node of a template's requirement tree.
///
/// Nodes are walked depth-first with children contributing before their
/// parent, so a child's field declarations win first-discovery ordering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequirementNode {
    /// The result type this node declares requirements for.
    pub result_type_id: String,
    /// Field definitions attached directly to this node.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: Vec<FieldDefinition>,
    /// Nested requirement nodes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<RequirementNode>,
}

impl RequirementNode {
    /// Creates a requirement node for the given result type.
    pub fn new(result_type_id: impl Into<String>) -> Self {
        Self {
            result_type_id: result_type_id.into(),
            fields: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds a field definition.
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a child requirement node.
    pub fn with_child(mut self, child: RequirementNode) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the ids of this node's variant-bearing fields, in
    /// declaration order.
    pub fn variant_field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.variant_bearing)
            .map(|f| f.id.as_str())
    }
}

/// A document template: reference data attached to each candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentTemplate {
    /// Template identifier.
    pub id: String,
    /// Human-readable template name.
    pub name: String,
    /// Requirement forest; each root is walked independently.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: Vec<RequirementNode>,
    /// Whether expansion runs once per root key and merges identical
    /// combinations across roots.
    #[cfg_attr(feature = "serde", serde(default))]
    pub apply_root_filtering: bool,
}

impl DocumentTemplate {
    /// Creates a new template with no requirements.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            requirements: Vec::new(),
            apply_root_filtering: false,
        }
    }

    /// Adds a requirement root.
    pub fn with_requirement(mut self, node: RequirementNode) -> Self {
        self.requirements.push(node);
        self
    }

    /// Enables or disables per-root expansion and cross-root merging.
    pub fn with_root_filtering(mut self, enabled: bool) -> Self {
        self.apply_root_filtering = enabled;
        self
    }
}
