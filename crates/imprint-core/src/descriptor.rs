//! Flattened template metadata.
//!
//! A [`TemplateDescriptor`] reduces a template's requirement tree to the one
//! question expansion asks of it: for each result type, which variant-bearing
//! fields does the template declare, and in what order. The tree is walked
//! depth-first with children contributing before their parent; a field id
//! declared twice for one result type keeps its first-discovered position.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use crate::error::{Result, TemplateError};
use crate::model::{DocumentTemplate, RequirementNode};

/// Upper bound on nodes visited while flattening one template.
///
/// Owned nodes cannot form a reference cycle, but upstream-supplied trees can
/// still be pathologically large; the walk fails fast instead of grinding
/// through them.
pub const MAX_REQUIREMENT_NODES: usize = 10_000;

/// Per-template map from result type to its ordered variant-bearing field ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateDescriptor {
    template_id: String,
    variant_fields: IndexMap<String, Vec<String>>,
}

impl TemplateDescriptor {
    /// Flattens a template's requirement tree into a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::RunawayRequirementTree`] when the walk
    /// exceeds [`MAX_REQUIREMENT_NODES`].
    pub fn build(template: &DocumentTemplate) -> Result<Self> {
        let mut discovered: IndexMap<String, IndexSet<String>> = IndexMap::new();
        let mut visited = 0usize;

        for root in &template.requirements {
            // Explicit two-phase stack: a node is re-pushed as `expanded` and
            // contributes its fields only after its whole subtree has.
            let mut stack: Vec<(&RequirementNode, bool)> = vec![(root, false)];
            while let Some((node, expanded)) = stack.pop() {
                if expanded {
                    Self::collect_node(node, &mut discovered);
                    continue;
                }
                visited += 1;
                if visited > MAX_REQUIREMENT_NODES {
                    return Err(TemplateError::RunawayRequirementTree {
                        template_id: template.id.clone(),
                        budget: MAX_REQUIREMENT_NODES,
                    });
                }
                stack.push((node, true));
                for child in node.children.iter().rev() {
                    stack.push((child, false));
                }
            }
        }

        let variant_fields = discovered
            .into_iter()
            .map(|(type_id, ids)| (type_id, ids.into_iter().collect()))
            .collect();

        Ok(Self {
            template_id: template.id.clone(),
            variant_fields,
        })
    }

    fn collect_node(node: &RequirementNode, discovered: &mut IndexMap<String, IndexSet<String>>) {
        let mut ids = node.variant_field_ids().peekable();
        // Only nodes with a non-empty variant-bearing subset register.
        if ids.peek().is_none() {
            return;
        }
        let set = discovered.entry(node.result_type_id.clone()).or_default();
        for id in ids {
            set.insert(id.to_string());
        }
    }

    /// The template this descriptor was built from.
    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    /// Returns true when no result type carries variant-bearing fields.
    pub fn is_empty(&self) -> bool {
        self.variant_fields.is_empty()
    }

    /// Returns true when the given result type carries variant-bearing fields.
    pub fn covers(&self, result_type_id: &str) -> bool {
        self.variant_fields.contains_key(result_type_id)
    }

    /// Ordered variant-bearing field ids for a result type.
    pub fn variant_fields(&self, result_type_id: &str) -> Option<&[String]> {
        self.variant_fields.get(result_type_id).map(Vec::as_slice)
    }

    /// Result types with variant-bearing fields, in discovery order.
    pub fn result_type_ids(&self) -> impl Iterator<Item = &str> {
        self.variant_fields.keys().map(String::as_str)
    }
}

/// Caches descriptors per distinct template id.
///
/// Scoped to one expansion invocation and discarded with it; the engine never
/// holds descriptors across batches.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    descriptors: HashMap<String, Arc<TemplateDescriptor>>,
}

impl DescriptorCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the descriptor for `template`, building it on first use.
    pub fn descriptor(&mut self, template: &DocumentTemplate) -> Result<Arc<TemplateDescriptor>> {
        if let Some(descriptor) = self.descriptors.get(&template.id) {
            return Ok(Arc::clone(descriptor));
        }
        let descriptor = Arc::new(TemplateDescriptor::build(template)?);
        self.descriptors
            .insert(template.id.clone(), Arc::clone(&descriptor));
        Ok(descriptor)
    }

    /// Returns an already-built descriptor without building.
    pub fn get(&self, template_id: &str) -> Option<Arc<TemplateDescriptor>> {
        self.descriptors.get(template_id).map(Arc::clone)
    }

    /// Number of cached descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldDefinition;

    fn template_with(nodes: Vec<RequirementNode>) -> DocumentTemplate {
        DocumentTemplate {
            id: "t1".to_string(),
            name: "Test template".to_string(),
            requirements: nodes,
            apply_root_filtering: false,
        }
    }

    #[test]
    fn flattening_keeps_only_variant_bearing_subsets() {
        let template = template_with(vec![
            RequirementNode::new("fine")
                .with_field(FieldDefinition::variant("amount"))
                .with_field(FieldDefinition::fixed("currency")),
            RequirementNode::new("costs").with_field(FieldDefinition::fixed("amount")),
        ]);

        let descriptor = TemplateDescriptor::build(&template).unwrap();
        assert!(descriptor.covers("fine"));
        assert!(!descriptor.covers("costs"));
        assert_eq!(descriptor.variant_fields("fine").unwrap(), ["amount"]);
    }

    #[test]
    fn children_contribute_before_parent() {
        let template = template_with(vec![RequirementNode::new("fine")
            .with_field(FieldDefinition::variant("parent_field"))
            .with_child(RequirementNode::new("fine").with_field(FieldDefinition::variant("child_field")))]);

        let descriptor = TemplateDescriptor::build(&template).unwrap();
        assert_eq!(
            descriptor.variant_fields("fine").unwrap(),
            ["child_field", "parent_field"]
        );
    }

    #[test]
    fn duplicate_field_declarations_keep_first_discovered_position() {
        let template = template_with(vec![
            RequirementNode::new("fine")
                .with_field(FieldDefinition::variant("amount"))
                .with_field(FieldDefinition::variant("location")),
            RequirementNode::new("fine")
                .with_field(FieldDefinition::variant("location"))
                .with_field(FieldDefinition::variant("reason")),
        ]);

        let descriptor = TemplateDescriptor::build(&template).unwrap();
        assert_eq!(
            descriptor.variant_fields("fine").unwrap(),
            ["amount", "location", "reason"]
        );
    }

    #[test]
    fn empty_template_yields_empty_descriptor() {
        let descriptor = TemplateDescriptor::build(&template_with(vec![])).unwrap();
        assert!(descriptor.is_empty());
        assert_eq!(descriptor.result_type_ids().count(), 0);
    }

    #[test]
    fn runaway_tree_fails_fast() {
        let children: Vec<_> = (0..MAX_REQUIREMENT_NODES)
            .map(|i| RequirementNode::new(format!("type-{i}")))
            .collect();
        let mut root = RequirementNode::new("root");
        root.children = children;
        let template = template_with(vec![root]);

        match TemplateDescriptor::build(&template) {
            Err(TemplateError::RunawayRequirementTree { template_id, budget }) => {
                assert_eq!(template_id, "t1");
                assert_eq!(budget, MAX_REQUIREMENT_NODES);
            }
            other => panic!("expected RunawayRequirementTree, got {other:?}"),
        }
    }

    #[test]
    fn cache_builds_each_template_once() {
        let template = template_with(vec![
            RequirementNode::new("fine").with_field(FieldDefinition::variant("amount"))
        ]);

        let mut cache = DescriptorCache::new();
        let first = cache.descriptor(&template).unwrap();
        let second = cache.descriptor(&template).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert!(cache.get("t1").is_some());
        assert!(cache.get("t2").is_none());
    }
}
