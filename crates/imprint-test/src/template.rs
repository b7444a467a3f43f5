//! Template fixtures.

use imprint_core::{DocumentTemplate, FieldDefinition, RequirementNode};

/// A template declaring one variant-bearing field on one result type.
pub fn single_variant_template(
    template_id: &str,
    result_type_id: &str,
    field_id: &str,
) -> DocumentTemplate {
    DocumentTemplate::new(template_id, format!("{template_id} template")).with_requirement(
        RequirementNode::new(result_type_id).with_field(FieldDefinition::variant(field_id)),
    )
}

/// A template declaring one variant-bearing field on each of two result types.
pub fn two_type_template(
    template_id: &str,
    first: (&str, &str),
    second: (&str, &str),
) -> DocumentTemplate {
    DocumentTemplate::new(template_id, format!("{template_id} template"))
        .with_requirement(
            RequirementNode::new(first.0).with_field(FieldDefinition::variant(first.1)),
        )
        .with_requirement(
            RequirementNode::new(second.0).with_field(FieldDefinition::variant(second.1)),
        )
}

/// A template with no variant-bearing fields: every candidate passes through.
pub fn fixed_only_template(template_id: &str) -> DocumentTemplate {
    DocumentTemplate::new(template_id, format!("{template_id} template")).with_requirement(
        RequirementNode::new("summary").with_field(FieldDefinition::fixed("reference")),
    )
}
