//! Tests for model types (template, entry, candidate).

use std::sync::Arc;

use crate::error::TemplateError;
use crate::model::{
    DocumentTemplate, DocumentVariantCandidate, FieldDefinition, RequirementNode, ResultEntry,
};

#[test]
fn requirement_node_lists_variant_field_ids_in_declaration_order() {
    let node = RequirementNode::new("fine")
        .with_field(FieldDefinition::variant("amount"))
        .with_field(FieldDefinition::fixed("currency"))
        .with_field(FieldDefinition::variant("location"));

    let ids: Vec<_> = node.variant_field_ids().collect();
    assert_eq!(ids, vec!["amount", "location"]);
}

#[test]
fn entry_field_lookup_finds_by_id() {
    let entry = ResultEntry::new("e1", "fine")
        .with_field_value("amount", "120.00")
        .with_field_value("location", "High Street");

    assert_eq!(entry.field_value("amount").map(|fv| fv.value.as_str()), Some("120.00"));
    assert!(entry.field_value("missing").is_none());
}

#[test]
fn entry_validate_rejects_duplicate_field_ids() {
    let entry = ResultEntry::new("e1", "fine")
        .with_field_value("amount", "120.00")
        .with_field_value("amount", "240.00");

    match entry.validate() {
        Err(TemplateError::AmbiguousEntry { entry_id, field_id }) => {
            assert_eq!(entry_id, "e1");
            assert_eq!(field_id, "amount");
        }
        other => panic!("expected AmbiguousEntry, got {other:?}"),
    }
}

#[test]
fn entry_validate_accepts_unique_field_ids() {
    let entry = ResultEntry::new("e1", "fine")
        .with_field_value("amount", "120.00")
        .with_field_value("location", "High Street");

    assert!(entry.validate().is_ok());
}

#[test]
fn candidate_clone_with_results_preserves_template_and_passenger() {
    let template = Arc::new(DocumentTemplate::new("t1", "Fine notice"));
    let candidate = DocumentVariantCandidate::new(Arc::clone(&template))
        .with_result(ResultEntry::new("e1", "fine"))
        .with_passenger("recipient-42".to_string());

    let replacement = vec![ResultEntry::new("e2", "fine")];
    let clone = candidate.clone_with_results(replacement);

    assert_eq!(clone.template_id(), "t1");
    assert_eq!(clone.passenger, "recipient-42");
    assert_eq!(clone.results.len(), 1);
    assert_eq!(clone.results[0].id, "e2");
    // The original keeps its own result list.
    assert_eq!(candidate.results[0].id, "e1");
}

#[test]
fn candidate_clones_are_independent() {
    let candidate = DocumentVariantCandidate::from_template(DocumentTemplate::new("t1", "Notice"))
        .with_result(ResultEntry::new("e1", "fine").with_field_value("amount", "10"));

    let mut copy = candidate.clone();
    copy.results[0].field_values[0].value = "99".to_string();

    assert_eq!(candidate.results[0].field_values[0].value, "10");
}
