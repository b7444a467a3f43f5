//! Result entry and candidate fixtures.

use imprint_core::{DocumentTemplate, DocumentVariantCandidate, ResultEntry};

/// An entry with no field values.
pub fn entry(id: &str, result_type_id: &str) -> ResultEntry {
    ResultEntry::new(id, result_type_id)
}

/// An entry carrying one field value.
pub fn valued_entry(id: &str, result_type_id: &str, field_id: &str, value: &str) -> ResultEntry {
    ResultEntry::new(id, result_type_id).with_field_value(field_id, value)
}

/// An entry carrying one field value, tagged with a root key.
pub fn rooted_entry(
    id: &str,
    result_type_id: &str,
    root_key: &str,
    field_id: &str,
    value: &str,
) -> ResultEntry {
    valued_entry(id, result_type_id, field_id, value).with_root_key(root_key)
}

/// A candidate over an owned template with the given result entries.
pub fn candidate(template: DocumentTemplate, results: Vec<ResultEntry>) -> DocumentVariantCandidate {
    let mut candidate = DocumentVariantCandidate::from_template(template);
    candidate.results = results;
    candidate
}
