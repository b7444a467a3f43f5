//! Value tuples for result entries.
//!
//! Two entries of the same result type collapse into one equivalence class
//! exactly when their ordered value tuples match. Absence of a value is
//! itself a comparable value, recorded as [`ABSENT_VALUE`].

use imprint_core::ResultEntry;

/// Placeholder recorded when an entry carries no value for a declared field.
pub const ABSENT_VALUE: &str = "undefined";

/// Separator joining tuple values into a class key. A control character, so
/// it cannot occur in legitimate field values.
pub const TUPLE_SEPARATOR: char = '\u{1F}';

/// Computes the ordered value tuple for `entry` over `field_ids`.
///
/// One value per field id, in field-id order. Matched field values are
/// marked variant-bearing on the entry for downstream inspection.
pub fn value_tuple(entry: &mut ResultEntry, field_ids: &[String]) -> Vec<String> {
    field_ids
        .iter()
        .map(|field_id| match entry.field_value_mut(field_id) {
            Some(fv) => {
                fv.variant_bearing = true;
                fv.value.clone()
            }
            None => ABSENT_VALUE.to_string(),
        })
        .collect()
}

/// Computes the equivalence-class key for `entry` over `field_ids`: the
/// value tuple joined on [`TUPLE_SEPARATOR`].
pub fn class_key(entry: &mut ResultEntry, field_ids: &[String]) -> String {
    let mut key = String::new();
    for (i, value) in value_tuple(entry, field_ids).into_iter().enumerate() {
        if i > 0 {
            key.push(TUPLE_SEPARATOR);
        }
        key.push_str(&value);
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn tuple_follows_field_id_order_not_entry_order() {
        let mut entry = ResultEntry::new("e1", "fine")
            .with_field_value("location", "High Street")
            .with_field_value("amount", "120.00");

        let tuple = value_tuple(&mut entry, &fields(&["amount", "location"]));
        assert_eq!(tuple, vec!["120.00", "High Street"]);
    }

    #[test]
    fn absent_values_are_distinct_comparable_values() {
        let mut with_value = ResultEntry::new("e1", "fine").with_field_value("amount", "120.00");
        let mut without_value = ResultEntry::new("e2", "fine");

        let ids = fields(&["amount"]);
        assert_eq!(value_tuple(&mut with_value, &ids), vec!["120.00"]);
        assert_eq!(value_tuple(&mut without_value, &ids), vec![ABSENT_VALUE]);
        assert_ne!(
            class_key(&mut with_value, &ids),
            class_key(&mut without_value, &ids)
        );
    }

    #[test]
    fn matched_values_are_marked_variant_bearing() {
        let mut entry = ResultEntry::new("e1", "fine")
            .with_field_value("amount", "120.00")
            .with_field_value("currency", "GBP");

        value_tuple(&mut entry, &fields(&["amount"]));

        assert!(entry.field_value("amount").unwrap().variant_bearing);
        assert!(!entry.field_value("currency").unwrap().variant_bearing);
        assert!(entry.is_variant_bearing());
    }

    #[test]
    fn class_key_joins_with_separator() {
        let mut entry = ResultEntry::new("e1", "fine")
            .with_field_value("amount", "120.00")
            .with_field_value("location", "High Street");

        let key = class_key(&mut entry, &fields(&["amount", "location"]));
        assert_eq!(key, format!("120.00{TUPLE_SEPARATOR}High Street"));
    }

    #[test]
    fn equal_tuples_produce_equal_keys() {
        let ids = fields(&["amount", "location"]);
        let mut a = ResultEntry::new("e1", "fine")
            .with_field_value("amount", "120.00")
            .with_field_value("location", "High Street");
        let mut b = ResultEntry::new("e2", "fine")
            .with_field_value("location", "High Street")
            .with_field_value("amount", "120.00");

        assert_eq!(class_key(&mut a, &ids), class_key(&mut b, &ids));
    }

    #[test]
    fn empty_field_list_yields_empty_key() {
        let mut entry = ResultEntry::new("e1", "fine").with_field_value("amount", "120.00");
        assert_eq!(class_key(&mut entry, &[]), "");
        assert!(!entry.is_variant_bearing());
    }
}
