// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dynamic-field record ordering.
//!
//! Records are compared on a field chosen at runtime by name. Values
//! collapse into three classes with a total order between them:
//!
//! 1. not recorded — absent field, `null`, empty string, the
//!    `"unknown"` sentinel, or any non-scalar value; always the
//!    smallest class.
//! 2. numeric — JSON numbers and strings that fully parse as numbers,
//!    ordered by value.
//! 3. text — everything else, ordered lexicographically after all
//!    numerics.
//!
//! The sort is stable: records with equal keys keep their original
//! relative order in both directions.

use std::cmp::Ordering;

use serde_json::Value;

use crate::types::{Record, SortDirection, SortSpec};

#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    NotRecorded,
    Number(f64),
    Text(String),
}

/// Order a collection in place according to the spec.
///
/// A spec without a field name is a no-op: the collection keeps its
/// original order. Never fails, whatever shape the records have.
pub fn sort_records(records: &mut [Record], spec: &SortSpec) {
    let Some(field) = spec.field.as_deref().filter(|f| !f.is_empty()) else {
        return;
    };

    records.sort_by(|a, b| {
        let ordering = compare(&sort_key(a, field), &sort_key(b, field));
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn sort_key(record: &Record, field: &str) -> SortKey {
    match record.field(field) {
        Some(Value::String(s)) => {
            if s.is_empty() || s == "unknown" {
                return SortKey::NotRecorded;
            }
            match s.trim().parse::<f64>() {
                Ok(n) if !n.is_nan() => SortKey::Number(n),
                _ => SortKey::Text(s.clone()),
            }
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if !v.is_nan() => SortKey::Number(v),
            _ => SortKey::NotRecorded,
        },
        _ => SortKey::NotRecorded,
    }
}

fn compare(a: &SortKey, b: &SortKey) -> Ordering {
    use SortKey::*;
    match (a, b) {
        (NotRecorded, NotRecorded) => Ordering::Equal,
        (NotRecorded, _) => Ordering::Less,
        (_, NotRecorded) => Ordering::Greater,
        (Number(x), Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (Number(_), Text(_)) => Ordering::Less,
        (Text(_), Number(_)) => Ordering::Greater,
        (Text(x), Text(y)) => x.cmp(y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SortDirection;
    use serde_json::json;

    fn records(values: &[serde_json::Value]) -> Vec<Record> {
        values
            .iter()
            .map(|v| serde_json::from_value(v.clone()).expect("fixture should deserialize"))
            .collect()
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.display_name()).collect()
    }

    fn spec(field: &str, direction: SortDirection) -> SortSpec {
        SortSpec::new(Some(field.to_string()), direction)
    }

    #[test]
    fn unknown_sorts_first_ascending() {
        let mut collection = records(&[
            json!({"name": "a", "population": "1000"}),
            json!({"name": "b", "population": "unknown"}),
            json!({"name": "c", "population": "500"}),
        ]);
        sort_records(&mut collection, &spec("population", SortDirection::Ascending));
        assert_eq!(names(&collection), ["b", "c", "a"]);
    }

    #[test]
    fn unknown_sorts_last_descending() {
        let mut collection = records(&[
            json!({"name": "a", "population": "1000"}),
            json!({"name": "b", "population": "unknown"}),
            json!({"name": "c", "population": "500"}),
        ]);
        sort_records(
            &mut collection,
            &spec("population", SortDirection::Descending),
        );
        assert_eq!(names(&collection), ["a", "c", "b"]);
    }

    #[test]
    fn empty_field_is_a_passthrough() {
        let mut collection = records(&[
            json!({"name": "z", "population": "9"}),
            json!({"name": "a", "population": "1"}),
        ]);
        sort_records(
            &mut collection,
            &SortSpec::new(Some(String::new()), SortDirection::Ascending),
        );
        assert_eq!(names(&collection), ["z", "a"]);

        sort_records(&mut collection, &SortSpec::unsorted());
        assert_eq!(names(&collection), ["z", "a"]);
    }

    #[test]
    fn numeric_strings_compare_by_value_not_lexically() {
        let mut collection = records(&[
            json!({"name": "a", "cargo_capacity": "100"}),
            json!({"name": "b", "cargo_capacity": "20"}),
            json!({"name": "c", "cargo_capacity": "3"}),
        ]);
        sort_records(
            &mut collection,
            &spec("cargo_capacity", SortDirection::Ascending),
        );
        assert_eq!(names(&collection), ["c", "b", "a"]);
    }

    #[test]
    fn json_numbers_and_numeric_strings_mix() {
        let mut collection = records(&[
            json!({"name": "a", "diameter": "10465"}),
            json!({"name": "b", "diameter": 7200}),
        ]);
        sort_records(&mut collection, &spec("diameter", SortDirection::Ascending));
        assert_eq!(names(&collection), ["b", "a"]);
    }

    #[test]
    fn absent_null_and_empty_all_sort_as_not_recorded() {
        let mut collection = records(&[
            json!({"name": "a", "population": "5"}),
            json!({"name": "b"}),
            json!({"name": "c", "population": null}),
            json!({"name": "d", "population": ""}),
        ]);
        sort_records(&mut collection, &spec("population", SortDirection::Ascending));
        // Not-recorded records keep their relative order and precede "a".
        assert_eq!(names(&collection), ["b", "c", "d", "a"]);
    }

    #[test]
    fn text_values_order_lexicographically() {
        let mut collection = records(&[
            json!({"name": "b", "gender": "male"}),
            json!({"name": "a", "gender": "female"}),
            json!({"name": "c", "gender": "unknown"}),
        ]);
        sort_records(&mut collection, &spec("gender", SortDirection::Ascending));
        assert_eq!(names(&collection), ["c", "a", "b"]);
    }

    #[test]
    fn ties_keep_original_order_in_both_directions() {
        let mut collection = records(&[
            json!({"name": "first", "release_date": "1977-05-25"}),
            json!({"name": "second", "release_date": "1977-05-25"}),
            json!({"name": "third", "release_date": "1980-05-21"}),
        ]);
        sort_records(
            &mut collection,
            &spec("release_date", SortDirection::Ascending),
        );
        assert_eq!(names(&collection), ["first", "second", "third"]);

        sort_records(
            &mut collection,
            &spec("release_date", SortDirection::Descending),
        );
        assert_eq!(names(&collection), ["third", "first", "second"]);
    }

    #[test]
    fn non_scalar_values_never_panic() {
        let mut collection = records(&[
            json!({"name": "a", "films": ["x", "y"]}),
            json!({"name": "b", "films": {"nested": true}}),
            json!({"name": "c", "films": "2"}),
        ]);
        sort_records(&mut collection, &spec("films", SortDirection::Ascending));
        assert_eq!(names(&collection), ["a", "b", "c"]);
    }
}
