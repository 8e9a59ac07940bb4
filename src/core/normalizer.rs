//! Validation and coercion of raw records into [`TodoItem`]s.
//!
//! Each record is handled on its own: a record that fails is dropped with a
//! logged diagnostic and the rest of the batch carries on.

use crate::core::{Record, TodoItem};
use serde_json::Value;
use thiserror::Error;

const REQUIRED_FIELDS: [&str; 3] = ["id", "title", "completed"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DropReason {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("non-boolean 'completed' field: {0}")]
    NonBooleanCompleted(Value),

    #[error("'id' cannot be converted to an integer: {0}")]
    InvalidId(Value),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeReport {
    pub items: Vec<TodoItem>,
    /// Input index and reason for every dropped record, in input order.
    pub dropped: Vec<(usize, DropReason)>,
}

pub fn normalize_record(record: &Record) -> Result<TodoItem, DropReason> {
    let (Some(id), Some(title), Some(completed)) = (
        record.get("id"),
        record.get("title"),
        record.get("completed"),
    ) else {
        let missing = REQUIRED_FIELDS
            .into_iter()
            .filter(|field| !record.contains_key(field))
            .collect();
        return Err(DropReason::MissingFields(missing));
    };

    let Value::Bool(completed) = completed else {
        return Err(DropReason::NonBooleanCompleted(completed.clone()));
    };

    let id = coerce_id(id).ok_or_else(|| DropReason::InvalidId(id.clone()))?;

    Ok(TodoItem {
        id,
        title: coerce_title(title),
        completed: *completed,
    })
}

pub fn normalize_with_report(records: &[Record]) -> NormalizeReport {
    let mut report = NormalizeReport::default();

    for (index, record) in records.iter().enumerate() {
        match normalize_record(record) {
            Ok(item) => report.items.push(item),
            Err(reason) => {
                let id_hint = record
                    .get("id")
                    .map(Value::to_string)
                    .unwrap_or_else(|| "Unknown ID".to_string());
                tracing::warn!(index, id = %id_hint, "Skipping todo item: {}", reason);
                report.dropped.push((index, reason));
            }
        }
    }

    report
}

pub fn normalize(records: &[Record]) -> Vec<TodoItem> {
    normalize_with_report(records).items
}

fn coerce_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn coerce_title(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<Record> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| Record::try_from(item).unwrap())
                .collect(),
            _ => panic!("expected a JSON array"),
        }
    }

    fn item(id: i64, title: &str, completed: bool) -> TodoItem {
        TodoItem {
            id,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_valid_data() {
        let raw = records(json!([
            {"userId": 1, "id": 1, "title": "Test todo 1", "completed": true},
            {"userId": 1, "id": 2, "title": "Test todo 2", "completed": false},
        ]));

        assert_eq!(
            normalize(&raw),
            vec![item(1, "Test todo 1", true), item(2, "Test todo 2", false)]
        );
    }

    #[test]
    fn test_missing_keys() {
        let raw = records(json!([
            {"userId": 1, "id": 1, "title": "Valid todo"},
            {"id": 2, "completed": false},
            {"title": "Todo 3", "completed": true},
        ]));

        let report = normalize_with_report(&raw);
        assert!(report.items.is_empty());
        assert_eq!(
            report.dropped,
            vec![
                (0, DropReason::MissingFields(vec!["completed"])),
                (1, DropReason::MissingFields(vec!["title"])),
                (2, DropReason::MissingFields(vec!["id"])),
            ]
        );
    }

    #[test]
    fn test_mixed_data_keeps_order() {
        let raw = records(json!([
            {"userId": 1, "id": 1, "title": "First todo", "completed": true},
            {"userId": 1, "title": "Incomplete todo"},
            {"userId": 1, "id": 3, "title": "Third todo", "completed": false},
        ]));

        assert_eq!(
            normalize(&raw),
            vec![item(1, "First todo", true), item(3, "Third todo", false)]
        );
    }

    #[test]
    fn test_incorrect_types() {
        let raw = records(json!([
            {"userId": 1, "id": "not-an-int", "title": "Todo with string id", "completed": true},
            {"userId": 1, "id": 2, "title": 12345, "completed": false},
            {"userId": 1, "id": 3, "title": "Todo with string bool", "completed": "true"},
            {"userId": 1, "id": 4, "title": "Valid one", "completed": true},
        ]));

        let report = normalize_with_report(&raw);
        assert_eq!(
            report.items,
            vec![item(2, "12345", false), item(4, "Valid one", true)]
        );
        assert_eq!(
            report.dropped,
            vec![
                (0, DropReason::InvalidId(json!("not-an-int"))),
                (2, DropReason::NonBooleanCompleted(json!("true"))),
            ]
        );
    }

    #[test]
    fn test_completed_checked_before_id() {
        let raw = records(json!([{"id": "nope", "title": "t", "completed": 1}]));
        let report = normalize_with_report(&raw);
        assert_eq!(
            report.dropped,
            vec![(0, DropReason::NonBooleanCompleted(json!(1)))]
        );
    }

    #[test]
    fn test_null_counts_as_present() {
        let raw = records(json!([
            {"id": null, "title": "a", "completed": true},
            {"id": 5, "title": null, "completed": true},
            {"id": 6, "title": "b", "completed": null},
        ]));

        let report = normalize_with_report(&raw);
        assert_eq!(report.items, vec![item(5, "null", true)]);
        assert_eq!(report.dropped[0], (0, DropReason::InvalidId(Value::Null)));
        assert_eq!(
            report.dropped[1],
            (2, DropReason::NonBooleanCompleted(Value::Null))
        );
    }

    #[test]
    fn test_id_coercion() {
        assert_eq!(coerce_id(&json!(7)), Some(7));
        assert_eq!(coerce_id(&json!(-7)), Some(-7));
        assert_eq!(coerce_id(&json!("42")), Some(42));
        assert_eq!(coerce_id(&json!(" 8 ")), Some(8));
        assert_eq!(coerce_id(&json!("+9")), Some(9));
        assert_eq!(coerce_id(&json!(3.0)), Some(3));

        assert_eq!(coerce_id(&json!(3.5)), None);
        assert_eq!(coerce_id(&json!("3.0")), None);
        assert_eq!(coerce_id(&json!("")), None);
        assert_eq!(coerce_id(&json!(true)), None);
        assert_eq!(coerce_id(&json!(u64::MAX)), None);
        assert_eq!(coerce_id(&json!([1])), None);
        assert_eq!(coerce_id(&json!({"id": 1})), None);
    }

    #[test]
    fn test_title_coercion() {
        assert_eq!(coerce_title(&json!("plain")), "plain");
        assert_eq!(coerce_title(&json!(12345)), "12345");
        assert_eq!(coerce_title(&json!(1.5)), "1.5");
        assert_eq!(coerce_title(&json!(false)), "false");
    }

    #[test]
    fn test_numeric_string_id_is_kept() {
        let raw = records(json!([{"id": "10", "title": "t", "completed": false}]));
        assert_eq!(normalize(&raw), vec![item(10, "t", false)]);
    }

    #[test]
    fn test_drop_reason_messages() {
        assert_eq!(
            DropReason::MissingFields(vec!["id", "completed"]).to_string(),
            "missing required field(s): id, completed"
        );
        assert_eq!(
            DropReason::NonBooleanCompleted(json!("true")).to_string(),
            "non-boolean 'completed' field: \"true\""
        );
    }
}
