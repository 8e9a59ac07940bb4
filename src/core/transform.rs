use crate::core::Record;
use serde_json::Value;

/// Returns copies of `records` where a string value under `key` is
/// upper-cased. Other records and non-string values are copied unchanged.
pub fn uppercase_field(records: &[Record], key: &str) -> Vec<Record> {
    records
        .iter()
        .map(|record| {
            let mut transformed = record.clone();
            if let Some(Value::String(text)) = transformed.data.get_mut(key) {
                *text = text.to_uppercase();
            }
            transformed
        })
        .collect()
}
