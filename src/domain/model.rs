use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// A loosely-typed record as decoded from the remote JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Record {
    pub data: HashMap<String, Value>,
}

impl Record {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(obj: Map<String, Value>) -> Self {
        Self {
            data: obj.into_iter().collect(),
        }
    }
}

impl TryFrom<Value> for Record {
    type Error = Value;

    /// Only JSON objects are records; anything else is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(obj) => Ok(Record::from(obj)),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn status(&self) -> TodoStatus {
        if self.completed {
            TodoStatus::Completed
        } else {
            TodoStatus::Pending
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoStatus {
    Completed,
    Pending,
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoStatus::Completed => f.write_str("Completed"),
            TodoStatus::Pending => f.write_str("Pending"),
        }
    }
}
