//! Document model for the todo collection.
//!
//! # Design
//! A todo is schema-less: whatever JSON object the caller sends is stored as
//! `Fields`. The only structure the store imposes is the identifier, which it
//! assigns on insert and serializes next to the caller's fields under the
//! reserved `id` key. `TodoStore` drops client-supplied `id` keys with
//! `strip_reserved` before anything reaches a collection, so the assigned
//! identifier can never be overwritten.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::StoreError;

/// Key under which the identifier is serialized.
pub const ID_KEY: &str = "id";

/// Caller-supplied document body.
pub type Fields = Map<String, Value>;

/// Store-assigned identifier of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for DocumentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for DocumentId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| StoreError::new(format!("invalid document id \"{s}\"")))
    }
}

/// A stored todo: its identifier plus the caller's fields, serialized flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: DocumentId,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Todo {
    pub fn new(id: DocumentId, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// Convenience accessor for a single field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Remove keys the store owns from a caller-supplied body.
pub fn strip_reserved(mut fields: Fields) -> Fields {
    fields.remove(ID_KEY);
    fields
}

/// Shallow merge: every top-level key in `patch` replaces the stored one,
/// keys missing from `patch` are left alone.
pub fn merge(target: &mut Fields, patch: Fields) {
    for (key, value) in patch {
        target.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn todo_serializes_flat() {
        let todo = Todo::new(
            DocumentId::from(Uuid::nil()),
            fields(json!({"description": "buy milk", "done": false})),
        );
        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "description": "buy milk",
                "done": false
            })
        );
    }

    #[test]
    fn todo_deserializes_id_out_of_fields() {
        let todo: Todo = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "description": "walk dog"
        }))
        .unwrap();
        assert_eq!(todo.id.to_string(), "00000000-0000-0000-0000-000000000001");
        assert!(todo.fields.get(ID_KEY).is_none());
        assert_eq!(todo.get("description"), Some(&json!("walk dog")));
    }

    #[test]
    fn strip_reserved_drops_only_the_id() {
        let stripped = strip_reserved(fields(json!({"id": "forged", "done": true})));
        assert_eq!(Value::Object(stripped), json!({"done": true}));
    }

    #[test]
    fn merge_replaces_present_keys_only() {
        let mut stored = fields(json!({"description": "buy milk", "done": false}));
        merge(&mut stored, fields(json!({"done": true})));
        assert_eq!(
            Value::Object(stored),
            json!({"description": "buy milk", "done": true})
        );
    }

    #[test]
    fn malformed_id_is_a_store_error() {
        let err = "not-a-uuid".parse::<DocumentId>().unwrap_err();
        assert_eq!(err.message(), "invalid document id \"not-a-uuid\"");
    }

    #[test]
    fn id_displays_hyphenated_lowercase() {
        let id: DocumentId = "5EF8BF8B-A65C-4F23-9288-BABF20000000".parse().unwrap();
        assert_eq!(id.to_string(), "5ef8bf8b-a65c-4f23-9288-babf20000000");
    }
}
