//! Todo entity and its API-boundary shapes
//!
//! One entity, three boundary shapes: the full read shape (`Todo`), the
//! creation payload (`TodoCreate`), and the partial-update payload
//! (`TodoUpdate`). Updates track key presence explicitly via [`Field`] so
//! an absent key and a present `null` are different things.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Todo record, as stored and as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Creation payload; storage assigns the id
#[derive(Debug, Clone, Deserialize)]
pub struct TodoCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// One field of a partial update: left untouched, or set to a value.
///
/// Deserializes transparently from the inner type; combined with
/// `#[serde(default)]` an absent key becomes `Absent` while a present key
/// becomes `Set`. For a nullable column the inner type is itself an
/// `Option`, so an explicit `null` clears the value. For a non-nullable
/// field `null` fails deserialization of the inner type and the whole
/// payload is rejected before any storage access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field<T> {
    #[default]
    Absent,
    Set(T),
}

impl<T> Field<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Field::Set)
    }
}

/// Partial-update payload; absent keys leave fields untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoUpdate {
    #[serde(default)]
    pub title: Field<String>,
    #[serde(default)]
    pub description: Field<Option<String>>,
    #[serde(default)]
    pub completed: Field<bool>,
}

impl Todo {
    /// Merge a partial update, changing exactly the fields that were set.
    pub fn apply(&mut self, update: TodoUpdate) {
        if let Field::Set(title) = update.title {
            self.title = title;
        }
        if let Field::Set(description) = update.description {
            self.description = description;
        }
        if let Field::Set(completed) = update.completed {
            self.completed = completed;
        }
    }
}
