//! Domain types for the todo store.
//!
//! # Design
//! Stored items and write inputs are separate types. `TodoItem` is what the
//! store holds and always carries a concrete id and due date. `CreateTodo`
//! and `UpdateTodo` are what callers hand in; their "unset" fields are
//! `Option`s that the service fills in during normalization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item as held by `TodoService`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub is_done: bool,
}

/// Input for `TodoService::add`. Every field may be omitted from JSON.
///
/// An `id` of `None` or `Uuid::nil()` asks the service to generate one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_done: bool,
}

impl CreateTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn done(mut self) -> Self {
        self.is_done = true;
        self
    }
}

/// Input for `TodoService::update`. Replaces every field of the item with
/// the matching `id`; unlike a patch, nothing is left untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_done: bool,
}

impl UpdateTodo {
    pub fn new(id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            due_date: None,
            is_done: false,
        }
    }
}

impl From<&TodoItem> for UpdateTodo {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
            due_date: Some(item.due_date),
            is_done: item.is_done,
        }
    }
}
