//! In-memory todo store with normalization on write and ordering on read.
//!
//! # Design
//! `TodoService` owns an insertion-ordered map from id to item. Every write
//! goes through the same normalization: text fields are trimmed and a
//! missing due date becomes the clock's current date. Reads sort a snapshot
//! with a stable sort, so items with equal keys come back in insertion order.
//!
//! Mutations take `&mut self`. Sharing a service across threads is left to
//! the caller's own lock.

use chrono::NaiveDate;
use indexmap::IndexMap;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::error::TodoError;
use crate::types::{CreateTodo, TodoItem, UpdateTodo};

/// Process-local todo store.
#[derive(Debug, Clone)]
pub struct TodoService<C = SystemClock> {
    items: IndexMap<Uuid, TodoItem>,
    clock: C,
}

impl TodoService<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TodoService<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TodoService<C> {
    /// Create an empty store that takes "today" from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            items: IndexMap::new(),
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Store a new item and return it after normalization.
    ///
    /// A missing or nil id is replaced with a fresh v4 UUID. A caller-supplied
    /// id that is already stored overwrites that item and keeps its position.
    pub fn add(&mut self, input: CreateTodo) -> TodoItem {
        let id = match input.id {
            Some(id) if !id.is_nil() => id,
            _ => Uuid::new_v4(),
        };
        let item = TodoItem {
            id,
            title: normalize_text(&input.title),
            description: normalize_text(&input.description),
            due_date: self.due_or_today(input.due_date),
            is_done: input.is_done,
        };

        if self.items.insert(id, item.clone()).is_some() {
            tracing::warn!(%id, "add replaced an existing todo with the same id");
        } else {
            tracing::debug!(%id, "added todo");
        }
        item
    }

    /// All items ordered by `(is_done, due_date, title)`, not-done first.
    ///
    /// Titles compare byte-wise. Ties keep insertion order.
    pub fn get_all(&self) -> Vec<TodoItem> {
        let mut items: Vec<TodoItem> = self.items.values().cloned().collect();
        items.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
        tracing::trace!(count = items.len(), "listed todos");
        items
    }

    pub fn get(&self, id: Uuid) -> Option<&TodoItem> {
        self.items.get(&id)
    }

    /// Look up an item by the textual form of its id.
    pub fn find(&self, id: &str) -> Result<&TodoItem, TodoError> {
        let id = parse_id(id)?;
        self.get(id).ok_or(TodoError::NotFound(id))
    }

    /// Flip `is_done`. Returns `false` if no item has `id`.
    pub fn toggle_done(&mut self, id: Uuid) -> bool {
        match self.items.get_mut(&id) {
            Some(item) => {
                item.is_done = !item.is_done;
                tracing::debug!(%id, is_done = item.is_done, "toggled todo");
                true
            }
            None => false,
        }
    }

    /// Delete the item with `id`. Returns `false` if there was none.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let removed = self.items.shift_remove(&id).is_some();
        if removed {
            tracing::debug!(%id, "removed todo");
        }
        removed
    }

    /// Overwrite the title, description, due date and done flag of the item
    /// with `input.id`.
    ///
    /// Applies the same normalization as `add`. Returns `false` and leaves
    /// the store untouched if no item has that id.
    pub fn update(&mut self, input: UpdateTodo) -> bool {
        let due_date = self.due_or_today(input.due_date);
        let Some(item) = self.items.get_mut(&input.id) else {
            return false;
        };
        item.title = normalize_text(&input.title);
        item.description = normalize_text(&input.description);
        item.due_date = due_date;
        item.is_done = input.is_done;
        tracing::debug!(id = %input.id, "updated todo");
        true
    }

    pub fn clear_all(&mut self) {
        tracing::debug!(count = self.items.len(), "cleared todos");
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn due_or_today(&self, due_date: Option<NaiveDate>) -> NaiveDate {
        due_date.unwrap_or_else(|| self.clock.today())
    }
}

/// Parse the textual form of a todo id.
pub fn parse_id(input: &str) -> Result<Uuid, TodoError> {
    Uuid::parse_str(input.trim()).map_err(|_| TodoError::InvalidId(input.to_string()))
}

fn normalize_text(text: &str) -> String {
    text.trim().to_string()
}

fn sort_key(item: &TodoItem) -> (bool, NaiveDate, &[u8]) {
    (item.is_done, item.due_date, item.title.as_bytes())
}
