//! In-memory todo list core.
//!
//! # Overview
//! `TodoService` stores todo items in process memory and exposes add,
//! toggle-done, remove, update, list and clear-all operations. There is no
//! persistence and no I/O; the store lives as long as the service value.
//!
//! # Design
//! - Writes normalize input: titles and descriptions are trimmed, and an
//!   unset due date becomes "today" as reported by the service's `Clock`.
//! - `get_all` returns a sorted snapshot: not-done first, then by due date,
//!   then by title compared byte-wise. Ties keep insertion order.
//! - Absence is reported with `bool`/`Option`. `TodoError` is reserved for
//!   lookups that start from a textual id.

pub mod clock;
pub mod error;
pub mod service;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::TodoError;
pub use service::{parse_id, TodoService};
pub use types::{CreateTodo, TodoItem, UpdateTodo};
