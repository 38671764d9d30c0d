//! Frontend Models
//!
//! Data structures matching the REST backend's JSON.

use serde::{Deserialize, Serialize};

/// Owner written on every record the client creates
pub const DEFAULT_USER_ID: u32 = 1;

/// Todo data structure (matches backend `/todos` entries)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    #[serde(rename = "userId", default)]
    pub user_id: u32,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Create a new, not yet completed todo owned by the default user
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            user_id: DEFAULT_USER_ID,
            title: title.into(),
            completed: false,
        }
    }

    /// Edit target used when an edit is submitted without one being selected
    pub fn placeholder() -> Self {
        Self::new(1, "")
    }
}

/// Acknowledgement returned by the backend for mutations
///
/// The backend may echo the record or return an empty object; only an
/// optional `message` is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}
