//! Storage record models for the persistence layer.
//!
//! These types describe what is written to disk. They are kept apart from
//! [`AppState`](crate::app::AppState) so the session file format can evolve
//! without touching the state shape.

use serde::{Deserialize, Serialize};

/// A saved login session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Bearer token returned by the login endpoint.
    pub access_token: String,

    /// Unix timestamp of when the token was saved.
    pub saved_at: i64,
}

impl SessionRecord {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            saved_at: chrono::Utc::now().timestamp(),
        }
    }
}
