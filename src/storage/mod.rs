//! Storage layer for the persisted login session.
//!
//! The access token is the only state that outlives the process; everything
//! else is fetched again from the review API at startup.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `models`: Storage record types separate from the application state

pub mod backend;
pub mod json;
pub mod models;

pub use backend::SessionStorage;
pub use json::JsonStorage;
pub use models::SessionRecord;
