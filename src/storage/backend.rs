//! Session storage abstraction.
//!
//! The [`SessionStorage`] trait covers the three things the host does with a
//! login session: restore it at startup, save it after login, and drop it on
//! logout.

use crate::domain::error::Result;
use crate::storage::models::SessionRecord;

/// Abstraction over persistent session backends.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes
///
/// # Examples
///
/// ```no_run
/// use eatgo::storage::{JsonStorage, SessionStorage};
/// use std::path::PathBuf;
///
/// let storage = JsonStorage::new(PathBuf::from("/tmp/session.json"))?;
/// let token = storage.load_session()?.map(|session| session.access_token);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait SessionStorage {
    /// Returns the saved session, or `None` when nobody is logged in.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn load_session(&self) -> Result<Option<SessionRecord>>;

    /// Replaces the saved session.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn save_session(&mut self, session: &SessionRecord) -> Result<()>;

    /// Removes the saved session. Succeeds when there is nothing to remove.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn clear_session(&mut self) -> Result<()>;
}
