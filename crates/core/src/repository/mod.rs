//! Persistence contract for buttons.
//!
//! [`ButtonRepository`] is the only way use cases reach storage. Two
//! implementations exist: [`memory::InMemoryButtonRepository`] here, and a
//! `PostgreSQL` one in the API crate.

pub mod memory;

use async_trait::async_trait;

use crate::entity::Button;
use crate::types::ButtonId;

pub use memory::InMemoryButtonRepository;

/// Errors a repository can report.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Constraint violation (e.g., another button already has this name).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// The storage backend failed.
    #[error("storage error: {0}")]
    Backend(String),
}

/// Storage-independent access to buttons.
///
/// Reads return point-in-time snapshots; nothing returned by a repository is
/// a live view. List results carry no ordering guarantee.
#[async_trait]
pub trait ButtonRepository: Send + Sync {
    /// All buttons, deleted ones included.
    async fn find_all(&self) -> Result<Vec<Button>, RepositoryError>;

    /// The button with this ID, if any.
    async fn find_by_id(&self, id: ButtonId) -> Result<Option<Button>, RepositoryError>;

    /// The button with exactly this name, if any.
    async fn find_by_name(&self, name: &str) -> Result<Option<Button>, RepositoryError>;

    /// Buttons for which [`Button::is_active`] holds.
    async fn find_by_active_status(&self) -> Result<Vec<Button>, RepositoryError>;

    /// Insert or update a button.
    ///
    /// A button without an ID is inserted under a freshly generated one; a
    /// button with an ID overwrites the record stored under it. Returns the
    /// stored button.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a different button already
    /// carries the same name.
    async fn save(&self, button: Button) -> Result<Button, RepositoryError>;

    /// Physically remove a button. Returns whether it existed.
    async fn delete_by_id(&self, id: ButtonId) -> Result<bool, RepositoryError>;

    /// Whether a button with this ID exists.
    async fn exists_by_id(&self, id: ButtonId) -> Result<bool, RepositoryError>;

    /// Whether any button, deleted or not, carries this name.
    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError>;
}
