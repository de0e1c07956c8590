//! Application operations on buttons.
//!
//! Each use case owns an `Arc<dyn ButtonRepository>` handed to it at
//! construction and returns `Result<_, UseCaseError>`; nothing here panics or
//! reaches for global state. The HTTP layer decides which status code each
//! error becomes.

pub mod create;
pub mod delete;
pub mod get;
pub mod search;
pub mod status;
pub mod update;

pub use create::{CreateButtonCommand, CreateButtonUseCase};
pub use delete::{DeleteButtonCommand, DeleteButtonUseCase};
pub use get::GetButtonUseCase;
pub use search::{ButtonPage, ButtonQuery, SearchButtonsUseCase};
pub use status::{ChangeButtonStatusCommand, ChangeButtonStatusUseCase};
pub use update::{UpdateButtonCommand, UpdateButtonUseCase};

use crate::entity::ButtonError;
use crate::repository::RepositoryError;
use crate::types::ButtonId;

/// Why a use case failed.
#[derive(Debug, thiserror::Error)]
pub enum UseCaseError {
    /// Input broke an entity or query rule.
    #[error(transparent)]
    Validation(#[from] ButtonError),

    /// Query parameters are out of range.
    #[error("{0}")]
    InvalidQuery(String),

    /// Another button already carries this name.
    #[error("Button with name '{0}' already exists")]
    DuplicateName(String),

    /// No button has this ID.
    #[error("Button with id {0} not found")]
    NotFound(ButtonId),

    /// The repository failed.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl UseCaseError {
    /// Whether the caller's input caused the failure.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidQuery(_) | Self::DuplicateName(_)
        )
    }
}

/// Map a repository failure raised while saving `name`.
///
/// A conflict on save means another writer took the name first; callers see
/// that as a duplicate name rather than a storage fault.
pub(crate) fn save_error(name: &str, err: RepositoryError) -> UseCaseError {
    match err {
        RepositoryError::Conflict(_) => UseCaseError::DuplicateName(name.to_owned()),
        other => UseCaseError::Repository(other),
    }
}

impl From<RepositoryError> for UseCaseError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}
