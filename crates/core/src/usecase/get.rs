//! Read buttons.

use std::sync::Arc;

use super::UseCaseError;
use crate::entity::Button;
use crate::repository::ButtonRepository;
use crate::types::ButtonId;

/// Read-only queries over buttons.
///
/// Each method delegates to the repository. An absent button is `Ok(None)`,
/// not an error.
#[derive(Clone)]
pub struct GetButtonUseCase {
    repository: Arc<dyn ButtonRepository>,
}

impl GetButtonUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn ButtonRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if storage fails.
    pub async fn by_id(&self, id: ButtonId) -> Result<Option<Button>, UseCaseError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if storage fails.
    pub async fn all(&self) -> Result<Vec<Button>, UseCaseError> {
        Ok(self.repository.find_all().await?)
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if storage fails.
    pub async fn active(&self) -> Result<Vec<Button>, UseCaseError> {
        Ok(self.repository.find_by_active_status().await?)
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if storage fails.
    pub async fn by_name(&self, name: &str) -> Result<Option<Button>, UseCaseError> {
        Ok(self.repository.find_by_name(name).await?)
    }
}
