//! Create a button.

use std::sync::Arc;

use tracing::instrument;

use super::{UseCaseError, save_error};
use crate::entity::Button;
use crate::repository::ButtonRepository;
use crate::types::{ActorId, ButtonType};

/// Input for [`CreateButtonUseCase::execute`].
#[derive(Debug, Clone)]
pub struct CreateButtonCommand {
    pub name: String,
    pub description: Option<String>,
    pub button_type: ButtonType,
    pub created_by: ActorId,
}

/// Creates buttons, enforcing unique names.
#[derive(Clone)]
pub struct CreateButtonUseCase {
    repository: Arc<dyn ButtonRepository>,
}

impl CreateButtonUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn ButtonRepository>) -> Self {
        Self { repository }
    }

    /// Create and persist a new active button.
    ///
    /// # Errors
    ///
    /// - `UseCaseError::DuplicateName` if any button, deleted or not, already
    ///   carries the name
    /// - `UseCaseError::Validation` if the name or description is invalid
    /// - `UseCaseError::Repository` if storage fails
    #[instrument(skip(self, command), fields(name = %command.name))]
    pub async fn execute(&self, command: CreateButtonCommand) -> Result<Button, UseCaseError> {
        if self.repository.exists_by_name(&command.name).await? {
            tracing::debug!("rejecting duplicate button name");
            return Err(UseCaseError::DuplicateName(command.name));
        }

        let button = Button::new(
            &command.name,
            command.description,
            command.button_type,
            command.created_by,
        )?;

        let saved = self
            .repository
            .save(button)
            .await
            .map_err(|e| save_error(&command.name, e))?;

        tracing::info!(id = ?saved.id(), "button created");
        Ok(saved)
    }
}
