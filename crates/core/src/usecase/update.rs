//! Edit a button's name, description and type.

use std::sync::Arc;

use tracing::instrument;

use super::{UseCaseError, save_error};
use crate::entity::Button;
use crate::repository::ButtonRepository;
use crate::types::{ActorId, ButtonId, ButtonType};

/// Input for [`UpdateButtonUseCase::execute`].
#[derive(Debug, Clone)]
pub struct UpdateButtonCommand {
    pub id: ButtonId,
    pub name: String,
    pub description: Option<String>,
    pub button_type: ButtonType,
    pub updated_by: ActorId,
}

/// Replaces the editable fields of an existing button.
#[derive(Clone)]
pub struct UpdateButtonUseCase {
    repository: Arc<dyn ButtonRepository>,
}

impl UpdateButtonUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn ButtonRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `UseCaseError::NotFound` if no button has the ID
    /// - `UseCaseError::DuplicateName` if the new name belongs to another button
    /// - `UseCaseError::Validation` if the name or description is invalid
    /// - `UseCaseError::Repository` if storage fails
    #[instrument(skip(self, command), fields(id = %command.id))]
    pub async fn execute(&self, command: UpdateButtonCommand) -> Result<Button, UseCaseError> {
        let mut button = self
            .repository
            .find_by_id(command.id)
            .await?
            .ok_or(UseCaseError::NotFound(command.id))?;

        if button.name() != command.name.as_str()
            && self.repository.exists_by_name(&command.name).await?
        {
            return Err(UseCaseError::DuplicateName(command.name));
        }

        button.update_info(&command.name, command.description, command.updated_by)?;
        if button.button_type() != command.button_type {
            button.change_type(command.button_type, command.updated_by);
        }

        let saved = self
            .repository
            .save(button)
            .await
            .map_err(|e| save_error(&command.name, e))?;

        tracing::info!("button updated");
        Ok(saved)
    }
}
