//! Soft-delete a button.

use std::sync::Arc;

use tracing::instrument;

use super::UseCaseError;
use crate::entity::Button;
use crate::repository::ButtonRepository;
use crate::types::{ActorId, ButtonId};

/// Input for [`DeleteButtonUseCase::execute`].
#[derive(Debug, Clone, Copy)]
pub struct DeleteButtonCommand {
    pub id: ButtonId,
    pub updated_by: ActorId,
}

/// Soft-deletes buttons. Records are never physically removed here.
#[derive(Clone)]
pub struct DeleteButtonUseCase {
    repository: Arc<dyn ButtonRepository>,
}

impl DeleteButtonUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn ButtonRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `UseCaseError::NotFound` if no button has the ID
    /// - `UseCaseError::Repository` if storage fails
    #[instrument(skip(self), fields(id = %command.id))]
    pub async fn execute(&self, command: DeleteButtonCommand) -> Result<Button, UseCaseError> {
        let mut button = self
            .repository
            .find_by_id(command.id)
            .await?
            .ok_or(UseCaseError::NotFound(command.id))?;

        button.soft_delete(command.updated_by);
        let saved = self.repository.save(button).await?;

        tracing::info!("button soft-deleted");
        Ok(saved)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::repository::InMemoryButtonRepository;
    use crate::types::ButtonType;

    #[tokio::test]
    async fn test_soft_deletes_and_keeps_record() {
        let repo = Arc::new(InMemoryButtonRepository::new());
        let button = Button::new("Gone", None, ButtonType::Dark, ActorId::random()).unwrap();
        let id = repo.save(button).await.unwrap().id().unwrap();
        let use_case = DeleteButtonUseCase::new(repo.clone());
        let deleter = ActorId::random();

        let deleted = use_case
            .execute(DeleteButtonCommand {
                id,
                updated_by: deleter,
            })
            .await
            .unwrap();

        assert!(deleted.is_deleted());
        assert_eq!(deleted.updated_by(), deleter);
        assert!(repo.exists_by_id(id).await.unwrap());
        assert!(repo.find_by_active_status().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_button() {
        let use_case = DeleteButtonUseCase::new(Arc::new(InMemoryButtonRepository::new()));
        let err = use_case
            .execute(DeleteButtonCommand {
                id: ButtonId::random(),
                updated_by: ActorId::random(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::NotFound(_)));
    }
}
