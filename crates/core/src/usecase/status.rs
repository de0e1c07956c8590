//! Move a button between lifecycle states.

use std::sync::Arc;

use tracing::instrument;

use super::UseCaseError;
use crate::entity::Button;
use crate::repository::ButtonRepository;
use crate::types::{ActorId, ButtonId, ButtonStatus};

/// Input for [`ChangeButtonStatusUseCase::execute`].
#[derive(Debug, Clone, Copy)]
pub struct ChangeButtonStatusCommand {
    pub id: ButtonId,
    pub status: ButtonStatus,
    pub updated_by: ActorId,
}

/// Applies `activate`, `deactivate` or `soft_delete` to a stored button.
#[derive(Clone)]
pub struct ChangeButtonStatusUseCase {
    repository: Arc<dyn ButtonRepository>,
}

impl ChangeButtonStatusUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn ButtonRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `UseCaseError::NotFound` if no button has the ID
    /// - `UseCaseError::Repository` if storage fails
    #[instrument(skip(self), fields(id = %command.id, status = %command.status))]
    pub async fn execute(&self, command: ChangeButtonStatusCommand) -> Result<Button, UseCaseError> {
        let mut button = self
            .repository
            .find_by_id(command.id)
            .await?
            .ok_or(UseCaseError::NotFound(command.id))?;

        match command.status {
            ButtonStatus::Active => button.activate(command.updated_by),
            ButtonStatus::Inactive => button.deactivate(command.updated_by),
            ButtonStatus::Deleted => button.soft_delete(command.updated_by),
        }

        let saved = self.repository.save(button).await?;
        tracing::info!("button status changed");
        Ok(saved)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::repository::InMemoryButtonRepository;
    use crate::types::ButtonType;

    async fn setup() -> (ChangeButtonStatusUseCase, ButtonId) {
        let repo = Arc::new(InMemoryButtonRepository::new());
        let button = Button::new("Toggle", None, ButtonType::Info, ActorId::random()).unwrap();
        let id = repo.save(button).await.unwrap().id().unwrap();
        (ChangeButtonStatusUseCase::new(repo), id)
    }

    fn command(id: ButtonId, status: ButtonStatus) -> ChangeButtonStatusCommand {
        ChangeButtonStatusCommand {
            id,
            status,
            updated_by: ActorId::random(),
        }
    }

    #[tokio::test]
    async fn test_deactivate_and_reactivate() {
        let (use_case, id) = setup().await;

        let inactive = use_case
            .execute(command(id, ButtonStatus::Inactive))
            .await
            .unwrap();
        assert!(!inactive.is_active());

        let active = use_case
            .execute(command(id, ButtonStatus::Active))
            .await
            .unwrap();
        assert!(active.is_active());
    }

    #[tokio::test]
    async fn test_deleted_status_soft_deletes() {
        let (use_case, id) = setup().await;
        let deleted = use_case
            .execute(command(id, ButtonStatus::Deleted))
            .await
            .unwrap();
        assert!(deleted.is_deleted());
        assert_eq!(deleted.status(), ButtonStatus::Deleted);
    }

    #[tokio::test]
    async fn test_missing_button() {
        let (use_case, _) = setup().await;
        let err = use_case
            .execute(command(ButtonId::random(), ButtonStatus::Active))
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::NotFound(_)));
    }
}
