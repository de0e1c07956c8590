//! In-memory button repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ButtonRepository, RepositoryError};
use crate::entity::Button;
use crate::types::ButtonId;

/// Button repository backed by a lock-guarded map.
///
/// `save` checks name uniqueness and writes under the same write lock, so two
/// concurrent creates with one name cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryButtonRepository {
    buttons: RwLock<HashMap<ButtonId, Button>>,
}

impl InMemoryButtonRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored buttons.
    pub async fn len(&self) -> usize {
        self.buttons.read().await.len()
    }

    /// Whether the repository holds no buttons.
    pub async fn is_empty(&self) -> bool {
        self.buttons.read().await.is_empty()
    }
}

#[async_trait]
impl ButtonRepository for InMemoryButtonRepository {
    async fn find_all(&self) -> Result<Vec<Button>, RepositoryError> {
        Ok(self.buttons.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ButtonId) -> Result<Option<Button>, RepositoryError> {
        Ok(self.buttons.read().await.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Button>, RepositoryError> {
        Ok(self
            .buttons
            .read()
            .await
            .values()
            .find(|b| b.name() == name)
            .cloned())
    }

    async fn find_by_active_status(&self) -> Result<Vec<Button>, RepositoryError> {
        Ok(self
            .buttons
            .read()
            .await
            .values()
            .filter(|b| b.is_active())
            .cloned()
            .collect())
    }

    async fn save(&self, mut button: Button) -> Result<Button, RepositoryError> {
        let mut buttons = self.buttons.write().await;

        let taken = buttons
            .values()
            .any(|existing| existing.name() == button.name() && existing.id() != button.id());
        if taken {
            return Err(RepositoryError::Conflict(format!(
                "button name '{}' already exists",
                button.name()
            )));
        }

        let id = match button.id() {
            Some(id) => id,
            None => {
                let id = ButtonId::random();
                button.assign_id(id);
                id
            }
        };

        buttons.insert(id, button.clone());
        Ok(button)
    }

    async fn delete_by_id(&self, id: ButtonId) -> Result<bool, RepositoryError> {
        Ok(self.buttons.write().await.remove(&id).is_some())
    }

    async fn exists_by_id(&self, id: ButtonId) -> Result<bool, RepositoryError> {
        Ok(self.buttons.read().await.contains_key(&id))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        Ok(self.buttons.read().await.values().any(|b| b.name() == name))
    }
}
