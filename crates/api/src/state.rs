//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use buttons_core::usecase::{
    ChangeButtonStatusUseCase, CreateButtonUseCase, DeleteButtonUseCase, GetButtonUseCase,
    SearchButtonsUseCase, UpdateButtonUseCase,
};
use buttons_core::{ButtonRepository, InMemoryButtonRepository};

use crate::db::PgButtonRepository;

/// Application state shared across all handlers.
///
/// Cheap to clone. Every use case is wired to the same repository.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    create: CreateButtonUseCase,
    get: GetButtonUseCase,
    update: UpdateButtonUseCase,
    change_status: ChangeButtonStatusUseCase,
    delete: DeleteButtonUseCase,
    search: SearchButtonsUseCase,
    pool: Option<PgPool>,
}

impl AppState {
    /// Build state over any repository.
    #[must_use]
    pub fn new(repository: Arc<dyn ButtonRepository>) -> Self {
        Self::build(repository, None)
    }

    /// Build state backed by `PostgreSQL`.
    #[must_use]
    pub fn postgres(pool: PgPool) -> Self {
        let repository = Arc::new(PgButtonRepository::new(pool.clone()));
        Self::build(repository, Some(pool))
    }

    /// Build state backed by a fresh in-memory repository.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryButtonRepository::new()))
    }

    fn build(repository: Arc<dyn ButtonRepository>, pool: Option<PgPool>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                create: CreateButtonUseCase::new(Arc::clone(&repository)),
                get: GetButtonUseCase::new(Arc::clone(&repository)),
                update: UpdateButtonUseCase::new(Arc::clone(&repository)),
                change_status: ChangeButtonStatusUseCase::new(Arc::clone(&repository)),
                delete: DeleteButtonUseCase::new(Arc::clone(&repository)),
                search: SearchButtonsUseCase::new(repository),
                pool,
            }),
        }
    }

    #[must_use]
    pub fn create(&self) -> &CreateButtonUseCase {
        &self.inner.create
    }

    #[must_use]
    pub fn get(&self) -> &GetButtonUseCase {
        &self.inner.get
    }

    #[must_use]
    pub fn update(&self) -> &UpdateButtonUseCase {
        &self.inner.update
    }

    #[must_use]
    pub fn change_status(&self) -> &ChangeButtonStatusUseCase {
        &self.inner.change_status
    }

    #[must_use]
    pub fn delete(&self) -> &DeleteButtonUseCase {
        &self.inner.delete
    }

    #[must_use]
    pub fn search(&self) -> &SearchButtonsUseCase {
        &self.inner.search
    }

    /// The database pool, when running against `PostgreSQL`.
    #[must_use]
    pub fn pool(&self) -> Option<&PgPool> {
        self.inner.pool.as_ref()
    }

    /// Whether the backing store can serve requests.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the database does not answer `SELECT 1`.
    pub async fn check_ready(&self) -> Result<(), sqlx::Error> {
        if let Some(pool) = self.pool() {
            sqlx::query("SELECT 1").execute(pool).await?;
        }
        Ok(())
    }
}
