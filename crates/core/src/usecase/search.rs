//! Filtered, paged listing of buttons.

use std::sync::Arc;

use super::UseCaseError;
use crate::entity::Button;
use crate::repository::ButtonRepository;
use crate::types::{ButtonStatus, ButtonType};

/// Filters and paging for [`SearchButtonsUseCase::execute`].
///
/// Every filter is optional; unset filters match everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonQuery {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    pub button_type: Option<ButtonType>,
    pub status: Option<ButtonStatus>,
    pub is_active: Option<bool>,
    /// Zero-based page index.
    pub page: u32,
    /// Page size, 1 to [`ButtonQuery::MAX_PAGE_SIZE`].
    pub size: u32,
}

impl ButtonQuery {
    pub const DEFAULT_PAGE_SIZE: u32 = 20;
    pub const MAX_PAGE_SIZE: u32 = 100;

    fn matches(&self, button: &Button) -> bool {
        let name_ok = self.name.as_deref().is_none_or(|needle| {
            button
                .name()
                .as_str()
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });

        name_ok
            && self.button_type.is_none_or(|t| button.button_type() == t)
            && self.status.is_none_or(|s| button.status() == s)
            && self.is_active.is_none_or(|a| button.is_active() == a)
    }
}

impl Default for ButtonQuery {
    fn default() -> Self {
        Self {
            name: None,
            button_type: None,
            status: None,
            is_active: None,
            page: 0,
            size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone)]
pub struct ButtonPage {
    pub content: Vec<Button>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
}

impl ButtonPage {
    /// Number of pages needed for all matches (at least one).
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(u64::from(self.size)).max(1)
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.page == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        u64::from(self.page) + 1 >= self.total_pages()
    }
}

/// Lists buttons matching a [`ButtonQuery`].
///
/// Results are ordered by creation time, then ID, so paging is stable.
#[derive(Clone)]
pub struct SearchButtonsUseCase {
    repository: Arc<dyn ButtonRepository>,
}

impl SearchButtonsUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn ButtonRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `UseCaseError::InvalidQuery` if `size` is outside 1 to 100
    /// - `UseCaseError::Repository` if storage fails
    pub async fn execute(&self, query: ButtonQuery) -> Result<ButtonPage, UseCaseError> {
        if query.size == 0 || query.size > ButtonQuery::MAX_PAGE_SIZE {
            return Err(UseCaseError::InvalidQuery(format!(
                "Size must be between 1 and {}",
                ButtonQuery::MAX_PAGE_SIZE
            )));
        }

        let mut matching: Vec<Button> = self
            .repository
            .find_all()
            .await?
            .into_iter()
            .filter(|b| query.matches(b))
            .collect();
        matching.sort_by_key(|b| (b.created_at(), b.id()));

        let total_elements = matching.len() as u64;
        let skip = query.page as usize * query.size as usize;
        let content = matching
            .into_iter()
            .skip(skip)
            .take(query.size as usize)
            .collect();

        Ok(ButtonPage {
            content,
            page: query.page,
            size: query.size,
            total_elements,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::repository::InMemoryButtonRepository;
    use crate::types::ActorId;

    async fn seeded() -> SearchButtonsUseCase {
        let repo = Arc::new(InMemoryButtonRepository::new());
        let actor = ActorId::random();

        for (name, t) in [
            ("Submit", ButtonType::Primary),
            ("Submit Draft", ButtonType::Secondary),
            ("Cancel", ButtonType::Danger),
            ("Help", ButtonType::Info),
            ("Resubmit", ButtonType::Primary),
        ] {
            repo.save(Button::new(name, None, t, actor).unwrap())
                .await
                .unwrap();
        }

        let mut cancel = repo.find_by_name("Cancel").await.unwrap().unwrap();
        cancel.deactivate(actor);
        repo.save(cancel).await.unwrap();

        SearchButtonsUseCase::new(repo)
    }

    #[tokio::test]
    async fn test_name_filter_is_case_insensitive_substring() {
        let use_case = seeded().await;
        let page = use_case
            .execute(ButtonQuery {
                name: Some("SUBMIT".into()),
                ..ButtonQuery::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total_elements, 3);
    }

    #[tokio::test]
    async fn test_type_and_active_filters() {
        let use_case = seeded().await;

        let primaries = use_case
            .execute(ButtonQuery {
                button_type: Some(ButtonType::Primary),
                ..ButtonQuery::default()
            })
            .await
            .unwrap();
        assert_eq!(primaries.total_elements, 2);

        let inactive = use_case
            .execute(ButtonQuery {
                is_active: Some(false),
                ..ButtonQuery::default()
            })
            .await
            .unwrap();
        assert_eq!(inactive.total_elements, 1);
        assert_eq!(inactive.content[0].name().as_str(), "Cancel");
    }

    #[tokio::test]
    async fn test_paging() {
        let use_case = seeded().await;

        let first = use_case
            .execute(ButtonQuery {
                size: 2,
                ..ButtonQuery::default()
            })
            .await
            .unwrap();
        assert_eq!(first.content.len(), 2);
        assert_eq!(first.total_pages(), 3);
        assert!(first.is_first());
        assert!(!first.is_last());

        let last = use_case
            .execute(ButtonQuery {
                page: 2,
                size: 2,
                ..ButtonQuery::default()
            })
            .await
            .unwrap();
        assert_eq!(last.content.len(), 1);
        assert!(last.is_last());

        let beyond = use_case
            .execute(ButtonQuery {
                page: 9,
                size: 2,
                ..ButtonQuery::default()
            })
            .await
            .unwrap();
        assert!(beyond.content.is_empty());
    }

    #[tokio::test]
    async fn test_empty_result_has_one_page() {
        let use_case = SearchButtonsUseCase::new(Arc::new(InMemoryButtonRepository::new()));
        let page = use_case.execute(ButtonQuery::default()).await.unwrap();
        assert_eq!(page.total_pages(), 1);
        assert!(page.is_first() && page.is_last());
    }

    #[tokio::test]
    async fn test_rejects_bad_size() {
        let use_case = seeded().await;
        for size in [0, 101] {
            let err = use_case
                .execute(ButtonQuery {
                    size,
                    ..ButtonQuery::default()
                })
                .await
                .unwrap_err();
            assert!(matches!(err, UseCaseError::InvalidQuery(_)));
        }
    }
}
