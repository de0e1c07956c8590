//! JSON request and response bodies.
//!
//! Field names are camelCase on the wire. Timestamps are RFC 3339 strings and
//! IDs are UUID strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use buttons_core::usecase::{ButtonPage, ButtonQuery};
use buttons_core::{ActorId, Button, ButtonId, ButtonStatus, ButtonType};

// =============================================================================
// Requests
// =============================================================================

/// Body of `POST /api/buttons`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateButtonRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub button_type: ButtonType,
    pub created_by: ActorId,
}

/// Body of `PUT /api/buttons/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateButtonRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub button_type: ButtonType,
    pub updated_by: ActorId,
}

/// Body of `PATCH /api/buttons/{id}/status`.
///
/// `status` stays a string so that an unknown value reads as a client error
/// with a readable message instead of a generic deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusRequest {
    pub status: String,
    pub updated_by: ActorId,
}

/// Body of `DELETE /api/buttons/{id}`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteButtonRequest {
    pub updated_by: ActorId,
}

/// Query string of `GET /api/buttons/search`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub button_type: Option<ButtonType>,
    pub status: Option<ButtonStatus>,
    pub is_active: Option<bool>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl From<SearchParams> for ButtonQuery {
    fn from(params: SearchParams) -> Self {
        Self {
            name: params.name.filter(|n| !n.trim().is_empty()),
            button_type: params.button_type,
            status: params.status,
            is_active: params.is_active,
            page: params.page.unwrap_or(0),
            size: params.size.unwrap_or(Self::DEFAULT_PAGE_SIZE),
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Envelope for every successful response.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// `BAD_REQUEST`, `NOT_FOUND` or `INTERNAL_SERVER_ERROR`.
    pub error: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub path: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
            path: None,
        }
    }
}

/// A button as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonResponse {
    pub id: Option<ButtonId>,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub button_type: ButtonType,
    pub status: ButtonStatus,
    pub created_at: DateTime<Utc>,
    pub created_by: ActorId,
    pub updated_at: DateTime<Utc>,
    pub updated_by: ActorId,
    pub deleted_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub is_deleted: bool,
}

impl From<Button> for ButtonResponse {
    fn from(button: Button) -> Self {
        let is_active = button.is_active();
        let is_deleted = button.is_deleted();
        let parts = button.into_parts();

        Self {
            id: parts.id,
            name: parts.name,
            description: parts.description,
            button_type: parts.button_type,
            status: parts.status,
            created_at: parts.created_at,
            created_by: parts.created_by,
            updated_at: parts.updated_at,
            updated_by: parts.updated_by,
            deleted_at: parts.deleted_at,
            is_active,
            is_deleted,
        }
    }
}

/// `data` of a create.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateButtonResponse {
    pub id: Option<ButtonId>,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub button_type: ButtonType,
    pub status: ButtonStatus,
    pub created_at: DateTime<Utc>,
    pub created_by: ActorId,
    pub message: String,
}

impl From<Button> for CreateButtonResponse {
    fn from(button: Button) -> Self {
        let parts = button.into_parts();
        Self {
            id: parts.id,
            name: parts.name,
            description: parts.description,
            button_type: parts.button_type,
            status: parts.status,
            created_at: parts.created_at,
            created_by: parts.created_by,
            message: "Button created successfully".to_owned(),
        }
    }
}

/// `data` of an update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateButtonResponse {
    pub id: Option<ButtonId>,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub button_type: ButtonType,
    pub status: ButtonStatus,
    pub updated_at: DateTime<Utc>,
    pub updated_by: ActorId,
    pub message: String,
}

impl From<Button> for UpdateButtonResponse {
    fn from(button: Button) -> Self {
        let parts = button.into_parts();
        Self {
            id: parts.id,
            name: parts.name,
            description: parts.description,
            button_type: parts.button_type,
            status: parts.status,
            updated_at: parts.updated_at,
            updated_by: parts.updated_by,
            message: "Button updated successfully".to_owned(),
        }
    }
}

/// `data` of a soft delete.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteButtonResponse {
    pub id: Option<ButtonId>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: ActorId,
    pub message: String,
}

impl From<Button> for DeleteButtonResponse {
    fn from(button: Button) -> Self {
        Self {
            id: button.id(),
            deleted_at: button.deleted_at(),
            deleted_by: button.updated_by(),
            message: "Button deleted successfully".to_owned(),
        }
    }
}

/// `data` of a search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedButtonResponse {
    pub content: Vec<ButtonResponse>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl From<ButtonPage> for PagedButtonResponse {
    fn from(page: ButtonPage) -> Self {
        let total_pages = page.total_pages();
        let first = page.is_first();
        let last = page.is_last();
        let content: Vec<ButtonResponse> = page.content.into_iter().map(Into::into).collect();

        Self {
            empty: content.is_empty(),
            content,
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages,
            first,
            last,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn up() -> Self {
        Self {
            status: "UP",
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
