//! Button API handlers.
//!
//! Handlers translate JSON to use case commands and back. They hold no
//! business rules of their own; every failure flows through [`AppError`].

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{get, patch},
};

use buttons_core::usecase::{
    ChangeButtonStatusCommand, CreateButtonCommand, DeleteButtonCommand, UpdateButtonCommand,
};
use buttons_core::{ButtonId, ButtonStatus};

use crate::dto::{
    ButtonResponse, ChangeStatusRequest, CreateButtonRequest, CreateButtonResponse,
    DeleteButtonRequest, DeleteButtonResponse, PagedButtonResponse, SearchParams,
    SuccessResponse, UpdateButtonRequest, UpdateButtonResponse,
};
use crate::error::{AppError, Result};
use crate::state::AppState;

type ButtonBody = Json<SuccessResponse<ButtonResponse>>;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/buttons", get(list_buttons).post(create_button))
        .route("/api/buttons/active", get(list_active_buttons))
        .route("/api/buttons/search", get(search_buttons))
        .route(
            "/api/buttons/{id}",
            get(get_button).put(update_button).delete(delete_button),
        )
        .route("/api/buttons/{id}/status", patch(change_status))
}

// =============================================================================
// Queries
// =============================================================================

async fn list_buttons(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<Vec<ButtonResponse>>>> {
    let buttons = state.get().all().await?;
    Ok(Json(
        SuccessResponse::new(buttons.into_iter().map(Into::into).collect())
            .with_message("Buttons retrieved successfully"),
    ))
}

async fn list_active_buttons(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<Vec<ButtonResponse>>>> {
    let buttons = state.get().active().await?;
    Ok(Json(
        SuccessResponse::new(buttons.into_iter().map(Into::into).collect())
            .with_message("Active buttons retrieved successfully"),
    ))
}

async fn get_button(
    State(state): State<AppState>,
    path: std::result::Result<Path<ButtonId>, PathRejection>,
) -> Result<ButtonBody> {
    let Path(id) = path?;
    let button = state
        .get()
        .by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Button with id {id} not found")))?;

    Ok(Json(
        SuccessResponse::new(button.into()).with_message("Button retrieved successfully"),
    ))
}

async fn search_buttons(
    State(state): State<AppState>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SuccessResponse<PagedButtonResponse>>> {
    let Query(params) = params?;
    let page = state.search().execute(params.into()).await?;
    Ok(Json(SuccessResponse::new(page.into())))
}

// =============================================================================
// Commands
// =============================================================================

async fn create_button(
    State(state): State<AppState>,
    body: std::result::Result<Json<CreateButtonRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SuccessResponse<CreateButtonResponse>>)> {
    let Json(body) = body?;
    let button = state
        .create()
        .execute(CreateButtonCommand {
            name: body.name,
            description: body.description,
            button_type: body.button_type,
            created_by: body.created_by,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(button.into()).with_message("Button created successfully")),
    ))
}

async fn update_button(
    State(state): State<AppState>,
    path: std::result::Result<Path<ButtonId>, PathRejection>,
    body: std::result::Result<Json<UpdateButtonRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse<UpdateButtonResponse>>> {
    let Path(id) = path?;
    let Json(body) = body?;
    let button = state
        .update()
        .execute(UpdateButtonCommand {
            id,
            name: body.name,
            description: body.description,
            button_type: body.button_type,
            updated_by: body.updated_by,
        })
        .await?;

    Ok(Json(
        SuccessResponse::new(button.into()).with_message("Button updated successfully"),
    ))
}

async fn change_status(
    State(state): State<AppState>,
    path: std::result::Result<Path<ButtonId>, PathRejection>,
    body: std::result::Result<Json<ChangeStatusRequest>, JsonRejection>,
) -> Result<ButtonBody> {
    let Path(id) = path?;
    let Json(body) = body?;
    let status: ButtonStatus = body
        .status
        .parse()
        .map_err(|e| AppError::BadRequest(format!("{e}")))?;

    let button = state
        .change_status()
        .execute(ChangeButtonStatusCommand {
            id,
            status,
            updated_by: body.updated_by,
        })
        .await?;

    Ok(Json(
        SuccessResponse::new(button.into()).with_message("Button status changed successfully"),
    ))
}

async fn delete_button(
    State(state): State<AppState>,
    path: std::result::Result<Path<ButtonId>, PathRejection>,
    body: std::result::Result<Json<DeleteButtonRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse<DeleteButtonResponse>>> {
    let Path(id) = path?;
    let Json(body) = body?;
    let button = state
        .delete()
        .execute(DeleteButtonCommand {
            id,
            updated_by: body.updated_by,
        })
        .await?;

    Ok(Json(SuccessResponse::new(button.into())))
}
