//! HTTP route handlers.
//!
//! # Routes
//!
//! - `GET    /api/buttons` - all buttons, deleted ones included
//! - `POST   /api/buttons` - create a button
//! - `GET    /api/buttons/active` - active, non-deleted buttons
//! - `GET    /api/buttons/search` - filtered, paged listing
//! - `GET    /api/buttons/{id}` - one button
//! - `PUT    /api/buttons/{id}` - edit name, description and type
//! - `DELETE /api/buttons/{id}` - soft delete
//! - `PATCH  /api/buttons/{id}/status` - change lifecycle status
//! - `GET    /health` - liveness
//! - `GET    /health/ready` - readiness (checks the database)

pub mod buttons;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the complete router, without middleware or state.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(buttons::router())
}
