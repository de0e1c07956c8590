//! Buttons Core - domain model and application logic.
//!
//! This crate holds everything about buttons that does not depend on HTTP or
//! a particular database:
//! - `buttons-api` - axum service exposing the use cases over JSON
//! - `buttons-cli` - command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate performs no network or file I/O. Storage is reached only
//! through the [`repository::ButtonRepository`] trait; the in-memory
//! implementation lives here, the `PostgreSQL` one in `buttons-api`.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, validated names, type and status enums
//! - [`entity`] - The `Button` entity and its state transitions
//! - [`repository`] - Persistence contract and in-memory store
//! - [`usecase`] - Create, read, update, status change, delete and search

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod entity;
pub mod repository;
pub mod types;
pub mod usecase;

pub use entity::{Button, ButtonError, ButtonParts};
pub use repository::{ButtonRepository, InMemoryButtonRepository, RepositoryError};
pub use types::*;
pub use usecase::UseCaseError;
