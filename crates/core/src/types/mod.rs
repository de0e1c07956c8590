//! Core value types for buttons.
//!
//! This module provides type-safe wrappers for identifiers, names and the
//! categorical fields of a button.

pub mod id;
pub mod name;
pub mod status;

pub use id::*;
pub use name::{ButtonName, NameError};
pub use status::*;
