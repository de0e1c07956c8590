//! The `Button` entity and its state transitions.
//!
//! A [`Button`] is always valid: its fields are private and every path that
//! produces or changes one (construction, rehydration, `update_info`) runs
//! the name and description checks. Mutations happen in place through
//! `&mut self`; whoever holds the value between a repository load and the
//! following `save` owns it exclusively.

use chrono::{DateTime, Utc};
use crate::types::{ActorId, ButtonId, ButtonName, ButtonStatus, ButtonType, NameError};

/// Maximum length of a button description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Validation failures raised by the entity.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ButtonError {
    /// The name is blank or too long.
    #[error(transparent)]
    InvalidName(#[from] NameError),

    /// The description is too long.
    #[error("Button description cannot exceed {max} characters")]
    DescriptionTooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// Plain record form of a [`Button`].
///
/// Used to rehydrate buttons from storage and to take them apart again. It
/// carries no invariants of its own; [`Button::from_parts`] validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonParts {
    pub id: Option<ButtonId>,
    pub name: String,
    pub description: Option<String>,
    pub button_type: ButtonType,
    pub status: ButtonStatus,
    pub created_at: DateTime<Utc>,
    pub created_by: ActorId,
    pub updated_at: DateTime<Utc>,
    pub updated_by: ActorId,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A button record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    id: Option<ButtonId>,
    name: ButtonName,
    description: Option<String>,
    button_type: ButtonType,
    status: ButtonStatus,
    created_at: DateTime<Utc>,
    created_by: ActorId,
    updated_at: DateTime<Utc>,
    updated_by: ActorId,
    deleted_at: Option<DateTime<Utc>>,
}

impl Button {
    /// Create a new, not yet persisted, active button.
    ///
    /// `created_by` is also recorded as the last updater.
    ///
    /// # Errors
    ///
    /// Returns `ButtonError` if the name is blank or longer than 100
    /// characters, or the description is longer than 500 characters.
    pub fn new(
        name: &str,
        description: Option<String>,
        button_type: ButtonType,
        created_by: ActorId,
    ) -> Result<Self, ButtonError> {
        let name = ButtonName::parse(name)?;
        validate_description(description.as_deref())?;
        let now = Utc::now();

        Ok(Self {
            id: None,
            name,
            description,
            button_type,
            status: ButtonStatus::Active,
            created_at: now,
            created_by,
            updated_at: now,
            updated_by: created_by,
            deleted_at: None,
        })
    }

    /// Rebuild a button from its record form.
    ///
    /// # Errors
    ///
    /// Returns `ButtonError` if the record breaks the name or description
    /// constraints.
    pub fn from_parts(parts: ButtonParts) -> Result<Self, ButtonError> {
        let name = ButtonName::parse(&parts.name)?;
        validate_description(parts.description.as_deref())?;

        Ok(Self {
            id: parts.id,
            name,
            description: parts.description,
            button_type: parts.button_type,
            status: parts.status,
            created_at: parts.created_at,
            created_by: parts.created_by,
            updated_at: parts.updated_at,
            updated_by: parts.updated_by,
            deleted_at: parts.deleted_at,
        })
    }

    /// Take the button apart into its record form.
    #[must_use]
    pub fn into_parts(self) -> ButtonParts {
        ButtonParts {
            id: self.id,
            name: self.name.into_inner(),
            description: self.description,
            button_type: self.button_type,
            status: self.status,
            created_at: self.created_at,
            created_by: self.created_by,
            updated_at: self.updated_at,
            updated_by: self.updated_by,
            deleted_at: self.deleted_at,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub const fn id(&self) -> Option<ButtonId> {
        self.id
    }

    #[must_use]
    pub const fn name(&self) -> &ButtonName {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn button_type(&self) -> ButtonType {
        self.button_type
    }

    #[must_use]
    pub const fn status(&self) -> ButtonStatus {
        self.status
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn created_by(&self) -> ActorId {
        self.created_by
    }

    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[must_use]
    pub const fn updated_by(&self) -> ActorId {
        self.updated_by
    }

    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Whether the button has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Whether the button is active and not soft-deleted.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, ButtonStatus::Active) && !self.is_deleted()
    }

    // -------------------------------------------------------------------------
    // State transitions
    // -------------------------------------------------------------------------

    /// Mark the button active.
    ///
    /// A soft-deleted button keeps status `Deleted`; only the audit fields
    /// are refreshed. Deletion is final.
    pub fn activate(&mut self, actor: ActorId) {
        self.set_status(ButtonStatus::Active, actor);
    }

    /// Mark the button inactive.
    ///
    /// Same as [`Button::activate`] for soft-deleted buttons.
    pub fn deactivate(&mut self, actor: ActorId) {
        self.set_status(ButtonStatus::Inactive, actor);
    }

    fn set_status(&mut self, status: ButtonStatus, actor: ActorId) {
        if !self.is_deleted() {
            self.status = status;
        }
        self.touch(actor);
    }

    /// Replace the name and description.
    ///
    /// # Errors
    ///
    /// Returns `ButtonError` under the same rules as [`Button::new`]. The
    /// button is left unchanged on error.
    pub fn update_info(
        &mut self,
        name: &str,
        description: Option<String>,
        actor: ActorId,
    ) -> Result<(), ButtonError> {
        let name = ButtonName::parse(name)?;
        validate_description(description.as_deref())?;

        self.name = name;
        self.description = description;
        self.touch(actor);
        Ok(())
    }

    /// Change the visual style.
    pub fn change_type(&mut self, button_type: ButtonType, actor: ActorId) {
        self.button_type = button_type;
        self.touch(actor);
    }

    /// Soft-delete the button.
    ///
    /// Sets the status to `Deleted` and stamps `deleted_at`, with
    /// `updated_at` equal to it. Deleting an already deleted button is a
    /// no-op, so the original deletion time and actor are kept.
    pub fn soft_delete(&mut self, actor: ActorId) {
        if self.is_deleted() {
            return;
        }

        let now = Utc::now();
        self.status = ButtonStatus::Deleted;
        self.deleted_at = Some(now);
        self.updated_at = now;
        self.updated_by = actor;
    }

    /// Record the identity assigned by a repository.
    ///
    /// Only repositories call this, on first save.
    pub(crate) const fn assign_id(&mut self, id: ButtonId) {
        self.id = Some(id);
    }

    fn touch(&mut self, actor: ActorId) {
        self.updated_at = Utc::now();
        self.updated_by = actor;
    }
}

fn validate_description(description: Option<&str>) -> Result<(), ButtonError> {
    match description {
        Some(d) if d.chars().count() > MAX_DESCRIPTION_LENGTH => {
            Err(ButtonError::DescriptionTooLong {
                max: MAX_DESCRIPTION_LENGTH,
            })
        }
        _ => Ok(()),
    }
}
