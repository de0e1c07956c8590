//! Categorical enums carried by a button.
//!
//! Both enums serialize as `SCREAMING_SNAKE_CASE` strings (`"PRIMARY"`,
//! `"INACTIVE"`) and are stored the same way in `PostgreSQL` text columns.

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a known variant.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {value} (expected one of: {expected})")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

/// Visual style of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ButtonType {
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
    Light,
    Dark,
}

impl ButtonType {
    /// Every button type, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Default,
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Info,
        Self::Light,
        Self::Dark,
    ];

    /// The wire/storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Primary => "PRIMARY",
            Self::Secondary => "SECONDARY",
            Self::Success => "SUCCESS",
            Self::Warning => "WARNING",
            Self::Danger => "DANGER",
            Self::Info => "INFO",
            Self::Light => "LIGHT",
            Self::Dark => "DARK",
        }
    }
}

impl std::fmt::Display for ButtonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ButtonType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "button type",
                value: s.to_owned(),
                expected: "DEFAULT, PRIMARY, SECONDARY, SUCCESS, WARNING, DANGER, INFO, LIGHT, DARK",
            })
    }
}

/// Lifecycle status of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ButtonStatus {
    #[default]
    Active,
    Inactive,
    Deleted,
}

impl ButtonStatus {
    /// The wire/storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Deleted => "DELETED",
        }
    }
}

impl std::fmt::Display for ButtonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ButtonStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "DELETED" => Ok(Self::Deleted),
            _ => Err(ParseEnumError {
                kind: "status",
                value: s.to_owned(),
                expected: "ACTIVE, INACTIVE, DELETED",
            }),
        }
    }
}
