//! Button name type.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Errors that can occur when parsing a [`ButtonName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The input is empty or whitespace only.
    #[error("Button name cannot be blank")]
    Blank,
    /// The input is too long.
    #[error("Button name cannot exceed {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// The display name of a button.
///
/// ## Constraints
///
/// - Must contain at least one non-whitespace character
/// - At most 100 characters (Unicode scalar values, not bytes)
///
/// The name is stored exactly as given; surrounding whitespace is not trimmed,
/// so `"Submit"` and `" Submit"` are distinct names.
///
/// ## Examples
///
/// ```
/// use buttons_core::ButtonName;
///
/// assert!(ButtonName::parse("Submit").is_ok());
/// assert!(ButtonName::parse("").is_err());
/// assert!(ButtonName::parse("   ").is_err());
/// assert!(ButtonName::parse(&"a".repeat(101)).is_err());
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ButtonName(String);

impl ButtonName {
    /// Maximum length of a button name, in characters.
    pub const MAX_LENGTH: usize = 100;

    /// Parse a `ButtonName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank or longer than 100 characters.
    pub fn parse(s: &str) -> Result<Self, NameError> {
        if s.trim().is_empty() {
            return Err(NameError::Blank);
        }

        if s.chars().count() > Self::MAX_LENGTH {
            return Err(NameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ButtonName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ButtonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ButtonName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ButtonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ButtonName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// Deserialization goes through `parse` so an invalid name never exists.
impl<'de> Deserialize<'de> for ButtonName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_names() {
        assert!(ButtonName::parse("Submit").is_ok());
        assert!(ButtonName::parse("a").is_ok());
        assert!(ButtonName::parse("Save & Continue").is_ok());
        assert!(ButtonName::parse(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(ButtonName::parse(""), Err(NameError::Blank));
        assert_eq!(ButtonName::parse(" \t\n"), Err(NameError::Blank));
    }

    #[test]
    fn test_parse_too_long() {
        assert_eq!(
            ButtonName::parse(&"a".repeat(101)),
            Err(NameError::TooLong { max: 100 })
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 100 two-byte characters is 200 bytes but still a valid name.
        assert!(ButtonName::parse(&"é".repeat(100)).is_ok());
        assert!(ButtonName::parse(&"é".repeat(101)).is_err());
    }

    #[test]
    fn test_surrounding_whitespace_is_kept() {
        let name = ButtonName::parse(" Submit ").unwrap();
        assert_eq!(name.as_str(), " Submit ");
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        let result: Result<ButtonName, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(NameError::Blank.to_string(), "Button name cannot be blank");
        assert_eq!(
            NameError::TooLong { max: 100 }.to_string(),
            "Button name cannot exceed 100 characters"
        );
    }
}
