//! Validated name newtypes for catalog entries
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for product names
const MAX_NAME_LENGTH: usize = 200;

/// A validated product name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Create a new validated product name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Product name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Product name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProductName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ProductName> for String {
    fn from(name: ProductName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let name = ProductName::new("  Desk Lamp  ").unwrap();
        assert_eq!(name.as_str(), "Desk Lamp");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(ProductName::new("").is_err());
        assert!(ProductName::new("   ").is_err());
    }

    #[test]
    fn rejects_overlong_names() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        let err = ProductName::new(long).unwrap_err();
        assert!(err.to_string().contains("200"));
        assert!(ProductName::new("x".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn deserialization_validates() {
        let ok: ProductName = serde_json::from_str("\"Smart Watch\"").unwrap();
        assert_eq!(ok.to_string(), "Smart Watch");
        assert!(serde_json::from_str::<ProductName>("\"  \"").is_err());
    }
}
