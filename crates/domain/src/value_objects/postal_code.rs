//! Postal code value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A UK postal code in compact form (no whitespace, upper case)
///
/// The journey planner expects codes like `N1C4QP`, so every code is
/// normalised on construction regardless of how the geocoder spelled it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCode(String);

impl PostalCode {
    /// Create a postal code, stripping all whitespace
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPostalCode` if nothing but whitespace
    /// was supplied.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let compact: String = raw
            .as_ref()
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect();

        if compact.is_empty() {
            return Err(DomainError::InvalidPostalCode(raw.as_ref().to_string()));
        }

        Ok(Self(compact))
    }

    /// Wrap a code already known to be compact and non-empty
    pub(crate) fn new_unchecked(compact: &str) -> Self {
        Self(compact.to_string())
    }

    /// Get the compact postal code
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PostalCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PostalCode> for String {
    fn from(code: PostalCode) -> Self {
        code.0
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
