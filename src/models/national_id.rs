use std::fmt;

use crate::{error::INVALID_FORMAT, CustomerError, Result};

/// A national identifier ("CPF"), kept as its digit string so leading zeros
/// survive
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NationalId(String);

impl NationalId {
    /// Accepts a non-empty string of ASCII digits, surrounding whitespace is
    /// ignored
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CustomerError::validation(INVALID_FORMAT));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
