//! Identity types for tradewinds accounts.

use std::fmt;
use thiserror::Error;

/// Errors raised when constructing identity types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("callsign must not be empty")]
    EmptyCallsign,
}

/// Agent callsign identifying one account on the remote API.
///
/// The remote API treats agent symbols case-insensitively and reports them
/// uppercased, so `Callsign` canonicalizes to uppercase on construction.
/// One account therefore always maps to exactly one cache path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Callsign(String);

impl Callsign {
    /// Canonicalize and validate an agent symbol.
    ///
    /// Surrounding whitespace is stripped; an empty symbol is rejected.
    pub fn new(symbol: impl Into<String>) -> Result<Self, IdentityError> {
        let symbol = symbol.into();
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(IdentityError::EmptyCallsign);
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// The canonical (uppercase) symbol.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Callsign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Callsign {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
