//! Error types for the quotation system

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by rate loading, premium computation, and rendering
///
/// The two startup errors (`ResourceNotFound`, `MalformedRates`) are fatal:
/// without a usable rate table no quotation can be produced. Everything else
/// is recoverable within a session.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The rate table resource is missing
    #[error("rate table not found at {}", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rate table resource exists but cannot be used
    #[error("malformed rate table: {0}")]
    MalformedRates(String),

    /// No row in the rate table covers the requested age
    #[error("no matching rate found for age {age}")]
    NoMatchingRate { age: u8 },

    /// A client entry is outside the product's accepted range
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Quotation document generation failed
    #[error("quotation rendering failed: {0}")]
    Render(String),
}

impl QuoteError {
    pub fn malformed(message: impl Into<String>) -> Self {
        QuoteError::MalformedRates(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        QuoteError::InvalidInput(message.into())
    }

    pub fn render(message: impl Into<String>) -> Self {
        QuoteError::Render(message.into())
    }

    /// Fatal errors mean the process cannot serve quotations at all.
    /// Recoverable ones leave the current session usable.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            QuoteError::ResourceNotFound { .. } | QuoteError::MalformedRates(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        let missing = QuoteError::ResourceNotFound {
            path: PathBuf::from("data/per_mille_rates.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(missing.is_fatal());
        assert!(QuoteError::malformed("truncated header").is_fatal());

        assert!(!QuoteError::NoMatchingRate { age: 60 }.is_fatal());
        assert!(!QuoteError::invalid_input("age 17 below minimum").is_fatal());
        assert!(!QuoteError::render("empty page").is_fatal());
    }

    #[test]
    fn test_no_matching_rate_message() {
        let err = QuoteError::NoMatchingRate { age: 60 };
        assert_eq!(err.to_string(), "no matching rate found for age 60");
    }
}
