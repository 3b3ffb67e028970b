//! Error handling for the extraction library
//!
//! Every extractor fails fast: the first error encountered is returned
//! immediately and no partial results are produced. Callers that still match
//! on error text get the legacy generic messages through `Display`; newer
//! callers should match on the variant and the `field()` accessor instead.

use thiserror::Error;

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Enum representing the different extraction error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Malformed percent-encoding or base64 input
    #[error("{0}")]
    Decode(String),

    /// A disallowed Unicode code point in a value destined for query contexts
    #[error("{0}")]
    UnsafeCharacter(String),

    /// A field failed its syntactic rule
    #[error("{message}")]
    Validation {
        /// Name of the offending field
        field: String,
        /// Generic, caller-safe message
        message: String,
    },

    /// The request path has too few segments
    #[error("invalid URL")]
    MalformedUrl,

    /// An API key that does not parse as the expected identifier format
    #[error("{0}")]
    InvalidFormat(String),
}

impl ExtractError {
    /// Create a validation error for a named field
    pub fn validation<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        ExtractError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the field the error relates to, where known
    pub fn field(&self) -> Option<&str> {
        match self {
            ExtractError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Returns true if this error came from a field rule rather than decoding
    pub fn is_validation(&self) -> bool {
        matches!(self, ExtractError::Validation { .. })
    }
}
