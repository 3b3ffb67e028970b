//! # Request Field Extraction Library
//!
//! Extracts and validates user-supplied request parameters (owner, database,
//! branch, commit, table, tag, release, licence, source URL, public/private
//! flag) for the database hosting service, normalizing them into safe, typed
//! values before they reach business logic.
//!
//! ## Features
//!
//! - Percent and base64 decoding with strict error reporting
//! - Unicode control-character safety checks for SQL-adjacent values
//! - Single-field extractors for every supported form field and path shape
//! - Composite extractors with short-circuit error propagation
//! - Injectable field rules for testing and embedding
//! - Structured error kinds alongside legacy human-readable messages

mod apikey;
mod decode;
mod errors;
mod request;
mod sanitize;

pub mod extract;
pub mod rules;

pub use apikey::check_api_key;
pub use decode::{check_unicode, decode_base64_any, parse_bool, unescape_query_component};
pub use errors::{ExtractError, ExtractResult};
pub use extract::Extractor;
pub use request::RequestInput;
pub use rules::{FieldRules, RuleResult, StandardRules};
pub use sanitize::{escape_html, sanitise_log_string};

/// Re-export of commonly used items for convenience
pub mod prelude {
    pub use crate::apikey::check_api_key;
    pub use crate::errors::{ExtractError, ExtractResult};
    pub use crate::extract::Extractor;
    pub use crate::request::RequestInput;
    pub use crate::rules::{FieldRules, StandardRules};
}

/// Version of the extraction library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum accepted length for a source URL
pub const MIN_SOURCE_URL_LENGTH: usize = 5;

/// Maximum accepted length for a source URL
pub const MAX_SOURCE_URL_LENGTH: usize = 255;

/// Encoded length of an API key
pub const API_KEY_LENGTH: usize = 27;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_consts() {
        assert_eq!(MIN_SOURCE_URL_LENGTH, 5);
        assert_eq!(MAX_SOURCE_URL_LENGTH, 255);
        assert_eq!(API_KEY_LENGTH, 27);
    }

    #[test]
    fn test_prelude_surface() {
        use prelude::*;

        let req = RequestInput::new("/alice/mydb");
        let extractor = Extractor::new();
        let (owner, database) = extractor.owner_database(&req, 0).unwrap();
        assert_eq!((owner.as_str(), database.as_str()), ("alice", "mydb"));
        assert!(check_api_key("0ujtsYcgvSTl8PAuAdqWYSMnLOv").is_ok());
    }
}
