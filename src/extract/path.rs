//! Owner and database extraction from URL path segments

use log::warn;

use crate::errors::{ExtractError, ExtractResult};
use crate::extract::Extractor;
use crate::request::RequestInput;
use crate::rules::FieldRules;
use crate::sanitize::sanitise_log_string;

impl<R: FieldRules> Extractor<R> {
    /// Owner and database name from the request path. `ignore_leading` is
    /// the number of leading path segments to skip, e.g. for versioned API
    /// prefixes: with `ignore_leading = 0`, `/alice/mydb` yields
    /// (`alice`, `mydb`); with `ignore_leading = 1`, `/v1/alice/mydb` does.
    pub fn owner_database(
        &self,
        req: &RequestInput,
        ignore_leading: usize,
    ) -> ExtractResult<(String, String)> {
        // Index 0 is the empty segment before the leading slash
        let segments: Vec<&str> = req.path().split('/').collect();
        if segments.len() < 3 + ignore_leading {
            warn!(
                "unexpected structure in requested URL: '{}'",
                sanitise_log_string(req.path())
            );
            return Err(ExtractError::MalformedUrl);
        }
        let owner = segments[1 + ignore_leading].to_string();
        let database = segments[2 + ignore_leading].to_string();

        if self.rules().user_database(&owner, &database).is_err() {
            return Err(ExtractError::validation(
                "owner/database",
                "invalid owner or database name",
            ));
        }

        Ok((owner, database))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_database_from_path() {
        let req = RequestInput::new("/alice/mydb");
        let (owner, database) = Extractor::new().owner_database(&req, 0).unwrap();
        assert_eq!(owner, "alice");
        assert_eq!(database, "mydb");
    }

    #[test]
    fn test_path_too_short() {
        let req = RequestInput::new("/alice");
        let err = Extractor::new().owner_database(&req, 0).unwrap_err();
        assert_eq!(err, ExtractError::MalformedUrl);
    }

    #[test]
    fn test_ignore_leading_skips_prefix() {
        let req = RequestInput::new("/v1/alice/mydb");
        let (owner, database) = Extractor::new().owner_database(&req, 1).unwrap();
        assert_eq!(owner, "alice");
        assert_eq!(database, "mydb");

        // Without the offset, the prefix is taken for the owner
        let (owner, database) = Extractor::new().owner_database(&req, 0).unwrap();
        assert_eq!(owner, "v1");
        assert_eq!(database, "alice");
    }

    #[test]
    fn test_ignore_leading_lengthens_minimum() {
        let req = RequestInput::new("/alice/mydb");
        assert_eq!(
            Extractor::new().owner_database(&req, 1).unwrap_err(),
            ExtractError::MalformedUrl
        );
    }

    #[test]
    fn test_invalid_owner_or_database() {
        let req = RequestInput::new("/alice/bad;db");
        let err = Extractor::new().owner_database(&req, 0).unwrap_err();
        assert_eq!(err.to_string(), "invalid owner or database name");
    }

    #[test]
    fn test_trailing_segments_are_ignored() {
        let req = RequestInput::new("/alice/mydb/extra/bits");
        let (owner, database) = Extractor::new().owner_database(&req, 0).unwrap();
        assert_eq!(owner, "alice");
        assert_eq!(database, "mydb");
    }
}
