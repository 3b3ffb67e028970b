//! Single-field extractors over form data
//!
//! Every extractor here follows the same pipeline: read the named key from
//! the permitted form source, treat an empty value as "absent" (empty result,
//! no error), percent-unescape, then apply the field rule. Empty meaning
//! absent is a documented contract: callers distinguish "absent" (no error)
//! from "present but invalid" (error) and depend on it.

use log::warn;

use crate::decode::{parse_bool, unescape_query_component};
use crate::errors::{ExtractError, ExtractResult};
use crate::extract::Extractor;
use crate::request::RequestInput;
use crate::rules::FieldRules;
use crate::sanitize::{escape_html, sanitise_log_string};
use crate::{MAX_SOURCE_URL_LENGTH, MIN_SOURCE_URL_LENGTH};

/// Unrendered client-side template string that search bots replay verbatim;
/// not worth a log line when it fails table validation
const TEMPLATE_ARTIFACT: &str = "{{ db.Tablename }}";

/// Read and percent-unescape a form field, mapping "absent" to `None`
fn unescaped(req: &RequestInput, key: &str, allow_get: bool) -> ExtractResult<Option<String>> {
    let raw = req.value(key, allow_get);
    if raw.is_empty() {
        return Ok(None);
    }
    unescape_query_component(raw).map(Some)
}

impl<R: FieldRules> Extractor<R> {
    /// Database owner name from the `dbowner` field
    pub fn owner(&self, req: &RequestInput, allow_get: bool) -> ExtractResult<String> {
        let Some(owner) = unescaped(req, "dbowner", allow_get)? else {
            return Ok(String::new());
        };
        if let Err(reason) = self.rules().user(&owner) {
            warn!(
                "validation failed for database owner name '{}': {}",
                sanitise_log_string(&owner),
                reason
            );
            return Err(ExtractError::validation("owner", "invalid owner name"));
        }
        Ok(owner)
    }

    /// Username from the `username` field
    pub fn username(&self, req: &RequestInput, allow_get: bool) -> ExtractResult<String> {
        let Some(name) = unescaped(req, "username", allow_get)? else {
            return Ok(String::new());
        };
        if let Err(reason) = self.rules().user(&name) {
            warn!(
                "validation failed for username '{}': {}",
                sanitise_log_string(&name),
                reason
            );
            return Err(ExtractError::validation("username", "invalid username"));
        }
        Ok(name)
    }

    /// Database name from the `dbname` field
    pub fn database(&self, req: &RequestInput, allow_get: bool) -> ExtractResult<String> {
        let Some(name) = unescaped(req, "dbname", allow_get)? else {
            return Ok(String::new());
        };
        if self.rules().database(&name).is_err() {
            return Err(ExtractError::validation("database", "invalid database name"));
        }
        Ok(name)
    }

    /// Branch, tag, and release names share one rule and one error shape
    fn named_ref(&self, req: &RequestInput, key: &str, field: &'static str) -> ExtractResult<String> {
        let Some(name) = unescaped(req, key, true)? else {
            return Ok(String::new());
        };
        if self.rules().branch(&name).is_err() {
            return Err(ExtractError::validation(
                field,
                format!("invalid {} name: '{}'", field, sanitise_log_string(&name)),
            ));
        }
        Ok(name)
    }

    /// Branch name from the `branch` field
    pub fn branch(&self, req: &RequestInput) -> ExtractResult<String> {
        self.named_ref(req, "branch", "branch")
    }

    /// Tag name from the `tag` field
    pub fn tag(&self, req: &RequestInput) -> ExtractResult<String> {
        self.named_ref(req, "tag", "tag")
    }

    /// Release name from the `release` field
    pub fn release(&self, req: &RequestInput) -> ExtractResult<String> {
        self.named_ref(req, "release", "release")
    }

    /// Commit identifier from the `commit` field, validated only when present
    pub fn commit(&self, req: &RequestInput) -> ExtractResult<String> {
        let Some(id) = unescaped(req, "commit", true)? else {
            return Ok(String::new());
        };
        if self.rules().commit(&id).is_err() {
            return Err(ExtractError::validation(
                "commit",
                format!("invalid database commit: '{}'", sanitise_log_string(&id)),
            ));
        }
        Ok(id)
    }

    /// Licence name from the `licence` field (POST/PUT only)
    pub fn licence(&self, req: &RequestInput) -> ExtractResult<String> {
        let Some(name) = unescaped(req, "licence", false)? else {
            return Ok(String::new());
        };
        if let Err(reason) = self.rules().licence(&name) {
            warn!(
                "validation failed for licence name '{}': {}",
                sanitise_log_string(&name),
                reason
            );
            return Err(ExtractError::validation("licence", "invalid licence name"));
        }
        Ok(name)
    }

    /// Table name from the form data, via the PostgreSQL identifier rule
    pub fn table_form(&self, req: &RequestInput, allow_get: bool) -> ExtractResult<String> {
        let Some(name) = unescaped(req, "table", allow_get)? else {
            return Ok(String::new());
        };
        if let Err(reason) = self.rules().pg_table(&name) {
            warn!(
                "validation failed for table name '{}': {}",
                sanitise_log_string(&name),
                reason
            );
            return Err(ExtractError::validation("table", "invalid table name"));
        }
        Ok(name)
    }

    /// Table name from the combined form data, via the generic table rule
    pub fn table(&self, req: &RequestInput) -> ExtractResult<String> {
        let Some(name) = unescaped(req, "table", true)? else {
            return Ok(String::new());
        };
        if let Err(reason) = self.rules().table(&name) {
            if name != TEMPLATE_ARTIFACT {
                warn!(
                    "validation failed for table name '{}': {}",
                    sanitise_log_string(&name),
                    reason
                );
            }
            return Err(ExtractError::validation("table", "invalid table name"));
        }
        Ok(name)
    }

    /// Source URL from the `sourceurl` field (POST/PUT only). Read raw:
    /// '+' and '%' are meaningful inside URLs, and the body parser already
    /// decoded the value once.
    pub fn source_url(&self, req: &RequestInput) -> ExtractResult<String> {
        let url = req.post_form_value("sourceurl");
        if url.is_empty() {
            return Ok(String::new());
        }
        if url.len() < MIN_SOURCE_URL_LENGTH
            || url.len() > MAX_SOURCE_URL_LENGTH
            || !validator::validate_url(url)
        {
            return Err(ExtractError::validation(
                "sourceurl",
                "validation failed for source URL field",
            ));
        }
        Ok(url.to_string())
    }

    /// Public/private flag from the `public` field (POST/PUT only). A valid
    /// `false` and a missing value are distinct: absence is an error here.
    pub fn public_flag(&self, req: &RequestInput) -> ExtractResult<bool> {
        let value = req.post_form_value("public");
        if value.is_empty() {
            return Err(ExtractError::validation(
                "public",
                "no public/private value present",
            ));
        }
        parse_bool(value).map_err(|_| {
            warn!(
                "cannot interpret public value '{}' as a boolean",
                sanitise_log_string(value)
            );
            ExtractError::validation("public", "invalid public/private value")
        })
    }

    /// Live flag from the `live` field (POST/PUT only). Absent or any
    /// casing of "false" short-circuits to `false` with no error.
    pub fn live_flag(&self, req: &RequestInput) -> ExtractResult<bool> {
        let value = req.post_form_value("live");
        if value.is_empty() || value.eq_ignore_ascii_case("false") {
            return Ok(false);
        }
        parse_bool(value).map_err(|_| {
            ExtractError::validation(
                "live",
                format!("cannot interpret live value '{}' as a boolean", escape_html(value)),
            )
        })
    }

    /// Folders are not a supported concept yet; always the root folder
    pub fn folder(&self, _req: &RequestInput, _allow_get: bool) -> ExtractResult<String> {
        Ok("/".to_string())
    }
}
