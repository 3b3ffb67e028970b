//! Field validation rules
//!
//! The extractors sequence calls into an injected rule capability rather
//! than a set of process-wide validator globals, so embedders and tests can
//! substitute their own rule set. `StandardRules` is the default
//! implementation used by `Extractor::new`.

use lazy_static::lazy_static;
use regex::Regex;

/// Verdict of a single field rule: pass, or fail with an explanatory message
pub type RuleResult = Result<(), String>;

/// The set of field rules the extractors call into.
///
/// Branch, tag, and release names intentionally share the `branch` rule.
/// `table` is the generic table-name slot and defaults to the PostgreSQL
/// rule; overriding it is the intended one-line change once a dedicated rule
/// for other engines exists.
pub trait FieldRules: Send + Sync {
    /// Account / database owner names
    fn user(&self, name: &str) -> RuleResult;

    /// Database names
    fn database(&self, name: &str) -> RuleResult;

    /// Branch, tag, and release names
    fn branch(&self, name: &str) -> RuleResult;

    /// Commit identifiers
    fn commit(&self, id: &str) -> RuleResult;

    /// Licence friendly names
    fn licence(&self, name: &str) -> RuleResult;

    /// PostgreSQL table identifiers
    fn pg_table(&self, name: &str) -> RuleResult;

    /// Generic table names (defaults to the PostgreSQL rule)
    fn table(&self, name: &str) -> RuleResult {
        self.pg_table(name)
    }

    /// Combined owner + database check used by path-based extraction
    fn user_database(&self, user: &str, database: &str) -> RuleResult {
        self.user(user)?;
        self.database(database)
    }
}

lazy_static! {
    static ref USER_RE: Regex = Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]{1,62}$").unwrap();
    static ref DATABASE_RE: Regex = Regex::new(r"^[a-zA-Z0-9._\-+() ]{1,256}$").unwrap();
    static ref BRANCH_RE: Regex = Regex::new(r"^\PC{1,32}$").unwrap();
    static ref COMMIT_RE: Regex = Regex::new(r"^[a-f0-9]{64}$").unwrap();
    static ref LICENCE_RE: Regex = Regex::new(r"^[a-zA-Z0-9._\-+() ]{1,70}$").unwrap();
    static ref PG_TABLE_RE: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_$]{0,62}$").unwrap();
}

/// Default rule set matching the hosting service's field conventions
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl FieldRules for StandardRules {
    fn user(&self, name: &str) -> RuleResult {
        if USER_RE.is_match(name) {
            Ok(())
        } else {
            Err("user names must be 2-63 alphanumeric or hyphen characters, starting with an alphanumeric".to_string())
        }
    }

    fn database(&self, name: &str) -> RuleResult {
        if DATABASE_RE.is_match(name) {
            Ok(())
        } else {
            Err("database names must be 1-256 characters drawn from letters, digits, '.', '-', '_', '+', '(', ')', and spaces".to_string())
        }
    }

    fn branch(&self, name: &str) -> RuleResult {
        if BRANCH_RE.is_match(name) {
            Ok(())
        } else {
            Err("branch, tag, and release names must be 1-32 printable characters".to_string())
        }
    }

    fn commit(&self, id: &str) -> RuleResult {
        if COMMIT_RE.is_match(id) {
            Ok(())
        } else {
            Err("commit identifiers must be 64 lowercase hex digits".to_string())
        }
    }

    fn licence(&self, name: &str) -> RuleResult {
        if LICENCE_RE.is_match(name) {
            Ok(())
        } else {
            Err("licence names must be 1-70 characters drawn from letters, digits, '.', '-', '_', '+', '(', ')', and spaces".to_string())
        }
    }

    fn pg_table(&self, name: &str) -> RuleResult {
        if PG_TABLE_RE.is_match(name) {
            Ok(())
        } else {
            Err("table names must be 1-63 characters, starting with a letter or underscore, then letters, digits, '_' or '$'".to_string())
        }
    }
}
