//! Request field extraction
//!
//! The extraction component proper. Single-field extractors pull one named
//! field out of a request's form data or URL path, decode it, and apply the
//! matching field rule; composite extractors run several of them in a fixed
//! order and stop at the first failure.

mod composite;
mod form;
mod path;

use crate::rules::{FieldRules, StandardRules};

/// Extracts validated request fields using an injected rule set.
///
/// The extractor holds no per-request state; one instance can serve any
/// number of concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor<R = StandardRules> {
    rules: R,
}

impl Extractor<StandardRules> {
    /// An extractor using the standard field rules
    pub fn new() -> Self {
        Self {
            rules: StandardRules,
        }
    }
}

impl<R: FieldRules> Extractor<R> {
    /// An extractor using a caller-supplied rule set
    pub fn with_rules(rules: R) -> Self {
        Self { rules }
    }

    /// The rule set in use
    pub fn rules(&self) -> &R {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleResult;

    struct RejectEverything;

    impl FieldRules for RejectEverything {
        fn user(&self, _: &str) -> RuleResult {
            Err("no".to_string())
        }
        fn database(&self, _: &str) -> RuleResult {
            Err("no".to_string())
        }
        fn branch(&self, _: &str) -> RuleResult {
            Err("no".to_string())
        }
        fn commit(&self, _: &str) -> RuleResult {
            Err("no".to_string())
        }
        fn licence(&self, _: &str) -> RuleResult {
            Err("no".to_string())
        }
        fn pg_table(&self, _: &str) -> RuleResult {
            Err("no".to_string())
        }
    }

    #[test]
    fn test_rules_are_injectable() {
        let req = crate::RequestInput::new("/").with_body("dbowner", "alice");
        assert!(Extractor::new().owner(&req, false).is_ok());
        assert!(Extractor::with_rules(RejectEverything)
            .owner(&req, false)
            .is_err());
    }
}
