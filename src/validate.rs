#![forbid(unsafe_code)]

//! Pattern validation engines
//!
//! Validation delegates to the engine's own compiler; the checker only
//! surfaces the compile error, it never re-implements pattern syntax. Each
//! `ValidatorKind` in the signature table maps to one validator here.

use crate::types::ValidatorKind;
use std::collections::HashMap;

/// A validation engine for one kind of pattern
///
/// `Send + Sync` so the engine can check files in parallel.
pub trait PatternValidator: Send + Sync {
    /// Returns the engine's error message when the pattern fails to compile,
    /// or None when it is accepted.
    fn validate(&self, pattern: &str) -> Option<String>;
}

/// Validates patterns by compiling them with the regex engine
#[derive(Debug, Default)]
pub struct RegexValidator;

impl PatternValidator for RegexValidator {
    fn validate(&self, pattern: &str) -> Option<String> {
        match regex::Regex::new(pattern) {
            Ok(_) => None,
            Err(e) => Some(compact_message(&e.to_string())),
        }
    }
}

/// Reduces the regex engine's multi-line diagnostic to its final error line
///
/// The engine renders a caret diagram pointing into the pattern; the pattern
/// is reported separately in the finding, so only the last line carries
/// information.
fn compact_message(message: &str) -> String {
    message
        .lines()
        .last()
        .unwrap_or(message)
        .trim_start_matches("error: ")
        .to_string()
}

/// The validators available to a checker, keyed by kind
pub struct ValidatorSet {
    validators: HashMap<ValidatorKind, Box<dyn PatternValidator>>,
}

impl ValidatorSet {
    /// Looks up the validator for a signature's kind
    pub fn get(&self, kind: ValidatorKind) -> Option<&dyn PatternValidator> {
        self.validators.get(&kind).map(|v| v.as_ref())
    }

    /// Replaces or registers the validator for a kind
    pub fn register(&mut self, kind: ValidatorKind, validator: Box<dyn PatternValidator>) {
        self.validators.insert(kind, validator);
    }
}

impl Default for ValidatorSet {
    fn default() -> Self {
        let mut validators: HashMap<ValidatorKind, Box<dyn PatternValidator>> = HashMap::new();
        validators.insert(ValidatorKind::Regex, Box::new(RegexValidator));
        ValidatorSet { validators }
    }
}

impl std::fmt::Debug for ValidatorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorSet")
            .field("kinds", &self.validators.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_patterns_pass() {
        let v = RegexValidator;
        assert_eq!(v.validate("a+b*"), None);
        assert_eq!(v.validate(r"^\d{4}-\d{2}-\d{2}$"), None);
        assert_eq!(v.validate("(grouped|alternate)"), None);
    }

    #[test]
    fn test_empty_pattern_is_accepted() {
        assert_eq!(RegexValidator.validate(""), None);
    }

    #[test]
    fn test_unclosed_group_is_rejected() {
        let err = RegexValidator.validate("(").unwrap();
        assert!(err.contains("unclosed group"), "got: {err}");
    }

    #[test]
    fn test_message_is_single_line() {
        let err = RegexValidator.validate("[a-").unwrap();
        assert!(!err.contains('\n'), "got: {err}");
        assert!(!err.is_empty());
    }

    #[test]
    fn test_validator_set_has_regex() {
        let set = ValidatorSet::default();
        let v = set.get(ValidatorKind::Regex).unwrap();
        assert!(v.validate("(").is_some());
    }
}
