#![forbid(unsafe_code)]

//! Core domain types for patcheck
//!
//! This module defines the fundamental types used throughout the checker:
//! the signature table that decides which calls are inspected, and the
//! finding record produced when a constant pattern fails to compile.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// The validation engine a signature's pattern argument is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorKind {
    /// Compile the pattern with the regex engine
    Regex,
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatorKind::Regex => write!(f, "regex"),
        }
    }
}

/// A tracked pattern-consuming function
///
/// Identifies a callable by its import path and function name, together with
/// the zero-based argument position that holds the pattern to validate.
/// Matching is by fully-qualified identity, never by substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// Import path of the defining package (e.g. "regexp")
    pub package: String,

    /// Exported function name (e.g. "MustCompile")
    pub function: String,

    /// Zero-based index of the pattern argument
    pub arg: usize,

    /// Which validation engine to run the pattern through
    pub validator: ValidatorKind,

    /// Reject an empty pattern even when the engine accepts it
    ///
    /// Off by default: the empty pattern is attempted like any other value
    /// and only fails if the engine itself rejects it.
    #[serde(default)]
    pub deny_empty: bool,
}

impl FunctionSignature {
    /// Creates a signature with the default policy (deny_empty off)
    pub fn new(
        package: impl Into<String>,
        function: impl Into<String>,
        arg: usize,
        validator: ValidatorKind,
    ) -> Self {
        FunctionSignature {
            package: package.into(),
            function: function.into(),
            arg,
            validator,
            deny_empty: false,
        }
    }

    /// The fully-qualified name used in reports (e.g. "regexp.MustCompile")
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.function)
    }
}

/// The set of functions whose pattern arguments are checked
///
/// Lookup is by (import path, function name). Near-duplicate signature
/// subsets are configuration variants of this one table, not separate code
/// paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureTable {
    signatures: Vec<FunctionSignature>,
    index: HashMap<(String, String), usize>,
}

impl SignatureTable {
    /// Creates a table from a list of signatures
    ///
    /// Later entries win when two signatures name the same function.
    pub fn new(signatures: Vec<FunctionSignature>) -> Self {
        let mut index = HashMap::new();
        for (i, sig) in signatures.iter().enumerate() {
            index.insert((sig.package.clone(), sig.function.clone()), i);
        }
        SignatureTable { signatures, index }
    }

    /// Looks up a signature by import path and function name
    pub fn lookup(&self, package: &str, function: &str) -> Option<&FunctionSignature> {
        self.index
            .get(&(package.to_string(), function.to_string()))
            .map(|&i| &self.signatures[i])
    }

    /// Iterates over the configured signatures in table order
    pub fn iter(&self) -> impl Iterator<Item = &FunctionSignature> {
        self.signatures.iter()
    }

    /// Number of configured signatures
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Whether the table has no signatures
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

impl Default for SignatureTable {
    /// The standard library functions whose first argument is a regular
    /// expression, mirroring staticcheck's SA1000 coverage.
    fn default() -> Self {
        let regexp = ["Compile", "Match", "MatchReader", "MatchString", "MustCompile"];
        SignatureTable::new(
            regexp
                .iter()
                .map(|f| FunctionSignature::new("regexp", *f, 0, ValidatorKind::Regex))
                .collect(),
        )
    }
}

/// A single diagnostic produced by the checker
///
/// Immutable once produced. Sorting follows the derived field order: file,
/// then line, then column, which is the report order contract.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Finding {
    /// File the offending call was found in
    pub file: PathBuf,

    /// Line of the pattern argument (1-indexed)
    pub line: u32,

    /// Column of the pattern argument (1-indexed)
    pub column: u32,

    /// Fully-qualified name of the called function
    pub function: String,

    /// The resolved constant pattern text
    pub pattern: String,

    /// The validation engine's error message
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} ({})",
            self.file.display(),
            self.line,
            self.column,
            self.message,
            self.function
        )
    }
}
