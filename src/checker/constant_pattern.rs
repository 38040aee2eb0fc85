#![forbid(unsafe_code)]

//! The constant-pattern checker
//!
//! A single stateless pass over one parsed Go file: collect imports and
//! string bindings, then visit every `pkg.Func(...)` call, filter against
//! the signature table by fully-qualified identity, resolve the configured
//! argument to a constant, and run it through the signature's validator.
//!
//! Only a malformed tree fails the whole check. A pattern the engine rejects
//! becomes a finding; an argument that cannot be resolved is silently
//! skipped, since absence of a finding proves nothing about dynamic values.

use crate::checker::bindings::{Bindings, named_children, preorder};
use crate::error::CheckError;
use crate::types::{Finding, FunctionSignature, SignatureTable};
use crate::validate::ValidatorSet;
use std::path::Path;
use tree_sitter::{Node, Parser};

/// Checks constant pattern arguments at tracked call sites
///
/// The checker holds no per-file state; `check` is a pure function of its
/// inputs and may be invoked for many files in parallel.
pub struct ConstantPatternChecker {
    validators: ValidatorSet,
}

impl ConstantPatternChecker {
    /// Creates a checker with the default validators
    pub fn new() -> Self {
        ConstantPatternChecker {
            validators: ValidatorSet::default(),
        }
    }

    /// Creates a checker with a custom validator set
    pub fn with_validators(validators: ValidatorSet) -> Self {
        ConstantPatternChecker { validators }
    }

    /// Checks one Go source file against the signature table
    ///
    /// Findings come back in source order (line, then column). Running the
    /// same inputs twice yields an identical sequence.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Parse` when the source is not well-formed Go;
    /// nothing else crosses this boundary as a failure.
    pub fn check(
        &self,
        file: &Path,
        source: &str,
        table: &SignatureTable,
    ) -> Result<Vec<Finding>, CheckError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::language())?;

        let tree = parser.parse(source, None).ok_or_else(|| CheckError::Parse {
            file: file.to_path_buf(),
            message: "parser produced no tree".to_string(),
        })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(CheckError::Parse {
                file: file.to_path_buf(),
                message: syntax_error_message(root),
            });
        }

        let bindings = Bindings::collect(root, source);

        let mut findings = Vec::new();
        preorder(root, &mut |node| {
            if node.kind() == "call_expression"
                && let Some(finding) = self.check_call(node, source, &bindings, table, file)
            {
                findings.push(finding);
            }
        });

        Ok(findings)
    }

    /// Inspects one call expression, producing a finding iff the call matches
    /// a configured signature, its pattern argument resolves to a constant,
    /// and the validator rejects that constant.
    fn check_call(
        &self,
        call: Node,
        source: &str,
        bindings: &Bindings,
        table: &SignatureTable,
        file: &Path,
    ) -> Option<Finding> {
        let function = call.child_by_field_name("function")?;
        if function.kind() != "selector_expression" {
            return None;
        }

        let operand = function.child_by_field_name("operand")?;
        if operand.kind() != "identifier" {
            return None;
        }
        let field = function.child_by_field_name("field")?;

        let qualifier = operand.utf8_text(source.as_bytes()).ok()?;
        let name = field.utf8_text(source.as_bytes()).ok()?;

        // identity match through the import table; locally bound names and
        // unknown qualifiers never match
        let package = bindings.import_path(qualifier)?;
        let signature = table.lookup(package, name)?;

        let arguments = call.child_by_field_name("arguments")?;
        let arg = named_children(arguments).get(signature.arg).copied()?;

        let pattern = bindings.resolve_expr(arg, source)?;
        let message = self.validate(signature, &pattern)?;

        Some(Finding {
            file: file.to_path_buf(),
            line: arg.start_position().row as u32 + 1,
            column: arg.start_position().column as u32 + 1,
            function: signature.qualified_name(),
            pattern,
            message,
        })
    }

    /// Runs a resolved pattern through the signature's validator, applying
    /// the per-signature empty-pattern policy first
    fn validate(&self, signature: &FunctionSignature, pattern: &str) -> Option<String> {
        if pattern.is_empty() && signature.deny_empty {
            return Some("empty pattern".to_string());
        }
        self.validators.get(signature.validator)?.validate(pattern)
    }
}

impl Default for ConstantPatternChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Locates the first error or missing node for the parse failure message
fn syntax_error_message(root: Node) -> String {
    let mut position = None;
    preorder(root, &mut |node| {
        if position.is_none() && (node.is_error() || node.is_missing()) {
            position = Some(node.start_position());
        }
    });
    match position {
        Some(p) => format!("syntax error at {}:{}", p.row + 1, p.column + 1),
        None => "syntax error".to_string(),
    }
}
