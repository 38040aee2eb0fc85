#![forbid(unsafe_code)]

//! Import aliases and single-assignment string bindings
//!
//! A binding table is collected in one pass over the tree, in document
//! order, before any call site is inspected. Resolution is deliberately
//! bounded: a name resolves only when it is bound exactly once to a string
//! literal or to an already-resolved name (one level of indirection). A name
//! bound twice, reassigned, or bound to anything else resolves to nothing.
//! Absence of a value is a normal outcome, not an error.

use std::collections::HashMap;
use tree_sitter::Node;

/// The resolution state of a bound name
#[derive(Debug, Clone, PartialEq, Eq)]
enum Binding {
    /// Bound exactly once to a known string value
    Value(String),
    /// Bound to a non-constant expression, bound more than once, or
    /// reassigned later
    Unresolved,
}

/// Names visible to call-site resolution: import aliases and string bindings
#[derive(Debug, Default)]
pub(crate) struct Bindings {
    imports: HashMap<String, String>,
    values: HashMap<String, Binding>,
}

impl Bindings {
    /// Collects imports and bindings from a parsed Go file
    pub(crate) fn collect(root: Node, source: &str) -> Self {
        let mut bindings = Bindings::default();
        preorder(root, &mut |node| bindings.visit(node, source));
        bindings
    }

    /// Resolves an import name to its import path
    ///
    /// A name that is also bound as a constant or variable is shadowed and
    /// never resolves as a package.
    pub(crate) fn import_path(&self, name: &str) -> Option<&str> {
        if self.values.contains_key(name) {
            return None;
        }
        self.imports.get(name).map(String::as_str)
    }

    /// Resolves an argument expression to its constant string value
    ///
    /// String literals resolve directly; identifiers resolve through the
    /// binding table. Everything else (concatenation, calls, parameters)
    /// yields None.
    pub(crate) fn resolve_expr(&self, node: Node, source: &str) -> Option<String> {
        let text = node.utf8_text(source.as_bytes()).ok()?;
        match node.kind() {
            "interpreted_string_literal" => unquote_interpreted(text),
            "raw_string_literal" => Some(text.trim_matches('`').to_string()),
            "identifier" => match self.values.get(text)? {
                Binding::Value(value) => Some(value.clone()),
                Binding::Unresolved => None,
            },
            _ => None,
        }
    }

    fn visit(&mut self, node: Node, source: &str) {
        match node.kind() {
            "import_spec" => self.visit_import(node, source),
            "const_spec" | "var_spec" => self.visit_spec(node, source),
            "short_var_declaration" => self.visit_short_var(node, source),
            "assignment_statement" => self.visit_assignment(node, source),
            _ => {}
        }
    }

    fn visit_import(&mut self, node: Node, source: &str) {
        let Some(path_node) = node.child_by_field_name("path") else {
            return;
        };
        let Some(path) = self.resolve_expr(path_node, source) else {
            return;
        };

        let name = match node.child_by_field_name("name") {
            Some(name_node) => {
                let Ok(alias) = name_node.utf8_text(source.as_bytes()) else {
                    return;
                };
                // blank and dot imports introduce no usable qualifier
                if alias == "_" || alias == "." {
                    return;
                }
                alias.to_string()
            }
            None => match path.rsplit('/').next() {
                Some(segment) => segment.to_string(),
                None => path.clone(),
            },
        };

        self.imports.insert(name, path);
    }

    /// `const a = "x"` and `var a = "x"` specs, including multi-name forms
    fn visit_spec(&mut self, node: Node, source: &str) {
        let mut cursor = node.walk();
        let names: Vec<Node> = node.children_by_field_name("name", &mut cursor).collect();

        let values: Vec<Node> = match node.child_by_field_name("value") {
            Some(list) => named_children(list),
            None => Vec::new(),
        };

        for (i, name_node) in names.iter().enumerate() {
            let value = values.get(i).and_then(|v| self.resolve_expr(*v, source));
            self.record(*name_node, source, value);
        }
    }

    /// `a := "x"`, including multi-assignment forms
    fn visit_short_var(&mut self, node: Node, source: &str) {
        let Some(left) = node.child_by_field_name("left") else {
            return;
        };
        let Some(right) = node.child_by_field_name("right") else {
            return;
        };

        let names = named_children(left);
        let values = named_children(right);
        // a count mismatch means a multi-value expression on the right;
        // nothing on the left is a known constant then
        let matched = names.len() == values.len();

        for (i, name_node) in names.iter().enumerate() {
            if name_node.kind() != "identifier" {
                continue;
            }
            let value = if matched {
                self.resolve_expr(values[i], source)
            } else {
                None
            };
            self.record(*name_node, source, value);
        }
    }

    /// Plain reassignment makes a name ambiguous at every call site
    fn visit_assignment(&mut self, node: Node, source: &str) {
        let Some(left) = node.child_by_field_name("left") else {
            return;
        };
        for target in named_children(left) {
            if target.kind() != "identifier" {
                continue;
            }
            if let Ok(name) = target.utf8_text(source.as_bytes())
                && name != "_"
            {
                self.values.insert(name.to_string(), Binding::Unresolved);
            }
        }
    }

    /// Records a binding, poisoning the name if it was already bound
    fn record(&mut self, name_node: Node, source: &str, value: Option<String>) {
        let Ok(name) = name_node.utf8_text(source.as_bytes()) else {
            return;
        };
        if name == "_" {
            return;
        }

        let binding = if self.values.contains_key(name) {
            Binding::Unresolved
        } else {
            match value {
                Some(v) => Binding::Value(v),
                None => Binding::Unresolved,
            }
        };
        self.values.insert(name.to_string(), binding);
    }
}

/// Visits every node of the tree in document order
pub(crate) fn preorder<'tree>(node: Node<'tree>, visit: &mut impl FnMut(Node<'tree>)) {
    visit(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        preorder(child, visit);
    }
}

/// Collects the named children of a node (list contents without punctuation)
pub(crate) fn named_children(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// Strips quotes from an interpreted string literal and applies the simple
/// escape sequences. Literals carrying escapes outside this set (hex, octal,
/// unicode) are left unresolved rather than guessed at.
fn unquote_interpreted(text: &str) -> Option<String> {
    let inner = text.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            '\'' => out.push('\''),
            _ => return None,
        }
    }
    Some(out)
}
