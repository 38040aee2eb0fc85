#![forbid(unsafe_code)]

//! Gitignore-aware discovery of Go source files
//!
//! Discovery walks the given roots with the ignore crate, keeps files the
//! ripgrep type definitions classify as Go, and drops anything matching the
//! configured exclude globs. The result is sorted and deduplicated so a run
//! over the same tree always checks files in the same order.

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use ignore::types::{Types, TypesBuilder};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during file discovery
#[derive(Debug, Error)]
pub enum FileWalkerError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    #[error("Invalid type definitions: {0}")]
    Types(ignore::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Discovers Go files under the given roots
///
/// A root that is itself a file is taken as-is when it is a Go file.
/// Exclude globs are matched against the path relative to its root.
pub fn discover(roots: &[PathBuf], exclude: &[String]) -> Result<Vec<PathBuf>, FileWalkerError> {
    let exclude_set = build_exclude_set(exclude)?;
    let go_types = go_types()?;

    let mut files = Vec::new();
    for root in roots {
        if root.is_file() {
            if is_go_file(&go_types, root) && !is_excluded(&exclude_set, root, root) {
                files.push(root.clone());
            }
            continue;
        }

        for entry in WalkBuilder::new(root).build() {
            let entry = entry?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.into_path();
            if !is_go_file(&go_types, &path) {
                continue;
            }
            if is_excluded(&exclude_set, root, &path) {
                continue;
            }
            files.push(path);
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Builds the Go file matcher from the ripgrep type definitions
fn go_types() -> Result<Types, FileWalkerError> {
    let mut builder = TypesBuilder::new();
    builder.add_defaults();
    builder.select("go");
    builder.build().map_err(FileWalkerError::Types)
}

fn is_go_file(types: &Types, path: &Path) -> bool {
    types.matched(path, false).is_whitelist()
}

fn build_exclude_set(patterns: &[String]) -> Result<Option<GlobSet>, FileWalkerError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| FileWalkerError::InvalidGlob {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    let set = builder
        .build()
        .map_err(|source| FileWalkerError::InvalidGlob {
            pattern: patterns.join(", "),
            source,
        })?;
    Ok(Some(set))
}

fn is_excluded(exclude: &Option<GlobSet>, root: &Path, path: &Path) -> bool {
    let Some(set) = exclude else {
        return false;
    };
    let relative = path.strip_prefix(root).unwrap_or(path);
    set.is_match(relative) || set.is_match(path)
}
