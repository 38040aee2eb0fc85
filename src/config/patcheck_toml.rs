#![forbid(unsafe_code)]

//! patcheck.toml parsing
//!
//! The configuration file is optional. It can replace the signature table
//! (`[[signatures]]` entries) and exclude paths from discovery. A file that
//! configures no signatures keeps the default table, so exclude-only
//! configurations work as expected.

use crate::error::ConfigError;
use crate::types::{FunctionSignature, SignatureTable};
use serde::Deserialize;
use std::path::Path;

/// File name probed in the working directory when no --config is given
pub const DEFAULT_CONFIG_FILE: &str = "patcheck.toml";

/// Starter configuration written by `patcheck init`
pub const STARTER_TOML: &str = r#"# patcheck configuration
#
# Paths matching these globs are skipped during discovery.
exclude = ["vendor/**", "**/testdata/**"]

# Tracked pattern-consuming functions. Omit this section entirely to keep
# the default table (the regexp compile/match family, argument 0).
#
# [[signatures]]
# package = "regexp"
# function = "MustCompile"
# arg = 0
# validator = "regex"
# deny_empty = false
"#;

/// On-disk TOML structure
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    exclude: Vec<String>,

    #[serde(default)]
    signatures: Vec<FunctionSignature>,
}

/// Resolved configuration: discovery excludes plus the signature table
#[derive(Debug, Clone)]
pub struct Config {
    /// Glob patterns excluded from file discovery
    pub exclude: Vec<String>,

    /// The signature table the checker filters call sites against
    pub table: SignatureTable,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            exclude: Vec::new(),
            table: SignatureTable::default(),
        }
    }
}

impl Config {
    /// Parses configuration from TOML content
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on invalid TOML and
    /// `ConfigError::InvalidValue` when a signature names an empty package
    /// or function.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        for sig in &file.signatures {
            if sig.package.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "signatures.package".to_string(),
                    message: "import path must not be empty".to_string(),
                });
            }
            if sig.function.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "signatures.function".to_string(),
                    message: "function name must not be empty".to_string(),
                });
            }
        }

        let table = if file.signatures.is_empty() {
            SignatureTable::default()
        } else {
            SignatureTable::new(file.signatures)
        };

        Ok(Config {
            exclude: file.exclude,
            table,
        })
    }

    /// Loads configuration from a file path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidatorKind;

    #[test]
    fn test_empty_file_keeps_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert!(config.exclude.is_empty());
        assert_eq!(config.table.len(), 5);
    }

    #[test]
    fn test_exclude_only_keeps_default_table() {
        let config = Config::from_toml_str(r#"exclude = ["vendor/**"]"#).unwrap();
        assert_eq!(config.exclude, vec!["vendor/**".to_string()]);
        assert!(config.table.lookup("regexp", "MustCompile").is_some());
    }

    #[test]
    fn test_signatures_replace_the_table() {
        let config = Config::from_toml_str(
            r#"
[[signatures]]
package = "regexp"
function = "Compile"
arg = 0
validator = "regex"
deny_empty = true
"#,
        )
        .unwrap();

        assert_eq!(config.table.len(), 1);
        let sig = config.table.lookup("regexp", "Compile").unwrap();
        assert_eq!(sig.validator, ValidatorKind::Regex);
        assert!(sig.deny_empty);
        assert!(config.table.lookup("regexp", "MustCompile").is_none());
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let result = Config::from_toml_str("exclude = [");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_validator_is_rejected() {
        let result = Config::from_toml_str(
            r#"
[[signatures]]
package = "time"
function = "Parse"
arg = 0
validator = "sundial"
"#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_empty_package_is_rejected() {
        let result = Config::from_toml_str(
            r#"
[[signatures]]
package = ""
function = "Compile"
arg = 0
validator = "regex"
"#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_starter_toml_parses() {
        let config = Config::from_toml_str(STARTER_TOML).unwrap();
        assert_eq!(config.exclude.len(), 2);
        assert_eq!(config.table.len(), 5);
    }
}
