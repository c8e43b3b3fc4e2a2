//! Generator configuration.
//!
//! Settings that shape the emitted module but are not part of the API
//! definition itself. Every field has a default, so an empty TOML document
//! is a valid configuration.
//!
//! ## Examples
//!
//! ```
//! use apigen_gen::config::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_toml_str(r#"
//!     client_import_path = "@/api/http"
//!     indent_width = 2
//! "#).unwrap();
//!
//! assert_eq!(config.client_import_path, "@/api/http");
//! assert_eq!(config.client_class, "HttpClient");
//! assert_eq!(config.indent_width, 2);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::GeneratorError;
use crate::naming::is_identifier;

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Module the HTTP client class is imported from.
    pub client_import_path: String,
    /// Name of the imported HTTP client class.
    pub client_class: String,
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Base argument for `new URL(path, base)` when building query strings.
    pub url_base: String,
    /// Lines of the generated-file marker, each emitted as a `//` comment.
    pub header: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            client_import_path: "@/utils/httpClient".to_string(),
            client_class: "HttpClient".to_string(),
            indent_width: 4,
            url_base: "window.location.href".to_string(),
            header: vec![
                "AUTOGENERATED BY apigen".to_string(),
                "DO NOT EDIT.".to_string(),
            ],
        }
    }
}

impl GeneratorConfig {
    /// Parses and validates a TOML configuration.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` for invalid TOML, unknown keys,
    /// or values rejected by [`GeneratorConfig::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self, GeneratorError> {
        let config: Self =
            toml::from_str(content).map_err(|e| GeneratorError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self, GeneratorError> {
        let content = fs::read_to_string(path).map_err(|e| {
            GeneratorError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Checks values that would otherwise produce broken output.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(1..=8).contains(&self.indent_width) {
            return Err(GeneratorError::ConfigError(format!(
                "indent_width must be between 1 and 8, got {}",
                self.indent_width
            )));
        }
        if !is_identifier(&self.client_class) {
            return Err(GeneratorError::ConfigError(format!(
                "client_class '{}' is not a valid identifier",
                self.client_class
            )));
        }
        if self.client_import_path.trim().is_empty() {
            return Err(GeneratorError::ConfigError(
                "client_import_path must not be empty".to_string(),
            ));
        }
        if self.url_base.trim().is_empty() {
            return Err(GeneratorError::ConfigError(
                "url_base must not be empty".to_string(),
            ));
        }
        if self.header.iter().any(|line| line.contains('\n')) {
            return Err(GeneratorError::ConfigError(
                "header lines must not contain line breaks".to_string(),
            ));
        }
        Ok(())
    }
}
