//! Error types for the apigen generator.

use std::fmt;

use thiserror::Error;

/// Errors that can occur during code generation.
///
/// Every variant aborts the run; no partial module is ever produced.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to parse an API definition
    #[error("Failed to parse API definition: {0}")]
    ParseError(String),

    /// Internal code generation failure
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Two different declared types would be emitted under the same name.
    #[error("Type name conflict for '{name}': already registered as {existing}, requested as {incoming}")]
    SchemaConflict {
        /// The emitted name both types resolve to.
        name: String,
        /// Description of the previously registered type.
        existing: String,
        /// Description of the type that was rejected.
        incoming: String,
    },

    /// Path template and declared path parameters disagree.
    #[error("Path template mismatch in endpoint '{endpoint}': {kind} '{name}'")]
    TemplateMismatch {
        /// Endpoint display name.
        endpoint: String,
        /// Placeholder or parameter name involved.
        name: String,
        /// What went wrong.
        kind: MismatchKind,
    },

    /// Two arguments of one generated method share a name.
    #[error("Duplicate parameter '{name}' in endpoint '{endpoint}'")]
    DuplicateParameter { endpoint: String, name: String },

    /// A path or query parameter has a type that cannot be sent in a URL.
    #[error("Unsupported type for parameter '{param}' in endpoint '{endpoint}': {reason}")]
    ParamTypeConflict {
        endpoint: String,
        param: String,
        reason: String,
    },

    /// Two endpoint groups use the same URL prefix.
    #[error("Duplicate endpoint group prefix '{prefix}'")]
    DuplicatePrefix { prefix: String },

    /// Two groups map to one class name, or two endpoints of a group map to
    /// one method name.
    #[error("Duplicate name '{name}' in {scope}")]
    DuplicateName { scope: String, name: String },

    /// A declared name cannot be turned into a target-language identifier.
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

/// Classification of a [`GeneratorError::TemplateMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    /// A `{placeholder}` has no matching path parameter.
    MissingParam,
    /// A path parameter has no matching placeholder.
    UnusedParam,
    /// Braces are unbalanced or a placeholder is empty.
    Malformed,
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MismatchKind::MissingParam => "placeholder without path parameter",
            MismatchKind::UnusedParam => "path parameter without placeholder",
            MismatchKind::Malformed => "malformed placeholder near",
        };
        f.write_str(text)
    }
}
