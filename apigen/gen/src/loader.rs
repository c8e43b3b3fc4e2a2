//! Loading API definitions from JSON schema files.
//!
//! The JSON shape is the serde representation of [`Api`]:
//!
//! ```json
//! {
//!   "version": "v0",
//!   "base_path": "/api",
//!   "groups": [{
//!     "name": "users",
//!     "prefix": "users",
//!     "endpoints": [{
//!       "name": "GetUser",
//!       "method": "GET",
//!       "path": "/users/{id}",
//!       "path_params": [{ "name": "id", "type": { "primitive": "string" } }],
//!       "response": { "composite": { "name": "User", "fields": [
//!         { "name": "name", "type": { "primitive": "string" } }
//!       ] } }
//!     }]
//!   }]
//! }
//! ```

use std::fs;
use std::path::Path;

use apigen_define::Api;
use tracing::debug;

use crate::errors::GeneratorError;

/// Parses an API definition from JSON text.
///
/// ## Errors
///
/// Returns `GeneratorError::ParseError` with the serde error (including line
/// and column) when the text is not a valid definition.
pub fn load_api_from_str(json: &str) -> Result<Api, GeneratorError> {
    let api: Api =
        serde_json::from_str(json).map_err(|e| GeneratorError::ParseError(e.to_string()))?;
    debug!(
        groups = api.groups.len(),
        endpoints = api.endpoints().count(),
        "loaded API definition"
    );
    Ok(api)
}

/// Reads and parses an API definition file.
///
/// ## Errors
///
/// Returns `GeneratorError::ParseError` naming the path when the file cannot
/// be read or parsed.
pub fn load_api_from_file(path: &Path) -> Result<Api, GeneratorError> {
    let content = fs::read_to_string(path).map_err(|e| {
        GeneratorError::ParseError(format!("cannot read '{}': {}", path.display(), e))
    })?;
    load_api_from_str(&content).map_err(|e| match e {
        GeneratorError::ParseError(msg) => {
            GeneratorError::ParseError(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}
