//! Validation of API definitions before generation.
//!
//! Detects problems that would otherwise surface halfway through emission,
//! so a run either fails up front or produces the full module.
//!
//! ## Validation Checks
//!
//! - **Group prefixes**: unique within the API (after trimming slashes)
//! - **Class names**: every group maps to a distinct, valid class name
//! - **Method names**: every endpoint maps to a valid method name, unique
//!   within its group
//!
//! ## Examples
//!
//! ```
//! use apigen_define::{Api, Endpoint, EndpointGroup, HttpMethod};
//! use apigen_gen::validation::validate_api;
//!
//! let api = Api {
//!     version: "v0".to_string(),
//!     base_path: "/api".to_string(),
//!     description: String::new(),
//!     groups: vec![
//!         EndpointGroup::new("projects", "projects")
//!             .endpoint(Endpoint::new("GetProjects", HttpMethod::Get, "/")),
//!         EndpointGroup::new("projects2", "projects/"),
//!     ],
//! };
//!
//! assert!(validate_api(&api).is_err());
//! ```

use std::collections::HashSet;

use apigen_define::Api;

use crate::codegen::client::client_class_name;
use crate::errors::GeneratorError;
use crate::naming::method_name;

/// Validates an API definition before code generation.
///
/// ## Errors
///
/// - `GeneratorError::DuplicatePrefix` if two groups share a URL prefix.
/// - `GeneratorError::DuplicateName` if two groups share a class name or two
///   endpoints of one group share a method name.
/// - `GeneratorError::InvalidName` if a group or endpoint name cannot become
///   an identifier.
pub fn validate_api(api: &Api) -> Result<(), GeneratorError> {
    let mut prefixes = HashSet::new();
    let mut classes = HashSet::new();

    for group in &api.groups {
        let prefix = group.prefix.trim_matches('/');
        if !prefixes.insert(prefix) {
            return Err(GeneratorError::DuplicatePrefix {
                prefix: prefix.to_string(),
            });
        }

        let class = client_class_name(api, group)?;
        if !classes.insert(class.clone()) {
            return Err(GeneratorError::DuplicateName {
                scope: "module".to_string(),
                name: class,
            });
        }

        let mut methods = HashSet::new();
        for endpoint in &group.endpoints {
            let method = method_name(&endpoint.name)?;
            if !methods.insert(method.clone()) {
                return Err(GeneratorError::DuplicateName {
                    scope: format!("class {}", class),
                    name: method,
                });
            }
        }
    }

    Ok(())
}
