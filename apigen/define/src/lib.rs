//! Apigen Definition Library
//!
//! This crate provides the types (primitives) for describing HTTP APIs in a
//! declarative way. These definitions are consumed by the `apigen` generator
//! to produce strongly-typed TypeScript client modules.
//!
//! ## Core Types
//!
//! - [`Api`] - A complete API definition with root path, version and groups
//! - [`EndpointGroup`] - Endpoints sharing a URL prefix (one client class each)
//! - [`Endpoint`] - A single operation with method, path template and payloads
//! - [`PathParam`] / [`QueryParam`] - Arguments carried in the URL
//! - [`HttpMethod`] - HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`TypeRef`] - Structural description of payload and parameter types
//! - [`Primitive`] / [`Field`] - Building blocks of [`TypeRef`]
//!
//! ## Examples
//!
//! ```
//! use apigen_define::{Api, Endpoint, EndpointGroup, Field, HttpMethod, PathParam, TypeRef};
//!
//! let user = TypeRef::composite("User", vec![Field::new("name", TypeRef::string())]);
//!
//! let api = Api {
//!     version: "v0".to_string(),
//!     base_path: "/api".to_string(),
//!     description: "Example API".to_string(),
//!     groups: vec![
//!         EndpointGroup::new("users", "users").endpoint(
//!             Endpoint::new("GetUser", HttpMethod::Get, "/users/{id}")
//!                 .path_param(PathParam::new("id", TypeRef::string()))
//!                 .response(user),
//!         ),
//!     ],
//! };
//!
//! assert_eq!(api.groups.len(), 1);
//! assert_eq!(api.endpoints().count(), 1);
//! ```
//!
//! ## API Definitions
//!
//! Concrete API definitions live in the separate `apigen-definitions` crate.

pub mod prelude;
pub mod type_ref;
pub mod types;

// Re-export main types at crate root
pub use type_ref::{Field, Primitive, TypeRef};
pub use types::{Api, Endpoint, EndpointGroup, HttpMethod, PathParam, QueryParam};
