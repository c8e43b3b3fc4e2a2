//! Convenient re-exports for writing API definitions.
//!
//! ## Examples
//!
//! ```
//! use apigen_define::prelude::*;
//!
//! let api = Api {
//!     version: "v0".to_string(),
//!     base_path: "/api".to_string(),
//!     description: "My API".to_string(),
//!     groups: vec![EndpointGroup::new("health", "health")
//!         .endpoint(Endpoint::new("Ping", HttpMethod::Get, "/ping"))],
//! };
//! assert_eq!(api.groups[0].endpoints[0].method, HttpMethod::Get);
//! ```

pub use crate::type_ref::{Field, Primitive, TypeRef};
pub use crate::types::{Api, Endpoint, EndpointGroup, HttpMethod, PathParam, QueryParam};
