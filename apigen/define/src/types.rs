//! Core types for HTTP API definitions.
//!
//! This module provides the fundamental types for describing an API:
//!
//! - [`Api`] - The top-level definition (root path, version, groups)
//! - [`EndpointGroup`] - Endpoints sharing a URL prefix
//! - [`Endpoint`] - Individual RPC operation
//! - [`PathParam`] / [`QueryParam`] - Endpoint arguments carried in the URL
//! - [`HttpMethod`] - HTTP method enumeration

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::type_ref::TypeRef;

/// HTTP methods supported by generated clients.
///
/// ## Examples
///
/// Parse from string:
///
/// ```
/// use std::str::FromStr;
/// use apigen_define::HttpMethod;
///
/// let method = HttpMethod::from_str("GET").unwrap();
/// assert_eq!(method, HttpMethod::Get);
/// ```
///
/// Display as uppercase, dispatch as lowercase:
///
/// ```
/// use apigen_define::HttpMethod;
///
/// assert_eq!(HttpMethod::Post.to_string(), "POST");
/// assert_eq!(HttpMethod::Post.verb(), "post");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP POST - Create a new resource
    Post,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP PATCH - Partially update a resource
    Patch,
    /// HTTP DELETE - Remove a resource
    Delete,
}

impl HttpMethod {
    /// Lowercase verb, as used for the runtime client call (`http.get(...)`).
    pub fn verb(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
        }
    }
}

/// A complete API definition.
///
/// ## Examples
///
/// ```
/// use apigen_define::{Api, EndpointGroup};
///
/// let api = Api {
///     version: "v0".to_string(),
///     base_path: "/api".to_string(),
///     description: "Console API".to_string(),
///     groups: vec![EndpointGroup::new("users", "users")],
/// };
///
/// assert_eq!(api.root_path(), "/api/v0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Api {
    /// API version (e.g., "v0"). Becomes part of the root path and of
    /// generated class names.
    #[serde(default)]
    pub version: String,
    /// Path under which all groups are mounted (e.g., "/api").
    pub base_path: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Endpoint groups in output order.
    pub groups: Vec<EndpointGroup>,
}

impl Api {
    /// Returns the module-wide root path: `base_path/version`.
    ///
    /// ```
    /// use apigen_define::Api;
    ///
    /// let mut api = Api {
    ///     version: String::new(),
    ///     base_path: "/api/".to_string(),
    ///     description: String::new(),
    ///     groups: vec![],
    /// };
    /// assert_eq!(api.root_path(), "/api");
    ///
    /// api.version = "v1".to_string();
    /// assert_eq!(api.root_path(), "/api/v1");
    /// ```
    pub fn root_path(&self) -> String {
        let base = self.base_path.trim_end_matches('/');
        let version = self.version.trim_matches('/');
        if version.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, version)
        }
    }

    /// Iterates every endpoint of every group, in order.
    pub fn endpoints(&self) -> impl Iterator<Item = (&EndpointGroup, &Endpoint)> {
        self.groups
            .iter()
            .flat_map(|group| group.endpoints.iter().map(move |ep| (group, ep)))
    }
}

/// A named collection of endpoints sharing a URL prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointGroup {
    /// Group name; becomes part of the generated client class name.
    pub name: String,
    /// URL prefix under the API root path (e.g., "projects").
    pub prefix: String,
    /// Endpoints in output order.
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

impl EndpointGroup {
    /// Creates an empty group.
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            endpoints: vec![],
        }
    }

    /// Adds an endpoint (builder style).
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoints.push(endpoint);
        self
    }
}

/// A single RPC operation.
///
/// ## Path Parameters
///
/// Paths support template parameters using curly braces: `/projects/{id}`.
/// Every placeholder needs exactly one matching [`PathParam`].
///
/// ## Examples
///
/// ```
/// use apigen_define::{Endpoint, Field, HttpMethod, PathParam, TypeRef};
///
/// let endpoint = Endpoint::new("GetUser", HttpMethod::Get, "/users/{id}")
///     .path_param(PathParam::new("id", TypeRef::uuid()))
///     .response(TypeRef::composite("User", vec![Field::new("name", TypeRef::string())]));
///
/// assert!(endpoint.request.is_none());
/// assert_eq!(endpoint.path_params.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Display name; the generated method is its lowerCamelCase form.
    pub name: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Path template (e.g., "/projects/{id}/members").
    pub path: String,
    /// Documentation emitted above the generated method.
    #[serde(default)]
    pub description: String,
    /// Request body type.
    #[serde(default)]
    pub request: Option<TypeRef>,
    /// Response body type. `None` means the call completes without a value.
    #[serde(default)]
    pub response: Option<TypeRef>,
    /// Path parameters.
    #[serde(default)]
    pub path_params: Vec<PathParam>,
    /// Query parameters, in query-string order.
    #[serde(default)]
    pub query_params: Vec<QueryParam>,
}

impl Endpoint {
    /// Creates an endpoint with no payloads and no parameters.
    pub fn new(name: impl Into<String>, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            path: path.into(),
            description: String::new(),
            request: None,
            response: None,
            path_params: vec![],
            query_params: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn request(mut self, ty: TypeRef) -> Self {
        self.request = Some(ty);
        self
    }

    pub fn response(mut self, ty: TypeRef) -> Self {
        self.response = Some(ty);
        self
    }

    pub fn path_param(mut self, param: PathParam) -> Self {
        self.path_params.push(param);
        self
    }

    pub fn query_param(mut self, param: QueryParam) -> Self {
        self.query_params.push(param);
        self
    }
}

/// A parameter substituted into the path template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParam {
    /// Name; must match a `{name}` placeholder.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl PathParam {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A parameter appended to the query string.
///
/// ## Examples
///
/// ```
/// use apigen_define::{QueryParam, TypeRef};
///
/// let param = QueryParam::new("cursor", TypeRef::string());
/// assert_eq!(param.query_key(), "cursor");
///
/// let param = QueryParam::new("pageSize", TypeRef::int()).key("page_size");
/// assert_eq!(param.query_key(), "page_size");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// Argument name.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Literal query-string key, when it differs from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl QueryParam {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            key: None,
        }
    }

    /// Overrides the query-string key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Returns the literal key written to the query string.
    pub fn query_key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.name)
    }
}
