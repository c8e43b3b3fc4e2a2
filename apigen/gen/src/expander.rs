//! Path and query expansion for a single endpoint.
//!
//! Produces the argument list of the generated method and the statements
//! that build the concrete request path. Path parameters are interpolated into
//! the template; query parameters are applied to a `URL` object one
//! `searchParams.set` call at a time.
//!
//! ## Examples
//!
//! ```
//! use apigen_define::{Endpoint, HttpMethod, PathParam, QueryParam, TypeRef};
//! use apigen_gen::expander::expand;
//! use apigen_gen::registry::TypeRegistry;
//!
//! let endpoint = Endpoint::new("ListBuckets", HttpMethod::Get, "/projects/{id}/buckets")
//!     .path_param(PathParam::new("id", TypeRef::string()))
//!     .query_param(QueryParam::new("limit", TypeRef::int()));
//!
//! let registry = TypeRegistry::new();
//! let expansion = expand(&endpoint, "projects", &registry).unwrap();
//!
//! assert_eq!(expansion.signature(), "id: string, limit: number");
//! assert_eq!(expansion.path, "${this.ROOT_PATH}/${id}/buckets");
//! assert_eq!(expansion.query[0].value, "String(limit)");
//! ```

use std::collections::{HashMap, HashSet};

use apigen_define::{Endpoint, Primitive, TypeRef};

use crate::errors::{GeneratorError, MismatchKind};
use crate::naming::{escape_single_quoted, member_name};
use crate::parser::{TemplatePart, normalize_slashes, parse_template};
use crate::registry::{TypeRegistry, elementary_type};

/// Interpolation of the generated class's root path constant.
pub const ROOT_PATH_EXPR: &str = "${this.ROOT_PATH}";

/// Name of the request-body argument.
pub const REQUEST_ARG: &str = "request";

/// Names the generated method body binds or reads besides its arguments.
/// A path or query argument with one of these names would redeclare or
/// shadow it.
pub const METHOD_LOCALS: &[&str] = &["u", "fullPath", "response", "err", "window"];

/// Where a signature argument ends up in the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    /// Serialized as the JSON body.
    Request,
    /// Interpolated into the path.
    Path,
    /// Set on the query string under `key`.
    Query { key: String },
}

/// One argument of the generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureParam {
    /// TypeScript identifier.
    pub ident: String,
    /// TypeScript type expression.
    pub ty: String,
    pub kind: ParamKind,
}

/// One `u.searchParams.set(key, value)` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBinding {
    /// Literal query-string key.
    pub key: String,
    /// Value expression (string-typed).
    pub value: String,
}

/// Result of expanding one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Arguments: request body, path parameters (template order), query
    /// parameters (declaration order).
    pub params: Vec<SignatureParam>,
    /// Contents of the path template literal (without backticks).
    pub path: String,
    /// Query operations, in declaration order.
    pub query: Vec<QueryBinding>,
}

impl Expansion {
    /// Renders the argument list, e.g. `request: CreateProject, id: UUID`.
    pub fn signature(&self) -> String {
        self.params
            .iter()
            .map(|p| format!("{}: {}", p.ident, p.ty))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Statements that leave the request path in `const fullPath`.
    ///
    /// Without query parameters this is a single template literal; no URL
    /// object is built.
    pub fn path_statements(&self, url_base: &str) -> Vec<String> {
        if self.query.is_empty() {
            return vec![format!("const fullPath = `{}`;", self.path)];
        }

        let mut statements = Vec::with_capacity(self.query.len() + 2);
        statements.push(format!("const u = new URL(`{}`, {});", self.path, url_base));
        for binding in &self.query {
            statements.push(format!(
                "u.searchParams.set('{}', {});",
                escape_single_quoted(&binding.key),
                binding.value
            ));
        }
        statements.push("const fullPath = u.toString();".to_string());
        statements
    }
}

/// Expands `endpoint`, a member of the group mounted at `group_prefix`.
///
/// Type names are looked up in `registry`, which must already hold every
/// type the endpoint uses.
///
/// ## Errors
///
/// - [`GeneratorError::TemplateMismatch`] when placeholders and path
///   parameters disagree or the template is malformed.
/// - [`GeneratorError::DuplicateParameter`] when two arguments share an
///   identifier.
/// - [`GeneratorError::ParamTypeConflict`] when a parameter type is not a
///   simple wrapper around an elementary type.
pub fn expand(
    endpoint: &Endpoint,
    group_prefix: &str,
    registry: &TypeRegistry,
) -> Result<Expansion, GeneratorError> {
    let template = strip_group_prefix(&endpoint.path, group_prefix);
    let parts = parse_template(template).map_err(|fragment| GeneratorError::TemplateMismatch {
        endpoint: endpoint.name.clone(),
        name: fragment,
        kind: MismatchKind::Malformed,
    })?;

    let mut placeholders: Vec<&str> = Vec::new();
    for part in &parts {
        if let TemplatePart::Placeholder(name) = part
            && !placeholders.contains(name)
        {
            placeholders.push(*name);
        }
    }
    check_path_params(endpoint, &placeholders)?;

    let mut params = Vec::new();
    if let Some(request) = &endpoint.request {
        params.push(SignatureParam {
            ident: REQUEST_ARG.to_string(),
            ty: registry.resolve(request)?,
            kind: ParamKind::Request,
        });
    }

    let mut idents: HashMap<&str, String> = HashMap::new();
    for placeholder in &placeholders {
        // check_path_params guarantees the lookup succeeds
        let Some(param) = endpoint.path_params.iter().find(|p| p.name == *placeholder) else {
            continue;
        };
        let ident = member_name(&param.name)?;
        let primitive = param_primitive(endpoint, &param.name, &param.ty)?;
        params.push(SignatureParam {
            ident: ident.clone(),
            ty: registry.resolve(&TypeRef::Primitive(primitive))?,
            kind: ParamKind::Path,
        });
        idents.insert(*placeholder, ident);
    }

    let mut query = Vec::with_capacity(endpoint.query_params.len());
    for param in &endpoint.query_params {
        let ident = member_name(&param.name)?;
        let primitive = param_primitive(endpoint, &param.name, &param.ty)?;
        query.push(QueryBinding {
            key: param.query_key().to_string(),
            value: query_value(&ident, primitive),
        });
        params.push(SignatureParam {
            ident,
            ty: registry.resolve(&TypeRef::Primitive(primitive))?,
            kind: ParamKind::Query {
                key: param.query_key().to_string(),
            },
        });
    }

    let mut seen = HashSet::new();
    for param in &params {
        if param.kind != ParamKind::Request && METHOD_LOCALS.contains(&param.ident.as_str()) {
            return Err(GeneratorError::InvalidName {
                name: param.ident.clone(),
                reason: format!(
                    "'{}' clashes with a local of the generated method in endpoint '{}'",
                    param.ident, endpoint.name
                ),
            });
        }
        if !seen.insert(param.ident.as_str()) {
            return Err(GeneratorError::DuplicateParameter {
                endpoint: endpoint.name.clone(),
                name: param.ident.clone(),
            });
        }
    }

    let mut path = String::from(ROOT_PATH_EXPR);
    if !template.is_empty() && !template.starts_with('/') {
        path.push('/');
    }
    for part in &parts {
        match part {
            TemplatePart::Literal(text) => path.push_str(&escape_template_literal(text)),
            TemplatePart::Placeholder(name) => {
                path.push_str("${");
                path.push_str(&idents[name]);
                path.push('}');
            }
        }
    }

    Ok(Expansion {
        params,
        path: normalize_slashes(&path),
        query,
    })
}

/// Drops a leading group prefix segment from `path`, since the class root
/// path already ends with it.
///
/// ```
/// use apigen_gen::expander::strip_group_prefix;
///
/// assert_eq!(strip_group_prefix("/users/{id}", "users"), "/{id}");
/// assert_eq!(strip_group_prefix("/users", "users"), "");
/// assert_eq!(strip_group_prefix("/usersettings", "users"), "/usersettings");
/// assert_eq!(strip_group_prefix("/{id}", "users"), "/{id}");
/// ```
pub fn strip_group_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        return path;
    }
    let relative = path.trim_start_matches('/');
    match relative.strip_prefix(prefix) {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

fn check_path_params(endpoint: &Endpoint, placeholders: &[&str]) -> Result<(), GeneratorError> {
    let mut declared = HashSet::new();
    for param in &endpoint.path_params {
        if !declared.insert(param.name.as_str()) {
            return Err(GeneratorError::DuplicateParameter {
                endpoint: endpoint.name.clone(),
                name: param.name.clone(),
            });
        }
    }

    if let Some(missing) = placeholders.iter().find(|p| !declared.contains(*p)) {
        return Err(GeneratorError::TemplateMismatch {
            endpoint: endpoint.name.clone(),
            name: missing.to_string(),
            kind: MismatchKind::MissingParam,
        });
    }

    if let Some(unused) = endpoint
        .path_params
        .iter()
        .find(|p| !placeholders.contains(&p.name.as_str()))
    {
        return Err(GeneratorError::TemplateMismatch {
            endpoint: endpoint.name.clone(),
            name: unused.name.clone(),
            kind: MismatchKind::UnusedParam,
        });
    }

    Ok(())
}

/// Unwraps a path or query parameter type to its elementary type.
pub(crate) fn param_primitive(
    endpoint: &Endpoint,
    param: &str,
    ty: &TypeRef,
) -> Result<Primitive, GeneratorError> {
    elementary_type(ty).map_err(|reason| GeneratorError::ParamTypeConflict {
        endpoint: endpoint.name.clone(),
        param: param.to_string(),
        reason,
    })
}

fn query_value(ident: &str, primitive: Primitive) -> String {
    match primitive {
        Primitive::String | Primitive::Time | Primitive::Uuid | Primitive::Bytes => {
            ident.to_string()
        }
        Primitive::Int | Primitive::Float | Primitive::Bool => format!("String({})", ident),
    }
}

fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigen_define::{Field, HttpMethod, PathParam, QueryParam};

    fn registry_for(endpoint: &Endpoint) -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        for ty in endpoint.request.iter().chain(endpoint.response.iter()) {
            registry.register(ty).unwrap();
        }
        for param in &endpoint.path_params {
            if let Ok(p) = elementary_type(&param.ty) {
                registry.register(&TypeRef::Primitive(p)).unwrap();
            }
        }
        for param in &endpoint.query_params {
            if let Ok(p) = elementary_type(&param.ty) {
                registry.register(&TypeRef::Primitive(p)).unwrap();
            }
        }
        registry
    }

    fn expand_ok(endpoint: &Endpoint, prefix: &str) -> Expansion {
        let registry = registry_for(endpoint);
        expand(endpoint, prefix, &registry).unwrap()
    }

    #[test]
    fn path_param_is_interpolated() {
        let endpoint = Endpoint::new("GetBuckets", HttpMethod::Get, "/projects/{id}/buckets")
            .path_param(PathParam::new("id", TypeRef::string()));
        let expansion = expand_ok(&endpoint, "buckets");

        assert_eq!(expansion.path, "${this.ROOT_PATH}/projects/${id}/buckets");
        assert!(!expansion.path.contains("/{id}"));
        assert!(!expansion.path.contains("//"));
        assert_eq!(
            expansion.path_statements("window.location.href"),
            vec!["const fullPath = `${this.ROOT_PATH}/projects/${id}/buckets`;"]
        );
    }

    #[test]
    fn group_prefix_segment_is_stripped() {
        let endpoint = Endpoint::new("GetUser", HttpMethod::Get, "/users/{id}")
            .path_param(PathParam::new("id", TypeRef::string()));
        assert_eq!(expand_ok(&endpoint, "users").path, "${this.ROOT_PATH}/${id}");
    }

    #[test]
    fn double_slashes_are_normalized() {
        let endpoint = Endpoint::new("Get", HttpMethod::Get, "//projects//{id}/")
            .path_param(PathParam::new("id", TypeRef::string()));
        assert_eq!(
            expand_ok(&endpoint, "other").path,
            "${this.ROOT_PATH}/projects/${id}/"
        );
    }

    #[test]
    fn relative_template_gets_separator() {
        let endpoint = Endpoint::new("Get", HttpMethod::Get, "{id}")
            .path_param(PathParam::new("id", TypeRef::int()));
        assert_eq!(expand_ok(&endpoint, "x").path, "${this.ROOT_PATH}/${id}");
    }

    #[test]
    fn signature_order_is_request_path_query() {
        let endpoint = Endpoint::new(
            "UpdateMember",
            HttpMethod::Patch,
            "/{projectID}/members/{memberID}",
        )
        .request(TypeRef::composite(
            "MemberUpdate",
            vec![Field::new("role", TypeRef::string())],
        ))
        // declared in reverse of template order
        .path_param(PathParam::new("memberID", TypeRef::uuid()))
        .path_param(PathParam::new("projectID", TypeRef::uuid()))
        .query_param(QueryParam::new("notify", TypeRef::bool()))
        .query_param(QueryParam::new("reason", TypeRef::string()));

        let expansion = expand_ok(&endpoint, "projects");
        let idents: Vec<_> = expansion.params.iter().map(|p| p.ident.as_str()).collect();
        assert_eq!(
            idents,
            vec!["request", "projectID", "memberID", "notify", "reason"]
        );
        assert_eq!(expansion.params.len(), 2 + 2 + 1);
        assert_eq!(
            expansion.signature(),
            "request: MemberUpdate, projectID: UUID, memberID: UUID, notify: boolean, reason: string"
        );
        assert_eq!(
            expansion.path,
            "${this.ROOT_PATH}/${projectID}/members/${memberID}"
        );
    }

    #[test]
    fn query_params_use_url_builder() {
        let endpoint = Endpoint::new("ListProjects", HttpMethod::Get, "/")
            .query_param(QueryParam::new("cursor", TypeRef::string()))
            .query_param(QueryParam::new("pageSize", TypeRef::int()).key("page_size"));
        let expansion = expand_ok(&endpoint, "projects");

        assert_eq!(
            expansion.path_statements("window.location.href"),
            vec![
                "const u = new URL(`${this.ROOT_PATH}/`, window.location.href);",
                "u.searchParams.set('cursor', cursor);",
                "u.searchParams.set('page_size', String(pageSize));",
                "const fullPath = u.toString();",
            ]
        );
        assert!(!expansion.path.contains("cursor"));
        assert_eq!(
            expansion.params[1].kind,
            ParamKind::Query {
                key: "page_size".to_string()
            }
        );
    }

    #[test]
    fn wrapper_param_types_are_unwrapped() {
        let endpoint = Endpoint::new("GetProject", HttpMethod::Get, "/{id}")
            .path_param(PathParam::new(
                "id",
                TypeRef::alias("ProjectId", TypeRef::uuid()),
            ))
            .query_param(QueryParam::new(
                "since",
                TypeRef::composite("Since", vec![Field::new("value", TypeRef::time())]),
            ));
        let expansion = expand_ok(&endpoint, "projects");
        assert_eq!(expansion.signature(), "id: UUID, since: Time");
        assert_eq!(expansion.query[0].value, "since");
    }

    #[test]
    fn missing_path_param_is_a_mismatch() {
        let endpoint = Endpoint::new("GetProject", HttpMethod::Get, "/{id}");
        let err = expand(&endpoint, "projects", &TypeRegistry::new()).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::TemplateMismatch {
                kind: MismatchKind::MissingParam,
                ref name,
                ..
            } if name == "id"
        ));
    }

    #[test]
    fn unused_path_param_is_a_mismatch() {
        let endpoint = Endpoint::new("GetProject", HttpMethod::Get, "/projects")
            .path_param(PathParam::new("id", TypeRef::string()));
        let err = expand(&endpoint, "other", &TypeRegistry::new()).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::TemplateMismatch {
                kind: MismatchKind::UnusedParam,
                ..
            }
        ));
    }

    #[test]
    fn malformed_template_is_a_mismatch() {
        let endpoint = Endpoint::new("Broken", HttpMethod::Get, "/projects/{id");
        let err = expand(&endpoint, "other", &TypeRegistry::new()).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::TemplateMismatch {
                kind: MismatchKind::Malformed,
                ..
            }
        ));
    }

    #[test]
    fn repeated_placeholder_binds_one_argument() {
        let endpoint = Endpoint::new("Mirror", HttpMethod::Get, "/{id}/copy/{id}")
            .path_param(PathParam::new("id", TypeRef::string()));
        let expansion = expand_ok(&endpoint, "x");
        assert_eq!(expansion.params.len(), 1);
        assert_eq!(expansion.path, "${this.ROOT_PATH}/${id}/copy/${id}");
    }

    #[test]
    fn path_and_query_names_must_be_unique() {
        let endpoint = Endpoint::new("Get", HttpMethod::Get, "/{id}")
            .path_param(PathParam::new("id", TypeRef::string()))
            .query_param(QueryParam::new("id", TypeRef::string()));
        let registry = registry_for(&endpoint);
        let err = expand(&endpoint, "x", &registry).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::DuplicateParameter { ref name, .. } if name == "id"
        ));
    }

    #[test]
    fn query_param_named_request_clashes_with_body() {
        let endpoint = Endpoint::new("Create", HttpMethod::Post, "/")
            .request(TypeRef::string())
            .query_param(QueryParam::new("request", TypeRef::string()));
        let registry = registry_for(&endpoint);
        assert!(matches!(
            expand(&endpoint, "x", &registry),
            Err(GeneratorError::DuplicateParameter { .. })
        ));
    }

    #[test]
    fn params_named_like_method_locals_are_rejected() {
        let endpoint = Endpoint::new("List", HttpMethod::Get, "/items/{response}")
            .path_param(PathParam::new("response", TypeRef::string()))
            .query_param(QueryParam::new("u", TypeRef::string()));
        let err = expand(&endpoint, "items", &TypeRegistry::new()).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::InvalidName { ref name, .. } if name == "response"
        ));

        for local in ["fullPath", "err", "window"] {
            let endpoint = Endpoint::new("List", HttpMethod::Get, "/")
                .query_param(QueryParam::new(local, TypeRef::string()));
            assert!(
                matches!(
                    expand(&endpoint, "items", &TypeRegistry::new()),
                    Err(GeneratorError::InvalidName { .. })
                ),
                "{}",
                local
            );
        }
    }

    #[test]
    fn path_param_may_be_named_request_without_body() {
        let endpoint = Endpoint::new("Find", HttpMethod::Get, "/{request}")
            .path_param(PathParam::new("request", TypeRef::string()));
        let expansion = expand_ok(&endpoint, "x");
        assert_eq!(expansion.signature(), "request: string");
    }

    #[test]
    fn array_query_param_is_rejected() {
        let endpoint = Endpoint::new("Filter", HttpMethod::Get, "/")
            .query_param(QueryParam::new("ids", TypeRef::array(TypeRef::uuid())));
        let err = expand(&endpoint, "x", &TypeRegistry::new()).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::ParamTypeConflict { ref param, .. } if param == "ids"
        ));
    }

    #[test]
    fn unregistered_request_type_is_reported() {
        let endpoint = Endpoint::new("Create", HttpMethod::Post, "/")
            .request(TypeRef::composite("Draft", vec![]));
        let err = expand(&endpoint, "x", &TypeRegistry::new()).unwrap_err();
        assert!(matches!(err, GeneratorError::CodeGenError(_)));
    }

    #[test]
    fn literal_backticks_are_escaped() {
        let endpoint = Endpoint::new("Odd", HttpMethod::Get, "/a`b");
        assert_eq!(expand_ok(&endpoint, "x").path, "${this.ROOT_PATH}/a\\`b");
    }
}
