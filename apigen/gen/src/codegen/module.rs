//! Module assembly: the full TypeScript file for one API.

use apigen_define::{Api, TypeRef};
use tracing::info;

use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::expander::param_primitive;
use crate::naming::escape_single_quoted;
use crate::registry::TypeRegistry;
use crate::validation::validate_api;
use crate::writer::CodeWriter;

use super::client::emit_class;

/// Generates the TypeScript module for `api`.
///
/// Runs in two passes. The first registers every type reachable from any
/// endpoint (request, response, unwrapped path and query parameters); the
/// second renders header, import, type definitions and one client class per
/// group, in that order. Output depends only on `api` and `config`.
///
/// ## Errors
///
/// Any [`GeneratorError`] raised by validation, registration or expansion
/// aborts generation; no partial text is returned.
///
/// ## Examples
///
/// ```
/// use apigen_define::{Api, Endpoint, EndpointGroup, HttpMethod, PathParam, TypeRef};
/// use apigen_gen::codegen::generate;
/// use apigen_gen::config::GeneratorConfig;
///
/// let api = Api {
///     version: "v0".to_string(),
///     base_path: "/api".to_string(),
///     description: String::new(),
///     groups: vec![EndpointGroup::new("users", "users").endpoint(
///         Endpoint::new("GetUser", HttpMethod::Get, "/users/{id}")
///             .path_param(PathParam::new("id", TypeRef::string())),
///     )],
/// };
///
/// let code = generate(&api, &GeneratorConfig::default()).unwrap();
/// assert!(code.contains("export class UsersHttpApiV0 {"));
/// assert!(code.contains("const fullPath = `${this.ROOT_PATH}/${id}`;"));
/// ```
pub fn generate(api: &Api, config: &GeneratorConfig) -> Result<String, GeneratorError> {
    config.validate()?;
    validate_api(api)?;

    let registry = register_types(api)?;

    let mut w = CodeWriter::new(config.indent_width);
    for line in &config.header {
        w.line(format!("// {}", line).trim_end());
    }
    w.blank_line();
    w.line(&format!(
        "import {{ {} }} from '{}';",
        config.client_class,
        escape_single_quoted(&config.client_import_path)
    ));

    for declaration in registry.generate_definitions(w.indent_unit()) {
        w.blank_line();
        for line in declaration.lines() {
            w.line(line);
        }
    }

    for group in &api.groups {
        w.blank_line();
        emit_class(&mut w, api, group, &registry, config)?;
    }

    let code = w.finish();
    info!(
        groups = api.groups.len(),
        types = registry.len(),
        bytes = code.len(),
        "generated module"
    );
    Ok(code)
}

/// First pass: registers every type the module will reference.
///
/// Groups and endpoints are visited in declaration order, and within an
/// endpoint the request, response, path parameters and query parameters in
/// that order, so definitions come out in a stable order.
pub fn register_types(api: &Api) -> Result<TypeRegistry, GeneratorError> {
    let mut registry = TypeRegistry::new();
    for (_, endpoint) in api.endpoints() {
        if let Some(request) = &endpoint.request {
            registry.register(request)?;
        }
        if let Some(response) = &endpoint.response {
            registry.register(response)?;
        }
        let params = endpoint
            .path_params
            .iter()
            .map(|p| (&p.name, &p.ty))
            .chain(endpoint.query_params.iter().map(|p| (&p.name, &p.ty)));
        for (name, ty) in params {
            let primitive = param_primitive(endpoint, name, ty)?;
            registry.register(&TypeRef::Primitive(primitive))?;
        }
    }
    Ok(registry)
}
