//! Client method generation for a single endpoint.
//!
//! Every method follows the same guarded-dispatch shape: build the path,
//! await the HTTP call, return the typed body on success and throw the
//! server's error message otherwise.

use apigen_define::Endpoint;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::expander::{Expansion, REQUEST_ARG};
use crate::naming::method_name;
use crate::registry::TypeRegistry;
use crate::writer::CodeWriter;

/// Writes the method for `endpoint` into the current class body.
///
/// `expansion` must come from [`crate::expander::expand`] for the same
/// endpoint, and every type the endpoint uses must already be registered.
///
/// ## Examples
///
/// For `GetUser` (GET `/users/{id}`, response `User`) in group `users`:
/// ```text
/// public async getUser(id: string): Promise<User> {
///     const fullPath = `${this.ROOT_PATH}/${id}`;
///     const response = await this.http.get(fullPath);
///     if (response.ok) {
///         return response.json().then((body) => body as User);
///     }
///     const err = await response.json();
///     throw new Error(err.error);
/// }
/// ```
///
/// ## Errors
///
/// - `GeneratorError::CodeGenError` if the response type was never registered.
/// - `GeneratorError::InvalidName` if the endpoint name is not usable as a
///   method name.
pub fn emit_method(
    w: &mut CodeWriter,
    endpoint: &Endpoint,
    expansion: &Expansion,
    registry: &TypeRegistry,
    config: &GeneratorConfig,
) -> Result<(), GeneratorError> {
    let method = method_name(&endpoint.name)?;
    let response = endpoint
        .response
        .as_ref()
        .map(|ty| registry.resolve(ty))
        .transpose()?;
    let returns = response.as_deref().unwrap_or("void");

    debug!(endpoint = %endpoint.name, method = %method, "emitting method");

    if !endpoint.description.trim().is_empty() {
        w.doc_comment(&endpoint.description);
    }

    let header = format!(
        "public async {}({}): Promise<{}>",
        method,
        expansion.signature(),
        returns
    );
    w.block(&header, |w| {
        for statement in expansion.path_statements(&config.url_base) {
            w.line(&statement);
        }
        w.line(&dispatch(endpoint));
        w.block("if (response.ok)", |w| match &response {
            Some(ty) => w.line(&format!(
                "return response.json().then((body) => body as {});",
                ty
            )),
            None => w.line("return;"),
        });
        w.line("const err = await response.json();");
        w.line("throw new Error(err.error);");
    });

    Ok(())
}

/// The awaited HTTP call, with the serialized body when the endpoint has one.
fn dispatch(endpoint: &Endpoint) -> String {
    let verb = endpoint.method.verb();
    if endpoint.request.is_some() {
        format!(
            "const response = await this.http.{}(fullPath, JSON.stringify({}));",
            verb, REQUEST_ARG
        )
    } else {
        format!("const response = await this.http.{}(fullPath);", verb)
    }
}
