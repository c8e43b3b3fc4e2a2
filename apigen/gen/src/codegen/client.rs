//! Client class generation, one class per endpoint group.

use apigen_define::{Api, EndpointGroup};

use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::expander::expand;
use crate::naming::{class_name, escape_single_quoted, is_identifier};
use crate::parser::normalize_slashes;
use crate::registry::TypeRegistry;
use crate::writer::CodeWriter;

use super::endpoint::emit_method;

/// Returns the class name for `group`: the UpperCamelCase group name,
/// `HttpApi`, then the API version in upper case (`users` in `v0` becomes
/// `UsersHttpApiV0`).
///
/// ## Errors
///
/// Returns `GeneratorError::InvalidName` if the group name and version do not
/// combine into an identifier.
pub fn client_class_name(api: &Api, group: &EndpointGroup) -> Result<String, GeneratorError> {
    let version: String = api
        .version
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_uppercase();
    let name = format!("{}HttpApi{}", class_name(&group.name)?, version);
    if is_identifier(&name) {
        Ok(name)
    } else {
        Err(GeneratorError::InvalidName {
            name: group.name.clone(),
            reason: format!("'{}' is not a valid TypeScript identifier", name),
        })
    }
}

/// Base path of a group: the API root path joined with the group prefix.
///
/// ```
/// use apigen_define::{Api, EndpointGroup};
/// use apigen_gen::codegen::client::group_root_path;
///
/// let api = Api {
///     version: "v0".to_string(),
///     base_path: "/api/".to_string(),
///     description: String::new(),
///     groups: vec![],
/// };
/// let group = EndpointGroup::new("users", "/users/");
/// assert_eq!(group_root_path(&api, &group), "/api/v0/users");
/// ```
pub fn group_root_path(api: &Api, group: &EndpointGroup) -> String {
    let prefix = group.prefix.trim_matches('/');
    let joined = if prefix.is_empty() {
        api.root_path()
    } else {
        format!("{}/{}", api.root_path(), prefix)
    };
    normalize_slashes(&joined)
}

/// Writes the client class for `group`, including every endpoint method.
///
/// All types used by the group's endpoints must already be registered.
pub fn emit_class(
    w: &mut CodeWriter,
    api: &Api,
    group: &EndpointGroup,
    registry: &TypeRegistry,
    config: &GeneratorConfig,
) -> Result<(), GeneratorError> {
    let name = client_class_name(api, group)?;
    let root = escape_single_quoted(&group_root_path(api, group));

    w.try_block(&format!("export class {}", name), |w| {
        w.line(&format!(
            "private readonly http: {client} = new {client}();",
            client = config.client_class
        ));
        w.line(&format!("private readonly ROOT_PATH: string = '{}';", root));
        for endpoint in &group.endpoints {
            let expansion = expand(endpoint, &group.prefix, registry)?;
            w.blank_line();
            emit_method(w, endpoint, &expansion, registry, config)?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigen_define::{Endpoint, HttpMethod};

    fn api(version: &str) -> Api {
        Api {
            version: version.to_string(),
            base_path: "/api".to_string(),
            description: String::new(),
            groups: vec![],
        }
    }

    #[test]
    fn class_name_combines_group_and_version() {
        let group = EndpointGroup::new("api_keys", "keys");
        assert_eq!(
            client_class_name(&api("v0"), &group).unwrap(),
            "ApiKeysHttpApiV0"
        );
        assert_eq!(
            client_class_name(&api("2024-01"), &group).unwrap(),
            "ApiKeysHttpApi202401"
        );
        assert_eq!(client_class_name(&api(""), &group).unwrap(), "ApiKeysHttpApi");
    }

    #[test]
    fn class_name_rejects_unusable_group() {
        let group = EndpointGroup::new("42", "answers");
        assert!(matches!(
            client_class_name(&api("v0"), &group),
            Err(GeneratorError::InvalidName { .. })
        ));
    }

    #[test]
    fn root_path_without_prefix_is_api_root() {
        let group = EndpointGroup::new("misc", "/");
        assert_eq!(group_root_path(&api("v1"), &group), "/api/v1");
    }

    #[test]
    fn empty_group_has_fields_only() {
        let group = EndpointGroup::new("users", "users");
        let mut w = CodeWriter::new(4);
        emit_class(
            &mut w,
            &api("v0"),
            &group,
            &TypeRegistry::new(),
            &GeneratorConfig::default(),
        )
        .unwrap();

        assert_eq!(
            w.finish(),
            "export class UsersHttpApiV0 {\n\
             \x20   private readonly http: HttpClient = new HttpClient();\n\
             \x20   private readonly ROOT_PATH: string = '/api/v0/users';\n\
             }\n"
        );
    }

    #[test]
    fn methods_are_separated_by_blank_lines() {
        let group = EndpointGroup::new("users", "users")
            .endpoint(Endpoint::new("ListUsers", HttpMethod::Get, "/users"))
            .endpoint(Endpoint::new("PurgeUsers", HttpMethod::Delete, "/users"));
        let mut w = CodeWriter::new(2);
        emit_class(
            &mut w,
            &api("v0"),
            &group,
            &TypeRegistry::new(),
            &GeneratorConfig::default(),
        )
        .unwrap();
        let code = w.finish();

        assert!(code.contains("'/api/v0/users';\n\n  public async listUsers(): Promise<void> {"));
        assert!(code.contains("  }\n\n  public async purgeUsers(): Promise<void> {"));
    }

    #[test]
    fn custom_client_class_is_used() {
        let config = GeneratorConfig {
            client_class: "FetchClient".to_string(),
            ..GeneratorConfig::default()
        };
        let mut w = CodeWriter::new(4);
        emit_class(
            &mut w,
            &api("v0"),
            &EndpointGroup::new("users", "users"),
            &TypeRegistry::new(),
            &config,
        )
        .unwrap();
        assert!(w
            .finish()
            .contains("private readonly http: FetchClient = new FetchClient();"));
    }
}
