//! Console API definition.
//!
//! The web console talks to the backend through three endpoint groups:
//! projects, API keys and the user account. Together they use every kind
//! of type reference (primitives, composites, arrays, optionals, aliases)
//! and every way of carrying arguments (body, path, query).

pub mod types;

use apigen_define::{Api, Endpoint, EndpointGroup, HttpMethod, PathParam, QueryParam, TypeRef};

use types::{
    api_key_page, create_api_key_response, delete_api_keys_request, project, project_id,
    project_info, project_usage, projects_page, search_term, upsert_project_info, user,
    user_settings, user_update,
};

/// Creates the console API definition.
///
/// ## Endpoint groups
///
/// - `projects` - `/api/v0/projects`
/// - `api_keys` - `/api/v0/api-keys`
/// - `users` - `/api/v0/users`
///
/// ## Examples
///
/// ```rust
/// use apigen_definitions::console::define_console_api;
///
/// let api = define_console_api();
/// assert_eq!(api.version, "v0");
/// assert_eq!(api.endpoints().count(), 13);
/// ```
pub fn define_console_api() -> Api {
    Api {
        version: "v0".to_string(),
        base_path: "/api".to_string(),
        description: "Console backend API".to_string(),
        groups: vec![projects_group(), api_keys_group(), users_group()],
    }
}

fn projects_group() -> EndpointGroup {
    EndpointGroup::new("projects", "projects")
        .endpoint(
            Endpoint::new("CreateProject", HttpMethod::Post, "/projects")
                .description("Creates a new project.")
                .request(project_info())
                .response(project()),
        )
        .endpoint(
            Endpoint::new("UpdateProject", HttpMethod::Patch, "/projects/{id}")
                .description("Updates project name, description and limits.")
                .path_param(PathParam::new("id", project_id()))
                .request(upsert_project_info())
                .response(project()),
        )
        .endpoint(
            Endpoint::new("DeleteProject", HttpMethod::Delete, "/projects/{id}")
                .path_param(PathParam::new("id", project_id())),
        )
        .endpoint(
            Endpoint::new("GetProjects", HttpMethod::Get, "/projects")
                .description("Gets all projects user has.")
                .response(TypeRef::array(project())),
        )
        .endpoint(
            Endpoint::new("GetProjectsPaged", HttpMethod::Get, "/projects/paged")
                .description("Gets one page of the user's projects.")
                .query_param(QueryParam::new("cursor", TypeRef::string()))
                .query_param(QueryParam::new("limit", TypeRef::int()))
                .response(projects_page()),
        )
        .endpoint(
            Endpoint::new("GetProjectUsage", HttpMethod::Get, "/projects/{id}/usage")
                .description(
                    "Returns storage and bandwidth usage.\n\
                     The window is given by since and before.",
                )
                .path_param(PathParam::new("id", project_id()))
                .query_param(QueryParam::new("since", TypeRef::time()))
                .query_param(QueryParam::new("before", TypeRef::time()))
                .response(project_usage()),
        )
}

fn api_keys_group() -> EndpointGroup {
    EndpointGroup::new("api_keys", "api-keys")
        .endpoint(
            Endpoint::new("CreateAPIKey", HttpMethod::Post, "/api-keys/create/{projectID}")
                .description("Creates new API key.")
                .path_param(PathParam::new("projectID", TypeRef::uuid()))
                .request(TypeRef::string())
                .response(create_api_key_response()),
        )
        .endpoint(
            Endpoint::new("ListAPIKeys", HttpMethod::Get, "/api-keys/list-paged")
                .description("Returns API keys for a specific project.")
                .query_param(QueryParam::new("projectID", project_id()).key("projectID"))
                .query_param(QueryParam::new("search", search_term()))
                .query_param(QueryParam::new("limit", TypeRef::int()))
                .query_param(QueryParam::new("page", TypeRef::int()))
                .query_param(QueryParam::new("showAll", TypeRef::bool()).key("show_all"))
                .response(api_key_page()),
        )
        .endpoint(
            Endpoint::new("DeleteAPIKeys", HttpMethod::Delete, "/api-keys/delete-by-ids")
                .description("Deletes API keys by given IDs.")
                .request(delete_api_keys_request()),
        )
}

fn users_group() -> EndpointGroup {
    EndpointGroup::new("users", "users")
        .endpoint(
            Endpoint::new("GetUser", HttpMethod::Get, "/users/{id}")
                .path_param(PathParam::new("id", TypeRef::uuid()))
                .response(user()),
        )
        .endpoint(
            Endpoint::new("UpdateUser", HttpMethod::Patch, "/users/account")
                .description("Updates the signed-in user's names.")
                .request(user_update()),
        )
        .endpoint(
            Endpoint::new("GetUserSettings", HttpMethod::Get, "/users/account/settings")
                .response(user_settings()),
        )
        .endpoint(
            Endpoint::new("SetUserSettings", HttpMethod::Put, "/users/account/settings")
                .request(user_settings())
                .response(user_settings()),
        )
}
