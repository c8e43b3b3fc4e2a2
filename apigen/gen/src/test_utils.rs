//! Shared test fixtures for apigen-gen unit tests.

use apigen_define::{Api, Endpoint, EndpointGroup, Field, HttpMethod, PathParam, TypeRef};

/// Creates an API rooted at `/api/v0` with the given groups.
pub fn make_api(groups: Vec<EndpointGroup>) -> Api {
    Api {
        version: "v0".to_string(),
        base_path: "/api".to_string(),
        description: "Test API".to_string(),
        groups,
    }
}

/// `User { name: string }`.
pub fn user_type() -> TypeRef {
    TypeRef::composite("User", vec![Field::new("name", TypeRef::string())])
}

/// Group `users` holding a single `GetUser` endpoint (GET `/users/{id}`).
pub fn users_group() -> EndpointGroup {
    EndpointGroup::new("users", "users").endpoint(
        Endpoint::new("GetUser", HttpMethod::Get, "/users/{id}")
            .path_param(PathParam::new("id", TypeRef::string()))
            .response(user_type()),
    )
}
