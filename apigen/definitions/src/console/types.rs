//! Console payload types.
//!
//! Each function returns the structural description of one named type, so
//! the same type can be referenced from several endpoints.

use apigen_define::{Field, TypeRef};

/// Project identifier.
pub fn project_id() -> TypeRef {
    TypeRef::alias("ProjectID", TypeRef::uuid())
}

/// A project owned by the current user.
pub fn project() -> TypeRef {
    TypeRef::composite(
        "Project",
        vec![
            Field::new("id", project_id()),
            Field::new("name", TypeRef::string()),
            Field::new("description", TypeRef::string()).omit_empty(),
            Field::new("ownerId", TypeRef::uuid()),
            Field::new("memberCount", TypeRef::int()),
            Field::new("createdAt", TypeRef::time()),
        ],
    )
}

/// Body of `CreateProject`.
pub fn project_info() -> TypeRef {
    TypeRef::composite(
        "ProjectInfo",
        vec![
            Field::new("name", TypeRef::string()),
            Field::new("description", TypeRef::string()).omit_empty(),
        ],
    )
}

/// Body of `UpdateProject`; absent limits are left unchanged.
pub fn upsert_project_info() -> TypeRef {
    TypeRef::composite(
        "UpsertProjectInfo",
        vec![
            Field::new("name", TypeRef::string()),
            Field::new("description", TypeRef::string()),
            Field::new("storageLimit", TypeRef::optional(TypeRef::int())),
            Field::new("bandwidthLimit", TypeRef::optional(TypeRef::int())),
        ],
    )
}

/// One page of projects.
pub fn projects_page() -> TypeRef {
    TypeRef::composite(
        "ProjectsPage",
        vec![
            Field::new("projects", TypeRef::array(project())),
            Field::new("nextCursor", TypeRef::optional(TypeRef::string())),
        ],
    )
}

/// Storage and bandwidth used by a project in a time window.
pub fn project_usage() -> TypeRef {
    TypeRef::composite(
        "ProjectUsage",
        vec![
            Field::new("storage", TypeRef::float()),
            Field::new("egress", TypeRef::float()),
            Field::new("segmentCount", TypeRef::float()),
            Field::new("objectCount", TypeRef::float()),
            Field::new("since", TypeRef::time()),
            Field::new("before", TypeRef::time()),
        ],
    )
}

/// Stored metadata of an API key. The secret itself is never returned.
pub fn api_key_info() -> TypeRef {
    TypeRef::composite(
        "APIKeyInfo",
        vec![
            Field::new("id", TypeRef::uuid()),
            Field::new("projectId", project_id()),
            Field::new("name", TypeRef::string()),
            Field::new("head", TypeRef::bytes()),
            Field::new("createdAt", TypeRef::time()),
        ],
    )
}

/// Result of `CreateAPIKey`: the serialized key and its stored metadata.
pub fn create_api_key_response() -> TypeRef {
    TypeRef::composite(
        "CreateAPIKeyResponse",
        vec![
            Field::new("key", TypeRef::string()),
            Field::new("keyInfo", api_key_info()),
        ],
    )
}

/// One page of API keys.
pub fn api_key_page() -> TypeRef {
    TypeRef::composite(
        "APIKeyPage",
        vec![
            Field::new("apiKeys", TypeRef::array(api_key_info())),
            Field::new("search", TypeRef::string()),
            Field::new("limit", TypeRef::int()),
            Field::new("offset", TypeRef::int()),
            Field::new("pageCount", TypeRef::int()),
            Field::new("currentPage", TypeRef::int()),
            Field::new("totalCount", TypeRef::int()),
        ],
    )
}

/// Body of `DeleteAPIKeys`.
pub fn delete_api_keys_request() -> TypeRef {
    TypeRef::composite(
        "DeleteAPIKeysRequest",
        vec![Field::new("ids", TypeRef::array(TypeRef::uuid()))],
    )
}

/// Search term wrapper used by list endpoints.
pub fn search_term() -> TypeRef {
    TypeRef::composite("SearchTerm", vec![Field::new("value", TypeRef::string())])
}

/// Account of the signed-in user.
pub fn user() -> TypeRef {
    TypeRef::composite(
        "User",
        vec![
            Field::new("id", TypeRef::uuid()),
            Field::new("fullName", TypeRef::string()),
            Field::new("shortName", TypeRef::string()).omit_empty(),
            Field::new("email", TypeRef::string()),
            Field::new("isProfessional", TypeRef::bool()),
            Field::new("projectLimit", TypeRef::int()),
            Field::new("createdAt", TypeRef::time()),
        ],
    )
}

/// Editable part of a user account.
pub fn user_settings() -> TypeRef {
    TypeRef::composite(
        "UserSettings",
        vec![
            Field::new("sessionDuration", TypeRef::optional(TypeRef::int())),
            Field::new("onboardingStart", TypeRef::bool()),
            Field::new("onboardingEnd", TypeRef::bool()),
            Field::new("passphrasePrompt", TypeRef::bool()),
        ],
    )
}

/// Body of `UpdateUser`.
pub fn user_update() -> TypeRef {
    TypeRef::composite(
        "UserUpdate",
        vec![
            Field::new("fullName", TypeRef::string()),
            Field::new("shortName", TypeRef::string()).omit_empty(),
        ],
    )
}
