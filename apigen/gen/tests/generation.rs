//! Integration tests for the generated TypeScript module.
//!
//! These tests drive the public pipeline (definition -> `generate`) and check
//! the emitted text.

use apigen_define::{
    Api, Endpoint, EndpointGroup, Field, HttpMethod, PathParam, QueryParam, TypeRef,
};
use apigen_gen::codegen::generate;
use apigen_gen::config::GeneratorConfig;
use apigen_gen::errors::{GeneratorError, MismatchKind};

fn api_with(groups: Vec<EndpointGroup>) -> Api {
    Api {
        version: "v0".to_string(),
        base_path: "/api".to_string(),
        description: String::new(),
        groups,
    }
}

fn user() -> TypeRef {
    TypeRef::composite("User", vec![Field::new("name", TypeRef::string())])
}

fn generate_default(api: &Api) -> String {
    generate(api, &GeneratorConfig::default()).expect("generation should succeed")
}

// =============================================================================
// Round trip
// =============================================================================

#[test]
fn get_user_round_trip() {
    let api = api_with(vec![EndpointGroup::new("users", "users").endpoint(
        Endpoint::new("GetUser", HttpMethod::Get, "/users/{id}")
            .path_param(PathParam::new("id", TypeRef::string()))
            .response(user()),
    )]);

    let expected = "\
// AUTOGENERATED BY apigen
// DO NOT EDIT.

import { HttpClient } from '@/utils/httpClient';

export class User {
    name: string;
}

export class UsersHttpApiV0 {
    private readonly http: HttpClient = new HttpClient();
    private readonly ROOT_PATH: string = '/api/v0/users';

    public async getUser(id: string): Promise<User> {
        const fullPath = `${this.ROOT_PATH}/${id}`;
        const response = await this.http.get(fullPath);
        if (response.ok) {
            return response.json().then((body) => body as User);
        }
        const err = await response.json();
        throw new Error(err.error);
    }
}
";
    assert_eq!(generate_default(&api), expected);
}

#[test]
fn generation_is_deterministic() {
    let api = apigen_definitions::console::define_console_api();
    let first = generate_default(&api);
    let second = generate_default(&api.clone());
    assert_eq!(first, second);
}

// =============================================================================
// Paths and query strings
// =============================================================================

#[test]
fn nested_path_has_no_raw_placeholder() {
    let api = api_with(vec![EndpointGroup::new("buckets", "buckets").endpoint(
        Endpoint::new("ListBuckets", HttpMethod::Get, "/projects/{id}/buckets")
            .path_param(PathParam::new("id", TypeRef::string())),
    )]);
    let code = generate_default(&api);

    assert!(code.contains("const fullPath = `${this.ROOT_PATH}/projects/${id}/buckets`;"));
    assert!(!code.contains("/{id}"));
    assert!(!code.contains("}//"));
}

#[test]
fn query_only_endpoint_sets_search_params() {
    let api = api_with(vec![EndpointGroup::new("projects", "projects").endpoint(
        Endpoint::new("ListProjects", HttpMethod::Get, "/projects")
            .query_param(QueryParam::new("cursor", TypeRef::string()))
            .response(TypeRef::array(TypeRef::string())),
    )]);
    let code = generate_default(&api);

    assert!(code.contains("public async listProjects(cursor: string): Promise<string[]> {"));
    assert!(code.contains("const u = new URL(`${this.ROOT_PATH}`, window.location.href);"));
    assert!(code.contains("u.searchParams.set('cursor', cursor);"));
    assert!(code.contains("const fullPath = u.toString();"));
}

#[test]
fn url_base_comes_from_config() {
    let api = api_with(vec![EndpointGroup::new("projects", "projects").endpoint(
        Endpoint::new("ListProjects", HttpMethod::Get, "/")
            .query_param(QueryParam::new("limit", TypeRef::int())),
    )]);
    let config = GeneratorConfig::from_toml_str("url_base = \"location.origin\"").unwrap();
    let code = generate(&api, &config).unwrap();

    assert!(code.contains("new URL(`${this.ROOT_PATH}/`, location.origin);"));
    assert!(code.contains("u.searchParams.set('limit', String(limit));"));
}

#[test]
fn signature_has_request_then_path_then_query() {
    let api = api_with(vec![EndpointGroup::new("projects", "projects").endpoint(
        Endpoint::new(
            "InviteMembers",
            HttpMethod::Post,
            "/projects/{projectId}/teams/{teamId}/invite",
        )
        .request(TypeRef::array(TypeRef::string()))
        .path_param(PathParam::new("teamId", TypeRef::int()))
        .path_param(PathParam::new("projectId", TypeRef::uuid()))
        .query_param(QueryParam::new("notify", TypeRef::bool())),
    )]);
    let code = generate_default(&api);

    assert!(code.contains(
        "public async inviteMembers(request: string[], projectId: UUID, teamId: number, notify: boolean): Promise<void> {"
    ));
    assert!(code.contains("this.http.post(fullPath, JSON.stringify(request));"));
    assert!(code.contains("export type UUID = string;"));
}

// =============================================================================
// Type definitions
// =============================================================================

#[test]
fn composite_used_twice_is_defined_once() {
    let api = api_with(vec![EndpointGroup::new("users", "users")
        .endpoint(Endpoint::new("GetMe", HttpMethod::Get, "/me").response(user()))
        .endpoint(
            Endpoint::new("UpdateMe", HttpMethod::Put, "/me")
                .request(user())
                .response(user()),
        )
        .endpoint(
            Endpoint::new("ListUsers", HttpMethod::Get, "/").response(TypeRef::array(user())),
        )]);
    let code = generate_default(&api);

    assert_eq!(code.matches("export class User ").count(), 1);
    assert!(code.contains("Promise<User[]>"));
}

#[test]
fn dependencies_are_declared_before_use() {
    let member = TypeRef::composite(
        "Member",
        vec![
            Field::new("id", TypeRef::alias("MemberID", TypeRef::uuid())),
            Field::new("joinedAt", TypeRef::optional(TypeRef::time())),
        ],
    );
    let team = TypeRef::composite("Team", vec![Field::new("members", TypeRef::array(member))]);
    let api = api_with(vec![EndpointGroup::new("teams", "teams")
        .endpoint(Endpoint::new("GetTeam", HttpMethod::Get, "/").response(team))]);
    let code = generate_default(&api);

    let uuid = code.find("export type UUID = string;").unwrap();
    let member_id = code.find("export type MemberID = UUID;").unwrap();
    let time = code.find("export type Time = string;").unwrap();
    let member = code.find("export class Member {").unwrap();
    let team = code.find("export class Team {").unwrap();
    assert!(uuid < member_id && member_id < time && time < member && member < team);
    assert!(code.contains("    joinedAt: Time | null;\n"));
    assert!(code.contains("    members: Member[];\n"));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_path_param_fails() {
    let api = api_with(vec![EndpointGroup::new("users", "users")
        .endpoint(Endpoint::new("GetUser", HttpMethod::Get, "/users/{id}"))]);

    match generate(&api, &GeneratorConfig::default()) {
        Err(GeneratorError::TemplateMismatch { endpoint, name, kind }) => {
            assert_eq!(endpoint, "GetUser");
            assert_eq!(name, "id");
            assert_eq!(kind, MismatchKind::MissingParam);
        }
        other => panic!("expected TemplateMismatch, got {:?}", other),
    }
}

#[test]
fn duplicate_prefix_fails() {
    let api = api_with(vec![
        EndpointGroup::new("users", "users"),
        EndpointGroup::new("accounts", "users"),
    ]);
    assert!(matches!(
        generate(&api, &GeneratorConfig::default()),
        Err(GeneratorError::DuplicatePrefix { .. })
    ));
}

#[test]
fn conflicting_type_names_fail() {
    let api = api_with(vec![
        EndpointGroup::new("users", "users")
            .endpoint(Endpoint::new("GetUser", HttpMethod::Get, "/").response(user())),
        EndpointGroup::new("admins", "admins").endpoint(
            Endpoint::new("GetAdmin", HttpMethod::Get, "/").response(TypeRef::composite(
                "user",
                vec![Field::new("level", TypeRef::int())],
            )),
        ),
    ]);
    match generate(&api, &GeneratorConfig::default()) {
        Err(GeneratorError::SchemaConflict { name, .. }) => assert_eq!(name, "User"),
        other => panic!("expected SchemaConflict, got {:?}", other),
    }
}

#[test]
fn array_path_param_fails() {
    let api = api_with(vec![EndpointGroup::new("users", "users").endpoint(
        Endpoint::new("GetUsers", HttpMethod::Get, "/{ids}")
            .path_param(PathParam::new("ids", TypeRef::array(TypeRef::string()))),
    )]);
    assert!(matches!(
        generate(&api, &GeneratorConfig::default()),
        Err(GeneratorError::ParamTypeConflict { .. })
    ));
}
