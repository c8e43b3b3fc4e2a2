//! Apigen code generator library.
//!
//! This crate generates a TypeScript client module from HTTP API definitions
//! created with `apigen-define`. The generated module contains:
//!
//! - A generated-file header and one import of the runtime HTTP client
//! - A declaration for every named type the API uses
//! - One client class per endpoint group, with one async method per endpoint
//!
//! ## Modules
//!
//! - [`registry`] - Type registry mapping structural types to emitted names
//! - [`expander`] - Path and query expansion for an endpoint
//! - [`codegen`] - Method, class and module emission
//! - [`validation`] - Checks run before any code is emitted
//! - [`output`] - Generation plus atomic file writing
//! - [`loader`] - JSON schema loading
//! - [`config`] - Generator settings loaded from TOML
//! - [`naming`] - Identifier derivation
//! - [`parser`] - Path template parsing
//! - [`writer`] - Indentation-aware text buffer
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use apigen_definitions::console::define_console_api;
//! use apigen_gen::config::GeneratorConfig;
//! use apigen_gen::output::generate_and_write;
//!
//! let api = define_console_api();
//! let config = GeneratorConfig::default();
//!
//! // Generate code (dry_run=true prints instead of writing)
//! let code = generate_and_write(&api, &config, Path::new("web/src/api/v0.gen.ts"), true).unwrap();
//! println!("{}", code);
//! ```
//!
//! ## Generated Code Structure
//!
//! For group `users` of API version `v0` with endpoint `GetUser`:
//!
//! ```text
//! // AUTOGENERATED BY apigen
//! // DO NOT EDIT.
//!
//! import { HttpClient } from '@/utils/httpClient';
//!
//! export class User {
//!     name: string;
//! }
//!
//! export class UsersHttpApiV0 {
//!     private readonly http: HttpClient = new HttpClient();
//!     private readonly ROOT_PATH: string = '/api/v0/users';
//!
//!     public async getUser(id: string): Promise<User> { ... }
//! }
//! ```

pub mod codegen;
pub mod config;
pub mod errors;
pub mod expander;
pub mod loader;
pub mod naming;
pub mod output;
pub mod parser;
pub mod registry;
pub mod validation;
pub mod writer;

#[cfg(test)]
pub mod test_utils;
