//! Apigen API Definitions
//!
//! This crate contains actual API definitions built from the primitives in
//! `apigen-define`. Each API is organized in its own module.
//!
//! ## Available APIs
//!
//! - [`console`] - Console API (projects, API keys, users)
//!
//! ## Examples
//!
//! ```
//! use apigen_definitions::console::define_console_api;
//!
//! let api = define_console_api();
//! assert_eq!(api.root_path(), "/api/v0");
//! assert_eq!(api.groups.len(), 3);
//! ```

pub mod console;
pub mod prelude;

// Re-export API definition functions for convenience
pub use console::define_console_api;
