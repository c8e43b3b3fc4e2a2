//! Convenient re-exports for working with API definitions.
//!
//! ```
//! use apigen_definitions::prelude::*;
//!
//! let api = define_console_api();
//! assert_eq!(api.version, "v0");
//! ```

// API definition functions
pub use crate::console::define_console_api;

// Shared types of each API
pub use crate::console::types as console_types;
