//! TypeScript generation for API definitions.
//!
//! ## Submodules
//!
//! - [`module`] - Assembles the complete file (header, import, types, classes)
//! - [`client`] - Generates one client class per endpoint group
//! - [`endpoint`] - Generates one async method per endpoint
//!
//! ## Code Generation Flow
//!
//! 1. [`register_types`] walks every endpoint and fills a [`TypeRegistry`]
//! 2. The registry renders all type definitions
//! 3. Each group becomes a class via [`emit_class`], which expands every
//!    endpoint and hands it to [`emit_method`]
//!
//! Everything is rendered through a [`CodeWriter`], so indentation follows
//! the configured width.
//!
//! [`TypeRegistry`]: crate::registry::TypeRegistry
//! [`CodeWriter`]: crate::writer::CodeWriter

pub mod client;
pub mod endpoint;
pub mod module;

pub use client::{client_class_name, emit_class, group_root_path};
pub use endpoint::emit_method;
pub use module::{generate, register_types};
