//! Type registry: maps structural [`TypeRef`]s to unique TypeScript names.
//!
//! One registry is created per generation run and passed explicitly to every
//! stage that needs type names. Registration is idempotent: a structurally
//! identical type registered again resolves to the name it already has, and a
//! structurally different type that would take an existing name is rejected
//! with [`GeneratorError::SchemaConflict`].
//!
//! ## Emitted names
//!
//! | TypeRef              | expression        | declaration                 |
//! |----------------------|-------------------|-----------------------------|
//! | string / bytes       | `string`          | -                           |
//! | int / float          | `number`          | -                           |
//! | bool                 | `boolean`         | -                           |
//! | time                 | `Time`            | `export type Time = string;`|
//! | uuid                 | `UUID`            | `export type UUID = string;`|
//! | composite `Name`     | `Name`            | `export class Name { .. }`  |
//! | alias `Name` of `T`  | `Name`            | `export type Name = T;`     |
//! | array of `T`         | `T[]`             | -                           |
//! | optional `T`         | `T \| null`       | -                           |
//!
//! ## Examples
//!
//! ```
//! use apigen_define::{Field, TypeRef};
//! use apigen_gen::registry::TypeRegistry;
//!
//! let user = TypeRef::composite("User", vec![Field::new("name", TypeRef::string())]);
//!
//! let mut registry = TypeRegistry::new();
//! assert_eq!(registry.register(&TypeRef::array(user.clone())).unwrap(), "User[]");
//! assert_eq!(registry.register(&user).unwrap(), "User");
//! assert_eq!(registry.definitions().len(), 1);
//! ```

use std::collections::HashMap;

use apigen_define::{Primitive, TypeRef};
use tracing::debug;

use crate::errors::GeneratorError;
use crate::naming::{property_key, type_name};

/// A type that produces a declaration in the generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredType {
    /// Emitted TypeScript name.
    pub name: String,
    /// What gets declared.
    pub kind: RegisteredKind,
}

/// Declaration shape of a [`RegisteredType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisteredKind {
    /// `export type Name = <target>;`
    Alias { target: String },
    /// `export class Name { <fields> }`
    Composite { fields: Vec<RegisteredField> },
}

/// One field of a registered composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredField {
    /// Wire name, emitted verbatim (quoted if needed).
    pub name: String,
    /// Emitted type expression.
    pub ty: String,
    /// Rendered as `name?: T`.
    pub omit_empty: bool,
}

impl RegisteredType {
    /// Renders the TypeScript declaration, indenting fields with `indent`.
    pub fn declaration(&self, indent: &str) -> String {
        match &self.kind {
            RegisteredKind::Alias { target } => format!("export type {} = {};", self.name, target),
            RegisteredKind::Composite { fields } if fields.is_empty() => {
                format!("export class {} {{}}", self.name)
            }
            RegisteredKind::Composite { fields } => {
                let mut out = format!("export class {} {{\n", self.name);
                for field in fields {
                    let marker = if field.omit_empty { "?" } else { "" };
                    out.push_str(&format!(
                        "{}{}{}: {};\n",
                        indent,
                        property_key(&field.name),
                        marker,
                        field.ty
                    ));
                }
                out.push('}');
                out
            }
        }
    }

    fn kind_label(&self) -> &'static str {
        match self.kind {
            RegisteredKind::Alias { .. } => "alias",
            RegisteredKind::Composite { .. } => "composite",
        }
    }
}

/// Registry of every named type reachable from an API.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    entries: Vec<RegisteredType>,
    /// Canonical source structure per entry, parallel to `entries`.
    sources: Vec<TypeRef>,
    index: HashMap<String, usize>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `ty` (and everything it references) and returns its
    /// TypeScript type expression.
    ///
    /// Element, target and field types are registered before the type that
    /// refers to them, so [`TypeRegistry::definitions`] lists dependencies
    /// first.
    ///
    /// ## Errors
    ///
    /// - [`GeneratorError::SchemaConflict`] if a different type already owns
    ///   the emitted name.
    /// - [`GeneratorError::InvalidName`] if a declared name cannot become an
    ///   identifier.
    pub fn register(&mut self, ty: &TypeRef) -> Result<String, GeneratorError> {
        match ty {
            TypeRef::Primitive(primitive) => self.register_primitive(*primitive),
            TypeRef::Composite { name, fields } => {
                let emitted = type_name(name)?;
                let mut registered = Vec::with_capacity(fields.len());
                for field in fields {
                    registered.push(RegisteredField {
                        name: field.name.clone(),
                        ty: self.register(&field.ty)?,
                        omit_empty: field.omit_empty,
                    });
                }
                let entry = RegisteredType {
                    name: emitted,
                    kind: RegisteredKind::Composite { fields: registered },
                };
                self.insert(entry, canonical(ty))
            }
            TypeRef::Array(element) => Ok(array_of(&self.register(element)?)),
            TypeRef::Optional(inner) => Ok(nullable(&self.register(inner)?)),
            TypeRef::Alias { name, target } => {
                let target = self.register(target)?;
                let entry = RegisteredType {
                    name: type_name(name)?,
                    kind: RegisteredKind::Alias { target },
                };
                self.insert(entry, canonical(ty))
            }
        }
    }

    /// Resolves the expression of an already registered type without
    /// modifying the registry. Returns `None` if any named part of `ty` has
    /// not been registered (or was registered with a different structure).
    pub fn name_of(&self, ty: &TypeRef) -> Option<String> {
        match ty {
            TypeRef::Primitive(primitive) => match builtin(*primitive) {
                Builtin::Inline(expr) => Some(expr.to_string()),
                Builtin::Declared(name) => self.lookup(name, ty),
            },
            TypeRef::Composite { name, .. } | TypeRef::Alias { name, .. } => {
                let emitted = type_name(name).ok()?;
                self.lookup(&emitted, ty)
            }
            TypeRef::Array(element) => self.name_of(element).map(|e| array_of(&e)),
            TypeRef::Optional(inner) => self.name_of(inner).map(|i| nullable(&i)),
        }
    }

    /// Like [`TypeRegistry::name_of`], but an unregistered type is an error.
    ///
    /// Used by the emission pass, which runs after every type has been
    /// registered.
    pub fn resolve(&self, ty: &TypeRef) -> Result<String, GeneratorError> {
        self.name_of(ty).ok_or_else(|| {
            GeneratorError::CodeGenError(format!("type was not registered: {}", ty.describe()))
        })
    }

    /// Registered declarations in registration order.
    pub fn definitions(&self) -> &[RegisteredType] {
        &self.entries
    }

    /// Renders every declaration, in registration order.
    pub fn generate_definitions(&self, indent: &str) -> Vec<String> {
        self.entries.iter().map(|e| e.declaration(indent)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn register_primitive(&mut self, primitive: Primitive) -> Result<String, GeneratorError> {
        match builtin(primitive) {
            Builtin::Inline(expr) => Ok(expr.to_string()),
            Builtin::Declared(name) => {
                let entry = RegisteredType {
                    name: name.to_string(),
                    kind: RegisteredKind::Alias {
                        target: "string".to_string(),
                    },
                };
                self.insert(entry, TypeRef::Primitive(primitive))
            }
        }
    }

    fn lookup(&self, emitted: &str, ty: &TypeRef) -> Option<String> {
        let idx = *self.index.get(emitted)?;
        (self.sources[idx] == canonical(ty)).then(|| emitted.to_string())
    }

    fn insert(&mut self, entry: RegisteredType, source: TypeRef) -> Result<String, GeneratorError> {
        if let Some(&idx) = self.index.get(&entry.name) {
            if self.sources[idx] == source {
                return Ok(entry.name);
            }
            return Err(GeneratorError::SchemaConflict {
                name: entry.name,
                existing: self.sources[idx].describe(),
                incoming: source.describe(),
            });
        }

        debug!(name = %entry.name, kind = entry.kind_label(), "registered type");
        let name = entry.name.clone();
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push(entry);
        self.sources.push(source);
        Ok(name)
    }
}

/// Reduces a path or query parameter type to the elementary type it wraps.
///
/// Accepted shapes are a primitive, an alias whose target unwraps, and a
/// composite with exactly one field whose type unwraps. Everything else is
/// reported as an error message describing the offending shape.
///
/// ## Examples
///
/// ```
/// use apigen_define::{Field, Primitive, TypeRef};
/// use apigen_gen::registry::elementary_type;
///
/// let id = TypeRef::alias("ProjectId", TypeRef::uuid());
/// assert_eq!(elementary_type(&id), Ok(Primitive::Uuid));
///
/// let cursor = TypeRef::composite("Cursor", vec![Field::new("value", TypeRef::string())]);
/// assert_eq!(elementary_type(&cursor), Ok(Primitive::String));
///
/// assert!(elementary_type(&TypeRef::array(TypeRef::int())).is_err());
/// ```
pub fn elementary_type(ty: &TypeRef) -> Result<Primitive, String> {
    match ty {
        TypeRef::Primitive(primitive) => Ok(*primitive),
        TypeRef::Alias { target, .. } => elementary_type(target),
        TypeRef::Composite { name, fields } => match fields.as_slice() {
            [field] => elementary_type(&field.ty),
            _ => Err(format!(
                "composite '{}' has {} fields; only single-field wrappers can be sent in a URL",
                name,
                fields.len()
            )),
        },
        TypeRef::Array(_) => Err("arrays cannot be sent as a single URL value".to_string()),
        TypeRef::Optional(_) => Err("optional values cannot be sent in a URL".to_string()),
    }
}

enum Builtin {
    Inline(&'static str),
    Declared(&'static str),
}

fn builtin(primitive: Primitive) -> Builtin {
    match primitive {
        Primitive::String | Primitive::Bytes => Builtin::Inline("string"),
        Primitive::Int | Primitive::Float => Builtin::Inline("number"),
        Primitive::Bool => Builtin::Inline("boolean"),
        Primitive::Time => Builtin::Declared("Time"),
        Primitive::Uuid => Builtin::Declared("UUID"),
    }
}

fn array_of(element: &str) -> String {
    if element.contains(" | ") {
        format!("({})[]", element)
    } else {
        format!("{}[]", element)
    }
}

fn nullable(inner: &str) -> String {
    if inner.ends_with(" | null") {
        inner.to_string()
    } else {
        format!("{} | null", inner)
    }
}

/// Copy of `ty` with every declared name replaced by its emitted form, so
/// that spelling variants of one name compare by structure alone.
fn canonical(ty: &TypeRef) -> TypeRef {
    let rename = |name: &str| type_name(name).unwrap_or_else(|_| name.to_string());
    match ty {
        TypeRef::Primitive(primitive) => TypeRef::Primitive(*primitive),
        TypeRef::Composite { name, fields } => TypeRef::Composite {
            name: rename(name),
            fields: fields
                .iter()
                .map(|field| apigen_define::Field {
                    name: field.name.clone(),
                    ty: canonical(&field.ty),
                    omit_empty: field.omit_empty,
                })
                .collect(),
        },
        TypeRef::Array(element) => TypeRef::Array(Box::new(canonical(element))),
        TypeRef::Optional(inner) => TypeRef::Optional(Box::new(canonical(inner))),
        TypeRef::Alias { name, target } => TypeRef::Alias {
            name: rename(name),
            target: Box::new(canonical(target)),
        },
    }
}
