//! Structural type descriptions for payloads and parameters.
//!
//! A [`TypeRef`] describes the *shape* of a value that crosses the wire:
//! request bodies, response bodies and path/query parameters. The generator
//! maps every `TypeRef` reachable from an API to a target-language type name.
//!
//! ## Examples
//!
//! ```
//! use apigen_define::{Field, TypeRef};
//!
//! let user = TypeRef::composite("User", vec![
//!     Field::new("id", TypeRef::uuid()),
//!     Field::new("name", TypeRef::string()),
//!     Field::new("nickname", TypeRef::optional(TypeRef::string())),
//! ]);
//!
//! assert_eq!(user.declared_name(), Some("User"));
//! assert!(TypeRef::array(user).declared_name().is_none());
//! ```

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Elementary (leaf) types.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Primitive {
    /// UTF-8 text.
    String,
    /// Integer number of any width.
    Int,
    /// Floating point number.
    Float,
    /// `true` / `false`.
    Bool,
    /// Timestamp, serialized as an RFC 3339 string.
    Time,
    /// UUID, serialized as its canonical string form.
    Uuid,
    /// Binary data, serialized as a base64 string.
    Bytes,
}

/// A single field of a composite type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    /// Wire (JSON) name of the field.
    pub name: String,
    /// Field type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// The field may be absent from the payload entirely.
    #[serde(default, skip_serializing_if = "is_false")]
    pub omit_empty: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Field {
    /// Creates a required field.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            omit_empty: false,
        }
    }

    /// Marks the field as omitted when empty.
    ///
    /// ## Examples
    ///
    /// ```
    /// use apigen_define::{Field, TypeRef};
    ///
    /// let field = Field::new("cursor", TypeRef::string()).omit_empty();
    /// assert!(field.omit_empty);
    /// ```
    pub fn omit_empty(mut self) -> Self {
        self.omit_empty = true;
        self
    }
}

/// Structural description of a type used somewhere in the schema.
///
/// The enum is closed: every consumer matches exhaustively on the five kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// An elementary type.
    Primitive(Primitive),
    /// A named record with ordered fields.
    Composite {
        /// Declared source name.
        name: String,
        /// Fields in declaration order.
        fields: Vec<Field>,
    },
    /// A list of elements.
    Array(Box<TypeRef>),
    /// A value that may be `null`.
    Optional(Box<TypeRef>),
    /// A named alias of another type.
    Alias {
        /// Declared source name.
        name: String,
        /// The aliased type.
        target: Box<TypeRef>,
    },
}

impl TypeRef {
    pub fn string() -> Self {
        Self::Primitive(Primitive::String)
    }

    pub fn int() -> Self {
        Self::Primitive(Primitive::Int)
    }

    pub fn float() -> Self {
        Self::Primitive(Primitive::Float)
    }

    pub fn bool() -> Self {
        Self::Primitive(Primitive::Bool)
    }

    pub fn time() -> Self {
        Self::Primitive(Primitive::Time)
    }

    pub fn uuid() -> Self {
        Self::Primitive(Primitive::Uuid)
    }

    pub fn bytes() -> Self {
        Self::Primitive(Primitive::Bytes)
    }

    /// Creates a named composite type.
    pub fn composite(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self::Composite {
            name: name.into(),
            fields,
        }
    }

    /// Creates an array of `element`.
    pub fn array(element: TypeRef) -> Self {
        Self::Array(Box::new(element))
    }

    /// Creates a nullable `inner`.
    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Creates a named alias of `target`.
    pub fn alias(name: impl Into<String>, target: TypeRef) -> Self {
        Self::Alias {
            name: name.into(),
            target: Box::new(target),
        }
    }

    /// Returns the declared source name for named kinds (composite, alias).
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            TypeRef::Composite { name, .. } | TypeRef::Alias { name, .. } => Some(name),
            TypeRef::Primitive(_) | TypeRef::Array(_) | TypeRef::Optional(_) => None,
        }
    }

    /// Returns the primitive if this is a bare primitive.
    pub fn as_primitive(&self) -> Option<Primitive> {
        match self {
            TypeRef::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    /// Short human-readable description used in diagnostics.
    ///
    /// ## Examples
    ///
    /// ```
    /// use apigen_define::TypeRef;
    ///
    /// assert_eq!(TypeRef::array(TypeRef::int()).describe(), "array<int>");
    /// assert_eq!(
    ///     TypeRef::alias("ProjectId", TypeRef::uuid()).describe(),
    ///     "alias ProjectId = uuid"
    /// );
    /// ```
    pub fn describe(&self) -> String {
        match self {
            TypeRef::Primitive(p) => p.to_string(),
            TypeRef::Composite { name, fields } => {
                let fields: Vec<String> = fields
                    .iter()
                    .map(|f| format!("{}: {}", f.name, f.ty.describe()))
                    .collect();
                format!("composite {} {{ {} }}", name, fields.join(", "))
            }
            TypeRef::Array(element) => format!("array<{}>", element.describe()),
            TypeRef::Optional(inner) => format!("optional<{}>", inner.describe()),
            TypeRef::Alias { name, target } => format!("alias {} = {}", name, target.describe()),
        }
    }
}
