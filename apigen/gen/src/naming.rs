//! Identifier derivation for generated TypeScript.
//!
//! Declared names in an API definition are free-form strings. These helpers
//! turn them into valid TypeScript identifiers, or report why they cannot be.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

use crate::errors::GeneratorError;

/// Words that cannot be used as parameter or method identifiers.
const RESERVED: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with", "let", "static", "yield", "await",
];

/// Returns true if `name` is a plain ASCII TypeScript identifier.
///
/// ## Examples
///
/// ```
/// use apigen_gen::naming::is_identifier;
///
/// assert!(is_identifier("projectId"));
/// assert!(is_identifier("$value"));
/// assert!(!is_identifier("2fa"));
/// assert!(!is_identifier("content-type"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Derives a type name from a declared name.
///
/// Names that are already identifiers only get their first letter
/// capitalized, so acronyms survive (`APIKey` stays `APIKey`). Anything else
/// is converted to UpperCamelCase.
///
/// ## Examples
///
/// ```
/// use apigen_gen::naming::type_name;
///
/// assert_eq!(type_name("user").unwrap(), "User");
/// assert_eq!(type_name("APIKeyInfo").unwrap(), "APIKeyInfo");
/// assert_eq!(type_name("project-usage").unwrap(), "ProjectUsage");
/// assert!(type_name("  ").is_err());
/// ```
pub fn type_name(declared: &str) -> Result<String, GeneratorError> {
    let candidate = if is_identifier(declared) {
        capitalize(declared)
    } else {
        declared.to_upper_camel_case()
    };
    check_identifier(declared, candidate)
}

/// Derives an argument identifier.
///
/// Names that are already identifiers only get their first letter
/// lower-cased, so acronyms and underscores survive (`projectID` stays
/// `projectID`). Anything else is converted to lowerCamelCase. Reserved words
/// are rejected.
///
/// ## Examples
///
/// ```
/// use apigen_gen::naming::member_name;
///
/// assert_eq!(member_name("ProjectID").unwrap(), "projectID");
/// assert_eq!(member_name("project_id").unwrap(), "project_id");
/// assert_eq!(member_name("page-size").unwrap(), "pageSize");
/// assert!(member_name("delete").is_err());
/// ```
pub fn member_name(declared: &str) -> Result<String, GeneratorError> {
    let candidate = lower_identifier(declared);
    if RESERVED.contains(&candidate.as_str()) {
        return Err(GeneratorError::InvalidName {
            name: declared.to_string(),
            reason: format!("'{}' is a reserved word", candidate),
        });
    }
    check_identifier(declared, candidate)
}

/// Derives a class method name from an endpoint name.
///
/// Same casing rules as [`member_name`], but reserved words are allowed:
/// `public async delete()` is a valid method.
///
/// ## Examples
///
/// ```
/// use apigen_gen::naming::method_name;
///
/// assert_eq!(method_name("CreateAPIKey").unwrap(), "createAPIKey");
/// assert_eq!(method_name("Delete").unwrap(), "delete");
/// assert_eq!(method_name("list users").unwrap(), "listUsers");
/// assert!(method_name("2fa").is_err());
/// ```
pub fn method_name(declared: &str) -> Result<String, GeneratorError> {
    check_identifier(declared, lower_identifier(declared))
}

/// Derives a class name component from a group name (`api_keys` -> `ApiKeys`).
pub fn class_name(declared: &str) -> Result<String, GeneratorError> {
    check_identifier(declared, declared.to_upper_camel_case())
}

/// Renders an object property key, quoting it when it is not an identifier.
///
/// ## Examples
///
/// ```
/// use apigen_gen::naming::property_key;
///
/// assert_eq!(property_key("createdAt"), "createdAt");
/// assert_eq!(property_key("content-type"), "'content-type'");
/// assert_eq!(property_key("it's"), "'it\\'s'");
/// ```
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("'{}'", escape_single_quoted(name))
    }
}

/// Escapes a value for use inside a single-quoted TypeScript string.
pub fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn lower_identifier(declared: &str) -> String {
    if is_identifier(declared) {
        let mut chars = declared.chars();
        match chars.next() {
            Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    } else {
        declared.to_lower_camel_case()
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn check_identifier(declared: &str, candidate: String) -> Result<String, GeneratorError> {
    if is_identifier(&candidate) {
        Ok(candidate)
    } else {
        Err(GeneratorError::InvalidName {
            name: declared.to_string(),
            reason: format!("'{}' is not a valid TypeScript identifier", candidate),
        })
    }
}
