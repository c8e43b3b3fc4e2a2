//! Path template parsing.
//!
//! Splits URL path templates that use `{param}` syntax into literal text and
//! placeholders.

/// A piece of a path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePart<'a> {
    /// Literal path text.
    Literal(&'a str),
    /// A `{name}` placeholder (braces stripped).
    Placeholder(&'a str),
}

/// Splits a path template into literal text and placeholders.
///
/// ## Errors
///
/// Returns the offending fragment if a brace is unbalanced, nested, or a
/// placeholder is empty.
///
/// ## Examples
///
/// ```
/// use apigen_gen::parser::{parse_template, TemplatePart};
///
/// assert_eq!(
///     parse_template("/projects/{id}/members").unwrap(),
///     vec![
///         TemplatePart::Literal("/projects/"),
///         TemplatePart::Placeholder("id"),
///         TemplatePart::Literal("/members"),
///     ]
/// );
/// assert!(parse_template("/projects/{id").is_err());
/// ```
pub fn parse_template(path: &str) -> Result<Vec<TemplatePart<'_>>, String> {
    let mut parts = Vec::new();
    let mut literal_start = 0;
    let mut open: Option<usize> = None;

    for (idx, c) in path.char_indices() {
        match c {
            '{' => {
                if open.is_some() {
                    return Err(path[literal_start..].to_string());
                }
                if idx > literal_start {
                    parts.push(TemplatePart::Literal(&path[literal_start..idx]));
                }
                open = Some(idx);
            }
            '}' => {
                let start = match open.take() {
                    Some(start) => start,
                    None => return Err(path[literal_start..=idx].to_string()),
                };
                let name = &path[start + 1..idx];
                if name.trim().is_empty() {
                    return Err(path[start..=idx].to_string());
                }
                parts.push(TemplatePart::Placeholder(name));
                literal_start = idx + 1;
            }
            _ => {}
        }
    }

    if let Some(start) = open {
        return Err(path[start..].to_string());
    }
    if literal_start < path.len() {
        parts.push(TemplatePart::Literal(&path[literal_start..]));
    }

    Ok(parts)
}

/// Extracts placeholder names from a path template, in template order.
///
/// Malformed templates yield no placeholders; use [`parse_template`] to
/// detect errors.
///
/// ## Examples
///
/// ```
/// use apigen_gen::parser::extract_path_params;
///
/// assert_eq!(extract_path_params("/models"), vec![] as Vec<&str>);
/// assert_eq!(
///     extract_path_params("/threads/{thread_id}/messages/{message_id}"),
///     vec!["thread_id", "message_id"]
/// );
/// ```
pub fn extract_path_params(path: &str) -> Vec<&str> {
    parse_template(path)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| match part {
            TemplatePart::Placeholder(name) => Some(name),
            TemplatePart::Literal(_) => None,
        })
        .collect()
}

/// Collapses runs of `/` into one, leaving a `scheme://` marker intact.
///
/// ## Examples
///
/// ```
/// use apigen_gen::parser::normalize_slashes;
///
/// assert_eq!(normalize_slashes("/api//v0///users/"), "/api/v0/users/");
/// assert_eq!(normalize_slashes("https://host//api"), "https://host/api");
/// ```
pub fn normalize_slashes(path: &str) -> String {
    let (scheme, rest) = match path.find("://") {
        Some(idx) => path.split_at(idx + 3),
        None => ("", path),
    };

    let mut out = String::with_capacity(path.len());
    out.push_str(scheme);
    let mut previous_slash = false;
    for c in rest.chars() {
        if c == '/' {
            if previous_slash {
                continue;
            }
            previous_slash = true;
        } else {
            previous_slash = false;
        }
        out.push(c);
    }
    out
}
