//! Parser for type expressions such as `map[string]int[]` or `Pair[int?,T]`.
//!
//! Rules are tried in this order on the whitespace-stripped text:
//!
//! 1. a trailing `?` marks the node nullable and is removed;
//! 2. `map[K]V` where `K` ends at the `]` balancing the opening bracket;
//! 3. `X[]` is a list of `X`;
//! 4. `Name[A,B,...]` is a generic custom type, the parameter list running
//!    from the first `[` to the final `]`;
//! 5. otherwise a primitive keyword or a custom type name.
//!
//! Because the `?` rule comes first, a trailing `?` always applies to the
//! whole expression: `map[string]int?` is a nullable map. A trailing `[]`
//! is absorbed by the map value: `map[string]int[]` is a map to a list.
//! A map whose value is nullable and a list of maps cannot be written.
//!
//! Nesting deeper than [`MAX_TYPE_DEPTH`] levels is rejected.

use ultratype_core::types::{Type, TypeKind, TypeName};

use crate::error::{DslError, Span};

const MAP_PREFIX: &str = "map[";

/// Deepest nesting of lists, maps and generic parameters accepted.
pub const MAX_TYPE_DEPTH: usize = 64;

/// Parses a type expression.
///
/// Whitespace anywhere in `text` is ignored. The returned error's span
/// covers all of `text`; `DslError::MalformedType::text` names the
/// innermost sub-expression that failed.
///
/// # Errors
///
/// Returns `DslError::MalformedType` for empty expressions, unbalanced
/// brackets, empty generic parameters, invalid type names, and nesting
/// beyond [`MAX_TYPE_DEPTH`].
pub fn parse_type(text: &str) -> Result<Type, DslError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    parse_compact(&compact, 0).map_err(|m| DslError::MalformedType {
        text: m.expr,
        reason: m.reason.to_string(),
        span: Span::new(0, text.len()),
    })
}

struct Malformed {
    expr: String,
    reason: &'static str,
}

fn malformed(expr: &str, reason: &'static str) -> Malformed {
    Malformed {
        expr: expr.to_string(),
        reason,
    }
}

fn parse_compact(expr: &str, depth: usize) -> Result<Type, Malformed> {
    if expr.is_empty() {
        return Err(malformed(expr, "empty type expression"));
    }
    if depth > MAX_TYPE_DEPTH {
        return Err(malformed(expr, "type nesting too deep"));
    }

    let (body, nullable) = match expr.strip_suffix('?') {
        Some(body) => (body, true),
        None => (expr, false),
    };
    if body.is_empty() {
        return Err(malformed(expr, "'?' must follow a type"));
    }

    let ty = if let Some(rest) = body.strip_prefix(MAP_PREFIX) {
        parse_map(body, rest, depth)?
    } else if let Some(element) = body.strip_suffix("[]") {
        Type::list(parse_compact(element, depth + 1)?)
    } else if let Some(open) = body.find('[') {
        parse_generic(body, open, depth)?
    } else {
        parse_named(body)?
    };

    Ok(ty.with_nullable(nullable))
}

/// `rest` is everything after `map[`.
fn parse_map(body: &str, rest: &str, depth: usize) -> Result<Type, Malformed> {
    let close =
        closing_bracket(rest).ok_or_else(|| malformed(body, "unbalanced brackets in map key"))?;
    let key = &rest[..close];
    let value = &rest[close + 1..];
    if key.is_empty() {
        return Err(malformed(body, "map is missing a key type"));
    }
    if value.is_empty() {
        return Err(malformed(body, "map is missing a value type"));
    }
    Ok(Type::map(
        parse_compact(key, depth + 1)?,
        parse_compact(value, depth + 1)?,
    ))
}

fn parse_generic(body: &str, open: usize, depth: usize) -> Result<Type, Malformed> {
    let name = &body[..open];
    if name.is_empty() {
        return Err(malformed(body, "generic parameters without a type name"));
    }

    let inner = &body[open + 1..];
    let close = closing_bracket(inner).ok_or_else(|| malformed(body, "unbalanced brackets"))?;
    if close + 1 != inner.len() {
        return Err(malformed(body, "unexpected text after generic parameters"));
    }

    let params = &inner[..close];
    if params.is_empty() {
        return Err(malformed(body, "empty generic parameter list"));
    }

    let mut generics = Vec::new();
    for param in split_top_level(params) {
        if param.is_empty() {
            return Err(malformed(body, "empty generic parameter"));
        }
        generics.push(parse_compact(param, depth + 1)?);
    }

    let name = TypeName::new(name).map_err(|_| malformed(name, "invalid type name"))?;
    Ok(Type::custom(name, generics))
}

fn parse_named(body: &str) -> Result<Type, Malformed> {
    if let Some(kind) = TypeKind::from_keyword(body) {
        return Ok(Type::new(kind));
    }
    let name = TypeName::new(body).map_err(|_| malformed(body, "invalid type name"))?;
    Ok(Type::custom(name, Vec::new()))
}

/// Index of the `]` that closes a bracket already opened just before `s`.
fn closing_bracket(s: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, c) in s.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Splits on commas at bracket depth zero. `s` must be bracket-balanced.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}
