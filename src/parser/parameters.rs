//! Parameter list parsing
//!
//! Parameters are comma-separated within the parentheses of a message
//! declaration, and a comma nested inside a generic bracket pair does not
//! split:
//!
//! Grammar: `<parameter> = ["[" <attributes> "]"] [<kind-prefix>] <type> <name>`
//! Where: `<kind-prefix> = "struct" | "enum:" <underlying-type>`
//!
//! Examples:
//! - `Vector<String, 4> names`
//! - `[Validated] struct Geometry::FloatRect bounds`
//! - `enum:bool Geometry::ScrollIsAnimated animated`

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ParseError;
use crate::model::{Parameter, ParameterKind};

/// Optional leading attribute bracket, then everything else as type-and-name.
static PARAMETER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:\[(?P<attributes>.*?)\]\s+)?(?P<type_and_name>.*)$").unwrap()
});

/// Split a comma-separated parameter string, ignoring commas nested inside
/// `<...>`. Unbalanced brackets are an error.
pub fn split_parameter_list(list: &str) -> Result<Vec<String>, ParseError> {
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut nest_level = 0usize;

    for character in list.chars() {
        match character {
            ',' if nest_level == 0 => {
                fragments.push(std::mem::take(&mut current));
                continue;
            }
            '<' => nest_level += 1,
            '>' => {
                if nest_level == 0 {
                    return Err(ParseError::UnbalancedAngleBrackets(list.to_string()));
                }
                nest_level -= 1;
            }
            _ => {}
        }
        current.push(character);
    }
    if nest_level != 0 {
        return Err(ParseError::UnbalancedAngleBrackets(list.to_string()));
    }

    fragments.push(current);
    Ok(fragments)
}

/// Parse a full comma-separated parameter list into model parameters.
pub fn parse_parameter_list(list: &str) -> Result<Vec<Parameter>, ParseError> {
    split_parameter_list(list)?
        .iter()
        .map(|fragment| parse_parameter(fragment))
        .collect()
}

/// Parse one raw parameter fragment into kind/type/name/attributes.
pub fn parse_parameter(fragment: &str) -> Result<Parameter, ParseError> {
    // Both groups are optional in the pattern, so it matches any fragment.
    let captures = PARAMETER_PATTERN
        .captures(fragment)
        .ok_or_else(|| ParseError::MissingTypeOrName(fragment.to_string()))?;

    let attributes = captures
        .name("attributes")
        .and_then(|m| parse_attribute_list(m.as_str()));
    let type_and_name = captures
        .name("type_and_name")
        .map(|m| m.as_str())
        .unwrap_or_default();

    // The name is the token after the last space; everything before it is
    // the type expression, possibly led by a kind prefix.
    let (type_part, name) = type_and_name
        .rsplit_once(' ')
        .ok_or_else(|| ParseError::MissingTypeOrName(type_and_name.to_string()))?;

    let (kind, ty) = if let Some(stripped) = type_part.strip_prefix("struct ") {
        (ParameterKind::Struct, stripped)
    } else if type_part.starts_with("enum:") {
        let (tag, underlying_type) = type_part
            .split_once(' ')
            .ok_or_else(|| ParseError::MissingTypeOrName(type_and_name.to_string()))?;
        (
            ParameterKind::Enum(tag["enum:".len()..].to_string()),
            underlying_type,
        )
    } else {
        (ParameterKind::Class, type_part)
    };

    if ty.is_empty() || name.is_empty() {
        return Err(ParseError::MissingTypeOrName(type_and_name.to_string()));
    }

    Ok(Parameter::new(
        kind,
        ty.to_string(),
        name.to_string(),
        attributes,
    ))
}

/// Split a whitespace-separated attribute string, `None` when empty.
pub(crate) fn parse_attribute_list(attributes: &str) -> Option<Vec<String>> {
    if attributes.trim().is_empty() {
        return None;
    }
    Some(
        attributes
            .split_whitespace()
            .map(|attribute| attribute.to_string())
            .collect(),
    )
}
