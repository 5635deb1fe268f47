//! Message option parsing
//!
//! A message declaration may lead with a bracketed option list:
//!
//! ```text
//! [EnabledBy=TouchEventsEnabled, DeferSendingIfSuspendedWithCoalescingKeys=(pageID)] ...
//! ```
//!
//! Options are comma-separated, except that commas inside parentheses (the
//! coalescing key list) do not separate. Each fragment dispatches through a
//! single match on the recognized option kinds; fragments naming anything
//! else are skipped.

use super::error::ParseError;
use crate::model::{Conjunction, FeatureGate, Parameter};

/// Options captured from one message's leading bracket.
#[derive(Debug, Default, PartialEq)]
pub struct MessageOptions {
    pub validator: Option<String>,
    pub enabled_by: Option<FeatureGate>,
    /// `Some(vec![])` for a bare `DeferSendingIfSuspended` flag.
    pub coalescing_key_indices: Option<Vec<usize>>,
}

/// The recognized option kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionKind {
    Validator,
    EnabledBy,
    DeferSendingIfSuspended,
    DeferSendingIfSuspendedWithCoalescingKeys,
}

impl OptionKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Validator" => Some(OptionKind::Validator),
            "EnabledBy" => Some(OptionKind::EnabledBy),
            "DeferSendingIfSuspended" => Some(OptionKind::DeferSendingIfSuspended),
            "DeferSendingIfSuspendedWithCoalescingKeys" => {
                Some(OptionKind::DeferSendingIfSuspendedWithCoalescingKeys)
            }
            _ => None,
        }
    }
}

/// Parse the option string of a message whose parameters are already known
/// (coalescing keys resolve against them by position).
pub fn parse_options(
    options: &str,
    parameters: &[Parameter],
) -> Result<MessageOptions, ParseError> {
    let mut parsed = MessageOptions::default();

    for fragment in split_options(options) {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        let (name, value) = match fragment.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (fragment, None),
        };
        let Some(kind) = OptionKind::from_name(name) else {
            continue;
        };
        match (kind, value) {
            (OptionKind::Validator, Some(expression)) => {
                parsed.validator = Some(expression.to_string());
            }
            (OptionKind::EnabledBy, Some(expression)) => {
                parsed.enabled_by = Some(parse_feature_gate(expression)?);
            }
            (OptionKind::DeferSendingIfSuspended, None) => {
                parsed.coalescing_key_indices = Some(Vec::new());
            }
            (OptionKind::DeferSendingIfSuspendedWithCoalescingKeys, Some(keys)) => {
                if let Some(names) = keys.strip_prefix('(').and_then(|k| k.strip_suffix(')')) {
                    parsed.coalescing_key_indices =
                        Some(resolve_coalescing_keys(names, parameters)?);
                }
            }
            // Recognized name with the wrong arity; treated like an
            // unrecognized fragment.
            _ => {}
        }
    }

    Ok(parsed)
}

/// Parse an `EnabledBy` feature-gate expression, shared by receiver-level
/// and message-level gates. The expression is split on whichever of `&&` or
/// `||` it contains; containing both is invalid.
pub fn parse_feature_gate(expression: &str) -> Result<FeatureGate, ParseError> {
    let has_and = expression.contains("&&");
    let has_or = expression.contains("||");

    if has_and && has_or {
        return Err(ParseError::ConflictingConjunction(expression.to_string()));
    }

    let (terms, conjunction) = if has_and {
        (split_terms(expression, "&&"), Some(Conjunction::And))
    } else if has_or {
        (split_terms(expression, "||"), Some(Conjunction::Or))
    } else {
        (vec![expression.trim().to_string()], None)
    };

    Ok(FeatureGate { terms, conjunction })
}

fn split_terms(expression: &str, operator: &str) -> Vec<String> {
    expression
        .split(operator)
        .map(|term| term.trim().to_string())
        .collect()
}

/// Split an option string on commas outside parentheses.
fn split_options(options: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, character) in options.char_indices() {
        match character {
            ',' if depth == 0 => {
                fragments.push(&options[start..index]);
                start = index + 1;
            }
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    fragments.push(&options[start..]);
    fragments
}

fn resolve_coalescing_keys(
    names: &str,
    parameters: &[Parameter],
) -> Result<Vec<usize>, ParseError> {
    names
        .split(',')
        .map(|name| {
            let name = name.trim();
            parameters
                .iter()
                .position(|parameter| parameter.name == name)
                .ok_or_else(|| ParseError::UnresolvedCoalescingKey(name.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParameterKind;

    fn parameters(names: &[&str]) -> Vec<Parameter> {
        names
            .iter()
            .map(|name| {
                Parameter::new(
                    ParameterKind::Class,
                    "uint64_t".to_string(),
                    name.to_string(),
                    None,
                )
            })
            .collect()
    }

    #[test]
    fn test_feature_gate_single_term() {
        let gate = parse_feature_gate("TouchEventsEnabled").unwrap();
        assert_eq!(gate.terms, vec!["TouchEventsEnabled"]);
        assert_eq!(gate.conjunction, None);
    }

    #[test]
    fn test_feature_gate_and_terms() {
        let gate = parse_feature_gate("A && B && C").unwrap();
        assert_eq!(gate.terms, vec!["A", "B", "C"]);
        assert_eq!(gate.conjunction, Some(Conjunction::And));
    }

    #[test]
    fn test_feature_gate_or_terms() {
        let gate = parse_feature_gate("A || B").unwrap();
        assert_eq!(gate.terms, vec!["A", "B"]);
        assert_eq!(gate.conjunction, Some(Conjunction::Or));
    }

    #[test]
    fn test_feature_gate_rejects_mixed_conjunctions() {
        assert_eq!(
            parse_feature_gate("A && B || C"),
            Err(ParseError::ConflictingConjunction("A && B || C".to_string()))
        );
    }

    #[test]
    fn test_validator_option() {
        let options = parse_options("Validator=pageID == expectedPageID", &[]).unwrap();
        assert_eq!(
            options.validator,
            Some("pageID == expectedPageID".to_string())
        );
    }

    #[test]
    fn test_enabled_by_option() {
        let options = parse_options("EnabledBy=A || B", &[]).unwrap();
        let gate = options.enabled_by.unwrap();
        assert_eq!(gate.terms, vec!["A", "B"]);
        assert_eq!(gate.conjunction, Some(Conjunction::Or));
    }

    #[test]
    fn test_bare_defer_flag_coalesces_without_key() {
        let options = parse_options("DeferSendingIfSuspended", &[]).unwrap();
        assert_eq!(options.coalescing_key_indices, Some(vec![]));
    }

    #[test]
    fn test_coalescing_keys_resolve_to_positions() {
        let options = parse_options(
            "DeferSendingIfSuspendedWithCoalescingKeys=(a, b)",
            &parameters(&["a", "b"]),
        )
        .unwrap();
        assert_eq!(options.coalescing_key_indices, Some(vec![0, 1]));
    }

    #[test]
    fn test_coalescing_keys_out_of_declaration_order() {
        let options = parse_options(
            "DeferSendingIfSuspendedWithCoalescingKeys=(b)",
            &parameters(&["a", "b"]),
        )
        .unwrap();
        assert_eq!(options.coalescing_key_indices, Some(vec![1]));
    }

    #[test]
    fn test_unresolved_coalescing_key_is_an_error() {
        assert_eq!(
            parse_options(
                "DeferSendingIfSuspendedWithCoalescingKeys=(missing)",
                &parameters(&["a"]),
            ),
            Err(ParseError::UnresolvedCoalescingKey("missing".to_string()))
        );
    }

    #[test]
    fn test_multiple_options_with_parenthesized_keys() {
        let options = parse_options(
            "EnabledBy=Gesture, DeferSendingIfSuspendedWithCoalescingKeys=(a, b)",
            &parameters(&["a", "b"]),
        )
        .unwrap();
        assert!(options.enabled_by.is_some());
        assert_eq!(options.coalescing_key_indices, Some(vec![0, 1]));
    }

    #[test]
    fn test_unrecognized_options_are_skipped() {
        let options = parse_options("Streamed, Validator=x > 0", &[]).unwrap();
        assert_eq!(options.validator, Some("x > 0".to_string()));
        assert_eq!(options.enabled_by, None);
        assert_eq!(options.coalescing_key_indices, None);
    }
}
