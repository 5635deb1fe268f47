//! Feature gate expressions
//!
//! An `EnabledBy` expression conditions whether a receiver or message is
//! compiled in. The expression is a flat conjunction of feature-flag terms
//! joined by exactly one operator; `&&` and `||` never mix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The operator joining a gate's terms. A single-term gate has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conjunction {
    And,
    Or,
}

impl Conjunction {
    pub fn as_str(self) -> &'static str {
        match self {
            Conjunction::And => "&&",
            Conjunction::Or => "||",
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed `EnabledBy` expression: flat term list plus its operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureGate {
    pub terms: Vec<String>,
    pub conjunction: Option<Conjunction>,
}

impl FeatureGate {
    /// A gate with a single term and no conjunction.
    pub fn single(term: impl Into<String>) -> Self {
        Self {
            terms: vec![term.into()],
            conjunction: None,
        }
    }
}

impl fmt::Display for FeatureGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = match self.conjunction {
            Some(conjunction) => format!(" {} ", conjunction),
            None => String::new(),
        };
        write!(f, "{}", self.terms.join(&separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_term_display() {
        assert_eq!(FeatureGate::single("SiteIsolationEnabled").to_string(), "SiteIsolationEnabled");
    }

    #[test]
    fn test_conjunction_display() {
        let gate = FeatureGate {
            terms: vec!["A".to_string(), "B".to_string()],
            conjunction: Some(Conjunction::Or),
        };
        assert_eq!(gate.to_string(), "A || B");
    }
}
