//! Parameter element
//!
//! A single typed parameter of a message or reply:
//!
//! ```text
//! [AllowedRange=0..100] enum:uint8_t Geometry::ScrollGranularity granularity
//! ```
//!
//! The kind prefix selects how the value crosses the process boundary:
//! `struct` for aggregate copies, `enum:<Type>` for enums with an explicit
//! underlying type, and plain class types otherwise.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a parameter's type is encoded for transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterKind {
    Class,
    Struct,
    /// Enum with its declared underlying type, e.g. `enum:uint8_t`.
    Enum(String),
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterKind::Class => write!(f, "class"),
            ParameterKind::Struct => write!(f, "struct"),
            ParameterKind::Enum(underlying) => write!(f, "enum:{}", underlying),
        }
    }
}

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub kind: ParameterKind,
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    pub attributes: Option<Vec<String>>,
    /// Inherited from the enclosing condition stack at declaration time.
    pub condition: Option<String>,
}

impl Parameter {
    pub fn new(
        kind: ParameterKind,
        ty: String,
        name: String,
        attributes: Option<Vec<String>>,
    ) -> Self {
        Self {
            kind,
            ty,
            name,
            attributes,
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: Option<String>) -> Self {
        self.condition = condition;
        self
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}
