//! Errors that can occur while parsing a receiver definition
//!
//! Every variant is fatal: the first invalid construct aborts the parse and
//! no partial model is produced.

use std::fmt;

/// Errors that can occur during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unrecognized token in the header attribute list
    UnknownAttribute(String),
    /// Receiver declares both a superclass and a receiver-level EnabledBy
    UnsupportedSuperclassWithEnabledBy(String),
    /// `#else`/`#elif` are not part of the grammar
    UnsupportedDirective(String),
    /// A parameter fragment did not split into type and name
    MissingTypeOrName(String),
    /// An EnabledBy expression mixes `&&` and `||`
    ConflictingConjunction(String),
    /// A message declares both reply parameters and send coalescing
    ReplyParametersConflict(String),
    /// DispatchedFrom/DispatchedTo value outside the process role set
    InvalidProcessName(String),
    /// A coalescing key does not name any parameter of its message
    UnresolvedCoalescingKey(String),
    /// A parameter list closes more angle brackets than it opens, or leaves
    /// some open
    UnbalancedAngleBrackets(String),
    /// The input ended without a `messages ->` open line
    MissingReceiverDeclaration,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownAttribute(attribute) => {
                write!(f, "unknown extended attribute '{}'", attribute)
            }
            ParseError::UnsupportedSuperclassWithEnabledBy(receiver) => {
                write!(
                    f,
                    "EnabledBy is not supported for message receiver '{}' with a superclass",
                    receiver
                )
            }
            ParseError::UnsupportedDirective(directive) => {
                write!(f, "directive '{}' is not supported", directive)
            }
            ParseError::MissingTypeOrName(fragment) => {
                write!(f, "parameter '{}' is missing either type or name", fragment)
            }
            ParseError::ConflictingConjunction(expression) => {
                write!(
                    f,
                    "EnabledBy expression '{}' cannot contain both && and ||",
                    expression
                )
            }
            ParseError::ReplyParametersConflict(message) => {
                write!(
                    f,
                    "DeferSendingIfSuspended is not supported for message '{}' since it has reply parameters",
                    message
                )
            }
            ParseError::InvalidProcessName(name) => {
                write!(f, "invalid process name '{}'", name)
            }
            ParseError::UnresolvedCoalescingKey(key) => {
                write!(f, "coalescing key '{}' does not name a parameter", key)
            }
            ParseError::UnbalancedAngleBrackets(list) => {
                write!(f, "unbalanced angle brackets in parameter list '{}'", list)
            }
            ParseError::MissingReceiverDeclaration => {
                write!(f, "no receiver declaration found in input")
            }
        }
    }
}

impl std::error::Error for ParseError {}
