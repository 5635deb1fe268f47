//! Preprocessor condition tracking
//!
//! Definition files guard receivers and messages with nested `#if <cond>` /
//! `#endif` pairs. Only push/pop is supported; `#else` and `#elif` are
//! rejected. Any other `#`-line is a comment.
//!
//! The stack is combined into a single condition string on demand: fragments
//! are joined with `&&`, parenthesizing any fragment (and the joined whole)
//! that itself contains `&&` or `||`, so a combined condition stays
//! unambiguous when embedded in a further combination.

use super::error::ParseError;

/// Nested `#if` guard state while scanning lines.
#[derive(Debug, Default)]
pub struct ConditionStack {
    stack: Vec<String>,
}

impl ConditionStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one `#`-prefixed line.
    ///
    /// `#endif` on an empty stack is ignored rather than rejected; inputs in
    /// the wild rely on this.
    pub fn directive(&mut self, line: &str) -> Result<(), ParseError> {
        if let Some(condition) = line.strip_prefix("#if ") {
            self.stack.push(condition.to_string());
        } else if line.starts_with("#endif") {
            self.stack.pop();
        } else if line.starts_with("#else") || line.starts_with("#elif") {
            return Err(ParseError::UnsupportedDirective(line.to_string()));
        }
        Ok(())
    }

    /// The combined condition currently in effect.
    pub fn combined(&self) -> Option<String> {
        combine(&self.stack)
    }

    /// Snapshot the combined condition and clear the stack. Used when the
    /// receiver body opens: the snapshot becomes the master condition and
    /// subsequent guards apply only within the body.
    pub fn take_combined(&mut self) -> Option<String> {
        let combined = combine(&self.stack);
        self.stack.clear();
        combined
    }
}

/// Fold a list of condition fragments (outermost to innermost) into one
/// expression string.
pub fn combine(conditions: &[String]) -> Option<String> {
    match conditions {
        [] => None,
        [only] => Some(only.clone()),
        _ => {
            let joined = conditions
                .iter()
                .map(|condition| bracket_if_needed(condition))
                .collect::<Vec<_>>()
                .join(" && ");
            Some(bracket_if_needed(&joined))
        }
    }
}

fn bracket_if_needed(condition: &str) -> String {
    if condition.contains("&&") || condition.contains("||") {
        format!("({})", condition)
    } else {
        condition.to_string()
    }
}
