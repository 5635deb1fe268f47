//! Message element
//!
//! One declared message inside a receiver body:
//!
//! ```text
//! [EnabledBy=AdvancedGesturesEnabled] TouchEvent(TouchEventData event) -> (bool handled)
//! ```
//!
//! The reply clause is tri-state and the distinction is load-bearing for
//! generated code: no `->` clause means the message is one-way
//! (`reply_parameters` is `None`), while an explicit empty clause `-> ()`
//! means a reply with no values (`reply_parameters` is `Some` of an empty
//! list).

use serde::{Deserialize, Serialize};

use super::feature_gate::FeatureGate;
use super::parameter::Parameter;

/// A declared message: name, parameters, reply shape, and per-message
/// options captured from the leading bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// `None` = one-way message; `Some(vec![])` = explicit empty reply.
    pub reply_parameters: Option<Vec<Parameter>>,
    pub attributes: Option<Vec<String>>,
    /// Combined preprocessor condition active at the declaration site.
    pub condition: Option<String>,
    pub validator: Option<String>,
    pub enabled_by: Option<FeatureGate>,
    /// `None` = no send coalescing; `Some(vec![])` = coalesce without key;
    /// otherwise positions into `parameters`.
    pub coalescing_key_indices: Option<Vec<usize>>,
}

impl Message {
    /// Whether the message expects a reply of any shape, including `-> ()`.
    pub fn has_reply(&self) -> bool {
        self.reply_parameters.is_some()
    }

    /// Whether a bare attribute trails the declaration.
    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes
            .as_ref()
            .is_some_and(|attributes| attributes.iter().any(|a| a == attribute))
    }
}
