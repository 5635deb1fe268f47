//! Message receiver element
//!
//! A receiver is the named entity that accepts and dispatches a set of
//! declared messages. One definition file describes exactly one receiver:
//!
//! ```text
//! messages -> WebContentHost {
//!     DidCreatePage(uint64_t pageID)
//! }
//! ```
//!
//! The open line may qualify the destination with a namespace
//! (`messages -> Testing::WebContentHost {`), name a superclass, and carry
//! bare attributes. Header state declared before the open line (dispatch
//! roles, feature gates) lands here as well.

use serde::{Deserialize, Serialize};

use super::feature_gate::FeatureGate;
use super::message::Message;
use super::process_role::ProcessRole;

/// Namespace assumed when the open line carries no `Namespace::` prefix.
pub const DEFAULT_NAMESPACE: &str = "Ipc";

/// A message receiver: identity, gating state, and the declared messages in
/// declaration order. Message order is significant for generated dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageReceiver {
    pub destination: String,
    pub namespace: String,
    /// Mutually exclusive with a receiver-level `enabled_by` gate.
    pub superclass: Option<String>,
    pub attributes: Option<Vec<String>>,
    pub enabled_by: Option<FeatureGate>,
    pub dispatched_from: Option<ProcessRole>,
    pub dispatched_to: Option<ProcessRole>,
    pub shared_preferences_needs_connection: bool,
    /// Combined preprocessor condition active when the receiver body opened.
    pub master_condition: Option<String>,
    pub messages: Vec<Message>,
}

impl MessageReceiver {
    /// The namespace-qualified destination, e.g. `Ipc::WebContentHost`.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.namespace, self.destination)
    }

    /// Look up a declared message by name.
    pub fn message(&self, name: &str) -> Option<&Message> {
        self.messages.iter().find(|message| message.name == name)
    }

    /// Whether a bare attribute was declared on the open line.
    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes
            .as_ref()
            .is_some_and(|attributes| attributes.iter().any(|a| a == attribute))
    }
}
