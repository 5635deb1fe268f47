//! Process role names
//!
//! `DispatchedFrom`/`DispatchedTo` header attributes are restricted to a
//! fixed closed set of process roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The process a message is dispatched from or to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessRole {
    #[serde(rename = "UI")]
    Ui,
    Networking,
    #[serde(rename = "GPU")]
    Gpu,
    WebContent,
    Model,
}

impl ProcessRole {
    /// Resolve a role from its source spelling, `None` if outside the set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "UI" => Some(ProcessRole::Ui),
            "Networking" => Some(ProcessRole::Networking),
            "GPU" => Some(ProcessRole::Gpu),
            "WebContent" => Some(ProcessRole::WebContent),
            "Model" => Some(ProcessRole::Model),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProcessRole::Ui => "UI",
            ProcessRole::Networking => "Networking",
            ProcessRole::Gpu => "GPU",
            ProcessRole::WebContent => "WebContent",
            ProcessRole::Model => "Model",
        }
    }
}

impl fmt::Display for ProcessRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
