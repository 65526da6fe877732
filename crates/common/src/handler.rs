//! Inbound invocation types shared by all resource handlers

use serde::{Deserialize, Serialize};

/// One resource lifecycle action requested by the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    List,
}

impl Action {
    /// Lower-case verb used in log lines and failure messages.
    pub fn verb(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::List => "list",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.verb())
    }
}

/// One resource lifecycle invocation as delivered by the orchestrator.
///
/// `previous_resource_state` is populated for Update only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceHandlerRequest<M> {
    pub desired_resource_state: Option<M>,
    pub previous_resource_state: Option<M>,
}

impl<M> ResourceHandlerRequest<M> {
    pub fn from_desired(model: M) -> Self {
        Self {
            desired_resource_state: Some(model),
            previous_resource_state: None,
        }
    }

    pub fn with_previous(model: M, previous: M) -> Self {
        Self {
            desired_resource_state: Some(model),
            previous_resource_state: Some(previous),
        }
    }
}

impl<M> Default for ResourceHandlerRequest<M> {
    fn default() -> Self {
        Self {
            desired_resource_state: None,
            previous_resource_state: None,
        }
    }
}

/// Build the operator-facing message for a failed remote call.
///
/// Pure function from the caught error to the message embedded in the
/// FAILED envelope, independent of the transport.
pub fn failure_message(action: Action, entity: &str, err: &impl std::fmt::Display) -> String {
    format!("Failed to {} {}: {}", action.verb(), entity, err)
}
