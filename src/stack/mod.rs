//! CloudFormation stack lifecycle
//!
//! - `StackStatus` - status string with the predicates the deploy flow branches on
//! - `StackClient` - the stack management calls the flow depends on
//! - `resolve_mode` - create vs. update decision
//! - `deployer` - initialization pipeline, stack call and polling

pub mod deployer;

pub use deployer::{Deployment, StackDeployer};

use crate::{error::Result, properties::Tag};
use async_trait::async_trait;
use std::fmt;
use tracing::{info, warn};

/// Capabilities acknowledged on every create and update
pub const CAPABILITIES: [&str; 2] = ["CAPABILITY_IAM", "CAPABILITY_NAMED_IAM"];

/// Status reported by CloudFormation, e.g. `UPDATE_ROLLBACK_COMPLETE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackStatus(String);

impl StackStatus {
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// No further transition will happen without a new request
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.0.ends_with("COMPLETE") || self.0.ends_with("FAILED")
    }

    /// Terminal and the requested change was applied
    #[must_use]
    pub fn is_successful(&self) -> bool {
        matches!(self.0.as_str(), "CREATE_COMPLETE" | "UPDATE_COMPLETE")
    }

    /// The stack exists and accepts an update
    #[must_use]
    pub fn is_stable(&self) -> bool {
        matches!(
            self.0.as_str(),
            "CREATE_COMPLETE" | "UPDATE_COMPLETE" | "UPDATE_ROLLBACK_COMPLETE"
        )
    }
}

impl fmt::Display for StackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Arguments shared by create-stack and update-stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackRequest {
    pub stack_name: String,
    pub template_url: String,
    /// `(ParameterKey, ParameterValue)` pairs
    pub parameters: Vec<(String, String)>,
    pub capabilities: Vec<String>,
    pub tags: Vec<Tag>,
}

/// Stack management service
#[async_trait]
pub trait StackClient: Send + Sync {
    /// Current status of the stack, `None` if it does not exist
    async fn describe_stack(&self, stack_name: &str) -> Result<Option<StackStatus>>;

    /// Returns the stack id when the service reports one
    async fn create_stack(&self, request: &StackRequest) -> Result<Option<String>>;

    /// Returns the stack id when the service reports one
    async fn update_stack(&self, request: &StackRequest) -> Result<Option<String>>;
}

/// Whether the stack call creates a new stack or updates an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackMode {
    Create,
    Update,
}

impl StackMode {
    #[must_use]
    pub const fn is_update(self) -> bool {
        matches!(self, Self::Update)
    }
}

/// Decide between create and update from the current stack status
///
/// Only a stable status selects update. A missing stack and a failed describe
/// call both fall back to create.
pub async fn resolve_mode(client: &impl StackClient, stack_name: &str) -> StackMode {
    let mode = match client.describe_stack(stack_name).await {
        Ok(Some(status)) if status.is_stable() => StackMode::Update,
        Ok(Some(status)) => {
            info!("stack {stack_name} is {status}, not updatable");
            StackMode::Create
        }
        Ok(None) => {
            info!("stack {stack_name} does not exist");
            StackMode::Create
        }
        Err(e) => {
            warn!("could not describe stack {stack_name}, assuming it does not exist: {e}");
            StackMode::Create
        }
    };

    info!("update_stack: {}", mode.is_update());

    mode
}
