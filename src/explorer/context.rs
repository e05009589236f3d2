//! Collaborator seams injected into every node at construction.
//!
//! The engine never reaches for process-wide state: whoever builds the tree
//! hands it an [`ExplorerContext`] carrying the client factory, the asset
//! resolver for icons, and the notifier for user-facing messages. Tests
//! substitute all three.

use super::types::{FunctionConfig, StackResource, StackSummary};
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// CloudFormation operations the explorer needs, scoped to one region.
#[async_trait]
pub trait CloudFormationClient: Send + Sync {
    /// Page through all live stacks in the region.
    async fn list_stacks(&self) -> Result<Vec<StackSummary>>;

    /// Resources declared in `stack_name`'s template.
    async fn describe_stack_resources(&self, stack_name: &str) -> Result<Vec<StackResource>>;

    async fn delete_stack(&self, stack_name: &str) -> Result<()>;
}

/// Lambda operations the explorer needs, scoped to one region.
#[async_trait]
pub trait LambdaClient: Send + Sync {
    /// Page through every function deployed in the region.
    async fn list_functions(&self) -> Result<Vec<FunctionConfig>>;
}

/// Produces per-region service clients on demand.
///
/// Commands and refreshes obtain a client per call; any pooling or
/// connection reuse is the factory's business.
pub trait ClientFactory: Send + Sync {
    fn cloudformation(&self, region_code: &str) -> Arc<dyn CloudFormationClient>;

    fn lambda(&self, region_code: &str) -> Arc<dyn LambdaClient>;
}

/// Resolves an icon path shipped with the host into an absolute path.
/// Consulted only at node construction.
pub trait AssetResolver: Send + Sync {
    fn resolve_path(&self, relative_path: &str) -> PathBuf;
}

/// User-facing notifications, rendered however the host sees fit.
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);

    fn error(&self, message: &str);

    /// Ask the user to confirm a destructive action. `false` aborts it.
    fn confirm(&self, message: &str) -> bool;
}

/// Everything a node needs from its host, bundled for constructor injection.
pub struct ExplorerContext {
    pub clients: Arc<dyn ClientFactory>,
    pub assets: Arc<dyn AssetResolver>,
    pub notifier: Arc<dyn Notifier>,
}

impl ExplorerContext {
    pub fn new(
        clients: Arc<dyn ClientFactory>,
        assets: Arc<dyn AssetResolver>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            clients,
            assets,
            notifier,
        }
    }
}
