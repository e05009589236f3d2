//! The read-only tree contract every explorer node exposes to the host.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// How the host should render a node's expansion affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapsibleState {
    /// No children, no affordance.
    Leaf,
    Collapsed,
    Expanded,
}

/// Dark/light icon pair, resolved through the host's asset resolver at node
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPaths {
    pub dark: PathBuf,
    pub light: PathBuf,
}

/// Display capabilities plus the lazy children source.
///
/// Node identity is `Arc` pointer identity: across two refreshes a child
/// with a surviving key is the same `Arc`, which is how the host keeps
/// selection and expansion state attached to it.
#[async_trait]
pub trait AwsTreeNode: Send + Sync {
    fn label(&self) -> String;

    fn tooltip(&self) -> Option<String> {
        None
    }

    fn icon(&self) -> Option<IconPaths> {
        None
    }

    /// Stable tag the host uses to select context-menu contributions.
    fn context_tag(&self) -> &'static str;

    fn state(&self) -> CollapsibleState;

    /// Fetch, reconcile, and return this node's current children.
    ///
    /// Container nodes perform remote I/O here; leaves return nothing.
    /// Errors are contained per node: a failed refresh yields a single
    /// error child, never a panic or an empty lie.
    async fn get_children(&self) -> Vec<Arc<dyn AwsTreeNode>> {
        Vec::new()
    }
}
