//! Informational leaf nodes: empty-group placeholders and contained errors.

use super::super::node::{AwsTreeNode, CollapsibleState};
use async_trait::async_trait;

/// Shown as the only child of a group that fetched successfully but has
/// nothing to list.
pub struct PlaceholderNode {
    message: String,
}

impl PlaceholderNode {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl AwsTreeNode for PlaceholderNode {
    fn label(&self) -> String {
        self.message.clone()
    }

    fn context_tag(&self) -> &'static str {
        "awsPlaceholderNode"
    }

    fn state(&self) -> CollapsibleState {
        CollapsibleState::Leaf
    }
}

/// Shown as the only child of a group whose refresh failed. Re-expanding
/// the group retries the fetch, so the error node is recomputed every call.
pub struct ErrorNode {
    message: String,
    detail: String,
}

impl ErrorNode {
    pub fn new(message: impl Into<String>, error: &anyhow::Error) -> Self {
        Self {
            message: message.into(),
            detail: format!("{:#}", error),
        }
    }
}

#[async_trait]
impl AwsTreeNode for ErrorNode {
    fn label(&self) -> String {
        self.message.clone()
    }

    fn tooltip(&self) -> Option<String> {
        Some(self.detail.clone())
    }

    fn context_tag(&self) -> &'static str {
        "awsErrorNode"
    }

    fn state(&self) -> CollapsibleState {
        CollapsibleState::Leaf
    }
}
