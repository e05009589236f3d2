//! Command-layer entry points invoked by the host's command palette or
//! context menus.

use super::context::ExplorerContext;
use super::node::AwsTreeNode;
use super::nodes::StackNode;
use tracing::{error, info};

/// Delete a CloudFormation stack after user confirmation, then ask the
/// parent to refresh.
///
/// `refresh` is the parent group's refresh closure; it is invoked only on
/// success. On failure the user is notified, the full error is logged, and
/// the tree is left untouched.
pub async fn delete_stack(
    context: &ExplorerContext,
    node: Option<&StackNode>,
    refresh: impl FnOnce(),
) {
    let Some(node) = node else {
        context
            .notifier
            .error("Unable to delete a CloudFormation Stack. No stack provided.");
        return;
    };

    let stack_name = node.stack_name();

    if !context
        .notifier
        .confirm(&format!("Are you sure you want to delete {}?", stack_name))
    {
        return;
    }

    let client = context.clients.cloudformation(node.region_code());
    match client.delete_stack(&stack_name).await {
        Ok(()) => {
            info!("Deleted stack {} in {}", stack_name, node.region_code());
            context
                .notifier
                .info(&format!("Deleted CloudFormation Stack {}", stack_name));
            refresh();
        }
        Err(err) => {
            context.notifier.error(&format!(
                "An error occurred while deleting {}. Please check the stack events on the AWS Console",
                stack_name
            ));
            error!("Failed to delete stack {}: {:#}", stack_name, err);
        }
    }
}

/// Re-trigger a node's fetch-and-reconcile pass, then signal the host that
/// its children changed.
pub async fn refresh(node: &dyn AwsTreeNode, notify_children_changed: impl FnOnce()) {
    node.get_children().await;
    notify_children_changed();
}
