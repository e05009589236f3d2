//! CloudFormation group and stack nodes.

use super::super::collections::{intersection, update_in_place};
use super::super::context::ExplorerContext;
use super::super::node::{AwsTreeNode, CollapsibleState, IconPaths};
use super::super::types::{FunctionConfig, StackSummary};
use super::function::FunctionNode;
use super::placeholder::{ErrorNode, PlaceholderNode};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Physical-id stand-in for template resources CloudFormation has not
/// assigned one. Several such resources collapse to this single candidate
/// key; since no deployed function is named `none`, they drop out at the
/// membership intersection.
const MISSING_PHYSICAL_ID: &str = "none";

/// "CloudFormation" group under a region: lists the region's stacks and
/// reconciles its stack children by stack id.
pub struct CloudFormationGroupNode {
    region_code: String,
    context: Arc<ExplorerContext>,
    stack_nodes: Mutex<HashMap<String, Arc<StackNode>>>,
    error: Mutex<Option<anyhow::Error>>,
}

impl CloudFormationGroupNode {
    pub fn new(region_code: impl Into<String>, context: Arc<ExplorerContext>) -> Self {
        Self {
            region_code: region_code.into(),
            context,
            stack_nodes: Mutex::new(HashMap::new()),
            error: Mutex::new(None),
        }
    }

    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    /// Fetch the region's stacks and reconcile the child map. A failed
    /// fetch propagates before the map is touched, so the previous
    /// children survive intact.
    pub async fn update_children(&self) -> Result<()> {
        let client = self.context.clients.cloudformation(&self.region_code);
        let stacks: HashMap<String, StackSummary> = client
            .list_stacks()
            .await?
            .into_iter()
            .map(|summary| (stack_key(&summary), summary))
            .collect();

        let mut stack_nodes = self.stack_nodes.lock().unwrap();
        update_in_place(
            &mut stack_nodes,
            stacks.keys().cloned(),
            |key, node| node.update(stacks[key].clone()),
            |key| {
                Arc::new(StackNode::new(
                    stacks[key].clone(),
                    self.region_code.clone(),
                    self.context.clone(),
                ))
            },
        );

        Ok(())
    }

    fn current_children(&self) -> Vec<Arc<StackNode>> {
        let mut stacks: Vec<Arc<StackNode>> =
            self.stack_nodes.lock().unwrap().values().cloned().collect();
        stacks.sort_by_key(|node| node.stack_name().to_lowercase());
        stacks
    }
}

#[async_trait]
impl AwsTreeNode for CloudFormationGroupNode {
    fn label(&self) -> String {
        "CloudFormation".to_string()
    }

    fn context_tag(&self) -> &'static str {
        "awsCloudFormationGroupNode"
    }

    fn state(&self) -> CollapsibleState {
        CollapsibleState::Collapsed
    }

    async fn get_children(&self) -> Vec<Arc<dyn AwsTreeNode>> {
        match self.update_children().await {
            Ok(()) => *self.error.lock().unwrap() = None,
            Err(error) => {
                warn!(
                    "Error loading CloudFormation stacks in {}: {:#}",
                    self.region_code, error
                );
                *self.error.lock().unwrap() = Some(error);
            }
        }

        if let Some(error) = self.error.lock().unwrap().as_ref() {
            return vec![Arc::new(ErrorNode::new(
                "Error loading CloudFormation resources",
                error,
            ))];
        }

        let stacks = self.current_children();
        if stacks.is_empty() {
            return vec![Arc::new(PlaceholderNode::new("[no stacks in this region]"))];
        }

        stacks
            .into_iter()
            .map(|node| node as Arc<dyn AwsTreeNode>)
            .collect()
    }
}

/// One CloudFormation stack; children are the deployed Lambda functions
/// declared in its template.
pub struct StackNode {
    region_code: String,
    context: Arc<ExplorerContext>,
    icon: IconPaths,
    summary: Mutex<StackSummary>,
    function_nodes: Mutex<HashMap<String, Arc<FunctionNode>>>,
    error: Mutex<Option<anyhow::Error>>,
}

impl StackNode {
    pub fn new(
        summary: StackSummary,
        region_code: impl Into<String>,
        context: Arc<ExplorerContext>,
    ) -> Self {
        let icon = IconPaths {
            dark: context.assets.resolve_path("resources/dark/cloudformation.svg"),
            light: context
                .assets
                .resolve_path("resources/light/cloudformation.svg"),
        };

        Self {
            region_code: region_code.into(),
            context,
            icon,
            summary: Mutex::new(summary),
            function_nodes: Mutex::new(HashMap::new()),
            error: Mutex::new(None),
        }
    }

    pub fn stack_name(&self) -> String {
        self.summary.lock().unwrap().stack_name.clone()
    }

    pub fn stack_id(&self) -> Option<String> {
        self.summary.lock().unwrap().stack_id.clone()
    }

    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    /// Refresh the cached summary. The node instance survives; only its
    /// display attributes change.
    pub fn update(&self, summary: StackSummary) {
        *self.summary.lock().unwrap() = summary;
    }

    /// Resolve which deployed functions belong to this stack and reconcile
    /// the child map against them.
    ///
    /// Membership is the join of two listings: template resources typed as
    /// Lambda functions (by physical id) against the region's deployed
    /// functions (by name). A resource whose physical id matches no
    /// deployed function is silently dropped; deleted-but-not-yet-listed
    /// drift reads as "currently absent", not as an error.
    pub async fn update_children(&self) -> Result<()> {
        let stack_name = self.stack_name();

        let cloudformation = self.context.clients.cloudformation(&self.region_code);
        let resources = cloudformation.describe_stack_resources(&stack_name).await?;
        let candidates: Vec<String> = resources
            .into_iter()
            .filter(|resource| resource.resource_type.contains("Lambda::Function"))
            .map(|resource| {
                resource
                    .physical_resource_id
                    .unwrap_or_else(|| MISSING_PHYSICAL_ID.to_string())
            })
            .collect();

        let lambda = self.context.clients.lambda(&self.region_code);
        let functions: HashMap<String, FunctionConfig> = lambda
            .list_functions()
            .await?
            .into_iter()
            .map(|configuration| (configuration.function_name.clone(), configuration))
            .collect();

        let members = intersection(candidates, functions.keys().cloned());

        let mut function_nodes = self.function_nodes.lock().unwrap();
        update_in_place(
            &mut function_nodes,
            members,
            |key, node| node.update(functions[key].clone()),
            |key| {
                Arc::new(FunctionNode::in_stack(
                    functions[key].clone(),
                    self.context.assets.as_ref(),
                ))
            },
        );

        Ok(())
    }

    fn current_children(&self) -> Vec<Arc<FunctionNode>> {
        let mut functions: Vec<Arc<FunctionNode>> = self
            .function_nodes
            .lock()
            .unwrap()
            .values()
            .cloned()
            .collect();
        functions.sort_by_key(|node| node.function_name().to_lowercase());
        functions
    }
}

#[async_trait]
impl AwsTreeNode for StackNode {
    fn label(&self) -> String {
        let summary = self.summary.lock().unwrap();
        format!("{} [{}]", summary.stack_name, summary.stack_status)
    }

    fn tooltip(&self) -> Option<String> {
        let summary = self.summary.lock().unwrap();
        match &summary.stack_id {
            Some(stack_id) => Some(format!("{}\n{}", summary.stack_name, stack_id)),
            None => Some(summary.stack_name.clone()),
        }
    }

    fn icon(&self) -> Option<IconPaths> {
        Some(self.icon.clone())
    }

    fn context_tag(&self) -> &'static str {
        "awsCloudFormationNode"
    }

    fn state(&self) -> CollapsibleState {
        CollapsibleState::Collapsed
    }

    async fn get_children(&self) -> Vec<Arc<dyn AwsTreeNode>> {
        match self.update_children().await {
            Ok(()) => *self.error.lock().unwrap() = None,
            Err(error) => {
                warn!(
                    "Error loading functions of stack {} in {}: {:#}",
                    self.stack_name(),
                    self.region_code,
                    error
                );
                *self.error.lock().unwrap() = Some(error);
            }
        }

        if let Some(error) = self.error.lock().unwrap().as_ref() {
            return vec![Arc::new(ErrorNode::new(
                "Error loading CloudFormation resources",
                error,
            ))];
        }

        let functions = self.current_children();
        if functions.is_empty() {
            return vec![Arc::new(PlaceholderNode::new(
                "[no functions in this CloudFormation]",
            ))];
        }

        functions
            .into_iter()
            .map(|node| node as Arc<dyn AwsTreeNode>)
            .collect()
    }
}

/// Stacks are keyed by id when CloudFormation has assigned one, falling
/// back to the (also unique) name.
fn stack_key(summary: &StackSummary) -> String {
    summary
        .stack_id
        .clone()
        .unwrap_or_else(|| summary.stack_name.clone())
}
