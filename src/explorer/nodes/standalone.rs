//! "Lambda" group under a region: every deployed function in the region,
//! reconciled directly by function name with no stack-membership filter.

use super::super::collections::update_in_place;
use super::super::context::ExplorerContext;
use super::super::node::{AwsTreeNode, CollapsibleState};
use super::super::types::FunctionConfig;
use super::function::FunctionNode;
use super::placeholder::{ErrorNode, PlaceholderNode};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::warn;

pub struct StandaloneFunctionGroupNode {
    region_code: String,
    context: Arc<ExplorerContext>,
    function_nodes: Mutex<HashMap<String, Arc<FunctionNode>>>,
    error: Mutex<Option<anyhow::Error>>,
}

impl StandaloneFunctionGroupNode {
    pub fn new(region_code: impl Into<String>, context: Arc<ExplorerContext>) -> Self {
        Self {
            region_code: region_code.into(),
            context,
            function_nodes: Mutex::new(HashMap::new()),
            error: Mutex::new(None),
        }
    }

    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    /// Fetch the region's functions and reconcile the child map by name.
    pub async fn update_children(&self) -> Result<()> {
        let client = self.context.clients.lambda(&self.region_code);
        let functions: HashMap<String, FunctionConfig> = client
            .list_functions()
            .await?
            .into_iter()
            .map(|configuration| (configuration.function_name.clone(), configuration))
            .collect();

        let mut function_nodes = self.function_nodes.lock().unwrap();
        update_in_place(
            &mut function_nodes,
            functions.keys().cloned(),
            |key, node| node.update(functions[key].clone()),
            |key| {
                Arc::new(FunctionNode::standalone(
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
impl AwsTreeNode for StandaloneFunctionGroupNode {
    fn label(&self) -> String {
        "Lambda".to_string()
    }

    fn context_tag(&self) -> &'static str {
        "awsLambdaGroupNode"
    }

    fn state(&self) -> CollapsibleState {
        CollapsibleState::Collapsed
    }

    async fn get_children(&self) -> Vec<Arc<dyn AwsTreeNode>> {
        match self.update_children().await {
            Ok(()) => *self.error.lock().unwrap() = None,
            Err(error) => {
                warn!(
                    "Error loading Lambda functions in {}: {:#}",
                    self.region_code, error
                );
                *self.error.lock().unwrap() = Some(error);
            }
        }

        if let Some(error) = self.error.lock().unwrap().as_ref() {
            return vec![Arc::new(ErrorNode::new(
                "Error loading Lambda resources",
                error,
            ))];
        }

        let functions = self.current_children();
        if functions.is_empty() {
            return vec![Arc::new(PlaceholderNode::new(
                "[no functions in this region]",
            ))];
        }

        functions
            .into_iter()
            .map(|node| node as Arc<dyn AwsTreeNode>)
            .collect()
    }
}
