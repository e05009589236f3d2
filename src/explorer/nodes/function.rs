//! Leaf node for one deployed Lambda function.

use super::super::context::AssetResolver;
use super::super::node::{AwsTreeNode, CollapsibleState, IconPaths};
use super::super::types::FunctionConfig;
use async_trait::async_trait;
use std::sync::Mutex;

/// Snapshot of one function. The same node type backs both stack members
/// and the standalone group; only the context tag differs, so the host can
/// offer different actions for each.
pub struct FunctionNode {
    context_tag: &'static str,
    icon: IconPaths,
    configuration: Mutex<FunctionConfig>,
}

impl FunctionNode {
    /// A function listed as a member of a CloudFormation stack.
    pub fn in_stack(configuration: FunctionConfig, assets: &dyn AssetResolver) -> Self {
        Self::new(configuration, assets, "awsCloudFormationFunctionNode")
    }

    /// A function listed directly under a region's standalone group.
    pub fn standalone(configuration: FunctionConfig, assets: &dyn AssetResolver) -> Self {
        Self::new(configuration, assets, "awsRegionFunctionNode")
    }

    fn new(
        configuration: FunctionConfig,
        assets: &dyn AssetResolver,
        context_tag: &'static str,
    ) -> Self {
        let icon = IconPaths {
            dark: assets.resolve_path("resources/dark/lambda_function.svg"),
            light: assets.resolve_path("resources/light/lambda_function.svg"),
        };

        Self {
            context_tag,
            icon,
            configuration: Mutex::new(configuration),
        }
    }

    pub fn function_name(&self) -> String {
        self.configuration.lock().unwrap().function_name.clone()
    }

    pub fn configuration(&self) -> FunctionConfig {
        self.configuration.lock().unwrap().clone()
    }

    /// Replace the cached snapshot with a freshly fetched one.
    pub fn update(&self, configuration: FunctionConfig) {
        *self.configuration.lock().unwrap() = configuration;
    }
}

#[async_trait]
impl AwsTreeNode for FunctionNode {
    fn label(&self) -> String {
        self.function_name()
    }

    fn tooltip(&self) -> Option<String> {
        let configuration = self.configuration.lock().unwrap();
        let arn = configuration.function_arn.clone()?;
        match &configuration.runtime {
            Some(runtime) => Some(format!("{}\n{}", arn, runtime)),
            None => Some(arn),
        }
    }

    fn icon(&self) -> Option<IconPaths> {
        Some(self.icon.clone())
    }

    fn context_tag(&self) -> &'static str {
        self.context_tag
    }

    fn state(&self) -> CollapsibleState {
        CollapsibleState::Leaf
    }
}
