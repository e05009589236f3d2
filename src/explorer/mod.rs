pub mod aws_client;
pub mod aws_services;
pub mod collections;
pub mod commands;
pub mod context;
pub mod credentials;
pub mod node;
pub mod nodes;
pub mod regions;
pub mod types;

pub use aws_client::DefaultClientFactory;
pub use collections::{intersection, update_in_place};
pub use context::{
    AssetResolver, ClientFactory, CloudFormationClient, ExplorerContext, LambdaClient, Notifier,
};
pub use credentials::{CredentialProvider, StaticCredentials};
pub use node::{AwsTreeNode, CollapsibleState, IconPaths};
pub use nodes::{
    CloudFormationGroupNode, ErrorNode, FunctionNode, PlaceholderNode, RegionNode,
    RegionNodeCollection, StackNode, StandaloneFunctionGroupNode,
};
pub use regions::{default_regions, region_display_name, RegionInfo};
pub use types::{FunctionConfig, StackResource, StackSummary};
