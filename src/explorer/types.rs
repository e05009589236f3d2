//! Domain records fetched from the remote listing adapters.
//!
//! These are immutable-per-refresh snapshots: a node caches the record it
//! was last updated with and replaces it wholesale on the next refresh.

use serde::{Deserialize, Serialize};

/// Summary of one CloudFormation stack, as returned by ListStacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSummary {
    /// Absent until CloudFormation has assigned the stack its ARN-form id.
    pub stack_id: Option<String>,
    pub stack_name: String,
    pub stack_status: String,
}

/// One resource declared in a stack's template, as returned by
/// DescribeStackResources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackResource {
    /// CloudFormation resource type, e.g. `AWS::Lambda::Function`.
    pub resource_type: String,
    /// Physical id of the deployed resource; for Lambda functions this is
    /// the function name.
    pub physical_resource_id: Option<String>,
}

/// Configuration snapshot of one deployed Lambda function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionConfig {
    pub function_name: String,
    pub function_arn: Option<String>,
    pub runtime: Option<String>,
    pub handler: Option<String>,
    pub description: Option<String>,
    pub memory_size: Option<i32>,
    pub timeout: Option<i32>,
    pub code_size: i64,
    pub last_modified: Option<String>,
}

impl FunctionConfig {
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            ..Default::default()
        }
    }
}
