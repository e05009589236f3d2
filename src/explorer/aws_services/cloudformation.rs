use super::super::context::CloudFormationClient;
use super::super::credentials::CredentialProvider;
use super::super::types::{StackResource, StackSummary};
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_cloudformation as cfn;
use cfn::types::StackStatus;
use std::sync::Arc;
use tracing::debug;

/// CloudFormation listing adapter for one region.
pub struct CloudFormationService {
    region_code: String,
    credentials: Arc<CredentialProvider>,
}

impl CloudFormationService {
    pub fn new(region_code: impl Into<String>, credentials: Arc<CredentialProvider>) -> Self {
        Self {
            region_code: region_code.into(),
            credentials,
        }
    }

    async fn client(&self) -> Result<cfn::Client> {
        let aws_config = self
            .credentials
            .create_aws_config(&self.region_code)
            .await
            .with_context(|| {
                format!(
                    "Failed to create AWS config for region {}",
                    self.region_code
                )
            })?;

        Ok(cfn::Client::new(&aws_config))
    }

    fn summary_to_record(summary: &cfn::types::StackSummary) -> StackSummary {
        StackSummary {
            stack_id: summary.stack_id().map(str::to_string),
            stack_name: summary.stack_name().unwrap_or_default().to_string(),
            stack_status: summary
                .stack_status()
                .map(|status| status.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl CloudFormationClient for CloudFormationService {
    /// List all stacks in the region, one page at a time. Deleted stacks
    /// stay listable for 90 days, so DELETE_COMPLETE entries are skipped.
    async fn list_stacks(&self) -> Result<Vec<StackSummary>> {
        let client = self.client().await?;
        let mut stacks = Vec::new();

        let mut paginator = client.list_stacks().into_paginator().send();
        while let Some(page) = paginator.try_next().await? {
            for summary in page.stack_summaries.unwrap_or_default() {
                if matches!(summary.stack_status(), Some(StackStatus::DeleteComplete)) {
                    continue;
                }
                stacks.push(Self::summary_to_record(&summary));
            }
        }

        debug!(
            "Listed {} stacks in region {}",
            stacks.len(),
            self.region_code
        );
        Ok(stacks)
    }

    async fn describe_stack_resources(&self, stack_name: &str) -> Result<Vec<StackResource>> {
        let client = self.client().await?;
        let response = client
            .describe_stack_resources()
            .stack_name(stack_name)
            .send()
            .await
            .with_context(|| format!("Failed to describe resources of stack {}", stack_name))?;

        let resources = response
            .stack_resources
            .unwrap_or_default()
            .into_iter()
            .map(|resource| StackResource {
                resource_type: resource.resource_type.unwrap_or_default(),
                physical_resource_id: resource.physical_resource_id,
            })
            .collect();

        Ok(resources)
    }

    async fn delete_stack(&self, stack_name: &str) -> Result<()> {
        let client = self.client().await?;
        client
            .delete_stack()
            .stack_name(stack_name)
            .send()
            .await
            .with_context(|| format!("Failed to delete stack {}", stack_name))?;

        debug!(
            "DeleteStack request accepted for {} in region {}",
            stack_name, self.region_code
        );
        Ok(())
    }
}
