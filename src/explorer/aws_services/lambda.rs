use super::super::context::LambdaClient;
use super::super::credentials::CredentialProvider;
use super::super::types::FunctionConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_lambda as lambda;
use std::sync::Arc;
use tracing::debug;

/// Lambda listing adapter for one region.
pub struct LambdaService {
    region_code: String,
    credentials: Arc<CredentialProvider>,
}

impl LambdaService {
    pub fn new(region_code: impl Into<String>, credentials: Arc<CredentialProvider>) -> Self {
        Self {
            region_code: region_code.into(),
            credentials,
        }
    }

    fn configuration_to_record(function: &lambda::types::FunctionConfiguration) -> FunctionConfig {
        FunctionConfig {
            function_name: function.function_name().unwrap_or_default().to_string(),
            function_arn: function.function_arn().map(str::to_string),
            runtime: function
                .runtime()
                .map(|runtime| runtime.as_str().to_string()),
            handler: function.handler().map(str::to_string),
            description: function.description().map(str::to_string),
            memory_size: function.memory_size(),
            timeout: function.timeout(),
            code_size: function.code_size(),
            last_modified: function.last_modified().map(str::to_string),
        }
    }
}

#[async_trait]
impl LambdaClient for LambdaService {
    async fn list_functions(&self) -> Result<Vec<FunctionConfig>> {
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

        let client = lambda::Client::new(&aws_config);
        let mut functions = Vec::new();

        let mut paginator = client.list_functions().into_paginator().send();
        while let Some(page) = paginator.try_next().await? {
            for function in page.functions.unwrap_or_default() {
                functions.push(Self::configuration_to_record(&function));
            }
        }

        debug!(
            "Listed {} functions in region {}",
            functions.len(),
            self.region_code
        );
        Ok(functions)
    }
}
