//! Production [`ClientFactory`] backed by the AWS SDK.

use super::aws_services::{CloudFormationService, LambdaService};
use super::context::{ClientFactory, CloudFormationClient, LambdaClient};
use super::credentials::CredentialProvider;
use std::sync::Arc;

/// Builds per-region SDK-backed clients over a shared credential provider.
pub struct DefaultClientFactory {
    credentials: Arc<CredentialProvider>,
}

impl DefaultClientFactory {
    pub fn new(credentials: Arc<CredentialProvider>) -> Self {
        Self { credentials }
    }
}

impl ClientFactory for DefaultClientFactory {
    fn cloudformation(&self, region_code: &str) -> Arc<dyn CloudFormationClient> {
        Arc::new(CloudFormationService::new(
            region_code,
            self.credentials.clone(),
        ))
    }

    fn lambda(&self, region_code: &str) -> Arc<dyn LambdaClient> {
        Arc::new(LambdaService::new(region_code, self.credentials.clone()))
    }
}
