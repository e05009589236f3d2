//! Per-region AWS SDK configuration.
//!
//! The production client factory funnels every client build through one
//! [`CredentialProvider`], which loads an `SdkConfig` per region and caches
//! it. Credentials come from the ambient provider chain (environment,
//! shared config, SSO) unless the host supplies static keys.

use anyhow::Result;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::Credentials;
use aws_types::region::Region;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Static access keys supplied by the host instead of the ambient chain.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl StaticCredentials {
    fn to_aws_credentials(&self) -> Credentials {
        Credentials::from_keys(
            &self.access_key_id,
            &self.secret_access_key,
            self.session_token.clone(),
        )
    }
}

/// Builds and caches one `SdkConfig` per region.
#[derive(Debug, Default)]
pub struct CredentialProvider {
    static_credentials: Option<StaticCredentials>,
    config_cache: RwLock<HashMap<String, SdkConfig>>,
}

impl CredentialProvider {
    /// Use the ambient credential provider chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use fixed access keys for every region.
    pub fn with_static_credentials(credentials: StaticCredentials) -> Self {
        Self {
            static_credentials: Some(credentials),
            config_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get the SDK configuration for `region_code`, loading it on first use.
    pub async fn create_aws_config(&self, region_code: &str) -> Result<SdkConfig> {
        {
            let cache = self.config_cache.read().await;
            if let Some(config) = cache.get(region_code) {
                return Ok(config.clone());
            }
        }

        debug!("Loading AWS config for region {}", region_code);
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region_code.to_string()));

        if let Some(credentials) = &self.static_credentials {
            loader = loader.credentials_provider(credentials.to_aws_credentials());
        }

        let config = loader.load().await;

        let mut cache = self.config_cache.write().await;
        cache.insert(region_code.to_string(), config.clone());

        Ok(config)
    }
}
