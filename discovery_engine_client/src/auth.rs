use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DiscoveryEngineError;

/// Scope requested for import calls.
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Source of bearer tokens for outbound Discovery Engine calls.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn access_token(&self) -> Result<String, DiscoveryEngineError>;
}

/// Resolves tokens through the ambient Google credentials (attached service
/// account, workload identity, or a local gcloud login).
pub struct GcpTokenSource {
    provider: Arc<dyn gcp_auth::TokenProvider>,
}

impl GcpTokenSource {
    pub async fn resolve() -> Result<Self, DiscoveryEngineError> {
        let provider = gcp_auth::provider()
            .await
            .map_err(|e| DiscoveryEngineError::Auth {
                details: e.to_string(),
            })?;

        Ok(Self { provider })
    }
}

#[async_trait]
impl TokenSource for GcpTokenSource {
    async fn access_token(&self) -> Result<String, DiscoveryEngineError> {
        // gcp_auth caches the token and refreshes it ahead of expiry
        let token = self
            .provider
            .token(&[CLOUD_PLATFORM_SCOPE])
            .await
            .map_err(|e| DiscoveryEngineError::Auth {
                details: e.to_string(),
            })?;

        Ok(token.as_str().to_string())
    }
}

/// Fixed token, for local runs and tests.
pub struct StaticTokenSource {
    token: String,
}

impl StaticTokenSource {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn access_token(&self) -> Result<String, DiscoveryEngineError> {
        Ok(self.token.clone())
    }
}
