pub mod auth;
pub mod error;
pub mod import_documents;

use std::sync::Arc;

use auth::TokenSource;
use error::DiscoveryEngineError;
use serde::de::DeserializeOwned;

/// Collection every data store lives under unless custom collections are used.
pub const DEFAULT_COLLECTION: &str = "default_collection";

/// Branch imports are addressed to unless custom branches are used.
pub const DEFAULT_BRANCH: &str = "default_branch";

pub struct DiscoveryEngineClient {
    endpoint: String,
    client: reqwest::Client,
    token_source: Arc<dyn TokenSource>,
}

impl DiscoveryEngineClient {
    pub fn new(token_source: Arc<dyn TokenSource>, endpoint: String) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            token_source,
        }
    }

    /// Resource name of a data store branch.
    pub fn branch_path(project: &str, location: &str, data_store: &str) -> String {
        format!(
            "projects/{}/locations/{}/collections/{}/dataStores/{}/branches/{}",
            project, location, DEFAULT_COLLECTION, data_store, DEFAULT_BRANCH
        )
    }

    /// Common helper method for handling Discovery Engine API responses
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        res: reqwest::Response,
        operation: &str,
    ) -> Result<T, DiscoveryEngineError> {
        match res.status() {
            reqwest::StatusCode::OK => {
                tracing::trace!("{} successful", operation);
                let result = res
                    .json::<T>()
                    .await
                    .map_err(|e| DiscoveryEngineError::Generic {
                        message: e.to_string(),
                    })?;
                Ok(result)
            }
            reqwest::StatusCode::BAD_REQUEST => {
                tracing::error!("invalid argument for {}", operation);
                let error_details = Self::extract_error_message(res).await;
                Err(DiscoveryEngineError::InvalidArgument {
                    details: error_details,
                })
            }
            reqwest::StatusCode::UNAUTHORIZED => {
                tracing::error!("unauthorized for {}", operation);
                let error_details = Self::extract_error_message(res).await;
                Err(DiscoveryEngineError::Unauthorized {
                    details: error_details,
                })
            }
            reqwest::StatusCode::FORBIDDEN => {
                tracing::error!("permission denied for {}", operation);
                let error_details = Self::extract_error_message(res).await;
                Err(DiscoveryEngineError::PermissionDenied {
                    details: error_details,
                })
            }
            reqwest::StatusCode::NOT_FOUND => {
                tracing::error!("not found for {}", operation);
                let error_details = Self::extract_error_message(res).await;
                Err(DiscoveryEngineError::NotFound {
                    details: error_details,
                })
            }
            reqwest::StatusCode::TOO_MANY_REQUESTS => {
                tracing::error!("resource exhausted for {}", operation);
                let error_details = Self::extract_error_message(res).await;
                Err(DiscoveryEngineError::ResourceExhausted {
                    details: error_details,
                })
            }
            status if status.is_server_error() => {
                tracing::error!("internal server error for {}", operation);
                let error_details = Self::extract_error_message(res).await;
                Err(DiscoveryEngineError::InternalServerError {
                    details: error_details,
                })
            }
            status => {
                tracing::error!("unexpected status {} for {}", status, operation);
                let error_details = Self::extract_error_message(res).await;
                Err(DiscoveryEngineError::Generic {
                    message: error_details,
                })
            }
        }
    }

    async fn extract_error_message(res: reqwest::Response) -> String {
        let text = match res.text().await {
            Ok(text) => text,
            Err(e) => return format!("failed to read error response: {}", e),
        };

        // Google APIs wrap failures as {"error": {"code", "message", "status"}}
        if let Ok(json_value) = serde_json::from_str::<serde_json::Value>(&text)
            && let Some(error_msg) = json_value
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(|message| message.as_str())
        {
            return error_msg.to_string();
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_path_uses_default_collection_and_branch() {
        let path = DiscoveryEngineClient::branch_path("my-project", "global", "my-store");
        assert_eq!(
            path,
            "projects/my-project/locations/global/collections/default_collection/dataStores/my-store/branches/default_branch"
        );
        assert!(path.ends_with("/branches/default_branch"));
    }

    #[test]
    fn test_new_trims_trailing_slash_from_endpoint() {
        let client = DiscoveryEngineClient::new(
            std::sync::Arc::new(auth::StaticTokenSource::new("token".to_string())),
            "https://discoveryengine.googleapis.com/".to_string(),
        );
        assert_eq!(client.endpoint, "https://discoveryengine.googleapis.com");
    }
}
