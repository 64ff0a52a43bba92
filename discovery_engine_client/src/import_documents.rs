use serde::{Deserialize, Serialize};

use crate::DiscoveryEngineClient;
use crate::error::DiscoveryEngineError;

/// Data schema for unstructured content referenced by URI.
pub const DATA_SCHEMA_CONTENT: &str = "content";

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GcsSource {
    pub input_uris: Vec<String>,
    pub data_schema: String,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportDocumentsRequest {
    pub gcs_source: GcsSource,
    pub reconciliation_mode: ReconciliationMode,
}

/// INCREMENTAL adds new documents and updates existing ones.
/// FULL replaces the branch with the contents of the supplied sources.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReconciliationMode {
    Incremental,
    Full,
}

/// Long-running operation handle returned by the import endpoint.
/// The import itself runs out of process; nothing here waits on it.
#[derive(Deserialize, Debug)]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub done: bool,
}

impl DiscoveryEngineClient {
    /// Starts a `documents:import` operation on the given data store branch.
    #[tracing::instrument(skip(self))]
    pub async fn import_documents(
        &self,
        branch: &str,
        input_uris: Vec<String>,
        reconciliation_mode: ReconciliationMode,
    ) -> Result<Operation, DiscoveryEngineError> {
        let token = self.token_source.access_token().await?;

        let request = ImportDocumentsRequest {
            gcs_source: GcsSource {
                input_uris,
                data_schema: DATA_SCHEMA_CONTENT.to_string(),
            },
            reconciliation_mode,
        };

        let res = self
            .client
            .post(format!("{}/v1/{}/documents:import", self.endpoint, branch))
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|e| DiscoveryEngineError::RequestBuildError {
                details: e.to_string(),
            })?;

        Self::handle_response(res, "import documents").await
    }
}
