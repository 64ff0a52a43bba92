use discovery_engine_client::DiscoveryEngineClient;
use discovery_engine_client::error::DiscoveryEngineError;
use discovery_engine_client::import_documents::ReconciliationMode;

use crate::config::Config;
use crate::models::StorageObject;

/// Terminal result of one storage notification.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// An import operation was started for the object.
    Imported { operation: String },
    /// The notification was dropped without an import submission.
    Skipped,
}

/// Handles one storage object notification.
///
/// Skips are terminal: a notification that is missing fields, hits missing
/// configuration, or names an unsupported file ends here without an outbound
/// call. Only import submission failures propagate, so the delivery layer can
/// redeliver the event.
#[tracing::instrument(skip_all)]
pub async fn handle_storage_event(
    client: &DiscoveryEngineClient,
    config: &Config,
    payload: &serde_json::Value,
) -> Result<Outcome, DiscoveryEngineError> {
    let (object, project_id, location, data_store_id) = match (
        StorageObject::from_payload(payload),
        config.project_id.as_deref(),
        config.location.as_deref(),
        config.data_store_id.as_deref(),
    ) {
        (Some(object), Some(project_id), Some(location), Some(data_store_id)) => {
            (object, project_id, location, data_store_id)
        }
        _ => {
            tracing::error!(
                "missing file details or environment variables (PROJECT_ID, LOCATION, DATA_STORE_ID)"
            );
            return Ok(Outcome::Skipped);
        }
    };

    tracing::info!(uri = %object.gcs_uri(), "processing file");

    if !object.has_supported_extension() {
        tracing::info!(
            name = %object.name,
            extension = object.extension().as_deref().unwrap_or(""),
            "skipping file with unsupported extension"
        );
        return Ok(Outcome::Skipped);
    }

    let gcs_uri = object.gcs_uri();
    let branch = DiscoveryEngineClient::branch_path(project_id, location, data_store_id);

    let operation = match client
        .import_documents(&branch, vec![gcs_uri.clone()], ReconciliationMode::Incremental)
        .await
    {
        Ok(operation) => operation,
        Err(e) => {
            tracing::error!(error = ?e, uri = %gcs_uri, "error calling the import api");
            return Err(e);
        }
    };

    tracing::info!(operation = %operation.name, "started import operation");
    tracing::info!(uri = %gcs_uri, "successfully triggered import");

    Ok(Outcome::Imported {
        operation: operation.name,
    })
}
