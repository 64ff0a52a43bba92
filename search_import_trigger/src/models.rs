use serde_json::Value;

/// File extensions eligible for import.
pub const ALLOWED_EXTENSIONS: [&str; 6] = [".html", ".pdf", ".docx", ".pptx", ".txt", ".xlsx"];

/// The created object named by a storage notification.
#[derive(Debug, PartialEq, Eq)]
pub struct StorageObject {
    pub bucket: String,
    pub name: String,
}

impl StorageObject {
    /// Pulls `bucket` and `name` out of the delivered payload.
    ///
    /// Binary-mode deliveries carry the object fields at the top level of the
    /// body; structured-mode deliveries nest them under `data`.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let data = match payload.get("data") {
            Some(data) if data.is_object() => data,
            _ => payload,
        };

        let bucket = data
            .get("bucket")
            .and_then(|bucket| bucket.as_str())
            .unwrap_or("");
        let name = data.get("name").and_then(|name| name.as_str()).unwrap_or("");

        if bucket.is_empty() || name.is_empty() {
            return None;
        }

        Some(StorageObject {
            bucket: bucket.to_string(),
            name: name.to_string(),
        })
    }

    /// The object URI import requests point at.
    pub fn gcs_uri(&self) -> String {
        format!("gs://{}/{}", self.bucket, self.name)
    }

    /// Extension of the object name, lower-cased, including the dot.
    ///
    /// Taken after the last path separator and the last dot; names without a
    /// dot and dotfiles have no extension.
    pub fn extension(&self) -> Option<String> {
        let base = self.name.rsplit('/').next().unwrap_or(&self.name);
        match base.rfind('.') {
            None | Some(0) => None,
            Some(idx) => Some(base[idx..].to_ascii_lowercase()),
        }
    }

    pub fn has_supported_extension(&self) -> bool {
        match self.extension() {
            Some(extension) => ALLOWED_EXTENSIONS.contains(&extension.as_str()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(name: &str) -> StorageObject {
        StorageObject {
            bucket: "my-bucket".to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_from_payload_reads_top_level_fields() {
        let payload = json!({ "bucket": "my-bucket", "name": "reports/q1.pdf" });
        assert_eq!(
            StorageObject::from_payload(&payload),
            Some(object("reports/q1.pdf"))
        );
    }

    #[test]
    fn test_from_payload_reads_nested_data_fields() {
        let payload = json!({
            "specversion": "1.0",
            "type": "google.cloud.storage.object.v1.finalized",
            "data": { "bucket": "my-bucket", "name": "reports/q1.pdf" }
        });
        assert_eq!(
            StorageObject::from_payload(&payload),
            Some(object("reports/q1.pdf"))
        );
    }

    #[test]
    fn test_from_payload_rejects_missing_or_empty_fields() {
        assert_eq!(StorageObject::from_payload(&json!({})), None);
        assert_eq!(
            StorageObject::from_payload(&json!({ "bucket": "my-bucket" })),
            None
        );
        assert_eq!(
            StorageObject::from_payload(&json!({ "name": "q1.pdf" })),
            None
        );
        assert_eq!(
            StorageObject::from_payload(&json!({ "bucket": "", "name": "q1.pdf" })),
            None
        );
        assert_eq!(StorageObject::from_payload(&json!("not an object")), None);
    }

    #[test]
    fn test_gcs_uri() {
        assert_eq!(
            object("reports/q1.pdf").gcs_uri(),
            "gs://my-bucket/reports/q1.pdf"
        );
    }

    #[test]
    fn test_extension_is_lowercased() {
        assert_eq!(object("q1.PDF").extension(), Some(".pdf".to_string()));
        assert_eq!(object("q1.Pdf").extension(), Some(".pdf".to_string()));
    }

    #[test]
    fn test_extension_splits_after_last_separator_and_dot() {
        assert_eq!(
            object("reports.v2/summary.docx").extension(),
            Some(".docx".to_string())
        );
        assert_eq!(
            object("archive.tar.gz").extension(),
            Some(".gz".to_string())
        );
    }

    #[test]
    fn test_names_without_extension() {
        assert_eq!(object("README").extension(), None);
        assert_eq!(object(".profile").extension(), None);
        assert_eq!(object("reports/.hidden").extension(), None);
    }

    #[test]
    fn test_supported_extensions() {
        for name in [
            "a.html", "a.pdf", "a.docx", "a.pptx", "a.txt", "a.xlsx", "a.XLSX",
        ] {
            assert!(object(name).has_supported_extension(), "{}", name);
        }

        for name in ["a.zip", "a.csv", "a.exe", "a", ".pdf"] {
            assert!(!object(name).has_supported_extension(), "{}", name);
        }
    }
}
