use serde::{Deserialize, Serialize};

use crate::{DEFAULT_FOLDER, DEFAULT_FOLDER_ID, DEFAULT_RESOURCE_STATUS};

/// Automation process definition as returned by the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: String,
    /// Release key passed back to the API when starting the process.
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub process_version: Option<String>,
    #[serde(default)]
    pub folder_name: Option<String>,
    #[serde(default)]
    pub folder_id: Option<i64>,
    #[serde(default)]
    pub last_modified_time: Option<String>,
}

impl Process {
    /// Status used for filtering and badges when the API omits one.
    pub fn effective_status(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_RESOURCE_STATUS)
    }

    pub fn folder_or_default(&self) -> &str {
        self.folder_name.as_deref().unwrap_or(DEFAULT_FOLDER)
    }

    pub fn version_or_default(&self) -> &str {
        self.process_version.as_deref().unwrap_or("1.0.0")
    }

    pub fn folder_id_or_default(&self) -> i64 {
        self.folder_id.unwrap_or(DEFAULT_FOLDER_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_process_deserializes_with_defaults() {
        let process: Process =
            serde_json::from_str(r#"{"id": "17", "key": "inv-loader", "name": "Invoice Loader"}"#)
                .unwrap();

        assert_eq!(process.effective_status(), "Available");
        assert_eq!(process.folder_or_default(), "default");
        assert_eq!(process.version_or_default(), "1.0.0");
        assert_eq!(process.folder_id_or_default(), 1);
    }

    #[test]
    fn populated_fields_win_over_defaults() {
        let process: Process = serde_json::from_str(
            r#"{
                "id": "17",
                "key": "inv-loader",
                "name": "Invoice Loader",
                "status": "Running",
                "processVersion": "2.4.1",
                "folderName": "Production",
                "folderId": 42
            }"#,
        )
        .unwrap();

        assert_eq!(process.effective_status(), "Running");
        assert_eq!(process.folder_or_default(), "Production");
        assert_eq!(process.version_or_default(), "2.4.1");
        assert_eq!(process.folder_id_or_default(), 42);
    }
}
