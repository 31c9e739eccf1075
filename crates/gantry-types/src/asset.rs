use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{DEFAULT_FOLDER, DEFAULT_RESOURCE_STATUS};

/// Configuration asset (text, integer, boolean, or credential).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Stored value; credentials arrive masked or absent depending on the
    /// caller's permissions.
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub value_type: Option<String>,
    #[serde(default)]
    pub folder_name: Option<String>,
    #[serde(default)]
    pub has_default_value: Option<bool>,
    #[serde(default)]
    pub last_modified_time: Option<String>,
}

impl Asset {
    /// Assets have no lifecycle status; the value type stands in for it
    /// when filtering and rendering badges.
    pub fn effective_status(&self) -> &str {
        self.value_type.as_deref().unwrap_or(DEFAULT_RESOURCE_STATUS)
    }

    pub fn folder_or_default(&self) -> &str {
        self.folder_name.as_deref().unwrap_or(DEFAULT_FOLDER)
    }

    /// Sensitive assets render masked until explicitly revealed.
    pub fn is_sensitive(&self) -> bool {
        self.value_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("credential"))
            || self.has_default_value == Some(false)
    }

    /// Plain-text rendering of the stored value, if any.
    pub fn value_text(&self) -> Option<String> {
        match self.value.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}
