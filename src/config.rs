//! Application configuration.
//!
//! Loaded from `<config dir>/gantry/config.toml` with environment
//! overrides for the connection settings. A missing or unreadable file
//! falls back to defaults so the app always starts.

use gantry_client::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GantryConfig {
    pub base_url: String,
    pub tenant: Option<String>,
    pub client_id: String,
    pub client_secret: String,
    /// Known assignees offered by the assignment dialog roster.
    pub assignees: Vec<String>,
}

impl Default for GantryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            tenant: None,
            client_id: "gantry".to_string(),
            client_secret: String::new(),
            assignees: vec![
                "admin@company.com".to_string(),
                "user1@company.com".to_string(),
                "user2@company.com".to_string(),
                "manager@company.com".to_string(),
            ],
        }
    }
}

impl GantryConfig {
    /// Config file path (e.g. `~/.config/gantry/config.toml`)
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gantry").join("config.toml"))
    }

    /// Load from disk, fall back to defaults, then apply env overrides.
    pub fn load() -> Self {
        let config = Self::config_path()
            .and_then(|path| Self::from_path(&path).ok())
            .unwrap_or_default();
        config.with_env_overrides()
    }

    pub fn from_path(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        toml::from_str(&contents).map_err(|e| format!("Invalid config: {e}"))
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("GANTRY_URL") {
            self.base_url = url;
        }
        if let Ok(tenant) = std::env::var("GANTRY_TENANT") {
            self.tenant = Some(tenant);
        }
        if let Ok(client_id) = std::env::var("GANTRY_CLIENT_ID") {
            self.client_id = client_id;
        }
        if let Ok(secret) = std::env::var("GANTRY_CLIENT_SECRET") {
            self.client_secret = secret;
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            tenant: self.tenant.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "base_url = \"https://orchestrator.example.com\"\nclient_secret = \"s3cret\""
        )
        .unwrap();

        let config = GantryConfig::from_path(file.path()).unwrap();
        assert_eq!(config.base_url, "https://orchestrator.example.com");
        assert_eq!(config.client_secret, "s3cret");
        assert_eq!(config.client_id, "gantry");
        assert!(!config.assignees.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error_not_a_panic() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [not toml").unwrap();
        assert!(GantryConfig::from_path(file.path()).is_err());
    }

    #[test]
    fn client_config_mirrors_connection_fields() {
        let config = GantryConfig {
            base_url: "https://orch.example.com".into(),
            tenant: Some("acme".into()),
            ..Default::default()
        };

        let client_config = config.client_config();
        assert_eq!(client_config.base_url, "https://orch.example.com");
        assert_eq!(client_config.tenant.as_deref(), Some("acme"));
    }
}
