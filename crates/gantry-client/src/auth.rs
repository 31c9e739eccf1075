//! Client-credentials token exchange against the platform identity
//! endpoint.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::error::{ClientError, Result};
use crate::ClientConfig;

/// Bearer token returned by the identity endpoint.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// A token without an expiry is treated as valid until replaced.
    pub fn is_valid(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at > Utc::now(),
            None => true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

pub(crate) async fn request_token(
    http: &reqwest::Client,
    config: &ClientConfig,
) -> Result<AccessToken> {
    let url = format!(
        "{}/identity/connect/token",
        config.base_url.trim_end_matches('/')
    );
    let params = [
        ("grant_type", "client_credentials"),
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.as_str()),
    ];

    let response = http.post(&url).form(&params).send().await?;
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ClientError::Initialization(format!(
            "token request failed ({}): {}",
            status.as_u16(),
            message
        )));
    }

    let body: TokenResponse = response
        .json()
        .await
        .map_err(|e| ClientError::Initialization(format!("malformed token response: {e}")))?;

    Ok(AccessToken {
        token: body.access_token,
        expires_at: body.expires_in.map(|secs| Utc::now() + Duration::seconds(secs)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_token_is_invalid() {
        let expired = AccessToken {
            token: "tok".into(),
            expires_at: Some(Utc::now() - Duration::seconds(5)),
        };
        assert!(!expired.is_valid());

        let live = AccessToken {
            token: "tok".into(),
            expires_at: Some(Utc::now() + Duration::seconds(3600)),
        };
        assert!(live.is_valid());

        let open_ended = AccessToken {
            token: "tok".into(),
            expires_at: None,
        };
        assert!(open_ended.is_valid());
    }
}
