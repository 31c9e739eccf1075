//! Async client for the orchestration platform HTTP API.
//!
//! The client is constructed once through [`initialize`], which performs
//! the client-credentials token exchange; afterwards it is a read-only
//! handle that is cheap to clone into background fetch tasks. List
//! endpoints tolerate both response shapes the platform emits: a bare JSON
//! array or a `{"value": [...]}` envelope.

pub mod auth;
pub mod error;

pub use auth::AccessToken;
pub use error::{ClientError, Result};

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use gantry_types::{AssignTask, Asset, CompleteTask, Process, StartProcess, Task};

/// Connection settings, usually built from the application config file.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub tenant: Option<String>,
    pub client_id: String,
    pub client_secret: String,
}

/// List endpoints return either a bare array or an envelope object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Envelope { value: Vec<T> },
}

impl<T> ListResponse<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Bare(items) => items,
            ListResponse::Envelope { value } => value,
        }
    }
}

/// Authenticated handle to the orchestration platform.
#[derive(Debug, Clone)]
pub struct OrchestratorClient {
    http: reqwest::Client,
    base_url: String,
    tenant: Option<String>,
    token: AccessToken,
}

/// Acquire a token and return a ready client. Fails with an
/// initialization error when the identity endpoint rejects the exchange.
pub async fn initialize(config: ClientConfig) -> Result<OrchestratorClient> {
    let http = reqwest::Client::new();
    let token = auth::request_token(&http, &config).await?;
    debug!(base_url = %config.base_url, "orchestrator client initialized");

    Ok(OrchestratorClient {
        http,
        base_url: config.base_url.trim_end_matches('/').to_string(),
        tenant: config.tenant,
        token,
    })
}

impl OrchestratorClient {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_valid()
    }

    pub async fn list_processes(&self) -> Result<Vec<Process>> {
        self.get_list("/api/processes").await
    }

    pub async fn list_assets(&self) -> Result<Vec<Asset>> {
        self.get_list("/api/assets").await
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.get_list("/api/tasks").await
    }

    pub async fn start_process(&self, request: &StartProcess) -> Result<()> {
        let path = format!("/api/processes/{}/start", request.process_key);
        self.post(&path, request).await
    }

    pub async fn assign_task(&self, request: &AssignTask) -> Result<()> {
        let path = format!("/api/tasks/{}/assign", request.task_id);
        self.post(&path, request).await
    }

    pub async fn complete_task(&self, request: &CompleteTask) -> Result<()> {
        let path = format!("/api/tasks/{}/complete", request.task_id);
        self.post(&path, request).await
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let request = self.http.get(self.url(path)).bearer_auth(&self.token.token);
        let request = match &self.tenant {
            Some(tenant) => request.header("X-Tenant", tenant),
            None => request,
        };

        let response = check_status(request.send().await?).await?;
        let body = response.text().await?;

        match serde_json::from_str::<ListResponse<T>>(&body) {
            Ok(list) => Ok(list.into_vec()),
            Err(e) => {
                error!(context = path, error = %e, raw_body = body, "failed to decode list response");
                Err(ClientError::Decode {
                    context: path.to_string(),
                    source: e,
                })
            }
        }
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let request = self
            .http
            .post(self.url(path))
            .bearer_auth(&self.token.token)
            .json(body);
        let request = match &self.tenant {
            Some(tenant) => request.header("X-Tenant", tenant),
            None => request,
        };

        check_status(request.send().await?).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized);
    }
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn ready_client(server: &MockServer) -> OrchestratorClient {
        Mock::given(method("POST"))
            .and(path("/identity/connect/token"))
            .and(body_string_contains("grant_type=client_credentials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "test-token",
                "expires_in": 3600
            })))
            .mount(server)
            .await;

        initialize(ClientConfig {
            base_url: server.uri(),
            tenant: None,
            client_id: "gantry".into(),
            client_secret: "secret".into(),
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn initialize_yields_authenticated_client() {
        let server = MockServer::start().await;
        let client = ready_client(&server).await;
        assert!(client.is_authenticated());
    }

    #[tokio::test]
    async fn initialize_surfaces_identity_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/identity/connect/token"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid_client"))
            .mount(&server)
            .await;

        let result = initialize(ClientConfig {
            base_url: server.uri(),
            tenant: None,
            client_id: "gantry".into(),
            client_secret: "wrong".into(),
        })
        .await;

        assert!(matches!(result, Err(ClientError::Initialization(_))));
    }

    #[tokio::test]
    async fn list_accepts_bare_array() {
        let server = MockServer::start().await;
        let client = ready_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "t1", "title": "Review"},
                {"id": "t2", "title": "Approve"}
            ])))
            .mount(&server)
            .await;

        let tasks = client.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, "t1");
    }

    #[tokio::test]
    async fn list_accepts_value_envelope() {
        let server = MockServer::start().await;
        let client = ready_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/processes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [{"id": "p1", "key": "loader", "name": "Loader"}]
            })))
            .mount(&server)
            .await;

        let processes = client.list_processes().await.unwrap();
        assert_eq!(processes.len(), 1);
        assert_eq!(processes[0].key, "loader");
    }

    #[tokio::test]
    async fn unauthorized_maps_to_its_own_variant() {
        let server = MockServer::start().await;
        let client = ready_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/assets"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        assert!(matches!(client.list_assets().await, Err(ClientError::Unauthorized)));
    }

    #[tokio::test]
    async fn server_errors_carry_status_and_body() {
        let server = MockServer::start().await;
        let client = ready_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
            .mount(&server)
            .await;

        match client.list_tasks().await {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn assign_posts_wire_payload() {
        let server = MockServer::start().await;
        let client = ready_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/tasks/t1/assign"))
            .and(body_json(json!({"taskId": "t1", "userNameOrEmail": "bob@x.com"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client
            .assign_task(&AssignTask {
                task_id: "t1".into(),
                user_name_or_email: "bob@x.com".into(),
                reason: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn tenant_header_is_attached_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/identity/connect/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "test-token"
            })))
            .mount(&server)
            .await;

        let client = initialize(ClientConfig {
            base_url: server.uri(),
            tenant: Some("acme".into()),
            client_id: "gantry".into(),
            client_secret: "secret".into(),
        })
        .await
        .unwrap();

        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .and(header("X-Tenant", "acme"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client.list_tasks().await.unwrap().is_empty());
    }
}
