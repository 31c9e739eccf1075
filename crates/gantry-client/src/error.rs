use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("Not authenticated with the orchestrator")]
    Unauthorized,

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode {context} response: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ClientError>;
