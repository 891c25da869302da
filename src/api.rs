// src/api.rs
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure of a single API call. Transport covers timeouts and network-layer
/// errors; Status is any non-200 reply, with the server's error body attached.
/// The caller decides the exit code, nothing terminates the process here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("❌ Errore nella richiesta: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("❌ Errore HTTP {}: {}", .status.as_u16(), .body)]
    Status { status: StatusCode, body: String },
}

/// Thin client over the Caudena REST API. One instance per run, holding the
/// bearer token minted at startup.
pub struct ApiClient {
    base_url: String,
    token: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        })
    }

    pub async fn get(&self, endpoint: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("📡 GET {url}");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::into_json(response).await
    }

    pub async fn post(&self, endpoint: &str, body: &Value) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("📡 POST {url}");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;

        Self::into_json(response).await
    }

    async fn into_json(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        if status != StatusCode::OK {
            let text = response.text().await?;
            // Prefer the structured error body when the server sent one.
            let body = serde_json::from_str::<Value>(&text)
                .map(|v| v.to_string())
                .unwrap_or(text);
            return Err(ApiError::Status { status, body });
        }
        Ok(response.json().await?)
    }
}
