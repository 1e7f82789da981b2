//! Backend API Client
//!
//! Thin wrapper over `reqwest` that resolves endpoint paths against the
//! configured server URL and attaches the bearer token when a session
//! exists. Calls are synchronous from the caller's point of view: each
//! one spins a private tokio runtime and blocks on it, which is why all
//! callers run on short-lived worker threads.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::runtime::Runtime;

use crate::app::config::Config;
use crate::shared::error::AppError;

/// HTTP client for the backend REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    token: Option<String>,
    client: Client,
}

impl ApiClient {
    /// Unauthenticated client (login/register)
    pub fn new(config: Config) -> Self {
        Self {
            config,
            token: None,
            client: Client::new(),
        }
    }

    /// Authenticated client; the token is attached to every request
    pub fn with_token(config: Config, token: impl Into<String>) -> Self {
        Self {
            config,
            token: Some(token.into()),
            client: Client::new(),
        }
    }

    fn runtime() -> Result<Runtime, AppError> {
        Runtime::new().map_err(|e| AppError::network(format!("Failed to create runtime: {}", e)))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token {
            Some(ref token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Read the response, mapping non-success statuses to `AppError::Api`
    /// with the backend's `message` field when it sends one.
    async fn handle<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message")?.as_str().map(str::to_string))
                .unwrap_or_else(|| {
                    if body.trim().is_empty() {
                        status.to_string()
                    } else {
                        body
                    }
                });
            return Err(AppError::api(status.as_u16(), message));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::serialization(format!("Failed to parse response: {}", e)))
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.config.api_url(path);
        let rt = Self::runtime()?;
        rt.block_on(async {
            let response = self
                .authorize(self.client.get(&url))
                .send()
                .await
                .map_err(|e| AppError::network(e.to_string()))?;
            Self::handle(response).await
        })
    }

    pub fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = self.config.api_url(path);
        let rt = Self::runtime()?;
        rt.block_on(async {
            let response = self
                .authorize(self.client.post(&url))
                .json(body)
                .send()
                .await
                .map_err(|e| AppError::network(e.to_string()))?;
            Self::handle(response).await
        })
    }

    pub fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = self.config.api_url(path);
        let rt = Self::runtime()?;
        rt.block_on(async {
            let response = self
                .authorize(self.client.put(&url))
                .json(body)
                .send()
                .await
                .map_err(|e| AppError::network(e.to_string()))?;
            Self::handle(response).await
        })
    }

    /// DELETE with no meaningful response body
    pub fn delete(&self, path: &str) -> Result<(), AppError> {
        let url = self.config.api_url(path);
        let rt = Self::runtime()?;
        rt.block_on(async {
            let response = self
                .authorize(self.client.delete(&url))
                .send()
                .await
                .map_err(|e| AppError::network(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(AppError::api(
                    status.as_u16(),
                    if body.trim().is_empty() {
                        status.to_string()
                    } else {
                        body
                    },
                ));
            }
            Ok(())
        })
    }

    /// Multipart POST returning the backend's plain-text response
    pub fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<String, AppError> {
        let url = self.config.api_url(path);
        let rt = Self::runtime()?;
        rt.block_on(async {
            let response = self
                .authorize(self.client.post(&url))
                .multipart(form)
                .send()
                .await
                .map_err(|e| AppError::network(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            if !status.is_success() {
                return Err(AppError::api(
                    status.as_u16(),
                    if body.trim().is_empty() {
                        status.to_string()
                    } else {
                        body
                    },
                ));
            }
            Ok(body)
        })
    }
}
