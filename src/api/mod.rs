//! Request helper for the users REST API.
//!
//! [`ApiClient::request`] is the single entry point for network I/O. It
//! never returns an error: transport and decode failures are folded
//! into a [`RequestResult`] with status `0` so callers can render every
//! outcome the same way.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::{HEALTH_PATH, USERS_PATH};
use crate::models::{Method, NewUser, RequestResult, UserPatch};

/// Failures that happen before a JSON response is in hand.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("response from {url} is not valid JSON: {reason}")]
    Decode { url: String, reason: String },
}

/// Path of a single user resource.
///
/// The id is inserted verbatim, not percent-encoded. Ids containing `/`,
/// `?`, `#` or dot segments therefore address a different URL once the
/// request URL is parsed; callers pass ids taken from the API itself.
pub fn user_path(id: &str) -> String {
    format!("{USERS_PATH}/{id}")
}

/// HTTP client bound to one API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Client with no request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim().to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self {
            base_url: base_url.into().trim().to_string(),
            http,
        })
    }

    /// Same client, pointed at a different API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one request and return a uniform result record.
    ///
    /// The URL is the base URL with `endpoint` appended verbatim. A body,
    /// when given, is sent as JSON. Every request carries
    /// `Content-Type: application/json`.
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&B>,
    ) -> RequestResult {
        match self.send(endpoint, method, body).await {
            Ok(result) => result,
            Err(err) => {
                warn!(%method, endpoint, error = %err, "request failed");
                RequestResult::transport_failure(err.to_string())
            }
        }
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<RequestResult, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%method, url = %url, "sending request");

        let mut request = self
            .http
            .request(method.into(), &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;
        let data: Value = serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        debug!(status, url = %url, "received response");
        Ok(RequestResult::from_response(status, data))
    }

    /// `GET /api/users`
    pub async fn list_users(&self) -> RequestResult {
        self.request::<Value>(USERS_PATH, Method::Get, None).await
    }

    /// `GET /api/users/{id}`
    pub async fn get_user(&self, id: &str) -> RequestResult {
        self.request::<Value>(&user_path(id), Method::Get, None).await
    }

    /// `POST /api/users`
    pub async fn create_user(&self, user: &NewUser) -> RequestResult {
        self.request(USERS_PATH, Method::Post, Some(user)).await
    }

    /// `PUT /api/users/{id}`
    pub async fn update_user(&self, id: &str, patch: &UserPatch) -> RequestResult {
        self.request(&user_path(id), Method::Put, Some(patch)).await
    }

    /// `DELETE /api/users/{id}`
    pub async fn delete_user(&self, id: &str) -> RequestResult {
        self.request::<Value>(&user_path(id), Method::Delete, None).await
    }

    /// `GET /health`
    pub async fn health(&self) -> RequestResult {
        self.request::<Value>(HEALTH_PATH, Method::Get, None).await
    }
}
