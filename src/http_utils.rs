//! HTTP utilities for the Neutron API client.
//!
//! This module wraps `reqwest` with the request handling shared by every
//! Neutron call: base URL joining, the `X-Auth-Token` header, JSON decoding
//! and the translation of error responses into [`ApiError`].

use crate::neutron_api::ApiError;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, trace};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("eayun-neutron/", env!("CARGO_PKG_VERSION"));

/// Configuration for HTTP requests with common settings
#[derive(Debug, Clone)]
pub struct HttpRequestConfig {
    /// API root every request path is appended to, e.g. `http://controller:9696/v2.0`
    pub base_url: String,
    /// Default headers to include with all requests
    pub default_headers: HashMap<String, String>,
    /// Keystone token sent as `X-Auth-Token`
    pub auth_token: Option<String>,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl HttpRequestConfig {
    pub fn new(base_url: &str, auth_token: Option<String>, timeout: u64) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), USER_AGENT.to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_headers,
            auth_token,
            timeout,
        }
    }
}

/// HTTP client wrapper with common request handling logic
#[derive(Clone)]
pub struct HttpClient {
    client: Arc<Client>,
    config: HttpRequestConfig,
}

impl HttpClient {
    pub fn new(config: HttpRequestConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// GET `path` with the given query pairs.
    pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        let mut url = self.url(path);
        if !query.is_empty() {
            let encoded = serde_urlencoded::to_string(query)
                .map_err(|e| ApiError::UnexpectedResponse(e.to_string()))?;
            url = format!("{}?{}", url, encoded);
        }
        self.execute_request(self.client.get(url)).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.execute_request(self.client.post(self.url(path)).json(body))
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.execute_request(self.client.put(self.url(path)).json(body))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute_request(self.client.delete(self.url(path)))
            .await
            .map(|_| ())
    }

    /// Send the request and decode the JSON answer.
    ///
    /// Empty success bodies (204 No Content) decode to `Value::Null`.
    async fn execute_request(&self, mut request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        if let Some(token) = &self.config.auth_token {
            request = request.header("X-Auth-Token", token);
        }
        for (key, value) in &self.config.default_headers {
            request = request.header(key, value);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());

        let response_text = response.text().await?;
        trace!("Raw response text: {}", response_text);

        if status.is_success() {
            if response_text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_str(&response_text).map_err(|e| {
                error!(
                    "Failed to deserialize response: {}. Raw response: {}",
                    e, response_text
                );
                ApiError::JsonError(e)
            });
        }

        let message = error_message(status, &response_text);
        Err(match status {
            StatusCode::NOT_FOUND => ApiError::NotFound { message },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized {
                status: status.as_u16(),
                message,
            },
            _ => ApiError::Remote {
                status: status.as_u16(),
                message,
            },
        })
    }
}

/// Extract the human readable message of a Neutron error body.
///
/// Neutron answers `{"NeutronError": {"message": ..., "type": ...}}`; older
/// servers and proxies send `{"message": ...}` or plain text.
pub fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let message = value
            .get("NeutronError")
            .and_then(|e| e.get("message"))
            .or_else(|| value.get("message"))
            .and_then(Value::as_str);
        if let Some(message) = message {
            return message.to_string();
        }
    }

    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        body.to_string()
    }
}
