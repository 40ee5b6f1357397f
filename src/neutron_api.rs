//! Neutron REST client.
//!
//! [`NeutronClient`] is the narrow interface the command engine talks to.
//! [`NeutronApiClient`] implements it over HTTP; tests substitute their own
//! implementation.

use crate::configuration::Configuration;
use crate::http_utils::{HttpClient, HttpRequestConfig};
use crate::resources::{es_acl::ES_ACL_COLLECTION, lbaas::L7POLICY_COLLECTION, Collection};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

pub const API_VERSION_PREFIX: &str = "/v2.0";

/// Error emitted by the Neutron API client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("{message}")]
    NotFound { message: String },
    #[error("authentication failed (HTTP {status}): {message}")]
    Unauthorized { status: u16, message: String },
    #[error("{message} (HTTP {status})")]
    Remote { status: u16, message: String },
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

/// Server-side selection, filtering and ordering of a list request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    /// Attributes to return (`fields=`); empty means all.
    pub fields: Vec<String>,
    /// Attribute equality filters.
    pub filters: Vec<(String, String)>,
    pub sort_keys: Vec<String>,
    pub sort_dirs: Vec<String>,
    /// Page size (`limit=`); `None` lets the server decide.
    pub page_size: Option<u32>,
}

impl ListQuery {
    pub fn by_name(name: &str) -> Self {
        ListQuery {
            fields: vec!["id".to_string()],
            filters: vec![("name".to_string(), name.to_string())],
            ..Default::default()
        }
    }

    /// Query pairs in the order Neutron documents them.
    pub fn to_pairs(&self, marker: Option<&str>) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self.filters.clone();
        pairs.extend(self.fields.iter().map(|f| ("fields".to_string(), f.clone())));
        pairs.extend(self.sort_keys.iter().map(|k| ("sort_key".to_string(), k.clone())));
        pairs.extend(self.sort_dirs.iter().map(|d| ("sort_dir".to_string(), d.clone())));
        if let Some(limit) = self.page_size {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(marker) = marker {
            pairs.push(("marker".to_string(), marker.to_string()));
        }
        pairs
    }
}

/// One page of a list response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<Value>,
    /// Marker of the next page, `None` on the last page.
    pub next_marker: Option<String>,
}

#[async_trait]
pub trait NeutronClient: Send + Sync {
    async fn list(
        &self,
        collection: &Collection,
        query: &ListQuery,
        marker: Option<&str>,
    ) -> Result<Page, ApiError>;

    async fn show(&self, collection: &Collection, id: &str, fields: &[String]) -> Result<Value, ApiError>;

    async fn create(&self, collection: &Collection, body: &Value) -> Result<Value, ApiError>;

    async fn update(&self, collection: &Collection, id: &str, body: &Value) -> Result<Value, ApiError>;

    async fn delete(&self, collection: &Collection, id: &str) -> Result<(), ApiError>;

    async fn bind_subnets(&self, acl_id: &str, body: &Value) -> Result<Value, ApiError>;

    async fn unbind_subnets(&self, acl_id: &str, body: &Value) -> Result<Value, ApiError>;

    async fn associate_rule(&self, policy_id: &str, body: &Value) -> Result<Value, ApiError>;

    async fn disassociate_rule(&self, policy_id: &str, rule_id: &str) -> Result<(), ApiError>;
}

pub struct NeutronApiClient {
    http: HttpClient,
}

impl NeutronApiClient {
    /// Create a client for the API at `endpoint_url` (without the version prefix).
    pub fn new(endpoint_url: &Url, token: Option<String>, timeout: u64) -> Result<Self, ApiError> {
        let base = format!(
            "{}{}",
            endpoint_url.as_str().trim_end_matches('/'),
            API_VERSION_PREFIX
        );
        debug!("Using Neutron API at {}", base);
        let http = HttpClient::new(HttpRequestConfig::new(&base, token, timeout))?;
        Ok(Self { http })
    }

    pub fn from_configuration(configuration: &Configuration) -> Result<Self, crate::error::CliError> {
        let endpoint = configuration.endpoint_url()?;
        Ok(Self::new(
            &endpoint,
            configuration.token().map(str::to_string),
            configuration.timeout_secs(),
        )?)
    }
}

/// Marker of the `next` link in a list envelope, if any.
pub fn next_marker(envelope: &Value, plural: &str) -> Option<String> {
    let links = envelope.get(format!("{}_links", plural))?.as_array()?;
    let href = links
        .iter()
        .find(|link| link.get("rel").and_then(Value::as_str) == Some("next"))?
        .get("href")?
        .as_str()?;
    let url = Url::parse(href).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "marker")
        .map(|(_, value)| value.into_owned())
}

fn unwrap_item(envelope: Value, collection: &Collection) -> Result<Value, ApiError> {
    match envelope {
        Value::Object(mut map) if map.contains_key(collection.resource) => {
            let mut wrapped = serde_json::Map::new();
            if let Some(item) = map.remove(collection.resource) {
                wrapped.insert(collection.resource.to_string(), item);
            }
            Ok(Value::Object(wrapped))
        }
        other => Err(ApiError::UnexpectedResponse(format!(
            "expected a '{}' object, got {}",
            collection.resource, other
        ))),
    }
}

#[async_trait]
impl NeutronClient for NeutronApiClient {
    async fn list(
        &self,
        collection: &Collection,
        query: &ListQuery,
        marker: Option<&str>,
    ) -> Result<Page, ApiError> {
        trace!("Listing {} (marker {:?})", collection.endpoint_name(), marker);
        let envelope = self.http.get(collection.path, &query.to_pairs(marker)).await?;

        let items = envelope
            .get(collection.plural)
            .and_then(Value::as_array)
            .cloned()
            .ok_or_else(|| {
                ApiError::UnexpectedResponse(format!("missing '{}' list", collection.plural))
            })?;

        Ok(Page {
            next_marker: next_marker(&envelope, collection.plural),
            items,
        })
    }

    async fn show(&self, collection: &Collection, id: &str, fields: &[String]) -> Result<Value, ApiError> {
        let query: Vec<(String, String)> = fields
            .iter()
            .map(|f| ("fields".to_string(), f.clone()))
            .collect();
        let envelope = self.http.get(&collection.item_path(id), &query).await?;
        unwrap_item(envelope, collection)
    }

    async fn create(&self, collection: &Collection, body: &Value) -> Result<Value, ApiError> {
        let envelope = self.http.post(collection.path, body).await?;
        unwrap_item(envelope, collection)
    }

    async fn update(&self, collection: &Collection, id: &str, body: &Value) -> Result<Value, ApiError> {
        self.http.put(&collection.item_path(id), body).await
    }

    async fn delete(&self, collection: &Collection, id: &str) -> Result<(), ApiError> {
        self.http.delete(&collection.item_path(id)).await
    }

    async fn bind_subnets(&self, acl_id: &str, body: &Value) -> Result<Value, ApiError> {
        let path = format!("{}/bind_subnets", ES_ACL_COLLECTION.item_path(acl_id));
        self.http.put(&path, body).await
    }

    async fn unbind_subnets(&self, acl_id: &str, body: &Value) -> Result<Value, ApiError> {
        let path = format!("{}/unbind_subnets", ES_ACL_COLLECTION.item_path(acl_id));
        self.http.put(&path, body).await
    }

    async fn associate_rule(&self, policy_id: &str, body: &Value) -> Result<Value, ApiError> {
        let path = format!("{}/l7rules", L7POLICY_COLLECTION.item_path(policy_id));
        self.http.post(&path, body).await
    }

    async fn disassociate_rule(&self, policy_id: &str, rule_id: &str) -> Result<(), ApiError> {
        let path = format!(
            "{}/l7rules/{}",
            L7POLICY_COLLECTION.item_path(policy_id),
            rule_id
        );
        self.http.delete(&path).await
    }
}
