//! In-memory [`NeutronClient`] for unit tests.

use crate::neutron_api::{ApiError, ListQuery, NeutronClient, Page};
use crate::resources::{es_acl::ES_ACL_COLLECTION, lbaas::L7POLICY_COLLECTION, Collection};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Records every request and answers from canned data.
///
/// List requests pop queued pages (an empty page once they run out). Ids
/// registered with [`FakeClient::missing`] answer not found.
#[derive(Default)]
pub struct FakeClient {
    calls: Mutex<Vec<Call>>,
    pages: Mutex<VecDeque<Page>>,
    missing: HashSet<String>,
    reply: Option<Value>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, items: Vec<Value>, next_marker: Option<&str>) -> Self {
        self.pages
            .lock()
            .unwrap()
            .push_back(Page {
                items,
                next_marker: next_marker.map(str::to_string),
            });
        self
    }

    pub fn missing(mut self, id: &str) -> Self {
        self.missing.insert(id.to_string());
        self
    }

    /// Answer show/create/update with `reply` instead of echoing.
    pub fn replying(mut self, reply: Value) -> Self {
        self.reply = Some(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Call {
        self.calls().pop().expect("no request was made")
    }

    fn record(&self, method: &'static str, path: String, query: Vec<(String, String)>, body: Option<&Value>) {
        self.calls.lock().unwrap().push(Call {
            method,
            path,
            query,
            body: body.cloned(),
        });
    }

    fn check(&self, id: &str) -> Result<(), ApiError> {
        if self.missing.contains(id) {
            Err(ApiError::NotFound {
                message: format!("{} could not be found", id),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl NeutronClient for FakeClient {
    async fn list(
        &self,
        collection: &Collection,
        query: &ListQuery,
        marker: Option<&str>,
    ) -> Result<Page, ApiError> {
        self.record("GET", collection.path.to_string(), query.to_pairs(marker), None);
        Ok(self.pages.lock().unwrap().pop_front().unwrap_or_default())
    }

    async fn show(&self, collection: &Collection, id: &str, fields: &[String]) -> Result<Value, ApiError> {
        let query = fields.iter().map(|f| ("fields".to_string(), f.clone())).collect();
        self.record("GET", collection.item_path(id), query, None);
        self.check(id)?;
        Ok(self
            .reply
            .clone()
            .unwrap_or_else(|| json!({ collection.resource: { "id": id } })))
    }

    async fn create(&self, collection: &Collection, body: &Value) -> Result<Value, ApiError> {
        self.record("POST", collection.path.to_string(), vec![], Some(body));
        if let Some(reply) = &self.reply {
            return Ok(reply.clone());
        }
        let mut created = body.clone();
        if let Some(attributes) = created
            .get_mut(collection.resource)
            .and_then(Value::as_object_mut)
        {
            attributes.insert("id".to_string(), json!("new-id"));
        }
        Ok(created)
    }

    async fn update(&self, collection: &Collection, id: &str, body: &Value) -> Result<Value, ApiError> {
        self.record("PUT", collection.item_path(id), vec![], Some(body));
        self.check(id)?;
        Ok(self.reply.clone().unwrap_or_else(|| body.clone()))
    }

    async fn delete(&self, collection: &Collection, id: &str) -> Result<(), ApiError> {
        self.record("DELETE", collection.item_path(id), vec![], None);
        self.check(id)
    }

    async fn bind_subnets(&self, acl_id: &str, body: &Value) -> Result<Value, ApiError> {
        let path = format!("{}/bind_subnets", ES_ACL_COLLECTION.item_path(acl_id));
        self.record("PUT", path, vec![], Some(body));
        self.check(acl_id)?;
        Ok(Value::Null)
    }

    async fn unbind_subnets(&self, acl_id: &str, body: &Value) -> Result<Value, ApiError> {
        let path = format!("{}/unbind_subnets", ES_ACL_COLLECTION.item_path(acl_id));
        self.record("PUT", path, vec![], Some(body));
        self.check(acl_id)?;
        Ok(Value::Null)
    }

    async fn associate_rule(&self, policy_id: &str, body: &Value) -> Result<Value, ApiError> {
        let path = format!("{}/l7rules", L7POLICY_COLLECTION.item_path(policy_id));
        self.record("POST", path, vec![], Some(body));
        self.check(policy_id)?;
        Ok(Value::Null)
    }

    async fn disassociate_rule(&self, policy_id: &str, rule_id: &str) -> Result<(), ApiError> {
        let path = format!("{}/l7rules/{}", L7POLICY_COLLECTION.item_path(policy_id), rule_id);
        self.record("DELETE", path, vec![], None);
        self.check(policy_id)?;
        self.check(rule_id)
    }
}
