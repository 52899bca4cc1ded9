//! API keys of the organization.

use crate::payload::{self, Extra, ListParams};
use crate::{Client, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An API key as listed; the secret itself is never returned again.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(remote = "Self")]
pub struct ApiKey {
    pub api_key_id: String,
    pub name: Option<String>,
    /// Leading characters of the key, for recognizing it.
    pub prefix: Option<String>,
    pub created_at: Option<String>,
    pub used_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

payload::canonical_id!(ApiKey, "api_key_id");

/// A freshly created key, including the secret.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(remote = "Self")]
pub struct CreatedApiKey {
    pub api_key_id: String,
    /// The secret. Store it now; it cannot be fetched later.
    pub api_key: String,
    pub name: Option<String>,
    pub prefix: Option<String>,
    pub created_at: Option<String>,
}

payload::canonical_id!(CreatedApiKey, "api_key_id");

impl std::fmt::Debug for CreatedApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreatedApiKey")
            .field("api_key_id", &self.api_key_id)
            .field("api_key", &"<redacted>")
            .field("name", &self.name)
            .field("prefix", &self.prefix)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// One page of API keys.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeyList {
    pub count: Option<u64>,
    pub limit: Option<u64>,
    pub next_page_token: Option<String>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub api_keys: Vec<ApiKey>,
}

/// Parameters for [`ApiKeys::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateApiKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip)]
    pub extra: Extra,
}

impl CreateApiKey {
    /// An unnamed key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Label shown when listing keys.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Send an additional body field. Never replaces a typed field.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// API key operations. Obtain with [`Client::api_keys`].
#[derive(Debug, Clone, Copy)]
pub struct ApiKeys<'a> {
    client: &'a Client,
}

impl<'a> ApiKeys<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List the organization's keys, without their secrets.
    pub async fn list(&self, params: &ListParams) -> Result<ApiKeyList> {
        self.client.get(&["api-keys"], &params.query()).await
    }

    /// Create a key. The returned secret is shown only once.
    pub async fn create(&self, request: &CreateApiKey) -> Result<CreatedApiKey> {
        let body = payload::body(request, &request.extra)?;
        self.client.post(&["api-keys"], &body).await
    }

    /// Revoke a key.
    /// Returns the service's response body unchanged (`null` when empty).
    pub async fn delete(&self, api_key_id: &str) -> Result<Value> {
        payload::require("api_key_id", api_key_id)?;
        self.client.delete(&["api-keys", api_key_id]).await
    }
}
