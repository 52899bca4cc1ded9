//! Pods: isolated groups of inboxes and domains.

use crate::payload::{self, Extra, ListParams, Query};
use crate::{Client, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An isolated group of inboxes and domains.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(remote = "Self")]
pub struct Pod {
    pub pod_id: String,
    pub name: Option<String>,
    pub client_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

payload::canonical_id!(Pod, "pod_id");

/// One page of pods.
#[derive(Debug, Clone, Deserialize)]
pub struct PodList {
    pub count: Option<u64>,
    pub limit: Option<u64>,
    pub next_page_token: Option<String>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub pods: Vec<Pod>,
}

/// Parameters for [`Pods::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip)]
    pub extra: Extra,
}

impl CreatePod {
    /// A pod with a server-chosen name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Human-readable pod name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Caller-chosen idempotency key.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Send an additional body field. Never replaces a typed field.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Pod operations. Obtain with [`Client::pods`].
#[derive(Debug, Clone, Copy)]
pub struct Pods<'a> {
    client: &'a Client,
}

impl<'a> Pods<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List pods.
    pub async fn list(&self, params: &ListParams) -> Result<PodList> {
        self.client.get(&["pods"], &params.query()).await
    }

    /// Fetch one pod.
    pub async fn get(&self, pod_id: &str) -> Result<Pod> {
        payload::require("pod_id", pod_id)?;
        self.client.get(&["pods", pod_id], &Query::new()).await
    }

    /// Create a pod.
    pub async fn create(&self, request: &CreatePod) -> Result<Pod> {
        let body = payload::body(request, &request.extra)?;
        self.client.post(&["pods"], &body).await
    }

    /// Delete a pod.
    /// Returns the service's response body unchanged (`null` when empty).
    pub async fn delete(&self, pod_id: &str) -> Result<Value> {
        payload::require("pod_id", pod_id)?;
        self.client.delete(&["pods", pod_id]).await
    }
}
