//! Drafts: unsent messages.

use crate::payload::{self, ListParams, Query};
use crate::{Client, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A message saved for later.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(remote = "Self")]
pub struct Draft {
    pub draft_id: String,
    pub inbox_id: Option<String>,
    pub thread_id: Option<String>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub to: Vec<String>,
    pub subject: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub labels: Vec<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

payload::canonical_id!(Draft, "draft_id");

/// One page of drafts.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftList {
    pub count: Option<u64>,
    pub limit: Option<u64>,
    pub next_page_token: Option<String>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub drafts: Vec<Draft>,
}

/// Draft operations. Obtain with [`Client::drafts`].
#[derive(Debug, Clone, Copy)]
pub struct Drafts<'a> {
    client: &'a Client,
}

impl<'a> Drafts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List drafts across inboxes.
    pub async fn list(&self, params: &ListParams) -> Result<DraftList> {
        self.client.get(&["drafts"], &params.query()).await
    }

    /// Fetch one draft.
    pub async fn get(&self, draft_id: &str) -> Result<Draft> {
        payload::require("draft_id", draft_id)?;
        self.client.get(&["drafts", draft_id], &Query::new()).await
    }
}
