//! Threads: ordered conversations of messages.

use crate::payload::{self, ListParams, Query};
use crate::resources::messages::Message;
use crate::{Client, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A conversation under one inbox.
///
/// Listing returns threads without their messages; [`Threads::get`] fills
/// `messages` in chronological order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(remote = "Self")]
pub struct Thread {
    pub thread_id: String,
    pub inbox_id: Option<String>,
    pub subject: Option<String>,
    pub preview: Option<String>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub labels: Vec<String>,
    pub message_count: Option<u64>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub messages: Vec<Message>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

payload::canonical_id!(Thread, "thread_id");

impl Thread {
    /// Most recent message, when the thread was fetched with its messages.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// One page of threads.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadList {
    pub count: Option<u64>,
    pub limit: Option<u64>,
    pub next_page_token: Option<String>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub threads: Vec<Thread>,
}

/// Filters for listing threads.
#[derive(Debug, Clone, Default)]
pub struct ThreadQuery {
    /// Page size, cursor and extra parameters.
    pub page: ListParams,
    /// Only threads carrying every one of these labels.
    pub labels: Vec<String>,
}

impl ThreadQuery {
    /// Every thread, first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.page = self.page.limit(limit);
        self
    }

    /// Continue from a previous page.
    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.page = self.page.page_token(token);
        self
    }

    /// Require a label; may be called more than once.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Add a query parameter the typed fields do not cover.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.page = self.page.param(key, value);
        self
    }

    fn query(&self) -> Query {
        self.page
            .base_query()
            .each("labels", &self.labels)
            .extra(&self.page.extra)
    }
}

/// Thread operations. Obtain with [`Client::threads`].
#[derive(Debug, Clone, Copy)]
pub struct Threads<'a> {
    client: &'a Client,
}

impl<'a> Threads<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List threads across every inbox.
    pub async fn list(&self, query: &ThreadQuery) -> Result<ThreadList> {
        self.client.get(&["threads"], &query.query()).await
    }

    /// List threads of one inbox.
    pub async fn list_for_inbox(&self, inbox_id: &str, query: &ThreadQuery) -> Result<ThreadList> {
        payload::require("inbox_id", inbox_id)?;
        self.client
            .get(&["inboxes", inbox_id, "threads"], &query.query())
            .await
    }

    /// Fetch a thread together with its messages.
    pub async fn get(&self, thread_id: &str) -> Result<Thread> {
        payload::require("thread_id", thread_id)?;
        self.client.get(&["threads", thread_id], &Query::new()).await
    }

    /// Download an attachment's raw bytes.
    pub async fn get_attachment(&self, thread_id: &str, attachment_id: &str) -> Result<Vec<u8>> {
        payload::require("thread_id", thread_id)?;
        payload::require("attachment_id", attachment_id)?;
        self.client
            .get_bytes(&["threads", thread_id, "attachments", attachment_id])
            .await
    }

    /// Delete a thread. The owning inbox is part of the address.
    /// Returns the service's response body unchanged (`null` when empty).
    pub async fn delete(&self, inbox_id: &str, thread_id: &str) -> Result<Value> {
        payload::require("inbox_id", inbox_id)?;
        payload::require("thread_id", thread_id)?;
        self.client
            .delete(&["inboxes", inbox_id, "threads", thread_id])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labels_precede_extra_params() {
        let query = ThreadQuery::new()
            .limit(10)
            .label("unread")
            .label("important")
            .param("labels", "ignored")
            .param("before", "2026-01-01T00:00:00Z");
        let built = query.query();
        let pairs: Vec<(&str, &str)> = built
            .pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("limit", "10"),
                ("labels", "unread"),
                ("labels", "important"),
                ("before", "2026-01-01T00:00:00Z"),
            ]
        );
    }

    #[test]
    fn thread_tolerates_null_lists_and_both_id_keys() {
        let thread: Thread = serde_json::from_value(json!({
            "id": "thr_1",
            "thread_id": "thr_1",
            "labels": null,
            "messages": null
        }))
        .unwrap();
        assert_eq!(thread.thread_id, "thr_1");
        assert!(thread.labels.is_empty());
        assert!(thread.last_message().is_none());

        let page: ThreadList = serde_json::from_value(json!({ "threads": null })).unwrap();
        assert!(page.threads.is_empty());
    }
}
