//! Webhooks: URLs the service calls when message events happen.
//!
//! Only [`EventType::MessageReceived`] is guaranteed to be accepted by the
//! service today; the other kinds are valid values but may be rejected
//! server-side.

use crate::payload::{self, ListParams, Query};
use crate::{Client, Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Message event a webhook can subscribe to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    /// `message.received`
    MessageReceived,
    /// `message.sent`
    MessageSent,
    /// `message.delivered`
    MessageDelivered,
    /// `message.bounced`
    MessageBounced,
    /// `message.complained`
    MessageComplained,
    /// `message.rejected`
    MessageRejected,
    /// A kind this client does not know yet, kept verbatim.
    Other(String),
}

impl EventType {
    /// Every kind the client knows about.
    pub const KNOWN: [EventType; 6] = [
        EventType::MessageReceived,
        EventType::MessageSent,
        EventType::MessageDelivered,
        EventType::MessageBounced,
        EventType::MessageComplained,
        EventType::MessageRejected,
    ];

    /// Wire name, e.g. `message.received`.
    pub fn as_str(&self) -> &str {
        match self {
            EventType::MessageReceived => "message.received",
            EventType::MessageSent => "message.sent",
            EventType::MessageDelivered => "message.delivered",
            EventType::MessageBounced => "message.bounced",
            EventType::MessageComplained => "message.complained",
            EventType::MessageRejected => "message.rejected",
            EventType::Other(name) => name,
        }
    }

    fn parse(name: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|kind| kind.as_str() == name)
            .cloned()
            .unwrap_or_else(|| EventType::Other(name.to_string()))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = Error;

    /// Parse one of the known wire names; unknown names are rejected.
    fn from_str(s: &str) -> Result<Self> {
        match Self::parse(s) {
            EventType::Other(_) => Err(Error::validation("event_types", "unknown event type")),
            kind => Ok(kind),
        }
    }
}

impl Serialize for EventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

/// A registered webhook.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(remote = "Self")]
pub struct Webhook {
    pub webhook_id: String,
    pub url: String,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub event_types: Vec<EventType>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub inbox_ids: Vec<String>,
    /// Signing secret for verifying deliveries.
    pub secret: Option<String>,
    pub enabled: Option<bool>,
    pub client_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

payload::canonical_id!(Webhook, "webhook_id");

/// One page of webhooks.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookList {
    pub count: Option<u64>,
    pub limit: Option<u64>,
    pub next_page_token: Option<String>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub webhooks: Vec<Webhook>,
}

/// Parameters for [`Webhooks::create`].
///
/// Subscribes to `message.received` unless [`CreateWebhook::event_types`]
/// is called. An explicitly empty set is rejected before dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct CreateWebhook {
    /// Endpoint the service will POST events to.
    pub url: String,
    /// Event kinds to deliver; never sent empty.
    pub event_types: Vec<EventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbox_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl CreateWebhook {
    /// A webhook for `url` subscribed to `message.received`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            event_types: vec![EventType::MessageReceived],
            inbox_ids: None,
            client_id: None,
        }
    }

    /// Replace the subscribed event kinds.
    pub fn event_types(mut self, event_types: impl IntoIterator<Item = EventType>) -> Self {
        self.event_types = event_types.into_iter().collect();
        self
    }

    /// Only deliver events for these inboxes.
    pub fn inbox_ids<I, S>(mut self, inbox_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inbox_ids = Some(inbox_ids.into_iter().map(Into::into).collect());
        self
    }

    /// Caller-chosen idempotency key.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }
}

/// Webhook operations. Obtain with [`Client::webhooks`].
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    client: &'a Client,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List webhooks, optionally paginated.
    pub async fn list(&self, params: &ListParams) -> Result<WebhookList> {
        self.client.get(&["webhooks"], &params.query()).await
    }

    /// Fetch one webhook.
    pub async fn get(&self, webhook_id: &str) -> Result<Webhook> {
        payload::require("webhook_id", webhook_id)?;
        self.client.get(&["webhooks", webhook_id], &Query::new()).await
    }

    /// Register a webhook.
    ///
    /// # Errors
    /// [`Error::Validation`] when `url` is blank or `event_types` is empty.
    pub async fn create(&self, request: &CreateWebhook) -> Result<Webhook> {
        payload::require("url", &request.url)?;
        payload::require_non_empty("event_types", request.event_types.as_slice())?;
        let body = serde_json::to_value(request)?;
        self.client.post(&["webhooks"], &body).await
    }

    /// Unregister a webhook.
    /// Returns the service's response body unchanged (`null` when empty).
    pub async fn delete(&self, webhook_id: &str) -> Result<Value> {
        payload::require("webhook_id", webhook_id)?;
        self.client.delete(&["webhooks", webhook_id]).await
    }
}
