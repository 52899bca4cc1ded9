//! Inboxes: the mailboxes messages are sent from and delivered to.

use crate::payload::{self, Extra, ListParams, Query};
use crate::{Client, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A remote mailbox.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(remote = "Self")]
pub struct Inbox {
    /// Inbox identifier, usually the inbox's email address.
    pub inbox_id: String,
    /// Email address, when reported separately from the id.
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub pod_id: Option<String>,
    pub client_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    /// Fields not covered above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

payload::canonical_id!(Inbox, "inbox_id");

impl Inbox {
    /// The address to send to: `email` when present, else the inbox id.
    pub fn address(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.inbox_id)
    }
}

/// One page of inboxes.
#[derive(Debug, Clone, Deserialize)]
pub struct InboxList {
    pub count: Option<u64>,
    pub limit: Option<u64>,
    pub next_page_token: Option<String>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub inboxes: Vec<Inbox>,
}

/// Parameters for [`Inboxes::create`]. Every field is optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInbox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Caller-chosen idempotency key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip)]
    pub extra: Extra,
}

impl CreateInbox {
    /// An inbox with a generated address on the default domain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Local part of the address.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Domain of the address; must be one of the organization's domains.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Name shown in the `From` header.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
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

/// Parameters for [`Inboxes::update`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateInbox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip)]
    pub extra: Extra,
}

impl UpdateInbox {
    /// An update that changes nothing until a field is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// New display name.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Send an additional body field. Never replaces a typed field.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Inbox operations. Obtain with [`Client::inboxes`].
#[derive(Debug, Clone, Copy)]
pub struct Inboxes<'a> {
    client: &'a Client,
}

impl<'a> Inboxes<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List inboxes.
    pub async fn list(&self, params: &ListParams) -> Result<InboxList> {
        self.client.get(&["inboxes"], &params.query()).await
    }

    /// Fetch one inbox.
    pub async fn get(&self, inbox_id: &str) -> Result<Inbox> {
        payload::require("inbox_id", inbox_id)?;
        self.client.get(&["inboxes", inbox_id], &Query::new()).await
    }

    /// Create an inbox.
    ///
    /// # Examples
    /// ```no_run
    /// # use agentmail_client::{Client, CreateInbox};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), agentmail_client::Error> {
    /// let client = Client::from_env()?;
    /// let inbox = client
    ///     .inboxes()
    ///     .create(&CreateInbox::new().display_name("Support"))
    ///     .await?;
    /// println!("{}", inbox.address());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, request: &CreateInbox) -> Result<Inbox> {
        let body = payload::body(request, &request.extra)?;
        self.client.post(&["inboxes"], &body).await
    }

    /// Update an inbox and return its new state.
    pub async fn update(&self, inbox_id: &str, request: &UpdateInbox) -> Result<Inbox> {
        payload::require("inbox_id", inbox_id)?;
        let body = payload::body(request, &request.extra)?;
        self.client.patch(&["inboxes", inbox_id], &body).await
    }

    /// Delete an inbox.
    /// Returns the service's response body unchanged (`null` when empty).
    pub async fn delete(&self, inbox_id: &str) -> Result<Value> {
        payload::require("inbox_id", inbox_id)?;
        self.client.delete(&["inboxes", inbox_id]).await
    }
}
