//! Messages: sending, replying to and reading mail in an inbox.

use crate::payload::{self, Extra, ListParams, Query, Recipients};
use crate::{Client, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Metadata of a file attached to a message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(remote = "Self")]
pub struct Attachment {
    pub attachment_id: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub size: Option<u64>,
}

payload::canonical_id!(Attachment, "attachment_id");

/// One email within a thread.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(remote = "Self")]
pub struct Message {
    pub message_id: String,
    pub inbox_id: Option<String>,
    pub thread_id: Option<String>,
    pub from: Option<String>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub to: Vec<String>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub cc: Vec<String>,
    pub subject: Option<String>,
    pub preview: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub attachments: Vec<Attachment>,
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

payload::canonical_id!(Message, "message_id");

/// One page of messages in an inbox.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageList {
    pub count: Option<u64>,
    pub limit: Option<u64>,
    pub next_page_token: Option<String>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub messages: Vec<Message>,
}

/// Identifiers of a message that was just sent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(remote = "Self")]
pub struct SentMessage {
    pub message_id: String,
    pub thread_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

payload::canonical_id!(SentMessage, "message_id");

/// Parameters for [`Messages::send`].
///
/// `to` and `subject` are required; every other field is sent only when set.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage {
    pub to: Recipients,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Recipients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Recipients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Recipients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(skip)]
    pub extra: Extra,
}

impl SendMessage {
    /// A message to `to` (one address or several) with `subject`.
    pub fn new(to: impl Into<Recipients>, subject: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            cc: None,
            bcc: None,
            reply_to: None,
            text: None,
            html: None,
            labels: None,
            headers: None,
            extra: Extra::new(),
        }
    }

    /// Carbon-copy recipients.
    pub fn cc(mut self, cc: impl Into<Recipients>) -> Self {
        self.cc = Some(cc.into());
        self
    }

    /// Blind carbon-copy recipients.
    pub fn bcc(mut self, bcc: impl Into<Recipients>) -> Self {
        self.bcc = Some(bcc.into());
        self
    }

    /// Addresses replies should go to.
    pub fn reply_to(mut self, reply_to: impl Into<Recipients>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    /// Plain text body.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// HTML body.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Labels to attach to the sent message.
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Add a custom email header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Send an additional body field. Never replaces a typed field.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Parameters for [`Messages::reply`]. Every field is optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplyMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Recipients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Recipients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Recipients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip)]
    pub extra: Extra,
}

impl ReplyMessage {
    /// A reply to the original sender with no body yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the recipients (defaults to the original sender).
    pub fn to(mut self, to: impl Into<Recipients>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Carbon-copy recipients.
    pub fn cc(mut self, cc: impl Into<Recipients>) -> Self {
        self.cc = Some(cc.into());
        self
    }

    /// Blind carbon-copy recipients.
    pub fn bcc(mut self, bcc: impl Into<Recipients>) -> Self {
        self.bcc = Some(bcc.into());
        self
    }

    /// Reply to every original recipient.
    pub fn reply_all(mut self, reply_all: bool) -> Self {
        self.reply_all = Some(reply_all);
        self
    }

    /// Plain text body.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// HTML body.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Labels to attach to the sent message.
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Send an additional body field. Never replaces a typed field.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Message operations. Obtain with [`Client::messages`].
#[derive(Debug, Clone, Copy)]
pub struct Messages<'a> {
    client: &'a Client,
}

impl<'a> Messages<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List messages in an inbox.
    pub async fn list(&self, inbox_id: &str, params: &ListParams) -> Result<MessageList> {
        payload::require("inbox_id", inbox_id)?;
        self.client
            .get(&["inboxes", inbox_id, "messages"], &params.query())
            .await
    }

    /// Fetch one message.
    pub async fn get(&self, inbox_id: &str, message_id: &str) -> Result<Message> {
        payload::require("inbox_id", inbox_id)?;
        payload::require("message_id", message_id)?;
        self.client
            .get(&["inboxes", inbox_id, "messages", message_id], &Query::new())
            .await
    }

    /// Send a new message from `inbox_id`.
    ///
    /// # Examples
    /// ```no_run
    /// # use agentmail_client::{Client, SendMessage};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), agentmail_client::Error> {
    /// let client = Client::from_env()?;
    /// let sent = client
    ///     .messages()
    ///     .send(
    ///         "bot@agentmail.to",
    ///         &SendMessage::new("someone@example.com", "Hello").text("Hi there"),
    ///     )
    ///     .await?;
    /// println!("{}", sent.message_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send(&self, inbox_id: &str, request: &SendMessage) -> Result<SentMessage> {
        payload::require("inbox_id", inbox_id)?;
        payload::require_non_empty("to", request.to.as_slice())?;
        for address in request.to.as_slice() {
            payload::require("to", address)?;
        }
        payload::require("subject", &request.subject)?;

        let body = payload::body(request, &request.extra)?;
        self.client
            .post(&["inboxes", inbox_id, "messages", "send"], &body)
            .await
    }

    /// Reply to `message_id` from `inbox_id`.
    pub async fn reply(
        &self,
        inbox_id: &str,
        message_id: &str,
        request: &ReplyMessage,
    ) -> Result<SentMessage> {
        payload::require("inbox_id", inbox_id)?;
        payload::require("message_id", message_id)?;

        let body = payload::body(request, &request.extra)?;
        self.client
            .post(&["inboxes", inbox_id, "messages", message_id, "reply"], &body)
            .await
    }
}
