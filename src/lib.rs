//! # AgentMail Client
//! Asynchronous, typed wrapper around the AgentMail email-as-a-service HTTP API: create inboxes, send and reply to messages, browse threads and drafts, and manage domains, webhooks, API keys and pods from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers who give programs (agents, tests, automation) their own mailboxes: resolve a [`Credential`] once at startup, build a [`Client`], then call the resource handles (`client.inboxes()`, `client.messages()`, `client.threads()`, ...).
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. Building a client performs no I/O; every operation is exactly one request, with no retries.
//!
//! ## Requests
//! Required arguments are validated before anything is sent. Request builders ([`SendMessage`], [`CreateInbox`], ...) serialize only the optional fields you set; fields the builders do not name can be added with their `extra` method and never replace a typed field.
//!
//! ## Errors
//! Missing credentials surface as [`Error::Configuration`], invalid arguments as [`Error::Validation`], transport failures as [`Error::Request`] and non-2xx responses as [`Error::Api`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Logging
//! Requests are traced with the `tracing` crate at `debug`, failures at `warn`. Install a subscriber to see them.
//!
//! ## Example
//! ```no_run
//! use agentmail_client::{Client, CreateInbox, ListParams, SendMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), agentmail_client::Error> {
//!     let client = Client::from_env()?;
//!     let inbox = client.inboxes().create(&CreateInbox::new()).await?;
//!     println!("Created: {}", inbox.address());
//!
//!     client
//!         .messages()
//!         .send(&inbox.inbox_id, &SendMessage::new("someone@example.com", "Hi").text("Hello!"))
//!         .await?;
//!
//!     for thread in client.threads().list(&Default::default()).await?.threads {
//!         println!("{}: {:?}", thread.thread_id, thread.subject);
//!     }
//!
//!     client.inboxes().delete(&inbox.inbox_id).await?;
//!     let _ = client.inboxes().list(&ListParams::new()).await?;
//!     Ok(())
//! }
//! ```

mod client;
pub mod config;
mod error;
mod payload;
pub mod resources;

pub use client::{Client, ClientBuilder};
pub use config::{Config, Credential, resolve_api_key};
pub use error::Error;
pub use payload::{Extra, ExtraQuery, ListParams, Recipients};
pub use resources::api_keys::{ApiKey, ApiKeyList, CreateApiKey, CreatedApiKey};
pub use resources::domains::{CreateDomain, Domain, DomainList};
pub use resources::drafts::{Draft, DraftList};
pub use resources::inboxes::{CreateInbox, Inbox, InboxList, UpdateInbox};
pub use resources::messages::{
    Attachment, Message, MessageList, ReplyMessage, SendMessage, SentMessage,
};
pub use resources::metrics::{Metrics, MetricsQuery};
pub use resources::pods::{CreatePod, Pod, PodList};
pub use resources::threads::{Thread, ThreadList, ThreadQuery};
pub use resources::webhooks::{CreateWebhook, EventType, Webhook, WebhookList};

/// Result type alias for AgentMail operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
