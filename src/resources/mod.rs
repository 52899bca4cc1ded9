//! Typed handles over each AgentMail resource.
//!
//! Every handle borrows the [`Client`](crate::Client) it was obtained from.
//! Operations validate required arguments before sending anything, build a
//! body containing only the optional fields the caller set, and decode the
//! response into the resource's typed model.

pub mod api_keys;
pub mod domains;
pub mod drafts;
pub mod inboxes;
pub mod messages;
pub mod metrics;
pub mod pods;
pub mod threads;
pub mod webhooks;
