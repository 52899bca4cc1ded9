//! Send a message from one inbox to another, creating inboxes as needed.
//!
//! `cargo run --example send_message`

use agentmail_client::{Client, CreateInbox, Inbox, ListParams, SendMessage, SentMessage};
use tracing_subscriber::EnvFilter;

const SUBJECT: &str = "Test Message from AgentMail";
const TEXT: &str = "This is a test message sent using the AgentMail Rust client.";
const HTML: &str = "<p>This is a test message sent using the AgentMail Rust client.</p>";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!("error sending message: {e}");
        std::process::exit(1);
    }
}

async fn run() -> agentmail_client::Result<()> {
    let client = Client::from_env()?;

    let existing = client.inboxes().list(&ListParams::new()).await?.inboxes;
    let needed = 2usize.saturating_sub(existing.len());
    let mut created: Vec<Inbox> = Vec::new();
    for i in 0..needed {
        match client.inboxes().create(&CreateInbox::new()).await {
            Ok(inbox) => {
                tracing::info!("created inbox {}: {}", i + 1, inbox.address());
                created.push(inbox);
            }
            Err(e) if e.is_limit_exceeded() => {
                tracing::warn!("could not create inbox {}: inbox limit reached", i + 1);
            }
            Err(e) => tracing::warn!("could not create inbox {}: {e}", i + 1),
        }
    }

    let inboxes: Vec<Inbox> = created.into_iter().chain(existing).collect();
    let [from, to, ..] = inboxes.as_slice() else {
        tracing::error!("need at least 2 inboxes, have {}", inboxes.len());
        return Ok(());
    };
    if !to.address().contains('@') {
        tracing::error!("invalid recipient address: {}", to.address());
        return Ok(());
    }

    tracing::info!("sending from {} to {}", from.address(), to.address());
    let sent = send(&client, from, to).await?;
    tracing::info!(message_id = %sent.message_id, "message sent");
    Ok(())
}

/// Send once; on not-found, confirm the inbox exists and retry a single time.
async fn send(client: &Client, from: &Inbox, to: &Inbox) -> agentmail_client::Result<SentMessage> {
    let request = SendMessage::new(to.address(), SUBJECT).text(TEXT).html(HTML);
    match client.messages().send(&from.inbox_id, &request).await {
        Err(e) if e.is_not_found() => {
            tracing::warn!("inbox {} not found; verifying before retry", from.inbox_id);
            client.inboxes().get(&from.inbox_id).await?;
            client.messages().send(&from.inbox_id, &request).await
        }
        other => other,
    }
}
