//! Reply to the latest message of the first thread.
//!
//! `cargo run --example reply_message`

use agentmail_client::{Client, ReplyMessage, ThreadQuery};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!("error replying to message: {e}");
        std::process::exit(1);
    }
}

async fn run() -> agentmail_client::Result<()> {
    let client = Client::from_env()?;

    let threads = client.threads().list(&ThreadQuery::new().limit(1)).await?;
    let Some(summary) = threads.threads.first() else {
        tracing::info!("no threads found; send or receive a message first");
        return Ok(());
    };
    let Some(inbox_id) = summary.inbox_id.as_deref() else {
        tracing::error!("thread {} has no inbox id", summary.thread_id);
        return Ok(());
    };

    let thread = client.threads().get(&summary.thread_id).await?;
    let Some(last) = thread.last_message() else {
        tracing::info!("thread {} has no messages", thread.thread_id);
        return Ok(());
    };

    tracing::info!("replying to {} in {}", last.message_id, inbox_id);
    let reply = ReplyMessage::new()
        .text("This is a reply sent using the AgentMail Rust client.")
        .html("<p>This is a reply sent using the AgentMail Rust client.</p>");
    let sent = client
        .messages()
        .reply(inbox_id, &last.message_id, &reply)
        .await?;
    tracing::info!(message_id = %sent.message_id, "reply sent");
    Ok(())
}
