//! Create an inbox, list inboxes, then delete the one just created.
//!
//! Run with `AGENTMAIL_API_KEY` set (or present in `.env`):
//! `cargo run --example inbox_pipeline`

use agentmail_client::{Client, CreateInbox, ListParams};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!("pipeline aborted: {e}");
        std::process::exit(1);
    }
}

async fn run() -> agentmail_client::Result<()> {
    let client = Client::from_env()?;

    tracing::info!("1. creating inbox");
    let inbox = client.inboxes().create(&CreateInbox::new()).await?;
    tracing::info!(inbox_id = %inbox.inbox_id, email = inbox.address(), "inbox created");
    for (key, value) in &inbox.extra {
        tracing::info!("  {key}: {value}");
    }

    tracing::info!("2. listing inboxes");
    let page = client.inboxes().list(&ListParams::new()).await?;
    tracing::info!("found {} inbox(es)", page.inboxes.len());
    for (i, listed) in page.inboxes.iter().enumerate() {
        tracing::info!("{}. {} ({})", i + 1, listed.inbox_id, listed.address());
    }

    tracing::info!("3. deleting inbox {}", inbox.inbox_id);
    client.inboxes().delete(&inbox.inbox_id).await?;
    tracing::info!("pipeline completed");
    Ok(())
}
