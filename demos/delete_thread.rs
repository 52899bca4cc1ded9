//! Delete the first listed thread.
//!
//! `cargo run --example delete_thread`

use agentmail_client::{Client, ThreadQuery};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> agentmail_client::Result<()> {
    let client = Client::from_env()?;

    let page = client.threads().list(&ThreadQuery::new()).await?;
    let Some(thread) = page.threads.first() else {
        tracing::info!("no threads found; nothing to delete");
        return Ok(());
    };
    let Some(inbox_id) = thread.inbox_id.as_deref() else {
        tracing::error!("could not determine inbox of thread {}", thread.thread_id);
        return Ok(());
    };

    let subject = thread.subject.as_deref().unwrap_or(&thread.thread_id);
    tracing::info!("deleting thread {subject} ({})", thread.thread_id);
    client.threads().delete(inbox_id, &thread.thread_id).await?;
    tracing::info!("thread deleted");
    Ok(())
}
