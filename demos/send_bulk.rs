//! Send numbered messages one after another from the first inbox.
//!
//! `cargo run --example send_bulk -- <recipient> [count]`

use agentmail_client::{Client, CreateInbox, ListParams, SendMessage};
use tracing_subscriber::EnvFilter;

const DEFAULT_COUNT: usize = 10;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(recipient) = args.next() else {
        eprintln!("usage: send_bulk <recipient> [count]");
        std::process::exit(2);
    };
    let count = args
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(DEFAULT_COUNT);

    if let Err(e) = run(&recipient, count).await {
        tracing::error!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(recipient: &str, count: usize) -> agentmail_client::Result<()> {
    let client = Client::from_env()?;

    let sender = match client
        .inboxes()
        .list(&ListParams::new().limit(1))
        .await?
        .inboxes
        .into_iter()
        .next()
    {
        Some(inbox) => inbox,
        None => {
            tracing::info!("no inboxes found; creating one");
            client.inboxes().create(&CreateInbox::new()).await?
        }
    };
    tracing::info!("sending {count} message(s) from {} to {recipient}", sender.address());

    let (mut ok, mut failed) = (0usize, 0usize);
    for n in 1..=count {
        let request = SendMessage::new(recipient, format!("Bulk Test Email #{n}"))
            .text(format!("This is bulk test email number {n}"))
            .html(format!("<p>This is bulk test email number <strong>{n}</strong></p>"));
        match client.messages().send(&sender.inbox_id, &request).await {
            Ok(_) => {
                ok += 1;
                tracing::info!("sent {n}/{count}");
            }
            Err(e) => {
                failed += 1;
                tracing::warn!("failed {n}/{count}: {e}");
            }
        }
    }

    tracing::info!(successful = ok, failed, "bulk send completed");
    Ok(())
}
