mod support;

use agentmail_client::{CreateWebhook, Error, EventType, ListParams};
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn create_defaults_to_message_received() {
    let server = MockServer::start_async().await;
    let client = support::client(&server);

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/webhooks").json_body(json!({
                "url": "https://example.com/hook",
                "event_types": ["message.received"]
            }));
            then.status(200).json_body(json!({
                "webhook_id": "wh_1",
                "url": "https://example.com/hook",
                "event_types": ["message.received"],
                "secret": "whsec_1",
                "enabled": true
            }));
        })
        .await;

    let webhook = client
        .webhooks()
        .create(&CreateWebhook::new("https://example.com/hook"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(webhook.event_types, vec![EventType::MessageReceived]);
    assert_eq!(webhook.enabled, Some(true));
}

#[tokio::test]
async fn create_sends_filters_when_given() {
    let server = MockServer::start_async().await;
    let client = support::client(&server);

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/webhooks").json_body(json!({
                "url": "https://example.com/hook",
                "event_types": ["message.sent", "message.bounced"],
                "inbox_ids": ["a@agentmail.to"],
                "client_id": "hook-1"
            }));
            then.status(200).json_body(json!({
                "webhook_id": "wh_2",
                "url": "https://example.com/hook",
                "event_types": ["message.sent", "message.bounced"],
                "inbox_ids": ["a@agentmail.to"]
            }));
        })
        .await;

    let webhook = client
        .webhooks()
        .create(
            &CreateWebhook::new("https://example.com/hook")
                .event_types([EventType::MessageSent, EventType::MessageBounced])
                .inbox_ids(["a@agentmail.to"])
                .client_id("hook-1"),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(webhook.inbox_ids, vec!["a@agentmail.to"]);
}

#[tokio::test]
async fn empty_event_types_fail_before_dispatch() {
    let server = MockServer::start_async().await;
    let client = support::client(&server);
    let any = server
        .mock_async(|_when, then| {
            then.status(200);
        })
        .await;

    let request = CreateWebhook::new("https://example.com/hook").event_types([]);
    let err = client.webhooks().create(&request).await.unwrap_err();
    assert!(matches!(err, Error::Validation { field: "event_types", .. }));

    let err = client
        .webhooks()
        .create(&CreateWebhook::new(""))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { field: "url", .. }));

    any.assert_hits_async(0).await;
}

#[tokio::test]
async fn list_pages_and_get_by_id() {
    let server = MockServer::start_async().await;
    let client = support::client(&server);

    server
        .mock_async(|when, then| {
            when.method(GET).path("/webhooks").query_param("limit", "1");
            then.status(200).json_body(json!({
                "count": 1,
                "limit": 1,
                "next_page_token": "p2",
                "webhooks": [{ "webhook_id": "wh_1", "url": "https://example.com/hook" }]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/webhooks/wh_1");
            then.status(200).json_body(json!({
                "id": "wh_1",
                "url": "https://example.com/hook",
                "event_types": ["message.received", "message.opened"]
            }));
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/webhooks/wh_1");
            then.status(204);
        })
        .await;

    let page = client
        .webhooks()
        .list(&ListParams::new().limit(1))
        .await
        .unwrap();
    assert_eq!(page.next_page_token.as_deref(), Some("p2"));

    let webhook = client.webhooks().get("wh_1").await.unwrap();
    assert_eq!(webhook.webhook_id, "wh_1");
    assert_eq!(
        webhook.event_types,
        vec![
            EventType::MessageReceived,
            EventType::Other("message.opened".into())
        ]
    );

    let response = client.webhooks().delete("wh_1").await.unwrap();
    delete.assert_async().await;
    assert!(response.is_null());
}

#[tokio::test]
async fn blank_webhook_id_is_rejected_without_a_request() {
    let server = MockServer::start_async().await;
    let client = support::client(&server);
    let any = server
        .mock_async(|_when, then| {
            then.status(200).json_body(json!({}));
        })
        .await;

    let err = client.webhooks().get("").await.unwrap_err();
    assert!(matches!(err, Error::Validation { field: "webhook_id", .. }));
    let err = client.webhooks().delete("  ").await.unwrap_err();
    assert!(matches!(err, Error::Validation { field: "webhook_id", .. }));

    any.assert_hits_async(0).await;
}
