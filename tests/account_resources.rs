mod support;

use agentmail_client::{CreateApiKey, CreatePod, Error, EventType, ListParams, MetricsQuery};
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn api_keys_create_list_delete() {
    let server = MockServer::start_async().await;
    let client = support::client(&server);

    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api-keys")
                .json_body(json!({ "name": "ci" }));
            then.status(200).json_body(json!({
                "api_key_id": "key_1",
                "api_key": "am_secret_value",
                "prefix": "am_sec",
                "name": "ci"
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api-keys");
            then.status(200).json_body(json!({
                "count": 1,
                "api_keys": [{ "api_key_id": "key_1", "prefix": "am_sec", "name": "ci" }]
            }));
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api-keys/key_1");
            then.status(200).json_body(json!({ "deleted": true }));
        })
        .await;

    let created = client
        .api_keys()
        .create(&CreateApiKey::new().name("ci"))
        .await
        .unwrap();
    create.assert_async().await;
    assert_eq!(created.api_key, "am_secret_value");
    assert!(!format!("{created:?}").contains("am_secret_value"));

    let keys = client.api_keys().list(&ListParams::new()).await.unwrap();
    assert_eq!(keys.api_keys[0].api_key_id, "key_1");

    let response = client.api_keys().delete("key_1").await.unwrap();
    delete.assert_async().await;
    assert_eq!(response, json!({ "deleted": true }));
}

#[tokio::test]
async fn pods_create_get_delete() {
    let server = MockServer::start_async().await;
    let client = support::client(&server);

    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/pods")
                .json_body(json!({ "name": "tenant-a" }));
            then.status(200)
                .json_body(json!({ "pod_id": "pod_1", "name": "tenant-a" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pods/pod_1");
            then.status(200)
                .json_body(json!({ "id": "pod_1", "name": "tenant-a" }));
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/pods/pod_1");
            then.status(204);
        })
        .await;

    let pod = client
        .pods()
        .create(&CreatePod::new().name("tenant-a"))
        .await
        .unwrap();
    let fetched = client.pods().get(&pod.pod_id).await.unwrap();
    assert_eq!(fetched.pod_id, "pod_1");
    client.pods().delete(&pod.pod_id).await.unwrap();
    delete.assert_async().await;
}

#[tokio::test]
async fn blank_ids_are_rejected_without_a_request() {
    let server = MockServer::start_async().await;
    let client = support::client(&server);
    let any = server
        .mock_async(|_when, then| {
            then.status(200).json_body(json!({}));
        })
        .await;

    let err = client.pods().get("").await.unwrap_err();
    assert!(matches!(err, Error::Validation { field: "pod_id", .. }));
    let err = client.pods().delete(" ").await.unwrap_err();
    assert!(matches!(err, Error::Validation { field: "pod_id", .. }));
    let err = client.api_keys().delete("").await.unwrap_err();
    assert!(matches!(err, Error::Validation { field: "api_key_id", .. }));
    let err = client.drafts().get("").await.unwrap_err();
    assert!(matches!(err, Error::Validation { field: "draft_id", .. }));

    any.assert_hits_async(0).await;
}

#[tokio::test]
async fn drafts_list_and_get() {
    let server = MockServer::start_async().await;
    let client = support::client(&server);

    server
        .mock_async(|when, then| {
            when.method(GET).path("/drafts");
            then.status(200).json_body(json!({
                "count": 1,
                "drafts": [{ "draft_id": "dft_1", "subject": "later" }]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/drafts/dft_1");
            then.status(200).json_body(json!({
                "draft_id": "dft_1",
                "to": ["b@x.com"],
                "labels": null,
                "text": "draft body"
            }));
        })
        .await;

    let drafts = client.drafts().list(&ListParams::new()).await.unwrap();
    assert_eq!(drafts.drafts[0].subject.as_deref(), Some("later"));

    let draft = client.drafts().get("dft_1").await.unwrap();
    assert_eq!(draft.to, vec!["b@x.com"]);
    assert!(draft.labels.is_empty());
}

#[tokio::test]
async fn metrics_forward_filters() {
    let server = MockServer::start_async().await;
    let client = support::client(&server);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/metrics")
                .query_param("event_types", "message.sent")
                .query_param("start_timestamp", "2026-10-01T00:00:00Z");
            then.status(200).json_body(json!({
                "message.sent": [{ "timestamp": "2026-10-01T00:00:00Z", "count": 3 }]
            }));
        })
        .await;

    let metrics = client
        .metrics()
        .list(
            &MetricsQuery::new()
                .event_type(EventType::MessageSent)
                .start("2026-10-01T00:00:00Z"),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(metrics.series(&EventType::MessageSent).is_some());
    assert!(metrics.series(&EventType::MessageBounced).is_none());
}
