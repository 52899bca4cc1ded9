mod support;

use agentmail_client::{CreateDomain, Error};
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn create_verify_zone_file_delete() {
    let server = MockServer::start_async().await;
    let client = support::client(&server);

    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/domains")
                .json_body(json!({ "domain": "mail.example.com", "feedback_enabled": true }));
            then.status(200).json_body(json!({
                "domain_id": "dom_1",
                "domain": "mail.example.com",
                "status": "PENDING",
                "records": [{ "type": "TXT", "name": "_dmarc", "value": "v=DMARC1" }]
            }));
        })
        .await;
    let verify = server
        .mock_async(|when, then| {
            when.method(POST).path("/domains/dom_1/verify");
            then.status(202).json_body(json!({ "status": "VERIFYING" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/domains/dom_1/zone-file");
            then.status(200)
                .header("content-type", "text/plain")
                .body("_dmarc IN TXT \"v=DMARC1\"\n");
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/domains/dom_1");
            then.status(200).body("deleted");
        })
        .await;

    let domain = client
        .domains()
        .create(&CreateDomain::new("mail.example.com").feedback_enabled(true))
        .await
        .unwrap();
    create.assert_async().await;
    assert_eq!(domain.domain_id, "dom_1");
    assert_eq!(domain.status.as_deref(), Some("PENDING"));
    assert_eq!(domain.records.len(), 1);

    let response = client.domains().verify(&domain.domain_id).await.unwrap();
    verify.assert_async().await;
    assert_eq!(response, json!({ "status": "VERIFYING" }));

    let zone = client.domains().get_zone_file(&domain.domain_id).await.unwrap();
    assert!(zone.contains("_dmarc"));

    let response = client.domains().delete(&domain.domain_id).await.unwrap();
    delete.assert_async().await;
    assert_eq!(response, json!("deleted"));
}

#[tokio::test]
async fn domain_name_is_required() {
    let server = MockServer::start_async().await;
    let client = support::client(&server);
    let any = server
        .mock_async(|_when, then| {
            then.status(200);
        })
        .await;

    let err = client
        .domains()
        .create(&CreateDomain::new(" "))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { field: "domain", .. }));

    let err = client.domains().verify("").await.unwrap_err();
    assert!(matches!(err, Error::Validation { field: "domain_id", .. }));

    any.assert_hits_async(0).await;
}
