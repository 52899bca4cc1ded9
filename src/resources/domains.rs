//! Custom sending/receiving domains.

use crate::payload::{self, Extra, ListParams, Query};
use crate::{Client, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A custom domain and its verification state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(remote = "Self")]
pub struct Domain {
    pub domain_id: String,
    /// The domain name, e.g. `mail.example.com`.
    pub domain: Option<String>,
    /// Verification state as reported by the service (e.g. `PENDING`, `VERIFIED`).
    pub status: Option<String>,
    pub feedback_enabled: Option<bool>,
    /// DNS records the domain must publish.
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub records: Vec<Value>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

payload::canonical_id!(Domain, "domain_id");

/// One page of domains.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainList {
    pub count: Option<u64>,
    pub limit: Option<u64>,
    pub next_page_token: Option<String>,
    #[serde(default, deserialize_with = "payload::null_as_empty")]
    pub domains: Vec<Domain>,
}

/// Parameters for [`Domains::create`].
#[derive(Debug, Clone, Serialize)]
pub struct CreateDomain {
    pub domain: String,
    /// Receive bounce and complaint notifications for this domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_enabled: Option<bool>,
    #[serde(skip)]
    pub extra: Extra,
}

impl CreateDomain {
    /// Register `domain`, e.g. `mail.example.com`.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            feedback_enabled: None,
            extra: Extra::new(),
        }
    }

    /// Toggle bounce and complaint notifications.
    pub fn feedback_enabled(mut self, enabled: bool) -> Self {
        self.feedback_enabled = Some(enabled);
        self
    }

    /// Send an additional body field. Never replaces a typed field.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Domain operations. Obtain with [`Client::domains`].
#[derive(Debug, Clone, Copy)]
pub struct Domains<'a> {
    client: &'a Client,
}

impl<'a> Domains<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List domains.
    pub async fn list(&self, params: &ListParams) -> Result<DomainList> {
        self.client.get(&["domains"], &params.query()).await
    }

    /// Fetch one domain with its DNS records.
    pub async fn get(&self, domain_id: &str) -> Result<Domain> {
        payload::require("domain_id", domain_id)?;
        self.client.get(&["domains", domain_id], &Query::new()).await
    }

    /// Register a domain. It must be verified before use.
    pub async fn create(&self, request: &CreateDomain) -> Result<Domain> {
        payload::require("domain", &request.domain)?;
        let body = payload::body(request, &request.extra)?;
        self.client.post(&["domains"], &body).await
    }

    /// Ask the service to re-check the domain's DNS records.
    ///
    /// Returns the service's response body unchanged (`null` when empty).
    pub async fn verify(&self, domain_id: &str) -> Result<Value> {
        payload::require("domain_id", domain_id)?;
        self.client.post_empty(&["domains", domain_id, "verify"]).await
    }

    /// The BIND zone file with every record the domain needs.
    pub async fn get_zone_file(&self, domain_id: &str) -> Result<String> {
        payload::require("domain_id", domain_id)?;
        self.client
            .get_text(&["domains", domain_id, "zone-file"])
            .await
    }

    /// Remove a domain.
    /// Returns the service's response body unchanged (`null` when empty).
    pub async fn delete(&self, domain_id: &str) -> Result<Value> {
        payload::require("domain_id", domain_id)?;
        self.client.delete(&["domains", domain_id]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn domain_tolerates_null_records_and_both_id_keys() {
        let domain: Domain = serde_json::from_value(json!({
            "id": "dom_1",
            "domain_id": "dom_1",
            "domain": "mail.example.com",
            "records": null
        }))
        .unwrap();
        assert_eq!(domain.domain_id, "dom_1");
        assert!(domain.records.is_empty());
    }

    #[test]
    fn create_sends_only_set_fields() {
        let request = CreateDomain::new("mail.example.com");
        assert_eq!(
            payload::body(&request, &request.extra).unwrap(),
            json!({ "domain": "mail.example.com" })
        );
    }
}
