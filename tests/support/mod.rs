#![allow(dead_code)]

use agentmail_client::{Client, Credential};
use httpmock::MockServer;

pub const API_KEY: &str = "am_test_key";
pub const BEARER: &str = "Bearer am_test_key";

pub fn client(server: &MockServer) -> Client {
    Client::builder(Credential::new(API_KEY).unwrap())
        .base_url(server.base_url())
        .build()
        .unwrap()
}
