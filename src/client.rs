//! AgentMail async client implementation.

use crate::config::{Config, Credential, DEFAULT_BASE_URL};
use crate::payload::Query;
use crate::resources::{
    api_keys::ApiKeys, domains::Domains, drafts::Drafts, inboxes::Inboxes, messages::Messages,
    metrics::MetricsApi, pods::Pods, threads::Threads, webhooks::Webhooks,
};
use crate::{Error, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// Async client for the AgentMail API.
///
/// Construction performs no network I/O. Build one at startup with
/// [`Client::from_env`], [`Client::new`] or [`Client::builder`] and reach the
/// resources through the accessor methods (`client.inboxes()`,
/// `client.messages()`, ...). Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    proxy: Option<String>,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(credential: Credential) -> ClientBuilder {
        ClientBuilder::new(credential)
    }

    /// Create a client for the production endpoint.
    ///
    /// # Examples
    /// ```no_run
    /// # use agentmail_client::{Client, Credential};
    /// # fn main() -> Result<(), agentmail_client::Error> {
    /// let client = Client::new(Credential::new("am_...")?)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(credential: Credential) -> Result<Self> {
        ClientBuilder::new(credential).build()
    }

    /// Create a client from `AGENTMAIL_API_KEY` / `AGENTMAIL_BASE_URL`,
    /// loading `.env` first when present.
    ///
    /// Call this once at the program's entry point.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&Config::from_env()?)
    }

    /// Create a client from an explicit configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        ClientBuilder::new(config.credential.clone())
            .base_url(&config.base_url)
            .build()
    }

    /// Get the proxy URL if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Base URL every resource path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Inbox operations.
    pub fn inboxes(&self) -> Inboxes<'_> {
        Inboxes::new(self)
    }

    /// Message operations, addressed by inbox.
    pub fn messages(&self) -> Messages<'_> {
        Messages::new(self)
    }

    /// Thread operations.
    pub fn threads(&self) -> Threads<'_> {
        Threads::new(self)
    }

    /// Draft operations.
    pub fn drafts(&self) -> Drafts<'_> {
        Drafts::new(self)
    }

    /// Custom domain operations.
    pub fn domains(&self) -> Domains<'_> {
        Domains::new(self)
    }

    /// Webhook operations.
    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(self)
    }

    /// API key operations.
    pub fn api_keys(&self) -> ApiKeys<'_> {
        ApiKeys::new(self)
    }

    /// Usage metrics.
    pub fn metrics(&self) -> MetricsApi<'_> {
        MetricsApi::new(self)
    }

    /// Pod operations.
    pub fn pods(&self) -> Pods<'_> {
        Pods::new(self)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &[&str], query: &Query) -> Result<T> {
        let request = self.request(Method::GET, path)?.query(query.pairs());
        decode(self.dispatch(request).await?).await
    }

    pub(crate) async fn get_text(&self, path: &[&str]) -> Result<String> {
        let request = self.request(Method::GET, path)?;
        Ok(self.dispatch(request).await?.text().await?)
    }

    pub(crate) async fn get_bytes(&self, path: &[&str]) -> Result<Vec<u8>> {
        let request = self.request(Method::GET, path)?;
        Ok(self.dispatch(request).await?.bytes().await?.to_vec())
    }

    pub(crate) async fn post<T: DeserializeOwned>(&self, path: &[&str], body: &Value) -> Result<T> {
        let request = self.request(Method::POST, path)?.json(body);
        decode(self.dispatch(request).await?).await
    }

    /// POST without a body and return whatever the service answers.
    pub(crate) async fn post_empty(&self, path: &[&str]) -> Result<Value> {
        let request = self.request(Method::POST, path)?;
        raw(self.dispatch(request).await?).await
    }

    pub(crate) async fn patch<T: DeserializeOwned>(&self, path: &[&str], body: &Value) -> Result<T> {
        let request = self.request(Method::PATCH, path)?.json(body);
        decode(self.dispatch(request).await?).await
    }

    pub(crate) async fn delete(&self, path: &[&str]) -> Result<Value> {
        let request = self.request(Method::DELETE, path)?;
        raw(self.dispatch(request).await?).await
    }

    fn request(&self, method: Method, path: &[&str]) -> Result<RequestBuilder> {
        Ok(self.http.request(method, self.url(path)?))
    }

    /// Append percent-encoded path segments to the base URL.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Configuration(format!("invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and turn non-success statuses into [`Error::Api`].
    async fn dispatch(&self, request: RequestBuilder) -> Result<Response> {
        let request = request.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        tracing::debug!(%method, %path, "agentmail request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let (name, message) = error_parts(response.text().await);
        tracing::warn!(%method, %path, %status, name = name.as_deref(), "agentmail request failed");
        Err(Error::Api {
            status,
            name,
            message,
        })
    }
}

/// Error body returned by the service on failure.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    name: Option<String>,
    message: Option<String>,
}

/// Split an error body into the service's error name and message.
///
/// Non-JSON bodies become the message verbatim. A body that cannot be read
/// is logged and reported through a placeholder message.
fn error_parts<E: fmt::Display>(body: std::result::Result<String, E>) -> (Option<String>, String) {
    let text = match body {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "could not read agentmail error body");
            return (None, format!("<unreadable error body: {err}>"));
        }
    };
    match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => (body.name, body.message.unwrap_or(text)),
        Err(_) => (None, text),
    }
}

/// Body of a response that has no typed model: JSON when it parses, the raw
/// text otherwise, `null` when empty.
async fn raw(response: Response) -> Result<Value> {
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned())))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    // Some endpoints answer 2xx with no body; decode that as JSON null.
    let slice: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
    serde_json::from_slice(slice).map_err(Into::into)
}

const USER_AGENT_VALUE: &str = concat!("agentmail-client-rs/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring an AgentMail client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    credential: Credential,
    base_url: String,
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Production endpoint (`https://api.agentmail.to/v0`)
    /// - No proxy
    /// - `danger_accept_invalid_certs = false`
    /// - Crate user agent
    /// - No request timeout beyond the transport's own
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
            timeout: None,
        }
    }

    /// Override the API base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080" or "socks5://127.0.0.1:1080").
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Abort requests that take longer than `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// No request is sent; errors only come from invalid settings.
    ///
    /// # Examples
    /// ```no_run
    /// # use agentmail_client::{Client, Credential};
    /// # fn main() -> Result<(), agentmail_client::Error> {
    /// let client = Client::builder(Credential::new("am_...")?)
    ///     .user_agent("my-app/1.0")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| Error::Configuration(format!("invalid base URL {}: {e}", self.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Configuration(format!(
                "invalid base URL: {}",
                self.base_url
            )));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.credential.expose()))
            .map_err(|_| Error::Configuration("API key is not a valid header value".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(self.user_agent)
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Client {
            http: builder.build()?,
            base_url,
            proxy: self.proxy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(base_url: &str) -> Result<Client> {
        Client::builder(Credential::new("am_test")?)
            .base_url(base_url)
            .build()
    }

    #[test]
    fn url_appends_and_encodes_segments() {
        let client = build("https://api.agentmail.to/v0").unwrap();
        let url = client.url(&["inboxes", "a b@agentmail.to", "messages"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.agentmail.to/v0/inboxes/a%20b@agentmail.to/messages"
        );

        let client = build("http://127.0.0.1:8080/").unwrap();
        let url = client.url(&["threads", "t/1"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/threads/t%2F1");
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(matches!(build("not a url"), Err(Error::Configuration(_))));
        assert!(matches!(build("mailto:x@y.z"), Err(Error::Configuration(_))));
    }

    #[test]
    fn unreadable_error_body_keeps_a_message() {
        let (name, message) = error_parts::<&str>(Err("connection reset"));
        assert_eq!(name, None);
        assert_eq!(message, "<unreadable error body: connection reset>");

        let (name, message) = error_parts::<&str>(Ok(
            r#"{"name":"ValidationError","message":"bad"}"#.to_string(),
        ));
        assert_eq!(name.as_deref(), Some("ValidationError"));
        assert_eq!(message, "bad");
    }

    #[test]
    fn rejects_key_that_cannot_be_a_header() {
        let credential = Credential::new("bad\nkey").unwrap();
        assert!(matches!(Client::new(credential), Err(Error::Configuration(_))));
    }
}
