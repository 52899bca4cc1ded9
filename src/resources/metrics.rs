//! Usage metrics.

use crate::payload::{ExtraQuery, Query};
use crate::resources::webhooks::EventType;
use crate::{Client, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Recorded metrics, keyed by series name (one per event kind).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Metrics {
    #[serde(flatten)]
    pub series: Map<String, Value>,
}

impl Metrics {
    /// The series recorded for `kind`, if any.
    pub fn series(&self, kind: &EventType) -> Option<&Value> {
        self.series.get(kind.as_str())
    }
}

/// Filters for [`MetricsApi::list`].
#[derive(Debug, Clone, Default)]
pub struct MetricsQuery {
    /// Event kinds to report; all kinds when empty.
    pub event_types: Vec<EventType>,
    /// RFC 3339 lower bound.
    pub start_timestamp: Option<String>,
    /// RFC 3339 upper bound.
    pub end_timestamp: Option<String>,
    /// Additional query parameters.
    pub extra: ExtraQuery,
}

impl MetricsQuery {
    /// Every event kind over the service's default window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report on `kind`; may be called more than once.
    pub fn event_type(mut self, kind: EventType) -> Self {
        self.event_types.push(kind);
        self
    }

    /// Only count events at or after `timestamp`.
    pub fn start(mut self, timestamp: impl Into<String>) -> Self {
        self.start_timestamp = Some(timestamp.into());
        self
    }

    /// Only count events before `timestamp`.
    pub fn end(mut self, timestamp: impl Into<String>) -> Self {
        self.end_timestamp = Some(timestamp.into());
        self
    }

    /// Add a query parameter the typed fields do not cover.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    fn query(&self) -> Query {
        Query::new()
            .each("event_types", &self.event_types)
            .opt("start_timestamp", self.start_timestamp.as_deref())
            .opt("end_timestamp", self.end_timestamp.as_deref())
            .extra(&self.extra)
    }
}

/// Metrics operations. Obtain with [`Client::metrics`].
#[derive(Debug, Clone, Copy)]
pub struct MetricsApi<'a> {
    client: &'a Client,
}

impl<'a> MetricsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Event counts over time, keyed by event kind.
    pub async fn list(&self, query: &MetricsQuery) -> Result<Metrics> {
        self.client.get(&["metrics"], &query.query()).await
    }
}
