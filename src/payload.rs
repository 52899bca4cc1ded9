//! Request shaping shared by the resource modules.
//!
//! Typed request structs serialize only the optional fields a caller set
//! (`skip_serializing_if = "Option::is_none"`). Anything the typed structs do
//! not name travels in an [`Extra`] map which is merged in last and can never
//! replace a field the typed request already produced.

use crate::{Error, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Free-form fields forwarded verbatim in a request body.
pub type Extra = Map<String, Value>;

/// Free-form query parameters appended to a list request.
pub type ExtraQuery = BTreeMap<String, String>;

/// One or more recipient addresses.
///
/// A single address is normalized to a one-element list, so
/// `Recipients::from("a@x.com")` and `Recipients::from(vec!["a@x.com"])`
/// serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipients(Vec<String>);

impl Recipients {
    /// The addresses, in the order given.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// `true` when no address was given.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Recipients {
    fn from(address: &str) -> Self {
        Self(vec![address.to_string()])
    }
}

impl From<String> for Recipients {
    fn from(address: String) -> Self {
        Self(vec![address])
    }
}

impl From<&String> for Recipients {
    fn from(address: &String) -> Self {
        Self(vec![address.clone()])
    }
}

impl From<Vec<String>> for Recipients {
    fn from(addresses: Vec<String>) -> Self {
        Self(addresses)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(addresses: Vec<&str>) -> Self {
        Self(addresses.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Recipients {
    fn from(addresses: &[&str]) -> Self {
        Self(addresses.iter().map(|a| a.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Recipients {
    fn from(addresses: [&str; N]) -> Self {
        Self(addresses.iter().map(|a| a.to_string()).collect())
    }
}

/// Fail with [`Error::Validation`] when a required string is blank.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Fail with [`Error::Validation`] when a required collection is empty.
pub(crate) fn require_non_empty<T>(field: &'static str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::validation(field, "must contain at least one value"));
    }
    Ok(())
}

/// Serialize `request` into a JSON object and merge `extra` into it.
///
/// Keys already produced by `request` win over keys in `extra`.
pub(crate) fn body<T: Serialize>(request: &T, extra: &Extra) -> Result<Value> {
    let mut object = match serde_json::to_value(request)? {
        Value::Object(object) => object,
        Value::Null => Map::new(),
        other => return Ok(other),
    };

    for (key, value) in extra {
        if object.contains_key(key) {
            tracing::warn!(field = %key, "extra field collides with a typed field; ignoring it");
            continue;
        }
        object.insert(key.clone(), value.clone());
    }

    Ok(Value::Object(object))
}

/// Decode a JSON list that the service may send as `null`.
///
/// Use with `#[serde(default, deserialize_with = "payload::null_as_empty")]`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a model whose canonical id (`key`) may also arrive as `id`.
///
/// The canonical key wins when both are present; `id` then stays with the
/// unknown fields. `decode` is the derived decoder of the model.
pub(crate) fn with_canonical_id<'de, D, T, F>(
    deserializer: D,
    key: &str,
    decode: F,
) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    F: FnOnce(Value) -> serde_json::Result<T>,
{
    let mut object = Map::<String, Value>::deserialize(deserializer)?;
    let has_key = object.get(key).is_some_and(|value| !value.is_null());
    if !has_key {
        if let Some(id) = object.remove("id") {
            object.insert(key.to_string(), id);
        }
    }
    decode(Value::Object(object)).map_err(de::Error::custom)
}

/// Implement `Deserialize` for a model derived with `#[serde(remote = "Self")]`
/// so that `id` is accepted in place of its canonical id field.
macro_rules! canonical_id {
    ($model:ty, $key:literal) => {
        impl<'de> serde::Deserialize<'de> for $model {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                $crate::payload::with_canonical_id(deserializer, $key, |value| {
                    <$model>::deserialize(value)
                })
            }
        }
    };
}
pub(crate) use canonical_id;

/// Query string pairs for a list request.
///
/// Typed parameters are pushed first; `extra` entries are appended unless
/// they reuse a typed key.
#[derive(Debug, Default)]
pub(crate) struct Query(Vec<(String, String)>);

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn opt<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.0.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub(crate) fn each<V: ToString>(mut self, key: &str, values: &[V]) -> Self {
        for value in values {
            self.0.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub(crate) fn extra(mut self, extra: &ExtraQuery) -> Self {
        for (key, value) in extra {
            if self.0.iter().any(|(k, _)| k == key) {
                tracing::warn!(param = %key, "extra query parameter collides with a typed one; ignoring it");
                continue;
            }
            self.0.push((key.clone(), value.clone()));
        }
        self
    }

    pub(crate) fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Page selection shared by every list operation.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Maximum number of items to return.
    pub limit: Option<u32>,
    /// Opaque cursor returned as `next_page_token` by a previous page.
    pub page_token: Option<String>,
    /// Additional query parameters.
    pub extra: ExtraQuery,
}

impl ListParams {
    /// First page with the service's default size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continue from a previous page.
    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    /// Add a query parameter the typed fields do not cover.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Page parameters without the extras, for requests that add typed
    /// parameters of their own before [`Query::extra`].
    pub(crate) fn base_query(&self) -> Query {
        Query::new()
            .opt("limit", self.limit)
            .opt("page_token", self.page_token.as_deref())
    }

    pub(crate) fn query(&self) -> Query {
        self.base_query().extra(&self.extra)
    }
}
