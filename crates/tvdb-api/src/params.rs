//! Query-string parameters and request parameter types.

use std::fmt::Display;

use chrono::{DateTime, Utc};

/// Ordered query-string parameters.
///
/// Setting a key that is already present replaces its value. Optional values
/// that are `None` are skipped, so they never reach the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Sets `key` to `value`.
    #[must_use]
    pub fn set(mut self, key: &str, value: impl Display) -> Self {
        let value = value.to_string();
        if let Some(slot) = self.pairs.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            self.pairs.push((String::from(key), value));
        }
        self
    }

    /// Sets `key` only when `value` is `Some`.
    #[must_use]
    pub fn set_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether no parameters are set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Parameters as key/value pairs in insertion order.
    #[must_use]
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Parameters for the `search` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Search query (required).
    pub query: String,
    /// Restrict results to one entity type (e.g. "series", "movie").
    pub kind: Option<String>,
    /// Year associated with a movie or series.
    pub year: Option<u32>,
    /// Result offset.
    pub offset: Option<u32>,
    /// Maximum number of results.
    pub limit: Option<u32>,
}

impl SearchParams {
    /// Creates search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            kind: None,
            year: None,
            offset: None,
            limit: None,
        }
    }

    /// Sets the entity type filter.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the result offset.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the result limit.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .set("query", &self.query)
            .set_opt("type", self.kind.as_deref())
            .set_opt("year", self.year)
            .set_opt("offset", self.offset)
            .set_opt("limit", self.limit)
    }
}

/// Parameters for the `updates` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatesParams {
    /// Lower bound, in epoch seconds.
    pub since: i64,
    /// Entity type filter (e.g. "series", "episodes").
    pub kind: Option<String>,
    /// Action filter (e.g. "create", "update", "delete").
    pub action: Option<String>,
}

impl UpdatesParams {
    /// Creates update params starting at `since` epoch seconds.
    #[must_use]
    pub const fn new(since: i64) -> Self {
        Self {
            since,
            kind: None,
            action: None,
        }
    }

    /// Creates update params starting at `since`, floored to whole seconds.
    #[must_use]
    pub fn since_datetime(since: DateTime<Utc>) -> Self {
        Self::new(since.timestamp())
    }

    /// Sets the entity type filter.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets the action filter.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .set("since", self.since)
            .set_opt("type", self.kind.as_deref())
            .set_opt("action", self.action.as_deref())
    }
}
