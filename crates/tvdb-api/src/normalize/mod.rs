//! Raw-to-canonical record transforms.
//!
//! Every transform consumes a record from [`crate::schema::raw`] and returns
//! its counterpart from [`crate::schema`]. They are pure and total: a field
//! that cannot be coerced degrades (`None` for dates and integers, `NaN` for
//! money) instead of failing the record.
//!
//! Shared coercions live here so every transform applies them the same way:
//!
//! - [`parse_date`] for every date field.
//! - [`non_zero`] / [`non_empty`] for optional ids and URLs, where `0`, `""`
//!   and missing all mean "no value". A real id of `0` is indistinguishable
//!   from an absent one.
//! - [`resolve_versioned`] for fields the service has renamed.
//! - [`lenient_float`] / [`lenient_int`] for numbers sent as strings.

mod records;

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde_json::{Map, Value};

use crate::schema::raw::NumericString;

pub use self::records::{
    artwork_extended, award_category, award_nominee, character, company, company_group,
    entity_update, episode_base, episode_extended, list_extended, list_record, movie_base,
    movie_extended, person_extended, release, search_result, season_base, season_extended,
    series_base, series_episodes, series_extended,
};

/// Leading decimal number, as a lenient float parse would read it.
#[allow(clippy::expect_used)]
static FLOAT_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("failed to compile float prefix regex")
});

/// Leading base-10 integer.
#[allow(clippy::expect_used)]
static INT_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").expect("failed to compile int prefix regex"));

/// A field whose key the service has renamed.
///
/// `canonical` is the current key and the key used on output; `aliases` are
/// older spellings, tried in order when the canonical key is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionedField {
    /// Current key.
    pub canonical: &'static str,
    /// Legacy keys in preference order.
    pub aliases: &'static [&'static str],
}

impl VersionedField {
    /// Candidate keys in preference order, canonical first.
    pub fn candidates(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.canonical).chain(self.aliases.iter().copied())
    }
}

/// Special effects companies in a company group.
pub const SPECIAL_EFFECTS: VersionedField = VersionedField {
    canonical: "specialEffects",
    aliases: &["special_effects"],
};

/// Parses a raw date into a UTC date-time.
///
/// Accepts `YYYY-MM-DD` (midnight UTC), `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS` (both UTC) and RFC 3339. Absent, empty and
/// malformed input yields `None`.
#[must_use]
pub fn parse_date(value: Option<&str>) -> Option<DateTime<Utc>> {
    let s = value?.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = try_full_datetime(s) {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn try_full_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

/// Converts epoch seconds to a UTC date-time; `None` when absent or out of range.
#[must_use]
pub fn from_epoch_seconds(seconds: Option<i64>) -> Option<DateTime<Utc>> {
    seconds.and_then(|s| DateTime::from_timestamp(s, 0))
}

/// Maps a `0` id to `None`.
#[must_use]
pub fn non_zero(id: Option<u64>) -> Option<u64> {
    id.filter(|v| *v != 0)
}

/// Maps an empty string to `None`.
#[must_use]
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Removes every candidate key of `field` from `fields` and returns the value
/// of the first one present and non-null.
pub fn resolve_versioned(fields: &mut Map<String, Value>, field: &VersionedField) -> Option<Value> {
    let mut resolved = None;
    for key in field.candidates() {
        if let Some(value) = fields.remove(key)
            && !value.is_null()
            && resolved.is_none()
        {
            resolved = Some(value);
        }
    }
    resolved
}

/// Reads the leading decimal number of `s`; `NaN` when there is none.
#[must_use]
pub fn parse_float_prefix(s: &str) -> f64 {
    FLOAT_PREFIX_RE
        .find(s.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Reads the leading base-10 integer of `s`.
#[must_use]
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    INT_PREFIX_RE
        .find(s.trim_start())
        .and_then(|m| m.as_str().parse::<i64>().ok())
}

/// Coerces a money field; absent or unparsable yields `NaN`.
#[must_use]
pub fn lenient_float(value: Option<&NumericString>) -> f64 {
    match value {
        Some(NumericString::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(NumericString::Text(s)) => parse_float_prefix(s),
        None => f64::NAN,
    }
}

/// Coerces an integer field, truncating any fractional part.
#[must_use]
pub fn lenient_int(value: Option<&NumericString>) -> Option<i64> {
    match value? {
        NumericString::Number(n) => n.as_i64().or_else(|| parse_int_prefix(&n.to_string())),
        NumericString::Text(s) => parse_int_prefix(s),
    }
}
