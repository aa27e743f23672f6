//! Field decoders for the loose shapes the service sends.

use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::raw::CompanyGroup;

/// Deserializes `null` as the field type's default.
///
/// Missing keys are covered by `#[serde(default)]`; this makes an explicit
/// `null` decode the same way.
pub(super) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserializes a singular relation.
///
/// `null`, `[]` and `{}` all mean "no related record". Any other array is
/// rejected rather than read positionally into the record's fields.
pub(super) fn relation<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Array(items) if items.is_empty() => Ok(None),
        Value::Object(fields) if fields.is_empty() => Ok(None),
        Value::Array(_) => Err(D::Error::invalid_type(
            Unexpected::Seq,
            &"a record, null or an empty array",
        )),
        value => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
    }
}

/// Deserializes a company group.
///
/// Only an object carries companies. `null`, arrays and scalars decode as
/// `None` and normalize to a group of empty collections.
pub(super) fn company_group<'de, D>(deserializer: D) -> Result<Option<CompanyGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}
