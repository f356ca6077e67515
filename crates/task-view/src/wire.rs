//! Wire Decoding Helpers
//!
//! The backend stores form values verbatim, so ids show up as numbers or
//! numeric strings and dates may be empty.

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::models::Priority;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

/// Required id: number or numeric string
pub fn id<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    optional_id(deserializer)?.ok_or_else(|| de::Error::custom("missing id"))
}

/// Nullable id: null and "" both mean no reference
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(n)) => u32::try_from(n).map(Some).map_err(de::Error::custom),
        Some(RawId::Text(s)) => parse_id(&s).map_err(de::Error::custom),
    }
}

/// Parse a form/select value into an id; blank is `None`
pub fn parse_id(value: &str) -> Result<Option<u32>, std::num::ParseIntError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some)
}

/// Explicit `null` decodes like a missing key
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Priority label; null or unknown labels decode as the default
pub fn priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref().map(str::trim) {
        None | Some("") => Priority::default(),
        Some(label) => Priority::parse(label).unwrap_or_else(|| {
            log::warn!("unknown priority {:?}, using {}", label, Priority::default());
            Priority::default()
        }),
    })
}

/// Calendar date; anything unparseable decodes as no date
pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

/// Parse `YYYY-MM-DD`, also accepting a full timestamp with that prefix
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let date_part = value.get(..10).unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            log::warn!("ignoring unparseable due date {:?}: {}", value, e);
            None
        }
    }
}
