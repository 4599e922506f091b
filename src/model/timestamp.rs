use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};

use crate::error::{Result, TowerfallError};

/// The backend writes this instead of leaving a time field empty.
pub const ZERO_DATE: &str = "0001-01-01T00:00:00Z";

const ZERO_NAIVE: NaiveDateTime = match NaiveDate::from_ymd_opt(1, 1, 1) {
    Some(date) => date.and_time(NaiveTime::MIN),
    None => panic!("0001-01-01 is a valid date"),
};

/// Offset-less date-time layouts, tried in order. A trailing `Z` is
/// stripped before these are tried.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// The zero-date sentinel as an instant.
pub fn zero_date() -> DateTime<Utc> {
    ZERO_NAIVE.and_utc()
}

/// Whether `t` is the backend's "not set" instant.
pub fn is_zero(t: &DateTime<Utc>) -> bool {
    *t == zero_date()
}

/// True if the timestamp is missing or the zero-date sentinel.
pub fn is_zero_or_absent(t: Option<&DateTime<Utc>>) -> bool {
    t.is_none_or(is_zero)
}

/// Parse a backend timestamp.
///
/// Accepts:
/// - RFC 3339 with any offset (`T` or space separator),
/// - `YYYY-MM-DD[T ]HH:MM[:SS[.fff]]` with no offset or a `Z` suffix, read as UTC,
/// - bare `YYYY-MM-DD` dates, read as midnight UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = raw.strip_suffix(['Z', 'z']).unwrap_or(raw);
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
    {
        return Ok(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TowerfallError::InvalidTimestamp(raw.to_owned()))
}

/// Render a timestamp the way the backend does; unset becomes [`ZERO_DATE`].
pub fn format_timestamp(t: Option<&DateTime<Utc>>) -> String {
    match t {
        Some(t) => t.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        None => ZERO_DATE.to_owned(),
    }
}

/// Serde adapter for optional backend timestamps (`null` or missing means unset).
pub(crate) mod optional {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_timestamp(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }

    pub(crate) fn serialize<S>(t: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(t.as_ref()))
    }
}
