use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer};

use crate::HolidayResponse;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Decodes a complete `bank-holidays.json` document.
pub fn parse_holidays<B: AsRef<[u8]>>(bytes: B) -> serde_json::Result<HolidayResponse> {
    serde_json::from_slice(bytes.as_ref())
}

/// Parses a strict `YYYY-MM-DD` date.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    // chrono accepts unpadded fields and signed years, the feed format does not
    let well_formed = s.len() == 10
        && s.bytes().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        });

    well_formed
        .then(|| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
        .flatten()
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn deserialize_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| {
        de::Error::invalid_value(de::Unexpected::Str(&raw), &"a date formatted as YYYY-MM-DD")
    })
}
