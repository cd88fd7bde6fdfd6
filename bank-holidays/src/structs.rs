use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parser::{deserialize_date, null_as_default};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HolidayResponse {
    #[serde(rename = "england-and-wales")]
    pub england_and_wales: Division,
    pub scotland: Division,
    #[serde(rename = "northern-ireland")]
    pub northern_ireland: Division,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Division {
    #[serde(rename = "division", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<Event>,
}

/// A single bank holiday. The date is read from the feed but left out when
/// serializing, only the title/date projection exposes it.
///
/// Only `date` is mandatory, other fields fall back to their defaults when
/// missing or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "deserialize_date", skip_serializing)]
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bunting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    EnglandAndWales,
    Scotland,
    NorthernIreland,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region `{0}`")]
pub struct UnknownRegion(pub String);

impl Region {
    pub const ALL: [Region; 3] = [
        Region::EnglandAndWales,
        Region::Scotland,
        Region::NorthernIreland,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Region::EnglandAndWales => "england-and-wales",
            Region::Scotland => "scotland",
            Region::NorthernIreland => "northern-ireland",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

impl HolidayResponse {
    #[must_use]
    pub fn division(&self, region: Region) -> &Division {
        match region {
            Region::EnglandAndWales => &self.england_and_wales,
            Region::Scotland => &self.scotland,
            Region::NorthernIreland => &self.northern_ireland,
        }
    }
}
