use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, NaiveTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::{Event, HolidayResponse, Region};

/// A four digit calendar year as used in request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Year(i32);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a four digit year")]
pub struct InvalidYear(pub String);

impl Year {
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for Year {
    type Err = InvalidYear;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(InvalidYear(s.to_string()));
        }

        s.parse().map(Year).map_err(|_| InvalidYear(s.to_string()))
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Events of every division that fall into one year. Divisions without
/// matches keep an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearHolidays<'a> {
    #[serde(rename = "england-and-wales")]
    pub england_and_wales: Vec<&'a Event>,
    pub scotland: Vec<&'a Event>,
    #[serde(rename = "northern-ireland")]
    pub northern_ireland: Vec<&'a Event>,
}

impl<'a> YearHolidays<'a> {
    #[must_use]
    pub fn region(&self, region: Region) -> &[&'a Event] {
        match region {
            Region::EnglandAndWales => &self.england_and_wales,
            Region::Scotland => &self.scotland,
            Region::NorthernIreland => &self.northern_ireland,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        Region::ALL
            .into_iter()
            .map(|region| self.region(region).len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleDate<'a> {
    pub title: &'a str,
    pub date: DateTime<Utc>,
}

fn events_in_year(events: &[Event], year: Year) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| event.date.year() == year.get())
        .collect()
}

#[must_use]
pub fn filter_by_year(data: &HolidayResponse, year: Year) -> YearHolidays<'_> {
    YearHolidays {
        england_and_wales: events_in_year(&data.england_and_wales.events, year),
        scotland: events_in_year(&data.scotland.events, year),
        northern_ireland: events_in_year(&data.northern_ireland.events, year),
    }
}

#[must_use]
pub fn filter_by_region_bunting(
    data: &HolidayResponse,
    region: Region,
    bunting: bool,
) -> Vec<&Event> {
    data.division(region)
        .events
        .iter()
        .filter(|event| event.bunting == bunting)
        .collect()
}

/// Flattens a year into title/date pairs, ordered by region then by event.
#[must_use]
pub fn project_title_date<'a>(holidays: &YearHolidays<'a>) -> Vec<TitleDate<'a>> {
    Region::ALL
        .into_iter()
        .flat_map(|region| holidays.region(region).iter().copied())
        .map(|event| TitleDate {
            title: &event.title,
            date: event.date.and_time(NaiveTime::MIN).and_utc(),
        })
        .collect()
}
