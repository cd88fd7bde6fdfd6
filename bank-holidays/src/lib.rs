mod filter;
mod parser;
mod structs;

#[cfg(feature = "ics")]
mod ics;

pub use filter::{
    filter_by_region_bunting, filter_by_year, project_title_date, InvalidYear, TitleDate, Year,
    YearHolidays,
};
pub use parser::{parse_date, parse_holidays};
pub use structs::{Division, Event, HolidayResponse, Region, UnknownRegion};
