use chrono::Days;
use ics::{
    components::Parameter,
    properties::{Description, DtEnd, DtStart, Summary},
};

use crate::{Division, Event};

const DATE_FORMAT: &str = "%Y%m%d";

impl Division {
    #[must_use]
    pub fn to_ics(&self) -> ics::ICalendar<'_> {
        let mut icalendar = ics::ICalendar::new("2.0", &self.name);

        for event in &self.events {
            icalendar.add_event(event.to_ics());
        }

        icalendar
    }
}

impl Event {
    /// Renders the holiday as an all-day event.
    #[must_use]
    pub fn to_ics(&self) -> ics::Event<'_> {
        let start = self.date.format(DATE_FORMAT).to_string();
        let end = self
            .date
            .checked_add_days(Days::new(1))
            .unwrap_or(self.date)
            .format(DATE_FORMAT)
            .to_string();

        let id = format!("{}_{}", start, self.title.replace(' ', "-"));

        let mut ics_event = ics::Event::new(id, format!("{start}T000000Z"));

        let mut dtstart = DtStart::new(start);
        dtstart.add(Parameter::new("VALUE", "DATE"));
        ics_event.push(dtstart);

        let mut dtend = DtEnd::new(end);
        dtend.add(Parameter::new("VALUE", "DATE"));
        ics_event.push(dtend);

        ics_event.push(Summary::new(&self.title));

        if !self.notes.is_empty() {
            ics_event.push(Description::new(&self.notes));
        }

        ics_event
    }
}
