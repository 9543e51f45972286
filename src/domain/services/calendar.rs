use crate::domain::models::{booking::BookingRecord, schedule::{Schedule, ScheduleEntry}};
use icalendar::{Calendar, Component, Event as IcalEvent, EventLike};

/// Generates an iCalendar (.ics) string for a booked slot
pub fn generate_ics(schedule: &Schedule, entry: &ScheduleEntry, record: &BookingRecord) -> String {
    let slot = entry.to_slot();

    let mut ical_event = IcalEvent::new();
    ical_event
        .summary(&schedule.title)
        .description(&schedule.info_text)
        .starts(slot.start_time)
        .uid(&record.id);
    if let Some(end) = slot.end_time() {
        ical_event.ends(end);
    }

    let mut calendar = Calendar::new();
    calendar.push(ical_event.done());
    calendar.to_string()
}
