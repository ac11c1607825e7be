//! Seed data for tests.

use crate::event::Event;

fn event(id: &str, title: &str, start_date: &str, end_date: &str) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
    }
}

/// Twelve events in January 2021, three on 2021-06-23, a few later in the year and
/// a zero-length event at 2021-12-31T18:00Z.
pub fn sample_events() -> Vec<Event> {
    let mut events: Vec<Event> = (3..=14)
        .map(|day| {
            event(
                &format!("jan-{day:02}"),
                &format!("Standup {day}"),
                &format!("2021-01-{day:02}T09:00:00.000Z"),
                &format!("2021-01-{day:02}T10:00:00.000Z"),
            )
        })
        .collect();
    events.extend([
        event("jun-1", "Breakfast", "2021-06-23T08:00:00.000Z", "2021-06-23T09:00:00.000Z"),
        event("jun-2", "Review", "2021-06-23T11:00:00.000Z", "2021-06-23T12:00:00.000Z"),
        event("jun-3", "Retro", "2021-06-23T14:00:00.000Z", "2021-06-23T15:00:00.000Z"),
        event("sep-1", "Offsite", "2021-09-10T07:00:00.000Z", "2021-09-12T17:00:00.000Z"),
        event("nov-1", "Planning", "2021-11-20T13:00:00.000Z", "2021-11-20T16:00:00.000Z"),
        event("dec-1", "Countdown", "2021-12-31T18:00:00.000Z", "2021-12-31T18:00:00.000Z"),
        event("dec-2", "Dinner", "2021-12-31T19:00:00.000Z", "2021-12-31T20:00:00.000Z"),
    ]);
    events
}
