use chrono::{Duration, Local, NaiveDateTime};

use crate::error::Result;
use crate::models::{Event, Money, Ticket, TicketStatus};
use crate::settings::get_data_dir;
use crate::store::{save_store, store_path, Store};

struct DemoEvent {
    id: &'static str,
    title: &'static str,
    venue: &'static str,
    city: &'static str,
    category: &'static str,
    days_ahead: i64,
    hour: u32,
    minute: u32,
    /// Price in cents; 0 means free.
    cents: i64,
    spots_left: Option<u32>,
    description: Option<&'static str>,
}

const EVENTS: &[DemoEvent] = &[
    DemoEvent {
        id: "ev-rooftop",
        title: "Rooftop Sunset Social",
        venue: "The Perch",
        city: "Portland",
        category: "Social",
        days_ahead: 3,
        hour: 19,
        minute: 30,
        cents: 0,
        spots_left: Some(24),
        description: Some("Casual drinks and city views. First round on us."),
    },
    DemoEvent {
        id: "ev-vinyl",
        title: "Vinyl Night: Motown Classics",
        venue: "Echo Room",
        city: "Portland",
        category: "Music",
        days_ahead: 6,
        hour: 20,
        minute: 0,
        cents: 2550,
        spots_left: Some(60),
        description: Some("All-vinyl DJ set, two floors, late bar."),
    },
    DemoEvent {
        id: "ev-pasta",
        title: "Handmade Pasta Workshop",
        venue: "Flour & Salt Studio",
        city: "Beaverton",
        category: "Food & Drink",
        days_ahead: 10,
        hour: 18,
        minute: 0,
        cents: 7500,
        spots_left: Some(8),
        description: Some("Two hours, three shapes, dinner included."),
    },
    DemoEvent {
        id: "ev-trivia",
        title: "Pub Trivia Tuesday",
        venue: "The Crow's Nest",
        city: "Portland",
        category: "Games",
        days_ahead: 14,
        hour: 19,
        minute: 0,
        cents: 0,
        spots_left: None,
        description: None,
    },
    DemoEvent {
        id: "ev-gala",
        title: "Harborview Charity Gala",
        venue: "Grand Ballroom",
        city: "Portland",
        category: "Fundraiser",
        days_ahead: 30,
        hour: 18,
        minute: 30,
        cents: 123450,
        spots_left: Some(2),
        description: Some("Black tie. Dinner, auction, and a live band."),
    },
    DemoEvent {
        id: "ev-run",
        title: "Saturday Morning Trail Run",
        venue: "Forest Park Trailhead",
        city: "Portland",
        category: "Outdoors",
        days_ahead: 25,
        hour: 8,
        minute: 0,
        cents: 2500,
        spots_left: Some(15),
        description: Some("10k at conversation pace. All levels welcome."),
    },
];

struct DemoTicket {
    id: &'static str,
    event_id: &'static str,
    holder: &'static str,
    confirmation_code: &'static str,
    quantity: u32,
    cents: i64,
    days_ago: i64,
    status: TicketStatus,
}

const TICKETS: &[DemoTicket] = &[
    DemoTicket {
        id: "tk-0001",
        event_id: "ev-rooftop",
        holder: "Alex Rivera",
        confirmation_code: "GTHR-4821",
        quantity: 2,
        cents: 0,
        days_ago: 4,
        status: TicketStatus::Confirmed,
    },
    DemoTicket {
        id: "tk-0002",
        event_id: "ev-vinyl",
        holder: "Alex Rivera",
        confirmation_code: "GTHR-5197",
        quantity: 2,
        cents: 5100,
        days_ago: 2,
        status: TicketStatus::Confirmed,
    },
    DemoTicket {
        id: "tk-0003",
        event_id: "ev-pasta",
        holder: "Alex Rivera",
        confirmation_code: "GTHR-6033",
        quantity: 1,
        cents: 7500,
        days_ago: 1,
        status: TicketStatus::Cancelled,
    },
];

fn event_from(demo: &DemoEvent, now: NaiveDateTime) -> Event {
    let starts_at = now + Duration::days(demo.days_ahead);
    let starts_at = starts_at
        .date()
        .and_hms_opt(demo.hour, demo.minute, 0)
        .unwrap_or(starts_at);
    Event {
        id: demo.id.to_string(),
        title: demo.title.to_string(),
        venue: demo.venue.to_string(),
        city: demo.city.to_string(),
        category: demo.category.to_string(),
        starts_at,
        ends_at: Some(starts_at + Duration::hours(2)),
        price: Money::new(demo.cents, 2),
        description: demo.description.map(str::to_string),
        spots_left: demo.spots_left,
    }
}

fn ticket_from(demo: &DemoTicket, now: NaiveDateTime) -> Ticket {
    Ticket {
        id: demo.id.to_string(),
        event_id: demo.event_id.to_string(),
        holder: demo.holder.to_string(),
        confirmation_code: demo.confirmation_code.to_string(),
        quantity: demo.quantity,
        price_paid: Money::new(demo.cents, 2),
        purchased_at: now - Duration::days(demo.days_ago),
        status: demo.status,
    }
}

pub fn run() -> Result<()> {
    let now = Local::now().naive_local();
    let store = Store {
        events: EVENTS.iter().map(|e| event_from(e, now)).collect(),
        tickets: TICKETS.iter().map(|t| ticket_from(t, now)).collect(),
    };

    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir)?;
    save_store(&store_path(&data_dir), &store)?;

    println!(
        "Loaded {} sample events and {} tickets.",
        store.events.len(),
        store.tickets.len()
    );
    println!("Try `gather events list` or `gather tickets show GTHR-4821`.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_demo_events_are_in_the_future() {
        let now = base();
        for demo in EVENTS {
            let event = event_from(demo, now);
            assert!(event.starts_at > now, "{} is not upcoming", event.id);
        }
    }

    #[test]
    fn test_demo_prices_are_exact() {
        let now = base();
        let gala = EVENTS.iter().find(|e| e.id == "ev-gala").unwrap();
        assert_eq!(event_from(gala, now).price, dec!(1234.50));
        let rooftop = EVENTS.iter().find(|e| e.id == "ev-rooftop").unwrap();
        assert!(event_from(rooftop, now).price.is_zero());
    }

    #[test]
    fn test_demo_tickets_reference_demo_events() {
        for ticket in TICKETS {
            assert!(
                EVENTS.iter().any(|e| e.id == ticket.event_id),
                "{} points at a missing event",
                ticket.id
            );
        }
    }
}
