use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Exact decimal price. Zero means the event is free.
pub type Money = Decimal;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub venue: String,
    pub city: String,
    pub category: String,
    /// Wall-clock time in the device's local zone; display-only.
    pub starts_at: NaiveDateTime,
    pub ends_at: Option<NaiveDateTime>,
    pub price: Money,
    pub description: Option<String>,
    pub spots_left: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Confirmed,
    CheckedIn,
    Cancelled,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Confirmed => "Confirmed",
            TicketStatus::CheckedIn => "Checked in",
            TicketStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub event_id: String,
    pub holder: String,
    pub confirmation_code: String,
    pub quantity: u32,
    pub price_paid: Money,
    pub purchased_at: NaiveDateTime,
    pub status: TicketStatus,
}
