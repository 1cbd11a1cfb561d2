use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::{self, CurrencyFormatter};
use crate::models::TicketStatus;
use crate::settings::{get_data_dir, load_settings};
use crate::store::{load_store, store_path};

pub fn list() -> Result<()> {
    let settings = load_settings();
    let prices = CurrencyFormatter::new(&settings.currency);
    let store = load_store(&store_path(&get_data_dir()))?;

    if store.tickets.is_empty() {
        println!("No tickets yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Code", "Event", "When", "Holder", "Qty", "Paid", "Status"]);
    for ticket in &store.tickets {
        let (title, when) = match store.event(&ticket.event_id) {
            Ok(event) => (
                event.title.clone(),
                fmt::month_day_year(event.starts_at),
            ),
            Err(_) => (ticket.event_id.clone(), String::new()),
        };
        table.add_row(vec![
            Cell::new(&ticket.confirmation_code),
            Cell::new(title),
            Cell::new(when),
            Cell::new(&ticket.holder),
            Cell::new(ticket.quantity),
            Cell::new(prices.format_short(ticket.price_paid)),
            Cell::new(ticket.status.label()),
        ]);
    }
    println!("Tickets\n{table}");
    Ok(())
}

pub fn show(code: &str) -> Result<()> {
    let settings = load_settings();
    let prices = CurrencyFormatter::new(&settings.currency);
    let store = load_store(&store_path(&get_data_dir()))?;
    let ticket = store.ticket_by_code(code)?;
    let event = store.event(&ticket.event_id)?;

    let status = match ticket.status {
        TicketStatus::Confirmed => ticket.status.label().green().bold(),
        TicketStatus::CheckedIn => ticket.status.label().blue().bold(),
        TicketStatus::Cancelled => ticket.status.label().red().bold(),
    };

    println!("{}", event.title.bold());
    println!("{status}");
    println!();
    println!("Code:       {}", ticket.confirmation_code.bold());
    println!("Holder:     {}", ticket.holder);
    println!("When:       {}", fmt::date_time(event.starts_at));
    println!("Where:      {}, {}", event.venue, event.city);
    println!("Admits:     {}", ticket.quantity);
    println!("Paid:       {}", prices.format(ticket.price_paid));
    println!("Purchased:  {}", fmt::month_day_year(ticket.purchased_at));
    Ok(())
}
