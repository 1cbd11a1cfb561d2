use chrono::Local;
use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::{self, CurrencyFormatter};
use crate::settings::{get_data_dir, load_settings};
use crate::store::{load_store, store_path};

pub fn list(all: bool) -> Result<()> {
    let settings = load_settings();
    let prices = CurrencyFormatter::new(&settings.currency);
    let store = load_store(&store_path(&get_data_dir()))?;

    let events = if all {
        store.all_events()
    } else {
        store.upcoming(Local::now().naive_local())
    };

    if events.is_empty() {
        println!("No events. Run `gather demo` to load sample data.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Title", "Venue", "Price", "Spots"]);
    for event in events {
        table.add_row(vec![
            Cell::new(&event.id),
            Cell::new(fmt::month_day_year(event.starts_at)),
            Cell::new(&event.title),
            Cell::new(format!("{}, {}", event.venue, event.city)),
            Cell::new(prices.format_short(event.price)),
            Cell::new(
                event
                    .spots_left
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
            ),
        ]);
    }
    println!("Events\n{table}");
    Ok(())
}

pub fn show(id: &str) -> Result<()> {
    let settings = load_settings();
    let prices = CurrencyFormatter::new(&settings.currency);
    let store = load_store(&store_path(&get_data_dir()))?;
    let event = store.event(id)?;

    println!("{}", event.title.bold());
    println!("{}", event.category.dimmed());
    println!();
    println!("When:   {}", fmt::date_time(event.starts_at));
    if let Some(ends) = event.ends_at {
        println!("Until:  {}", fmt::time_only(ends));
    }
    println!("Where:  {}, {}", event.venue, event.city);
    println!("Price:  {}", prices.format(event.price).green());
    if let Some(spots) = event.spots_left {
        if spots == 0 {
            println!("        {}", "Sold out".red().bold());
        } else {
            println!("Spots:  {spots} left");
        }
    }
    if let Some(desc) = &event.description {
        println!();
        println!("{desc}");
    }
    Ok(())
}
