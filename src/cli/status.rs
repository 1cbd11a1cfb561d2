use chrono::Local;

use crate::error::Result;
use crate::settings::{load_settings, settings_file_exists};
use crate::store::{load_store, store_path};

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = std::path::PathBuf::from(&settings.data_dir);
    let path = store_path(&data_dir);
    let user = if settings.user_name.is_empty() {
        "(not set)"
    } else {
        settings.user_name.as_str()
    };

    println!("User:      {user}");
    println!("Currency:  {}", settings.currency);
    println!("Data dir:  {}", data_dir.display());
    println!("Store:     {}", path.display());

    if !settings_file_exists() {
        println!();
        println!("Not set up yet. Run `gather init` to get started.");
        return Ok(());
    }

    if path.exists() {
        let store = load_store(&path)?;
        let upcoming = store.upcoming(Local::now().naive_local()).len();

        println!();
        println!("Events:    {}", store.events.len());
        println!("Upcoming:  {upcoming}");
        println!("Tickets:   {}", store.tickets.len());
    } else {
        println!();
        println!("Store not found. Run `gather init` to set up.");
    }

    Ok(())
}
