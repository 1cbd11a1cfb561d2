pub mod currency;
pub mod demo;
pub mod events;
pub mod init;
pub mod status;
pub mod tickets;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gather", about = "Event discovery and ticketing from the terminal.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up Gather: choose a data directory and create an empty store.
    Init {
        /// Path for Gather data (default: ~/Documents/gather)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Browse events.
    Events {
        #[command(subcommand)]
        command: EventsCommands,
    },
    /// View your tickets.
    Tickets {
        #[command(subcommand)]
        command: TicketsCommands,
    },
    /// Show or change the display currency.
    Currency {
        /// Three-letter code, e.g. USD or EUR; omit to show the current one
        code: Option<String>,
    },
    /// Load sample events and tickets to explore Gather.
    Demo,
    /// Show current settings and store statistics.
    Status,
}

#[derive(Subcommand)]
pub enum EventsCommands {
    /// List upcoming events.
    List {
        /// Include events that already happened
        #[arg(long)]
        all: bool,
    },
    /// Show one event in full.
    Show {
        /// Event id (first column of `gather events list`)
        id: String,
    },
}

#[derive(Subcommand)]
pub enum TicketsCommands {
    /// List your tickets.
    List,
    /// Show a ticket confirmation.
    Show {
        /// Confirmation code, e.g. GTHR-0001
        code: String,
    },
}
