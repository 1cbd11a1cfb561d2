mod cli;
mod error;
mod fmt;
mod models;
mod settings;
mod store;

use clap::Parser;

use cli::{Cli, Commands, EventsCommands, TicketsCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Events { command } => match command {
            EventsCommands::List { all } => cli::events::list(all),
            EventsCommands::Show { id } => cli::events::show(&id),
        },
        Commands::Tickets { command } => match command {
            TicketsCommands::List => cli::tickets::list(),
            TicketsCommands::Show { code } => cli::tickets::show(&code),
        },
        Commands::Currency { code } => cli::currency::run(code.as_deref()),
        Commands::Demo => cli::demo::run(),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
