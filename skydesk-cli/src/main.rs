//! Main entry point for the skydesk CLI.
//!
//! This is the command-line interface for the skydesk reservation desk.
//! Each invocation loads the snapshot files, runs one operation and saves
//! what changed:
//! - flights: `add-flight`, `update-flight`, `delete-flight`, `schedule`, `flight-info`
//! - customers: `register`, `update-customer`, `remove-customer`, `customers`, `customer-info`
//! - bookings: `book`, `enqueue`, `cancel`, `queue`, `manage-queue`

mod cli;
mod commands;
mod error;
mod output;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library logging through the desk logger
    skydesk::init_logger(cli.verbose, cli.quiet).install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        no_autosave: cli.no_autosave,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::AddFlight(cmd) => cmd.execute(&global),
        cli::Command::UpdateFlight(cmd) => cmd.execute(&global),
        cli::Command::DeleteFlight(cmd) => cmd.execute(&global),
        cli::Command::Schedule(cmd) => cmd.execute(&global),
        cli::Command::FlightInfo(cmd) => cmd.execute(&global),
        cli::Command::Register(cmd) => cmd.execute(&global),
        cli::Command::UpdateCustomer(cmd) => cmd.execute(&global),
        cli::Command::RemoveCustomer(cmd) => cmd.execute(&global),
        cli::Command::CustomerInfo(cmd) => cmd.execute(&global),
        cli::Command::Customers(cmd) => cmd.execute(&global),
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::Enqueue(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::Queue(cmd) => cmd.execute(&global),
        cli::Command::ManageQueue(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
