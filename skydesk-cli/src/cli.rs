//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddFlightCommand, BookCommand, CancelCommand, CustomerInfoCommand, CustomersCommand,
    DeleteFlightCommand, EnqueueCommand, FlightInfoCommand, ManageQueueCommand, QueueCommand,
    RegisterCommand, RemoveCustomerCommand, ScheduleCommand, UpdateCustomerCommand,
    UpdateFlightCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for running a flight reservation desk.
#[derive(Parser)]
#[command(name = "skydesk")]
#[command(version, about = "Run a flight reservation desk", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "SKYDESK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Save once after the command instead of after every change
    #[arg(long, global = true)]
    pub no_autosave: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Add a flight to the schedule
    AddFlight(AddFlightCommand),

    /// Change fields of a flight
    UpdateFlight(UpdateFlightCommand),

    /// Delete a flight and refund its passengers
    DeleteFlight(DeleteFlightCommand),

    /// List every flight
    Schedule(ScheduleCommand),

    /// Display information about a flight
    FlightInfo(FlightInfoCommand),

    /// Register a new customer
    Register(RegisterCommand),

    /// Change a customer's details
    UpdateCustomer(UpdateCustomerCommand),

    /// Remove a customer without bookings
    RemoveCustomer(RemoveCustomerCommand),

    /// Display information about a customer
    CustomerInfo(CustomerInfoCommand),

    /// List registered customers
    Customers(CustomersCommand),

    /// Book a seat on a flight
    Book(BookCommand),

    /// Join a flight's waiting queue
    Enqueue(EnqueueCommand),

    /// Cancel a booking or leave a waiting queue
    Cancel(CancelCommand),

    /// Show a flight's waiting queue
    Queue(QueueCommand),

    /// Allocate seats to customers waiting for a flight
    ManageQueue(ManageQueueCommand),
}
