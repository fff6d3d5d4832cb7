//! Build script for skydesk-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("skydesk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run a flight reservation desk")
        .long_about(
            "Command-line tool for managing flights, customers, bookings and waiting queues",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("SKYDESK_DATA_DIR"),
        )
        .arg(
            Arg::new("no-autosave")
                .long("no-autosave")
                .help("Save once after the command instead of after every change")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("add-flight")
                .about("Add a flight to the schedule")
                .long_about("Add a flight with its route, times, cost and seat split"),
            Command::new("update-flight")
                .about("Change fields of a flight")
                .long_about("Change the given fields of a flight; the update is all or nothing"),
            Command::new("delete-flight")
                .about("Delete a flight and refund its passengers")
                .long_about("Delete a flight nobody is waiting for, refunding the base cost to every holder"),
            Command::new("schedule")
                .about("List every flight")
                .long_about("Display all flights in table, JSON or CSV format"),
            Command::new("flight-info")
                .about("Display information about a flight")
                .long_about("Show seat usage, fares and queue length of a flight"),
            Command::new("register")
                .about("Register a new customer")
                .long_about("Register a customer with contact details and a discount tier"),
            Command::new("update-customer")
                .about("Change a customer's details")
                .long_about("Change contact details or the discount tier of a customer"),
            Command::new("remove-customer")
                .about("Remove a customer without bookings")
                .long_about("Remove a customer and take them out of every waiting queue"),
            Command::new("customer-info")
                .about("Display information about a customer")
                .long_about("Show a customer's record, bookings and queue places"),
            Command::new("customers")
                .about("List registered customers")
                .long_about("Display all customers in table, JSON or CSV format"),
            Command::new("book")
                .about("Book a seat on a flight")
                .long_about("Quote or book a seat, optionally joining the queue of a full flight"),
            Command::new("enqueue")
                .about("Join a flight's waiting queue")
                .long_about("Add a customer to the waiting queue of a flight"),
            Command::new("cancel")
                .about("Cancel a booking or leave a waiting queue")
                .long_about("Cancel a booking with refund, promoting the head of the queue"),
            Command::new("queue")
                .about("Show a flight's waiting queue")
                .long_about("Display the waiting queue of a flight, oldest first"),
            Command::new("manage-queue")
                .about("Allocate seats to customers waiting for a flight")
                .long_about("Walk the waiting queue from the head, choosing a class and confirming each offer"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("skydesk.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
