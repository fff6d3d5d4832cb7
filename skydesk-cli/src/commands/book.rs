//! Book command implementation.
//!
//! This module implements the `book` command, which prices and books a seat
//! for an existing or new customer.

use crate::error::CliError;
use crate::utils::{open_engine, save, GlobalOptions, NewCustomerArgs};
use clap::Args;
use skydesk::{Error, FlightNumber, Passport, SeatClass};

/// Book a seat on a flight.
///
/// Prints the price charged (or quoted, with `--dry-run`). With `--wait`, a
/// fully booked flight puts the customer in its waiting queue instead and
/// the queue position is printed.
#[derive(Args)]
pub struct BookCommand {
    /// Flight number
    #[arg(value_name = "FLIGHT")]
    pub flight: FlightNumber,

    /// Passport number of the customer
    #[arg(long, value_name = "PASSPORT")]
    pub passport: Passport,

    /// Seat class (business or economy)
    #[arg(long, default_value = "economy")]
    pub class: SeatClass,

    /// Join the waiting queue if the flight is fully booked
    #[arg(long, conflicts_with = "dry_run")]
    pub wait: bool,

    /// Only print the quote
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub customer: NewCustomerArgs,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let patron = self.customer.patron(self.passport)?;
        let mut engine = open_engine(global)?;

        if self.dry_run {
            let quote = engine.quote(&patron, self.flight, self.class)?;
            if !global.quiet {
                eprintln!(
                    "Dry run - {} seat on flight {}: fare {}, {} discount",
                    quote.class, quote.flight, quote.base_fare, quote.discount
                );
            }
            println!("{}", quote.price);
            return Ok(());
        }

        match engine.book_flight(patron.clone(), self.flight, self.class) {
            Ok(ticket) => {
                save(&mut engine)?;
                if !global.quiet {
                    eprintln!(
                        "Booked {} seat on flight {} for {}",
                        ticket.class, ticket.flight, ticket.passport
                    );
                }
                println!("{}", ticket.price);
                Ok(())
            }
            Err(Error::FullyBooked(number)) if self.wait => {
                let position = engine.enqueue(patron, number)?;
                save(&mut engine)?;
                if !global.quiet {
                    eprintln!("Flight {number} is fully booked; waiting at position {position}");
                }
                println!("{position}");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
