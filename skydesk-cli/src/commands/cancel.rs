//! Cancel command implementation.
//!
//! This module implements the `cancel` command, which cancels a booking
//! (refunding it and offering the seat to the waiting queue) or takes a
//! customer out of a queue.

use crate::error::CliError;
use crate::utils::{open_engine, save, GlobalOptions};
use clap::Args;
use skydesk::{Cancellation, FlightNumber, Passport};

/// Cancel a booking or leave a waiting queue; prints the refund.
#[derive(Args)]
pub struct CancelCommand {
    /// Flight number
    #[arg(value_name = "FLIGHT")]
    pub flight: FlightNumber,

    /// Passport number of the customer
    #[arg(long, value_name = "PASSPORT")]
    pub passport: Passport,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut engine = open_engine(global)?;
        let outcome = engine.cancel_booking(self.passport, self.flight)?;
        save(&mut engine)?;

        match outcome {
            Cancellation::Waitlist { position } => {
                if !global.quiet {
                    eprintln!(
                        "{} left the queue for flight {} (was position {position})",
                        self.passport, self.flight
                    );
                }
                println!("0");
            }
            Cancellation::Booking {
                refund,
                freed,
                promotion,
            } => {
                if !global.quiet {
                    match freed {
                        Some(class) => eprintln!(
                            "Cancelled {} on flight {}; one {class} seat freed",
                            self.passport, self.flight
                        ),
                        None => eprintln!("Cancelled {} on flight {}", self.passport, self.flight),
                    }
                    if let Some(promotion) = &promotion {
                        let flights = promotion
                            .bookings
                            .iter()
                            .map(|(number, _)| number.to_string())
                            .collect::<Vec<_>>()
                            .join(", ");
                        eprintln!(
                            "Promoted {} from the queue onto flight(s) {flights}, charged {}",
                            promotion.passport,
                            promotion.total_charged()
                        );
                    }
                }
                println!("{refund}");
            }
        }
        Ok(())
    }
}
