//! Delete-flight command implementation.

use crate::error::CliError;
use crate::utils::{open_engine, save, GlobalOptions};
use clap::Args;
use skydesk::FlightNumber;

/// Delete a flight, refunding everyone booked on it.
#[derive(Args)]
pub struct DeleteFlightCommand {
    /// Flight number
    #[arg(value_name = "FLIGHT")]
    pub number: FlightNumber,
}

impl DeleteFlightCommand {
    /// Execute the delete-flight command.
    ///
    /// Prints one `PASSPORT REFUND` line per refunded customer.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut engine = open_engine(global)?;
        let report = engine.delete_flight(self.number)?;
        save(&mut engine)?;

        for (passport, refund) in &report.refunds {
            println!("{passport}\t{refund}");
        }
        if !global.quiet {
            eprintln!(
                "Deleted flight {} and refunded {} customer(s)",
                self.number,
                report.refunds.len()
            );
        }
        Ok(())
    }
}
