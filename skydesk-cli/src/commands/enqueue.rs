//! Enqueue command implementation.

use crate::error::CliError;
use crate::utils::{open_engine, save, GlobalOptions, NewCustomerArgs};
use clap::Args;
use skydesk::{FlightNumber, Passport};

/// Join a flight's waiting queue; prints the queue position.
#[derive(Args)]
pub struct EnqueueCommand {
    /// Flight number
    #[arg(value_name = "FLIGHT")]
    pub flight: FlightNumber,

    /// Passport number of the customer
    #[arg(long, value_name = "PASSPORT")]
    pub passport: Passport,

    #[command(flatten)]
    pub customer: NewCustomerArgs,
}

impl EnqueueCommand {
    /// Execute the enqueue command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let patron = self.customer.patron(self.passport)?;
        let mut engine = open_engine(global)?;
        let position = engine.enqueue(patron, self.flight)?;
        save(&mut engine)?;

        if !global.quiet {
            eprintln!(
                "{} is waiting for flight {} at position {position}",
                self.passport, self.flight
            );
        }
        println!("{position}");
        Ok(())
    }
}
