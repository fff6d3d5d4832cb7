//! Remove-customer command implementation.

use crate::error::CliError;
use crate::utils::{open_engine, save, GlobalOptions};
use clap::Args;
use skydesk::Passport;

/// Remove a customer who holds no bookings.
#[derive(Args)]
pub struct RemoveCustomerCommand {
    /// Passport number
    #[arg(value_name = "PASSPORT")]
    pub passport: Passport,
}

impl RemoveCustomerCommand {
    /// Execute the remove-customer command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut engine = open_engine(global)?;
        let customer = engine.remove_customer(self.passport)?;
        save(&mut engine)?;

        if !global.quiet {
            eprintln!(
                "Removed customer {} ({} {})",
                customer.passport(),
                customer.name(),
                customer.surname()
            );
        }
        Ok(())
    }
}
