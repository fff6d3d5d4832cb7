//! Update-customer command implementation.

use crate::error::CliError;
use crate::utils::{open_engine, save, GlobalOptions, NewCustomerArgs};
use clap::Args;
use skydesk::{CustomerUpdate, Passport};

/// Change a customer's details; omitted fields stay as they are.
#[derive(Args)]
pub struct UpdateCustomerCommand {
    /// Passport number
    #[arg(value_name = "PASSPORT")]
    pub passport: Passport,

    #[command(flatten)]
    pub details: NewCustomerArgs,
}

impl UpdateCustomerCommand {
    /// Execute the update-customer command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let details = self.details;
        let update = CustomerUpdate {
            name: details.name,
            surname: details.surname,
            nationality: details.nationality,
            address: details.address,
            phone: details.phone,
            discount: details.discount,
        };
        if update == CustomerUpdate::default() {
            return Err(CliError::InvalidArguments(
                "nothing to update: pass at least one field".to_string(),
            ));
        }

        let mut engine = open_engine(global)?;
        engine.update_customer(self.passport, &update)?;
        save(&mut engine)?;

        if !global.quiet {
            eprintln!("Updated customer {}", self.passport);
        }
        Ok(())
    }
}
