//! Register command implementation.

use crate::error::CliError;
use crate::utils::{open_engine, save, GlobalOptions, NewCustomerArgs};
use clap::Args;
use skydesk::Passport;

/// Register a new customer.
#[derive(Args)]
pub struct RegisterCommand {
    /// Passport number
    #[arg(value_name = "PASSPORT")]
    pub passport: Passport,

    #[command(flatten)]
    pub details: NewCustomerArgs,
}

impl RegisterCommand {
    /// Execute the register command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let spec = self.details.into_spec(self.passport)?;
        let mut engine = open_engine(global)?;
        engine.register_customer(spec)?;
        save(&mut engine)?;

        if !global.quiet {
            eprintln!("Registered customer {}", self.passport);
        }
        Ok(())
    }
}
