//! Customers command implementation.
//!
//! This module implements the `customers` command, which lists registered
//! customers in ascending passport order.

use crate::error::CliError;
use crate::output::{write_customers, OutputFormat};
use crate::utils::{open_engine, GlobalOptions};
use clap::Args;
use skydesk::FlightNumber;

/// List registered customers.
#[derive(Args)]
pub struct CustomersCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "SKYDESK_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Only customers booked on this flight
    #[arg(long, value_name = "FLIGHT")]
    pub flight: Option<FlightNumber>,
}

impl CustomersCommand {
    /// Execute the customers command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let engine = open_engine(global)?;
        if let Some(number) = self.flight {
            engine.flight(number)?;
        }

        let customers = engine
            .customers()
            .filter(|customer| self.flight.map_or(true, |number| customer.has_booking(number)));

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_customers(&mut handle, self.format, customers)
    }
}
