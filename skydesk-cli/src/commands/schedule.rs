//! Schedule command implementation.
//!
//! This module implements the `schedule` command, which lists every flight
//! in the order it was added.

use crate::error::CliError;
use crate::output::{write_flights, OutputFormat};
use crate::utils::{open_engine, GlobalOptions};
use clap::Args;

/// List every flight.
#[derive(Args)]
pub struct ScheduleCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "SKYDESK_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Only flights departing from this city
    #[arg(long = "from", value_name = "CITY")]
    pub origin: Option<String>,

    /// Only flights arriving in this city
    #[arg(long = "to", value_name = "CITY")]
    pub destination: Option<String>,

    /// Only flights with a free seat
    #[arg(long)]
    pub available: bool,
}

impl ScheduleCommand {
    /// Execute the schedule command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let engine = open_engine(global)?;

        let flights = engine.schedule().filter(|flight| {
            self.origin
                .as_deref()
                .map_or(true, |city| flight.origin().eq_ignore_ascii_case(city))
                && self
                    .destination
                    .as_deref()
                    .map_or(true, |city| flight.destination().eq_ignore_ascii_case(city))
                && (!self.available || !flight.is_fully_booked())
        });

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_flights(&mut handle, self.format, flights)
    }
}
