//! Command to display information about a specific flight.

use crate::error::CliError;
use crate::output::{write_json, OutputFormat};
use crate::utils::{open_engine, GlobalOptions};
use clap::Args;
use serde_json::json;
use skydesk::{FlightNumber, SeatClass};

/// Display information about a specific flight.
#[derive(Args)]
pub struct FlightInfoCommand {
    /// Flight number
    #[arg(value_name = "FLIGHT")]
    pub number: FlightNumber,

    /// Output format (csv prints a table)
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

impl FlightInfoCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let engine = open_engine(global)?;
        let flight = engine.flight(self.number)?;
        let waiting = engine
            .queue(self.number)?
            .map_or(0, skydesk::WaitingQueue::size);

        if self.format == OutputFormat::Json {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            return write_json(&mut handle, &json!({ "flight": flight, "waiting": waiting }));
        }

        println!("Flight: {}", flight.number());
        println!("Route: {} -> {}", flight.origin(), flight.destination());
        println!("Departs: {}", flight.departure());
        println!("Arrives: {}", flight.arrival());
        println!("Day: {}", flight.day_of_week());
        println!("Plane: {}", flight.plane_type());
        println!("Weather: {}", flight.weather());
        println!("Cost: {}", flight.cost());
        println!(
            "Business: {}/{} booked, fare {}",
            flight.booked_business(),
            flight.business_seats(),
            flight.fare(SeatClass::Business)
        );
        println!(
            "Economy: {}/{} booked, fare {}",
            flight.booked_economy(),
            flight.economy_seats(),
            flight.fare(SeatClass::Economy)
        );
        println!(
            "Status: {}",
            if flight.is_fully_booked() {
                "fully booked"
            } else {
                "open"
            }
        );
        println!("Waiting: {waiting}");
        Ok(())
    }
}
