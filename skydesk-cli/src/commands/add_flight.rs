//! Add-flight command implementation.

use crate::error::CliError;
use crate::utils::{open_engine, save, GlobalOptions};
use clap::Args;
use skydesk::{ClockTime, FlightNumber, FlightSpec};

/// Add a flight to the schedule.
#[derive(Args)]
pub struct AddFlightCommand {
    /// Flight number
    #[arg(value_name = "FLIGHT")]
    pub number: FlightNumber,

    /// Departure city
    #[arg(long = "from", value_name = "CITY")]
    pub origin: String,

    /// Arrival city
    #[arg(long = "to", value_name = "CITY")]
    pub destination: String,

    /// Departure time (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub departs: ClockTime,

    /// Arrival time (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub arrives: ClockTime,

    /// Base ticket cost
    #[arg(long)]
    pub cost: u32,

    /// Total number of seats
    #[arg(long)]
    pub seats: u32,

    /// Number of business seats (the rest are economy)
    #[arg(long, default_value_t = 0)]
    pub business: u32,

    /// Aircraft type
    #[arg(long, default_value = "unknown")]
    pub plane: String,

    /// Weather tag
    #[arg(long, default_value = "unknown")]
    pub weather: String,

    /// Day-of-week tag
    #[arg(long, default_value = "unknown")]
    pub day: String,
}

impl AddFlightCommand {
    /// Execute the add-flight command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut engine = open_engine(global)?;
        let number = self.number;

        engine.add_flight(FlightSpec {
            number,
            origin: self.origin,
            destination: self.destination,
            departure: self.departs,
            arrival: self.arrives,
            cost: self.cost,
            plane_type: self.plane,
            total_seats: self.seats,
            business_seats: self.business,
            booked_business: 0,
            booked_economy: 0,
            weather: self.weather,
            day_of_week: self.day,
        })?;
        save(&mut engine)?;

        if !global.quiet {
            eprintln!("Added flight {number}");
        }
        Ok(())
    }
}
