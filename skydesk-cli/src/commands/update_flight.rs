//! Update-flight command implementation.

use crate::error::CliError;
use crate::utils::{open_engine, save, GlobalOptions};
use clap::Args;
use skydesk::{ClockTime, FlightNumber, FlightUpdate};

/// Change fields of a flight; omitted fields stay as they are.
#[derive(Args)]
pub struct UpdateFlightCommand {
    /// Flight number
    #[arg(value_name = "FLIGHT")]
    pub number: FlightNumber,

    /// New departure city
    #[arg(long = "from", value_name = "CITY")]
    pub origin: Option<String>,

    /// New arrival city
    #[arg(long = "to", value_name = "CITY")]
    pub destination: Option<String>,

    /// New departure time (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub departs: Option<ClockTime>,

    /// New arrival time (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub arrives: Option<ClockTime>,

    /// New base ticket cost
    #[arg(long)]
    pub cost: Option<u32>,

    /// New aircraft type
    #[arg(long)]
    pub plane: Option<String>,

    /// New total number of seats
    #[arg(long)]
    pub seats: Option<u32>,

    /// New number of business seats
    #[arg(long)]
    pub business: Option<u32>,

    /// Corrected booked-business count
    #[arg(long, value_name = "COUNT")]
    pub booked_business: Option<u32>,

    /// Corrected booked-economy count
    #[arg(long, value_name = "COUNT")]
    pub booked_economy: Option<u32>,

    /// New weather tag
    #[arg(long)]
    pub weather: Option<String>,

    /// New day-of-week tag
    #[arg(long)]
    pub day: Option<String>,
}

impl UpdateFlightCommand {
    /// Execute the update-flight command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let number = self.number;
        let update = FlightUpdate {
            origin: self.origin,
            destination: self.destination,
            departure: self.departs,
            arrival: self.arrives,
            cost: self.cost,
            plane_type: self.plane,
            total_seats: self.seats,
            business_seats: self.business,
            booked_business: self.booked_business,
            booked_economy: self.booked_economy,
            weather: self.weather,
            day_of_week: self.day,
        };
        if update.is_empty() {
            return Err(CliError::InvalidArguments(
                "nothing to update: pass at least one field".to_string(),
            ));
        }

        let mut engine = open_engine(global)?;
        engine.update_flight(number, &update)?;
        save(&mut engine)?;

        if !global.quiet {
            eprintln!("Updated flight {number}");
        }
        Ok(())
    }
}
