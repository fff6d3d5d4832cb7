//! Command to display information about a specific customer.

use crate::error::CliError;
use crate::output::{write_json, OutputFormat};
use crate::utils::{open_engine, GlobalOptions};
use clap::Args;
use serde_json::json;
use skydesk::{FlightNumber, Passport};

/// Display a customer's record, bookings and queue places.
#[derive(Args)]
pub struct CustomerInfoCommand {
    /// Passport number
    #[arg(value_name = "PASSPORT")]
    pub passport: Passport,

    /// Output format (csv prints a table)
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

impl CustomerInfoCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let engine = open_engine(global)?;
        let customer = engine.customer(self.passport)?;
        let waiting: Vec<(FlightNumber, usize)> = engine
            .queues()
            .filter_map(|queue| {
                queue
                    .position(self.passport)
                    .map(|position| (queue.flight(), position))
            })
            .collect();

        if self.format == OutputFormat::Json {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            let queues: Vec<_> = waiting
                .iter()
                .map(|(flight, position)| json!({ "flight": flight, "position": position }))
                .collect();
            return write_json(
                &mut handle,
                &json!({ "customer": customer, "queues": queues }),
            );
        }

        println!("Passport: {}", customer.passport());
        println!("Name: {} {}", customer.name(), customer.surname());
        println!("Nationality: {}", customer.nationality());
        println!("Address: {}", customer.address());
        println!("Phone: {}", customer.phone());
        println!(
            "Discount: {} ({}%)",
            customer.discount(),
            customer.discount().percent()
        );
        println!("Total spent: {}", customer.total_spent());
        if customer.bookings().is_empty() {
            println!("Bookings: none");
        } else {
            println!("Bookings:");
            for number in customer.bookings() {
                match engine.flight(*number) {
                    Ok(flight) => println!(
                        "  {number} {} -> {} departs {}",
                        flight.origin(),
                        flight.destination(),
                        flight.departure()
                    ),
                    Err(_) => println!("  {number} (no longer scheduled)"),
                }
            }
        }
        for (flight, position) in waiting {
            println!("Waiting: flight {flight}, position {position}");
        }
        Ok(())
    }
}
