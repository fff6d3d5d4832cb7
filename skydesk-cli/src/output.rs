//! Listing output in table, JSON and CSV form.
//!
//! Tables are tab-separated with upper-case headers; CSV uses the same
//! columns with lower-case headers; JSON serializes the library records.

use crate::error::CliError;
use crate::utils::{format_timestamp, format_waited};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use skydesk::{Customer, Flight, WaitingQueue};
use std::io::Write;

/// Column headers for flight listings.
const FLIGHT_COLUMNS: [&str; 13] = [
    "flight",
    "from",
    "to",
    "departs",
    "arrives",
    "cost",
    "plane",
    "business",
    "economy",
    "booked_business",
    "booked_economy",
    "weather",
    "day",
];

/// Column headers for customer listings.
const CUSTOMER_COLUMNS: [&str; 9] = [
    "passport",
    "name",
    "surname",
    "nationality",
    "address",
    "phone",
    "discount",
    "total_spent",
    "bookings",
];

/// Column headers for queue listings.
const QUEUE_COLUMNS: [&str; 6] = ["position", "passport", "name", "surname", "joined_at", "waited"];

/// Output format for listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

fn flight_row(flight: &Flight) -> Vec<String> {
    vec![
        flight.number().to_string(),
        flight.origin().to_string(),
        flight.destination().to_string(),
        flight.departure().to_string(),
        flight.arrival().to_string(),
        flight.cost().to_string(),
        flight.plane_type().to_string(),
        flight.business_seats().to_string(),
        flight.economy_seats().to_string(),
        flight.booked_business().to_string(),
        flight.booked_economy().to_string(),
        flight.weather().to_string(),
        flight.day_of_week().to_string(),
    ]
}

fn customer_row(customer: &Customer) -> Vec<String> {
    let bookings = customer
        .bookings()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    vec![
        customer.passport().to_string(),
        customer.name().to_string(),
        customer.surname().to_string(),
        customer.nationality().to_string(),
        customer.address().to_string(),
        customer.phone().to_string(),
        customer.discount().to_string(),
        customer.total_spent().to_string(),
        bookings,
    ]
}

/// One waiting customer as listed.
#[derive(Serialize)]
struct QueueLine<'a> {
    position: usize,
    passport: u32,
    name: &'a str,
    surname: &'a str,
    joined_at: String,
    waited_minutes: i64,
}

/// Writes flights in `format`.
pub fn write_flights<'a>(
    out: &mut dyn Write,
    format: OutputFormat,
    flights: impl IntoIterator<Item = &'a Flight>,
) -> Result<(), CliError> {
    let flights: Vec<&Flight> = flights.into_iter().collect();
    match format {
        OutputFormat::Json => write_json(out, &flights),
        _ => write_rows(out, format, &FLIGHT_COLUMNS, flights.into_iter().map(flight_row)),
    }
}

/// Writes customers in `format`.
pub fn write_customers<'a>(
    out: &mut dyn Write,
    format: OutputFormat,
    customers: impl IntoIterator<Item = &'a Customer>,
) -> Result<(), CliError> {
    let customers: Vec<&Customer> = customers.into_iter().collect();
    match format {
        OutputFormat::Json => write_json(out, &customers),
        _ => write_rows(
            out,
            format,
            &CUSTOMER_COLUMNS,
            customers.into_iter().map(customer_row),
        ),
    }
}

/// Writes a waiting queue, oldest first, with waiting times as of `now`.
pub fn write_queue(
    out: &mut dyn Write,
    format: OutputFormat,
    queue: &WaitingQueue,
    now: DateTime<Utc>,
) -> Result<(), CliError> {
    let lines: Vec<QueueLine<'_>> = queue
        .iter()
        .enumerate()
        .map(|(at, entry)| QueueLine {
            position: at + 1,
            passport: entry.passport().value(),
            name: entry.customer().name(),
            surname: entry.customer().surname(),
            joined_at: format_timestamp(entry.joined_at()),
            waited_minutes: entry.waited(now).num_minutes(),
        })
        .collect();

    match format {
        OutputFormat::Json => write_json(out, &lines),
        _ => write_rows(
            out,
            format,
            &QUEUE_COLUMNS,
            lines.iter().map(|line| {
                vec![
                    line.position.to_string(),
                    line.passport.to_string(),
                    line.name.to_string(),
                    line.surname.to_string(),
                    line.joined_at.clone(),
                    format_waited(chrono::Duration::minutes(line.waited_minutes)),
                ]
            }),
        ),
    }
}

/// Writes any serializable value as pretty JSON.
pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(out)?;
    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

fn write_rows(
    out: &mut dyn Write,
    format: OutputFormat,
    headers: &[&str],
    rows: impl Iterator<Item = Vec<String>>,
) -> Result<(), CliError> {
    if format == OutputFormat::Csv {
        let mut writer = csv::WriterBuilder::new().from_writer(out);
        writer.write_record(headers).map_err(csv_error)?;
        for row in rows {
            writer.write_record(&row).map_err(csv_error)?;
        }
        writer.flush()?;
        return Ok(());
    }

    let header_line = headers
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;
    for row in rows {
        let row: Vec<&str> = row
            .iter()
            .map(|cell| if cell.is_empty() { "-" } else { cell.as_str() })
            .collect();
        writeln!(out, "{}", row.join("\t"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skydesk::{ClockTime, FlightNumber, FlightSpec};

    fn flight() -> Flight {
        FlightSpec {
            number: FlightNumber::new(100),
            origin: "Athens".into(),
            destination: "Rome".into(),
            departure: ClockTime::new(9, 5).unwrap(),
            arrival: ClockTime::new(11, 0).unwrap(),
            cost: 120,
            total_seats: 10,
            business_seats: 2,
            ..FlightSpec::default()
        }
        .build()
        .unwrap()
    }

    fn render(format: OutputFormat) -> String {
        let flight = flight();
        let mut out = Vec::new();
        write_flights(&mut out, format, [&flight]).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_flight_table() {
        let text = render(OutputFormat::Table);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("FLIGHT\tFROM\tTO"));
        assert_eq!(
            lines[1],
            "100\tAthens\tRome\t09:05\t11:00\t120\tunknown\t2\t8\t0\t0\tunknown\tunknown"
        );
    }

    #[test]
    fn test_flight_csv() {
        let text = render(OutputFormat::Csv);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], FLIGHT_COLUMNS.join(","));
        assert!(lines[1].starts_with("100,Athens,Rome,09:05,11:00,120,"));
    }

    #[test]
    fn test_flight_json() {
        let text = render(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["number"], 100);
        assert_eq!(value[0]["departure"], "09:05");
    }
}
