//! Line formats of the snapshot files.
//!
//! Records are written without any quoting, so a text field must never
//! contain the field separator or a line break. [`check_text_field`] guards
//! every text field on its way into a flight or customer.

use csv::StringRecord;

use crate::customer::{Customer, CustomerSpec, DiscountTier, Passport};
use crate::error::{Error, Result};
use crate::flight::{parse_digits, ClockTime, Flight, FlightNumber, FlightSpec};
use crate::queue::WaitingQueue;

/// Separates fields of flight and customer records.
pub const FIELD_DELIMITER: u8 = b',';
/// Separates the flight number from the passports of a queue record.
pub const QUEUE_DELIMITER: u8 = b':';
/// Separates items of a list field.
pub const LIST_SEPARATOR: char = ';';

const FLIGHT_FIELDS: usize = 15;
const CUSTOMER_FIELDS: usize = 8;

/// Rejects text that cannot be stored in a snapshot record.
pub(crate) fn check_text_field(field: &str, value: &str) -> Result<()> {
    let message = if value.trim().is_empty() {
        "must not be empty"
    } else if value.contains(char::from(FIELD_DELIMITER)) {
        "must not contain ','"
    } else if value.contains(['\n', '\r']) {
        "must not contain line breaks"
    } else {
        return Ok(());
    };
    Err(Error::Validation {
        field: field.into(),
        message: message.into(),
    })
}

/// Encodes a flight as its 15 fields.
#[must_use]
pub fn encode_flight(flight: &Flight) -> StringRecord {
    StringRecord::from(vec![
        flight.number().to_string(),
        flight.origin().to_string(),
        flight.destination().to_string(),
        flight.departure().to_string(),
        flight.arrival().to_string(),
        flight.cost().to_string(),
        flight.plane_type().to_string(),
        flight.total_seats().to_string(),
        flight.total_booked().to_string(),
        flight.business_seats().to_string(),
        flight.booked_business().to_string(),
        flight.economy_seats().to_string(),
        flight.booked_economy().to_string(),
        flight.weather().to_string(),
        flight.day_of_week().to_string(),
    ])
}

/// Decodes a flight record.
///
/// The redundant columns (booked total and economy seats) must agree with
/// the others.
///
/// # Errors
///
/// Returns [`Error::Parse`] naming `line` if the record is malformed.
pub fn decode_flight(record: &StringRecord, line: u64) -> Result<Flight> {
    let malformed = |reason: String| Error::Parse { line, reason };
    if record.len() != FLIGHT_FIELDS {
        return Err(malformed(format!(
            "expected {FLIGHT_FIELDS} fields, found {}",
            record.len()
        )));
    }
    let field = |at: usize| record.get(at).unwrap_or_default();
    let number = |at: usize, name: &str| {
        parse_digits(field(at)).ok_or_else(|| malformed(format!("{name} '{}' is not a number", field(at))))
    };
    let time = |at: usize| {
        field(at)
            .parse::<ClockTime>()
            .map_err(|e| malformed(e.to_string()))
    };

    let spec = FlightSpec {
        number: FlightNumber::new(number(0, "flight number")?),
        origin: field(1).to_string(),
        destination: field(2).to_string(),
        departure: time(3)?,
        arrival: time(4)?,
        cost: number(5, "cost")?,
        plane_type: field(6).to_string(),
        total_seats: number(7, "total seats")?,
        business_seats: number(9, "business seats")?,
        booked_business: number(10, "booked business")?,
        booked_economy: number(12, "booked economy")?,
        weather: field(13).to_string(),
        day_of_week: field(14).to_string(),
    };
    let booked = number(8, "booked seats")?;
    let economy = number(11, "economy seats")?;

    let flight = spec.build().map_err(|e| malformed(e.to_string()))?;
    if flight.total_booked() != booked {
        return Err(malformed(format!(
            "booked seats {booked} disagree with class counts {}",
            flight.total_booked()
        )));
    }
    if flight.economy_seats() != economy {
        return Err(malformed(format!(
            "economy seats {economy} disagree with total minus business {}",
            flight.economy_seats()
        )));
    }
    Ok(flight)
}

/// Encodes a customer; the booking list is omitted when empty.
#[must_use]
pub fn encode_customer(customer: &Customer) -> StringRecord {
    let mut fields = vec![
        customer.passport().to_string(),
        customer.name().to_string(),
        customer.surname().to_string(),
        customer.nationality().to_string(),
        customer.address().to_string(),
        customer.phone().to_string(),
        customer.discount().code().to_string(),
        customer.total_spent().to_string(),
    ];
    if !customer.bookings().is_empty() {
        fields.push(join_list(customer.bookings()));
    }
    StringRecord::from(fields)
}

/// Decodes a customer record of 8 or 9 fields.
///
/// # Errors
///
/// Returns [`Error::Parse`] naming `line` if the record is malformed.
pub fn decode_customer(record: &StringRecord, line: u64) -> Result<Customer> {
    let malformed = |reason: String| Error::Parse { line, reason };
    if record.len() != CUSTOMER_FIELDS && record.len() != CUSTOMER_FIELDS + 1 {
        return Err(malformed(format!(
            "expected {CUSTOMER_FIELDS} or {} fields, found {}",
            CUSTOMER_FIELDS + 1,
            record.len()
        )));
    }
    let field = |at: usize| record.get(at).unwrap_or_default();

    let passport = field(0)
        .parse::<Passport>()
        .map_err(|e| malformed(e.to_string()))?;
    let discount = field(6)
        .parse::<u8>()
        .ok()
        .and_then(DiscountTier::from_code)
        .ok_or_else(|| malformed(format!("discount code '{}' is not 0-4", field(6))))?;
    let total_spent = field(7)
        .parse::<i64>()
        .map_err(|_| malformed(format!("total spent '{}' is not an integer", field(7))))?;
    let bookings = split_list(record.get(CUSTOMER_FIELDS).unwrap_or_default(), |token| {
        token.parse::<FlightNumber>()
    })
    .map_err(|e| malformed(e.to_string()))?;

    let spec = CustomerSpec {
        passport,
        name: field(1).to_string(),
        surname: field(2).to_string(),
        nationality: field(3).to_string(),
        address: field(4).to_string(),
        phone: field(5).to_string(),
        discount,
    };
    Customer::restore(spec, total_spent, bookings).map_err(|e| malformed(e.to_string()))
}

/// Encodes a queue as `flight` and the passports oldest first.
#[must_use]
pub fn encode_queue(queue: &WaitingQueue) -> StringRecord {
    let passports: Vec<Passport> = queue.iter().map(|entry| entry.passport()).collect();
    StringRecord::from(vec![queue.flight().to_string(), join_list(&passports)])
}

/// Decodes a queue record into its flight and passports, oldest first.
///
/// # Errors
///
/// Returns [`Error::Parse`] naming `line` if the record is malformed.
pub fn decode_queue(record: &StringRecord, line: u64) -> Result<(FlightNumber, Vec<Passport>)> {
    let malformed = |reason: String| Error::Parse { line, reason };
    if record.len() != 2 {
        return Err(malformed(format!(
            "expected 'flight:passports', found {} part(s)",
            record.len()
        )));
    }
    let flight = record
        .get(0)
        .unwrap_or_default()
        .parse::<FlightNumber>()
        .map_err(|e| malformed(e.to_string()))?;
    let passports = split_list(record.get(1).unwrap_or_default(), str::parse::<Passport>)
        .map_err(|e| malformed(e.to_string()))?;
    Ok((flight, passports))
}

fn join_list<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&LIST_SEPARATOR.to_string())
}

fn split_list<T>(field: &str, parse: impl Fn(&str) -> Result<T>) -> Result<Vec<T>> {
    field
        .split(LIST_SEPARATOR)
        .filter(|token| !token.is_empty())
        .map(parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str, delimiter: char) -> StringRecord {
        StringRecord::from(line.split(delimiter).collect::<Vec<_>>())
    }

    const FLIGHT_LINE: &str = "100,Athens,Rome,09:00,11:30,120,A320,10,3,2,1,8,2,sunny,monday";

    #[test]
    fn test_flight_line() {
        let flight = decode_flight(&record(FLIGHT_LINE, ','), 1).unwrap();
        assert_eq!(flight.number(), FlightNumber::new(100));
        assert_eq!(flight.booked_business(), 1);
        assert_eq!(flight.booked_economy(), 2);
        assert_eq!(
            encode_flight(&flight).iter().collect::<Vec<_>>().join(","),
            FLIGHT_LINE
        );
    }

    #[test]
    fn test_flight_wrong_field_count() {
        let err = decode_flight(&record("100,Athens,Rome", ','), 4).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 4, .. }));
    }

    #[test]
    fn test_flight_inconsistent_counts() {
        let line = FLIGHT_LINE.replace(",10,3,2,", ",10,4,2,");
        assert!(decode_flight(&record(&line, ','), 1).is_err());
        let line = FLIGHT_LINE.replace(",8,2,sunny", ",7,2,sunny");
        assert!(decode_flight(&record(&line, ','), 1).is_err());
    }

    #[test]
    fn test_flight_bad_time() {
        let line = FLIGHT_LINE.replace("09:00", "9:00");
        let err = decode_flight(&record(&line, ','), 2).unwrap_err();
        assert!(err.to_string().contains("HH:MM"));
    }

    #[test]
    fn test_customer_without_bookings() {
        let line = "7,Ada,Lovelace,British,London,4420,1,0";
        let customer = decode_customer(&record(line, ','), 1).unwrap();
        assert_eq!(customer.discount(), DiscountTier::Student);
        assert!(customer.bookings().is_empty());
        assert_eq!(encode_customer(&customer).len(), 8);
    }

    #[test]
    fn test_customer_with_bookings_and_negative_spend() {
        let line = "7,Ada,Lovelace,British,London,4420,4,-35,100;200";
        let customer = decode_customer(&record(line, ','), 1).unwrap();
        assert_eq!(customer.total_spent(), -35);
        assert_eq!(
            customer.bookings(),
            [FlightNumber::new(100), FlightNumber::new(200)]
        );
        assert_eq!(
            encode_customer(&customer).iter().collect::<Vec<_>>().join(","),
            line
        );
    }

    #[test]
    fn test_customer_bad_discount() {
        let line = "7,Ada,Lovelace,British,London,4420,9,0";
        assert!(decode_customer(&record(line, ','), 1).is_err());
    }

    #[test]
    fn test_queue_lines() {
        let (flight, passports) = decode_queue(&record("100:5;3;9", ':'), 1).unwrap();
        assert_eq!(flight, FlightNumber::new(100));
        assert_eq!(passports, [5, 3, 9].map(Passport::new));

        let (_, passports) = decode_queue(&record("100:", ':'), 1).unwrap();
        assert!(passports.is_empty());

        assert!(decode_queue(&record("100", ':'), 1).is_err());
        assert!(decode_queue(&record("100:5;x", ':'), 1).is_err());
    }

    #[test]
    fn test_check_text_field() {
        assert!(check_text_field("name", "Ada").is_ok());
        assert!(check_text_field("name", "").is_err());
        assert!(check_text_field("name", "   ").is_err());
        assert!(check_text_field("name", "A,da").is_err());
        assert!(check_text_field("name", "A\nda").is_err());
    }
}
