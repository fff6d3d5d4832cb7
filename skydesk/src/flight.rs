//! Flight records and seat inventory.
//!
//! A [`Flight`] is a scheduled route whose seats are split into a business
//! and an economy pool. Flights are only ever constructed through
//! [`FlightSpec::build`], which enforces the seat and schedule invariants,
//! and only ever mutated through seat reservation and
//! [`Flight::apply_update`], which preserve them.

mod store;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::check_text_field;

pub use store::{FlightId, FlightStore};

/// A flight number, the unique key of a flight.
///
/// # Examples
///
/// ```
/// use skydesk::FlightNumber;
///
/// let number: FlightNumber = "100".parse().unwrap();
/// assert_eq!(number, FlightNumber::new(100));
/// assert_eq!(number.to_string(), "100");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightNumber(u32);

impl FlightNumber {
    /// Wraps a raw flight number.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FlightNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_digits(s)
            .map(Self)
            .ok_or_else(|| Error::Validation {
                field: "flight number".into(),
                message: format!("'{s}' is not a non-negative integer"),
            })
    }
}

/// Parses a string made only of ASCII digits.
pub(crate) fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// A wall-clock time of day with minute precision.
///
/// Times order chronologically and display as zero-padded `HH:MM`.
///
/// # Examples
///
/// ```
/// use skydesk::ClockTime;
///
/// let departure: ClockTime = "09:05".parse().unwrap();
/// let arrival = ClockTime::new(11, 30).unwrap();
/// assert!(departure < arrival);
/// assert_eq!(departure.to_string(), "09:05");
/// assert!("9:05".parse::<ClockTime>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a time from an hour (0-23) and a minute (0-59).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if either component is out of range.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::Validation {
                field: "time".into(),
                message: format!("{hour}:{minute} is not a valid time of day"),
            });
        }
        Ok(Self { hour, minute })
    }

    /// The hour component.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// The minute component.
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    /// Parses the strict `HH:MM` form, both components two digits wide.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Validation {
            field: "time".into(),
            message: format!("'{s}' is not in HH:MM form"),
        };
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(invalid());
        }
        let hour = parse_digits(hour).ok_or_else(invalid)?;
        let minute = parse_digits(minute).ok_or_else(invalid)?;
        let hour = u8::try_from(hour).map_err(|_| invalid())?;
        let minute = u8::try_from(minute).map_err(|_| invalid())?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// The two seat pools of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatClass {
    /// Business class, priced at twice the base cost.
    Business,
    /// Economy class, priced at the base cost.
    Economy,
}

impl SeatClass {
    /// Price multiplier applied to the base cost.
    ///
    /// ```
    /// use skydesk::SeatClass;
    ///
    /// assert_eq!(SeatClass::Business.multiplier(), 2);
    /// assert_eq!(SeatClass::Economy.multiplier(), 1);
    /// ```
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        match self {
            Self::Business => 2,
            Self::Economy => 1,
        }
    }
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Business => write!(f, "business"),
            Self::Economy => write!(f, "economy"),
        }
    }
}

impl FromStr for SeatClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "business" | "b" => Ok(Self::Business),
            "economy" | "e" => Ok(Self::Economy),
            _ => Err(Error::Validation {
                field: "class".into(),
                message: format!("'{s}' is not a seat class"),
            }),
        }
    }
}

/// A scheduled flight with its seat inventory.
///
/// `economy_seats` is always `total_seats - business_seats`, and each booked
/// counter stays within its pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    number: FlightNumber,
    origin: String,
    destination: String,
    departure: ClockTime,
    arrival: ClockTime,
    cost: u32,
    plane_type: String,
    total_seats: u32,
    business_seats: u32,
    economy_seats: u32,
    booked_business: u32,
    booked_economy: u32,
    weather: String,
    day_of_week: String,
}

impl Flight {
    /// The flight number.
    #[must_use]
    pub const fn number(&self) -> FlightNumber {
        self.number
    }

    /// Departure city.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Arrival city.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Departure time.
    #[must_use]
    pub const fn departure(&self) -> ClockTime {
        self.departure
    }

    /// Arrival time.
    #[must_use]
    pub const fn arrival(&self) -> ClockTime {
        self.arrival
    }

    /// Base (economy, undiscounted) ticket cost.
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    /// Aircraft type label.
    #[must_use]
    pub fn plane_type(&self) -> &str {
        &self.plane_type
    }

    /// Total seats over both classes.
    #[must_use]
    pub const fn total_seats(&self) -> u32 {
        self.total_seats
    }

    /// Seats in the business pool.
    #[must_use]
    pub const fn business_seats(&self) -> u32 {
        self.business_seats
    }

    /// Seats in the economy pool.
    #[must_use]
    pub const fn economy_seats(&self) -> u32 {
        self.economy_seats
    }

    /// Booked business seats.
    #[must_use]
    pub const fn booked_business(&self) -> u32 {
        self.booked_business
    }

    /// Booked economy seats.
    #[must_use]
    pub const fn booked_economy(&self) -> u32 {
        self.booked_economy
    }

    /// Booked seats over both classes.
    #[must_use]
    pub const fn total_booked(&self) -> u32 {
        self.booked_business + self.booked_economy
    }

    /// Weather tag.
    #[must_use]
    pub fn weather(&self) -> &str {
        &self.weather
    }

    /// Day-of-week tag.
    #[must_use]
    pub fn day_of_week(&self) -> &str {
        &self.day_of_week
    }

    /// Seats of `class` still free.
    #[must_use]
    pub const fn available(&self, class: SeatClass) -> u32 {
        match class {
            SeatClass::Business => self.business_seats - self.booked_business,
            SeatClass::Economy => self.economy_seats - self.booked_economy,
        }
    }

    /// Returns `true` when neither class has a free seat.
    #[must_use]
    pub const fn is_fully_booked(&self) -> bool {
        self.available(SeatClass::Business) == 0 && self.available(SeatClass::Economy) == 0
    }

    /// Undiscounted fare for `class`.
    ///
    /// Computed in `i64` so any `u32` cost doubles without overflow.
    #[must_use]
    pub fn fare(&self, class: SeatClass) -> i64 {
        i64::from(self.cost) * i64::from(class.multiplier())
    }

    /// Takes one seat from the `class` pool.
    pub(crate) fn reserve(&mut self, class: SeatClass) -> Result<()> {
        if self.available(class) == 0 {
            return Err(Error::ClassFull {
                flight: self.number,
                class,
            });
        }
        match class {
            SeatClass::Business => self.booked_business += 1,
            SeatClass::Economy => self.booked_economy += 1,
        }
        Ok(())
    }

    /// Frees one seat, economy first.
    ///
    /// Bookings do not record their class, so a cancellation always returns
    /// an economy seat unless none is booked, in which case a business seat
    /// is returned instead. Returns the class freed, or `None` if nothing
    /// was booked at all.
    pub(crate) fn release(&mut self) -> Option<SeatClass> {
        if self.booked_economy > 0 {
            self.booked_economy -= 1;
            Some(SeatClass::Economy)
        } else if self.booked_business > 0 {
            self.booked_business -= 1;
            Some(SeatClass::Business)
        } else {
            None
        }
    }

    /// Applies every provided field of `update`, or none of them.
    ///
    /// Fields are applied in declaration order of [`FlightUpdate`], then the
    /// resulting record is checked as a whole. Economy seats are recomputed
    /// as `total - business`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUpdate`] and leaves the flight unchanged if the
    /// updated record would break a seat or schedule constraint.
    pub fn apply_update(&mut self, update: &FlightUpdate) -> Result<()> {
        let mut next = self.clone();
        let invalid = |message: String| Error::InvalidUpdate(message);

        if let Some(origin) = &update.origin {
            check_text_field("origin", origin).map_err(|e| invalid(e.to_string()))?;
            next.origin.clone_from(origin);
        }
        if let Some(destination) = &update.destination {
            check_text_field("destination", destination).map_err(|e| invalid(e.to_string()))?;
            next.destination.clone_from(destination);
        }
        if let Some(departure) = update.departure {
            next.departure = departure;
        }
        if let Some(arrival) = update.arrival {
            next.arrival = arrival;
        }
        if let Some(cost) = update.cost {
            next.cost = cost;
        }
        if let Some(plane_type) = &update.plane_type {
            check_text_field("plane type", plane_type).map_err(|e| invalid(e.to_string()))?;
            next.plane_type.clone_from(plane_type);
        }
        if let Some(total) = update.total_seats {
            if total < self.total_booked() {
                return Err(invalid(format!(
                    "total seats {total} is below the {} seats already booked",
                    self.total_booked()
                )));
            }
            next.total_seats = total;
        }
        if let Some(business) = update.business_seats {
            next.business_seats = business;
        }
        if let Some(booked) = update.booked_business {
            next.booked_business = booked;
        }
        if let Some(booked) = update.booked_economy {
            next.booked_economy = booked;
        }
        if let Some(weather) = &update.weather {
            check_text_field("weather", weather).map_err(|e| invalid(e.to_string()))?;
            next.weather.clone_from(weather);
        }
        if let Some(day) = &update.day_of_week {
            check_text_field("day of week", day).map_err(|e| invalid(e.to_string()))?;
            next.day_of_week.clone_from(day);
        }

        if next.business_seats > next.total_seats {
            return Err(invalid(format!(
                "business seats {} exceed total seats {}",
                next.business_seats, next.total_seats
            )));
        }
        next.economy_seats = next.total_seats - next.business_seats;
        next.check_invariants().map_err(invalid)?;

        *self = next;
        Ok(())
    }

    fn check_invariants(&self) -> std::result::Result<(), String> {
        if self.origin == self.destination {
            return Err(format!(
                "origin and destination are both '{}'",
                self.origin
            ));
        }
        if self.departure >= self.arrival {
            return Err(format!(
                "departure {} is not before arrival {}",
                self.departure, self.arrival
            ));
        }
        if self.business_seats + self.economy_seats != self.total_seats {
            return Err(format!(
                "business {} and economy {} seats do not add up to {}",
                self.business_seats, self.economy_seats, self.total_seats
            ));
        }
        if self.booked_business > self.business_seats {
            return Err(format!(
                "booked business {} exceeds business seats {}",
                self.booked_business, self.business_seats
            ));
        }
        if self.booked_economy > self.economy_seats {
            return Err(format!(
                "booked economy {} exceeds economy seats {}",
                self.booked_economy, self.economy_seats
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {}-{}",
            self.number, self.origin, self.destination, self.departure, self.arrival
        )
    }
}

/// Everything needed to create a flight.
///
/// Economy seats are not given: they are the remainder of `total_seats`
/// after `business_seats`.
///
/// # Examples
///
/// ```
/// use skydesk::{ClockTime, FlightNumber, FlightSpec, SeatClass};
///
/// let flight = FlightSpec {
///     number: FlightNumber::new(100),
///     origin: "Athens".into(),
///     destination: "Rome".into(),
///     departure: ClockTime::new(9, 0).unwrap(),
///     arrival: ClockTime::new(11, 0).unwrap(),
///     cost: 100,
///     total_seats: 10,
///     business_seats: 2,
///     ..FlightSpec::default()
/// }
/// .build()
/// .unwrap();
///
/// assert_eq!(flight.economy_seats(), 8);
/// assert_eq!(flight.available(SeatClass::Business), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightSpec {
    /// Unique flight number.
    pub number: FlightNumber,
    /// Departure city.
    pub origin: String,
    /// Arrival city.
    pub destination: String,
    /// Departure time.
    pub departure: ClockTime,
    /// Arrival time.
    pub arrival: ClockTime,
    /// Base ticket cost.
    pub cost: u32,
    /// Aircraft type label.
    pub plane_type: String,
    /// Total seats.
    pub total_seats: u32,
    /// Business seats; the rest are economy.
    pub business_seats: u32,
    /// Business seats already booked.
    pub booked_business: u32,
    /// Economy seats already booked.
    pub booked_economy: u32,
    /// Weather tag.
    pub weather: String,
    /// Day-of-week tag.
    pub day_of_week: String,
}

impl Default for FlightSpec {
    fn default() -> Self {
        Self {
            number: FlightNumber::new(0),
            origin: String::new(),
            destination: String::new(),
            departure: ClockTime { hour: 0, minute: 0 },
            arrival: ClockTime { hour: 0, minute: 0 },
            cost: 0,
            plane_type: "unknown".into(),
            total_seats: 0,
            business_seats: 0,
            booked_business: 0,
            booked_economy: 0,
            weather: "unknown".into(),
            day_of_week: "unknown".into(),
        }
    }
}

impl FlightSpec {
    /// Validates the description and builds the flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFlight`] if the description breaks a seat or
    /// schedule constraint, and [`Error::Validation`] if a text field cannot
    /// be stored.
    pub fn build(self) -> Result<Flight> {
        check_text_field("origin", &self.origin)?;
        check_text_field("destination", &self.destination)?;
        check_text_field("plane type", &self.plane_type)?;
        check_text_field("weather", &self.weather)?;
        check_text_field("day of week", &self.day_of_week)?;

        if self.business_seats > self.total_seats {
            return Err(Error::InvalidFlight(format!(
                "business seats {} exceed total seats {}",
                self.business_seats, self.total_seats
            )));
        }

        let flight = Flight {
            number: self.number,
            origin: self.origin,
            destination: self.destination,
            departure: self.departure,
            arrival: self.arrival,
            cost: self.cost,
            plane_type: self.plane_type,
            total_seats: self.total_seats,
            business_seats: self.business_seats,
            economy_seats: self.total_seats - self.business_seats,
            booked_business: self.booked_business,
            booked_economy: self.booked_economy,
            weather: self.weather,
            day_of_week: self.day_of_week,
        };
        flight.check_invariants().map_err(Error::InvalidFlight)?;
        Ok(flight)
    }
}

/// A partial change to a flight; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightUpdate {
    /// New departure city.
    pub origin: Option<String>,
    /// New arrival city.
    pub destination: Option<String>,
    /// New departure time.
    pub departure: Option<ClockTime>,
    /// New arrival time.
    pub arrival: Option<ClockTime>,
    /// New base cost.
    pub cost: Option<u32>,
    /// New aircraft type.
    pub plane_type: Option<String>,
    /// New total seat count.
    pub total_seats: Option<u32>,
    /// New business seat count.
    pub business_seats: Option<u32>,
    /// New booked-business count.
    pub booked_business: Option<u32>,
    /// New booked-economy count.
    pub booked_economy: Option<u32>,
    /// New weather tag.
    pub weather: Option<String>,
    /// New day-of-week tag.
    pub day_of_week: Option<String>,
}

impl FlightUpdate {
    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> FlightSpec {
        FlightSpec {
            number: FlightNumber::new(100),
            origin: "Athens".into(),
            destination: "Rome".into(),
            departure: ClockTime::new(9, 0).unwrap(),
            arrival: ClockTime::new(11, 0).unwrap(),
            cost: 100,
            total_seats: 10,
            business_seats: 2,
            ..FlightSpec::default()
        }
    }

    #[test]
    fn test_clock_time_parse() {
        assert_eq!("00:00".parse::<ClockTime>().unwrap(), ClockTime::new(0, 0).unwrap());
        assert_eq!("23:59".parse::<ClockTime>().unwrap().to_string(), "23:59");
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
        assert!("1200".parse::<ClockTime>().is_err());
        assert!("12:5".parse::<ClockTime>().is_err());
        assert!("+1:05".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_flight_number_parse() {
        assert_eq!("42".parse::<FlightNumber>().unwrap().value(), 42);
        assert!("-1".parse::<FlightNumber>().is_err());
        assert!("".parse::<FlightNumber>().is_err());
        assert!("4a".parse::<FlightNumber>().is_err());
    }

    #[test]
    fn test_seat_class_parse() {
        assert_eq!("Business".parse::<SeatClass>().unwrap(), SeatClass::Business);
        assert_eq!("e".parse::<SeatClass>().unwrap(), SeatClass::Economy);
        assert!("first".parse::<SeatClass>().is_err());
    }

    #[test]
    fn test_build_computes_economy() {
        let flight = spec().build().unwrap();
        assert_eq!(flight.economy_seats(), 8);
        assert_eq!(flight.total_booked(), 0);
        assert!(!flight.is_fully_booked());
        assert_eq!(flight.fare(SeatClass::Business), 200);
    }

    #[test]
    fn test_fare_of_largest_cost() {
        let flight = FlightSpec {
            cost: u32::MAX,
            ..spec()
        }
        .build()
        .unwrap();
        assert_eq!(flight.fare(SeatClass::Economy), i64::from(u32::MAX));
        assert_eq!(flight.fare(SeatClass::Business), 2 * i64::from(u32::MAX));
    }

    #[test]
    fn test_build_rejects_same_city() {
        let mut bad = spec();
        bad.destination = "Athens".into();
        assert!(matches!(bad.build(), Err(Error::InvalidFlight(_))));
    }

    #[test]
    fn test_build_rejects_backwards_schedule() {
        let mut bad = spec();
        bad.arrival = bad.departure;
        assert!(matches!(bad.build(), Err(Error::InvalidFlight(_))));
    }

    #[test]
    fn test_build_rejects_overbooked_pools() {
        let mut bad = spec();
        bad.booked_business = 3;
        assert!(matches!(bad.build(), Err(Error::InvalidFlight(_))));

        let mut bad = spec();
        bad.business_seats = 11;
        assert!(matches!(bad.build(), Err(Error::InvalidFlight(_))));
    }

    #[test]
    fn test_build_rejects_comma_in_text() {
        let mut bad = spec();
        bad.origin = "Athens, GR".into();
        assert!(matches!(bad.build(), Err(Error::Validation { .. })));
    }

    #[test]
    fn test_reserve_and_release() {
        let mut flight = spec().build().unwrap();
        flight.reserve(SeatClass::Business).unwrap();
        flight.reserve(SeatClass::Business).unwrap();
        assert!(matches!(
            flight.reserve(SeatClass::Business),
            Err(Error::ClassFull { class: SeatClass::Business, .. })
        ));

        // No economy booked, so the release falls back to business.
        assert_eq!(flight.release(), Some(SeatClass::Business));
        flight.reserve(SeatClass::Economy).unwrap();
        assert_eq!(flight.release(), Some(SeatClass::Economy));
        assert_eq!(flight.release(), Some(SeatClass::Business));
        assert_eq!(flight.release(), None);
    }

    #[test]
    fn test_update_recomputes_economy() {
        let mut flight = spec().build().unwrap();
        flight
            .apply_update(&FlightUpdate {
                total_seats: Some(20),
                business_seats: Some(5),
                ..FlightUpdate::default()
            })
            .unwrap();
        assert_eq!(flight.economy_seats(), 15);
        assert_eq!(flight.total_seats(), 20);
    }

    #[test]
    fn test_update_moves_whole_schedule() {
        let mut flight = spec().build().unwrap();
        flight
            .apply_update(&FlightUpdate {
                departure: Some(ClockTime::new(14, 0).unwrap()),
                arrival: Some(ClockTime::new(16, 0).unwrap()),
                ..FlightUpdate::default()
            })
            .unwrap();
        assert_eq!(flight.departure().to_string(), "14:00");
    }

    #[test]
    fn test_update_is_atomic() {
        let mut flight = spec().build().unwrap();
        let before = flight.clone();
        let err = flight
            .apply_update(&FlightUpdate {
                cost: Some(500),
                total_seats: Some(4),
                business_seats: Some(5),
                ..FlightUpdate::default()
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUpdate(_)));
        assert_eq!(flight, before);
    }

    #[test]
    fn test_update_rejects_total_below_booked() {
        let mut flight = spec().build().unwrap();
        for _ in 0..5 {
            flight.reserve(SeatClass::Economy).unwrap();
        }
        let err = flight
            .apply_update(&FlightUpdate {
                total_seats: Some(4),
                ..FlightUpdate::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("already booked"));
    }

    #[test]
    fn test_update_rejects_booked_over_pool() {
        let mut flight = spec().build().unwrap();
        let err = flight
            .apply_update(&FlightUpdate {
                booked_economy: Some(9),
                ..FlightUpdate::default()
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUpdate(_)));
        assert_eq!(flight.booked_economy(), 0);
    }

    #[test]
    fn test_update_rejects_same_city() {
        let mut flight = spec().build().unwrap();
        let err = flight
            .apply_update(&FlightUpdate {
                destination: Some("Athens".into()),
                ..FlightUpdate::default()
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUpdate(_)));
    }

    #[test]
    fn test_flight_update_is_empty() {
        assert!(FlightUpdate::default().is_empty());
        assert!(!FlightUpdate {
            cost: Some(1),
            ..FlightUpdate::default()
        }
        .is_empty());
    }
}
