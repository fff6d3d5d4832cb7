//! Error types for the skydesk library.
//!
//! This module provides the error hierarchy for every reservation desk
//! operation, using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::customer::Passport;
use crate::flight::{FlightNumber, SeatClass};

/// Result type alias for operations that may fail with a skydesk error.
///
/// # Examples
///
/// ```
/// use skydesk::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(100)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the skydesk library.
///
/// Every variant is recoverable by the caller: the engine never terminates
/// the process and leaves its in-memory state consistent when it returns one.
#[derive(Debug, Error)]
pub enum Error {
    /// A flight with this number already exists.
    #[error("flight {0} already exists")]
    DuplicateFlight(FlightNumber),

    /// A customer with this passport is already registered.
    #[error("passport {0} is already registered")]
    DuplicatePassport(Passport),

    /// The requested flight does not exist.
    #[error("flight {0} not found")]
    FlightNotFound(FlightNumber),

    /// The requested customer does not exist.
    #[error("customer with passport {0} not found")]
    CustomerNotFound(Passport),

    /// The customer holds no booking (and no queue place) for the flight.
    #[error("customer {passport} has no booking on flight {flight}")]
    BookingNotFound {
        /// The customer's passport.
        passport: Passport,
        /// The flight that was not booked.
        flight: FlightNumber,
    },

    /// The customer already holds a booking on the flight.
    #[error("customer {passport} is already booked on flight {flight}")]
    AlreadyBooked {
        /// The customer's passport.
        passport: Passport,
        /// The flight already booked.
        flight: FlightNumber,
    },

    /// The requested seat class has no room left.
    #[error("no {class} seats left on flight {flight}")]
    ClassFull {
        /// The flight.
        flight: FlightNumber,
        /// The class that is full.
        class: SeatClass,
    },

    /// Both seat classes are full; the customer may join the waiting queue.
    #[error("flight {0} is fully booked")]
    FullyBooked(FlightNumber),

    /// The flight still has customers waiting in its queue.
    #[error("flight {flight} has {waiting} customer(s) in its waiting queue")]
    FlightHasQueue {
        /// The flight.
        flight: FlightNumber,
        /// Number of queued customers.
        waiting: usize,
    },

    /// The customer still holds bookings and cannot be removed.
    #[error("customer {passport} still holds {bookings} booking(s)")]
    CustomerHasBookings {
        /// The customer's passport.
        passport: Passport,
        /// Number of bookings held.
        bookings: usize,
    },

    /// A flight update violated a seat or schedule constraint.
    #[error("invalid update: {0}")]
    InvalidUpdate(String),

    /// A new flight description violated a seat or schedule constraint.
    #[error("invalid flight: {0}")]
    InvalidFlight(String),

    /// A field failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A persisted record could not be decoded.
    #[error("malformed record on line {line}: {reason}")]
    Parse {
        /// 1-based line number within the snapshot file.
        line: u64,
        /// Why the record was rejected.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot file could not be read or written as delimited records.
    #[error("snapshot encoding error: {0}")]
    Csv(#[from] csv::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),
}

impl Error {
    /// Check if the error reports a missing flight, customer or booking.
    ///
    /// # Examples
    ///
    /// ```
    /// use skydesk::{Error, FlightNumber};
    ///
    /// let err = Error::FlightNotFound(FlightNumber::new(100));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::FlightNotFound(_) | Self::CustomerNotFound(_) | Self::BookingNotFound { .. }
        )
    }

    /// Check if the error reports exhausted seat inventory.
    #[must_use]
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::ClassFull { .. } | Self::FullyBooked(_))
    }

    /// Check if the error comes from the storage layer rather than the
    /// reservation rules.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Csv(_) | Self::Parse { .. })
    }
}
