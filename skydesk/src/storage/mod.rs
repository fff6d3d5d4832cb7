//! Persistence of the reservation desk.
//!
//! The engine talks to storage only through the [`Persistence`] trait.
//! [`SnapshotStore`] is the flat-file implementation: one text file per
//! store, rewritten in full on every save.
//!
//! # File formats
//!
//! - flights: `flightNo,from,to,HH:MM,HH:MM,cost,planeType,totalSeats,bookedSeats,businessSeats,bookedBusiness,economySeats,bookedEconomy,weather,dayOfWeek`
//! - customers: `passport,name,surname,nationality,address,tel,discountCode,totalSpent[,flightNo;flightNo...]`
//! - queues: `flightNo:passport;passport...`, oldest first

mod codec;
mod config;
mod snapshot;

pub(crate) use codec::check_text_field;
pub use codec::{
    decode_customer, decode_flight, decode_queue, encode_customer, encode_flight, encode_queue,
};
pub use config::{
    default_data_dir, resolve_data_dir, StorageConfig, DATA_DIR_ENV, DEFAULT_CUSTOMERS_FILE,
    DEFAULT_FLIGHTS_FILE, DEFAULT_QUEUES_FILE,
};
pub use snapshot::SnapshotStore;

use crate::customer::{Customer, CustomerStore, Passport};
use crate::error::Result;
use crate::flight::{Flight, FlightNumber, FlightStore};
use crate::queue::QueueRegistry;

/// Loads and saves full snapshots of the three stores.
///
/// Loading is lenient: implementations skip records they cannot decode and
/// treat missing data as empty, failing only when the backing medium
/// itself fails.
pub trait Persistence {
    /// Loads every flight.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read.
    fn load_flights(&self) -> Result<Vec<Flight>>;

    /// Loads every customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read.
    fn load_customers(&self) -> Result<Vec<Customer>>;

    /// Loads each queue as its flight and passports, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read.
    fn load_queues(&self) -> Result<Vec<(FlightNumber, Vec<Passport>)>>;

    /// Replaces the saved flights.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save_flights(&mut self, flights: &FlightStore) -> Result<()>;

    /// Replaces the saved customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save_customers(&mut self, customers: &CustomerStore) -> Result<()>;

    /// Replaces the saved queues.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save_queues(&mut self, queues: &QueueRegistry) -> Result<()>;
}
