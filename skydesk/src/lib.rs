#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # skydesk
//!
//! A library for running a flight reservation desk.
//!
//! This library keeps flight inventory, customer records and per-flight
//! waiting queues mutually consistent while customers book, cancel and get
//! promoted from waiting queues.
//!
//! ## Core Types
//!
//! - [`ReservationEngine`]: owns every store and runs the desk operations
//! - [`Flight`] and [`FlightSpec`]: seat inventory and schedule
//! - [`Customer`] and [`CustomerSpec`]: passenger records with discounts
//! - [`WaitingQueue`]: FIFO of customers waiting for a fully booked flight
//! - [`SnapshotStore`]: flat-file persistence behind the [`Persistence`] trait
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use skydesk::{
//!     ClockTime, CustomerSpec, DiscountTier, FlightNumber, FlightSpec, Passport, Patron,
//!     ReservationEngine, SeatClass,
//! };
//!
//! let mut engine = ReservationEngine::new();
//! engine
//!     .add_flight(FlightSpec {
//!         number: FlightNumber::new(100),
//!         origin: "Athens".into(),
//!         destination: "Rome".into(),
//!         departure: ClockTime::new(9, 30).unwrap(),
//!         arrival: ClockTime::new(11, 0).unwrap(),
//!         cost: 200,
//!         total_seats: 10,
//!         business_seats: 2,
//!         ..FlightSpec::default()
//!     })
//!     .unwrap();
//!
//! let student = CustomerSpec {
//!     passport: Passport::new(7),
//!     name: "Maria".into(),
//!     surname: "Papadopoulou".into(),
//!     nationality: "Greek".into(),
//!     address: "Patision 42".into(),
//!     phone: "2101234567".into(),
//!     discount: DiscountTier::Student,
//! };
//!
//! let ticket = engine
//!     .book_flight(Patron::New(student), FlightNumber::new(100), SeatClass::Business)
//!     .unwrap();
//! assert_eq!(ticket.price, 340);
//! ```

pub mod config;
pub mod customer;
pub mod engine;
pub mod error;
pub mod flight;
pub mod index;
pub mod logging;
pub mod queue;
pub mod storage;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use customer::{Customer, CustomerId, CustomerSpec, CustomerStore, CustomerUpdate, DiscountTier, Passport};
pub use engine::{
    Cancellation, DeletionReport, Patron, Promotion, QueueOperator, QueueSession,
    ReservationEngine, StopReason, Ticket,
};
pub use error::{Error, Result};
pub use flight::{ClockTime, Flight, FlightId, FlightNumber, FlightSpec, FlightStore, FlightUpdate, SeatClass};
pub use index::OrderedIndex;
pub use logging::{init_logger, LogLevel, Logger};
pub use queue::{QueueEntry, QueueRegistry, WaitingQueue};
pub use storage::{Persistence, SnapshotStore, StorageConfig};
