//! The reservation engine.
//!
//! [`ReservationEngine`] owns the flight store, the customer store and the
//! queue registry, and is the only place where an operation may touch more
//! than one of them. Every mutating operation runs to completion on
//! `&mut self`; when it returns an error nothing has been changed.
//!
//! After each successful mutation the engine saves the stores it touched
//! through its [`Persistence`] backend (unless autosave is off). A failed
//! save is logged and retried on the next mutation or on [`flush`]; the
//! in-memory state stays authoritative.
//!
//! [`flush`]: ReservationEngine::flush

mod admin;
mod booking;
mod cancel;
mod manage;
#[cfg(test)]
mod proptests;

pub use booking::{Patron, Ticket};
pub use cancel::{Cancellation, Promotion};
pub use admin::DeletionReport;
pub use manage::{QueueOperator, QueueSession, StopReason};

use crate::customer::{Customer, CustomerStore, Passport};
use crate::error::Result;
use crate::flight::{Flight, FlightNumber, FlightStore};
use crate::queue::{QueueRegistry, WaitingQueue};
use crate::storage::Persistence;

/// Which stores changed since the last successful save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Dirty {
    flights: bool,
    customers: bool,
    queues: bool,
}

impl Dirty {
    const fn any(self) -> bool {
        self.flights || self.customers || self.queues
    }
}

/// Flights, customers and waiting queues, kept mutually consistent.
pub struct ReservationEngine {
    flights: FlightStore,
    customers: CustomerStore,
    queues: QueueRegistry,
    persistence: Option<Box<dyn Persistence>>,
    autosave: bool,
    dirty: Dirty,
    last_save_error: Option<String>,
}

impl std::fmt::Debug for ReservationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationEngine")
            .field("flights", &self.flights.len())
            .field("customers", &self.customers.len())
            .field("queues", &self.queues.len())
            .field("persistent", &self.persistence.is_some())
            .field("autosave", &self.autosave)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl Default for ReservationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationEngine {
    /// Creates an empty engine with no persistence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            flights: FlightStore::new(),
            customers: CustomerStore::new(),
            queues: QueueRegistry::new(),
            persistence: None,
            autosave: true,
            dirty: Dirty::default(),
            last_save_error: None,
        }
    }

    /// Loads flights, customers and queues from `persistence`, in that
    /// order, and keeps saving to it.
    ///
    /// Duplicate flights or passports keep the first record. Every loaded
    /// flight gets a queue; queued passports without a customer record,
    /// and queues for unknown flights, are dropped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read at all.
    pub fn open(persistence: impl Persistence + 'static) -> Result<Self> {
        let mut engine = Self::new();

        for flight in persistence.load_flights()? {
            let number = flight.number();
            if let Err(e) = engine.flights.insert(flight) {
                log::warn!("skipping flight record: {e}");
                continue;
            }
            engine.queues.get_or_create(number);
        }

        for customer in persistence.load_customers()? {
            if let Err(e) = engine.customers.insert(customer) {
                log::warn!("skipping customer record: {e}");
            }
        }

        for (number, passports) in persistence.load_queues()? {
            if !engine.flights.exists(number) {
                log::warn!("dropping waiting queue for unknown flight {number}");
                continue;
            }
            let queue = engine.queues.get_or_create(number);
            for passport in passports {
                match engine.customers.find(passport) {
                    Ok(_) if queue.contains(passport) => {
                        log::warn!("passport {passport} is queued twice for flight {number}");
                    }
                    Ok(customer) if customer.has_booking(number) => {
                        log::warn!(
                            "passport {passport} is already booked on flight {number}; dropping it from the queue"
                        );
                    }
                    Ok(customer) => {
                        queue.enqueue(customer.clone());
                    }
                    Err(_) => {
                        log::warn!("dropping unknown passport {passport} from flight {number} queue");
                    }
                }
            }
        }

        log::info!(
            "loaded {} flight(s), {} customer(s), {} queue(s)",
            engine.flights.len(),
            engine.customers.len(),
            engine.queues.len()
        );
        engine.persistence = Some(Box::new(persistence));
        Ok(engine)
    }

    /// Turns saving after every mutation on or off.
    #[must_use]
    pub const fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Looks up a flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`](crate::Error::FlightNotFound).
    pub fn flight(&self, number: FlightNumber) -> Result<&Flight> {
        self.flights.find(number)
    }

    /// Every flight in creation order.
    pub fn schedule(&self) -> impl Iterator<Item = &Flight> {
        self.flights.list_all()
    }

    /// Looks up a customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CustomerNotFound`](crate::Error::CustomerNotFound).
    pub fn customer(&self, passport: Passport) -> Result<&Customer> {
        self.customers.find(passport)
    }

    /// Every customer in ascending passport order.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.list_all()
    }

    /// The waiting queue of a flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`](crate::Error::FlightNotFound) if the flight does not exist.
    pub fn queue(&self, number: FlightNumber) -> Result<Option<&WaitingQueue>> {
        self.flights.find(number)?;
        Ok(self.queues.get(number))
    }

    /// Every waiting queue in flight-number order.
    pub fn queues(&self) -> impl Iterator<Item = &WaitingQueue> {
        self.queues.iter()
    }

    /// 1-based position of `passport` in the queue of `number`, if queued.
    #[must_use]
    pub fn queue_position(&self, passport: Passport, number: FlightNumber) -> Option<usize> {
        self.queues.get(number)?.position(passport)
    }

    /// Returns `true` while some change has not reached the backend.
    #[must_use]
    pub const fn has_unsaved_changes(&self) -> bool {
        self.persistence.is_some() && self.dirty.any()
    }

    /// The message of the most recent failed save, cleared by a successful
    /// one.
    #[must_use]
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    /// Saves every store changed since the last successful save.
    ///
    /// Stores saved before a failure stay clean; the failing store and any
    /// after it stay dirty.
    ///
    /// # Errors
    ///
    /// Returns the first save error.
    pub fn flush(&mut self) -> Result<()> {
        let Some(persistence) = self.persistence.as_mut() else {
            self.dirty = Dirty::default();
            return Ok(());
        };

        let outcome = save_dirty(
            persistence.as_mut(),
            &mut self.dirty,
            &self.flights,
            &self.customers,
            &self.queues,
        );

        match outcome {
            Ok(()) => {
                self.last_save_error = None;
                Ok(())
            }
            Err(e) => {
                self.last_save_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn touch(&mut self, flights: bool, customers: bool, queues: bool) {
        self.dirty.flights |= flights;
        self.dirty.customers |= customers;
        self.dirty.queues |= queues;
    }

    /// Ends a successful mutation: saves if autosave is on.
    fn commit(&mut self) {
        if !self.autosave {
            return;
        }
        if let Err(e) = self.flush() {
            log::warn!("could not save reservation data: {e}");
        }
    }
}

fn save_dirty(
    persistence: &mut dyn Persistence,
    dirty: &mut Dirty,
    flights: &FlightStore,
    customers: &CustomerStore,
    queues: &QueueRegistry,
) -> Result<()> {
    if dirty.flights {
        persistence.save_flights(flights)?;
        dirty.flights = false;
    }
    if dirty.customers {
        persistence.save_customers(customers)?;
        dirty.customers = false;
    }
    if dirty.queues {
        persistence.save_queues(queues)?;
        dirty.queues = false;
    }
    Ok(())
}
