//! Arena-backed storage for flights.

use crate::error::{Error, Result};
use crate::flight::{Flight, FlightNumber, FlightSpec, SeatClass};
use crate::index::OrderedIndex;
use crate::queue::QueueRegistry;

/// Stable handle to a flight slot in a [`FlightStore`].
///
/// Ids are never reused, so a handle to a deleted flight simply stops
/// resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlightId(usize);

/// Owns every flight and indexes them by flight number.
///
/// Flights are listed in creation order. After a deletion the index is
/// rebuilt from the surviving flights instead of being patched.
///
/// A deleted flight leaves an empty slot behind so that no [`FlightId`] is
/// ever handed out twice. Slots are only compacted when a desk is reloaded
/// from its snapshot, so the arena grows with the flights created by one
/// process, not with the flights it currently holds.
#[derive(Debug, Clone, Default)]
pub struct FlightStore {
    slots: Vec<Option<Flight>>,
    order: Vec<FlightId>,
    index: OrderedIndex<FlightNumber, FlightId>,
}

impl FlightStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `spec` and stores the resulting flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateFlight`] if the number is taken, or the
    /// validation error from [`FlightSpec::build`].
    pub fn create(&mut self, spec: FlightSpec) -> Result<FlightId> {
        if self.exists(spec.number) {
            return Err(Error::DuplicateFlight(spec.number));
        }
        let flight = spec.build()?;
        self.insert(flight)
    }

    /// Stores an already validated flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateFlight`] if the number is taken.
    pub fn insert(&mut self, flight: Flight) -> Result<FlightId> {
        let number = flight.number();
        if self.exists(number) {
            return Err(Error::DuplicateFlight(number));
        }
        let id = FlightId(self.slots.len());
        self.slots.push(Some(flight));
        self.order.push(id);
        self.index.insert(number, id);
        Ok(id)
    }

    /// Looks up a flight by number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`] if no flight has this number.
    pub fn find(&self, number: FlightNumber) -> Result<&Flight> {
        self.index
            .find(&number)
            .and_then(|id| self.get(*id))
            .ok_or(Error::FlightNotFound(number))
    }

    /// Looks up a flight by number for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`] if no flight has this number.
    pub fn find_mut(&mut self, number: FlightNumber) -> Result<&mut Flight> {
        let id = *self
            .index
            .find(&number)
            .ok_or(Error::FlightNotFound(number))?;
        self.slots
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(Error::FlightNotFound(number))
    }

    /// Resolves a handle.
    #[must_use]
    pub fn get(&self, id: FlightId) -> Option<&Flight> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Returns `true` if a flight has this number.
    #[must_use]
    pub fn exists(&self, number: FlightNumber) -> bool {
        self.index.exists(&number)
    }

    /// Iterates over flights in creation order.
    pub fn list_all(&self) -> impl Iterator<Item = &Flight> {
        self.order.iter().filter_map(|id| self.get(*id))
    }

    /// Number of stored flights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no flight is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Removes a flight whose waiting queue is empty and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`] if the flight does not exist and
    /// [`Error::FlightHasQueue`] if customers are still waiting for it.
    pub fn delete(&mut self, number: FlightNumber, queues: &QueueRegistry) -> Result<Flight> {
        let id = *self
            .index
            .find(&number)
            .ok_or(Error::FlightNotFound(number))?;
        let waiting = queues.waiting_count(number);
        if waiting > 0 {
            return Err(Error::FlightHasQueue {
                flight: number,
                waiting,
            });
        }

        let flight = self
            .slots
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(Error::FlightNotFound(number))?;
        self.order.retain(|kept| *kept != id);
        self.rebuild_index();
        Ok(flight)
    }

    /// Takes a seat of `class` on a flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`] or [`Error::ClassFull`].
    pub fn reserve_seat(&mut self, number: FlightNumber, class: SeatClass) -> Result<()> {
        self.find_mut(number)?.reserve(class)
    }

    /// Frees one seat on a flight, economy first.
    ///
    /// Returns the class that was freed, or `None` if the flight had no
    /// booked seats.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`].
    pub fn release_seat(&mut self, number: FlightNumber) -> Result<Option<SeatClass>> {
        Ok(self.find_mut(number)?.release())
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for id in &self.order {
            if let Some(flight) = self.slots.get(id.0).and_then(Option::as_ref) {
                self.index.insert(flight.number(), *id);
            }
        }
    }
}
