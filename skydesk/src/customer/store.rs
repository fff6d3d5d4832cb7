//! Arena-backed storage for customers, indexed by passport.

use crate::customer::{Customer, CustomerSpec, Passport};
use crate::error::{Error, Result};
use crate::flight::FlightNumber;
use crate::index::OrderedIndex;

/// Stable handle to a customer slot in a [`CustomerStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(usize);

/// Owns every customer record.
///
/// Listing walks the passport index, so customers come out in ascending
/// passport order.
///
/// Removing a customer empties their slot rather than shifting the arena,
/// so a [`CustomerId`] is never reused. A re-inserted record gets a fresh
/// slot. The empty slots go away when the desk is reloaded.
#[derive(Debug, Clone, Default)]
pub struct CustomerStore {
    slots: Vec<Option<Customer>>,
    index: OrderedIndex<Passport, CustomerId>,
}

impl CustomerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `spec` and registers a customer with no bookings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicatePassport`] if the passport is taken, or the
    /// validation error from [`CustomerSpec::build`].
    pub fn register(&mut self, spec: CustomerSpec) -> Result<CustomerId> {
        if self.exists(spec.passport) {
            return Err(Error::DuplicatePassport(spec.passport));
        }
        self.insert(spec.build()?)
    }

    /// Attaches a complete customer record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicatePassport`] if the passport is taken.
    pub fn insert(&mut self, customer: Customer) -> Result<CustomerId> {
        let passport = customer.passport();
        if self.exists(passport) {
            return Err(Error::DuplicatePassport(passport));
        }
        let id = CustomerId(self.slots.len());
        self.slots.push(Some(customer));
        self.index.insert(passport, id);
        Ok(id)
    }

    /// Looks up a customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CustomerNotFound`].
    pub fn find(&self, passport: Passport) -> Result<&Customer> {
        self.index
            .find(&passport)
            .and_then(|id| self.get(*id))
            .ok_or(Error::CustomerNotFound(passport))
    }

    /// Looks up a customer for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CustomerNotFound`].
    pub fn find_mut(&mut self, passport: Passport) -> Result<&mut Customer> {
        let id = *self
            .index
            .find(&passport)
            .ok_or(Error::CustomerNotFound(passport))?;
        self.slots
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(Error::CustomerNotFound(passport))
    }

    /// Resolves a handle.
    #[must_use]
    pub fn get(&self, id: CustomerId) -> Option<&Customer> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Returns `true` if the passport is registered.
    #[must_use]
    pub fn exists(&self, passport: Passport) -> bool {
        self.index.exists(&passport)
    }

    /// Detaches a customer and hands the record to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CustomerNotFound`].
    pub fn remove(&mut self, passport: Passport) -> Result<Customer> {
        let id = self
            .index
            .erase(&passport)
            .ok_or(Error::CustomerNotFound(passport))?;
        self.slots
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(Error::CustomerNotFound(passport))
    }

    /// Iterates over customers in ascending passport order.
    pub fn list_all(&self) -> impl Iterator<Item = &Customer> {
        self.index
            .enumerate_in_order()
            .filter_map(|id| self.get(*id))
    }

    /// Passports of every customer booked on `flight`, ascending.
    #[must_use]
    pub fn holders_of(&self, flight: FlightNumber) -> Vec<Passport> {
        self.list_all()
            .filter(|customer| customer.has_booking(flight))
            .map(Customer::passport)
            .collect()
    }

    /// Number of registered customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if nobody is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
