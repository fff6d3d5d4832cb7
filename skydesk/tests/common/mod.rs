//! Common test utilities for integration tests.
//!
//! This module provides fixture builders and in-memory persistence backends
//! for testing the skydesk library.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use skydesk::{
    ClockTime, Customer, CustomerSpec, CustomerStore, DiscountTier, Error, Flight, FlightNumber,
    FlightSpec, FlightStore, Passport, Persistence, QueueEntry, QueueRegistry, Result,
};

/// Builder for flight descriptions with sensible defaults.
///
/// Defaults: 10 seats of which 2 business, base cost 100, 08:00 to 10:00.
#[allow(dead_code)]
pub struct FlightFixture {
    spec: FlightSpec,
}

#[allow(dead_code)]
impl FlightFixture {
    /// Creates a fixture for flight `number`.
    pub fn new(number: u32) -> Self {
        Self {
            spec: FlightSpec {
                number: FlightNumber::new(number),
                origin: "Athens".into(),
                destination: "Thessaloniki".into(),
                departure: ClockTime::new(8, 0).unwrap(),
                arrival: ClockTime::new(10, 0).unwrap(),
                cost: 100,
                plane_type: "A320".into(),
                total_seats: 10,
                business_seats: 2,
                weather: "sunny".into(),
                day_of_week: "monday".into(),
                ..FlightSpec::default()
            },
        }
    }

    /// Sets the seat split.
    pub fn with_seats(mut self, total: u32, business: u32) -> Self {
        self.spec.total_seats = total;
        self.spec.business_seats = business;
        self
    }

    /// Sets the base cost.
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.spec.cost = cost;
        self
    }

    /// Returns the description.
    pub fn spec(self) -> FlightSpec {
        self.spec
    }
}

/// Builder for customer descriptions with sensible defaults.
#[allow(dead_code)]
pub struct CustomerFixture {
    spec: CustomerSpec,
}

#[allow(dead_code)]
impl CustomerFixture {
    /// Creates a fixture for `passport` with no discount.
    pub fn new(passport: u32) -> Self {
        Self {
            spec: CustomerSpec {
                passport: Passport::new(passport),
                name: format!("Name{passport}"),
                surname: "Traveller".into(),
                nationality: "Greek".into(),
                address: "Ermou 1".into(),
                phone: "2100000000".into(),
                discount: DiscountTier::None,
            },
        }
    }

    /// Sets the discount tier.
    pub fn with_discount(mut self, discount: DiscountTier) -> Self {
        self.spec.discount = discount;
        self
    }

    /// Returns the description.
    pub fn spec(self) -> CustomerSpec {
        self.spec
    }
}

/// What a [`MemoryStore`] holds, shared with the test that created it.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct MemoryState {
    pub flights: Vec<Flight>,
    pub customers: Vec<Customer>,
    pub queues: Vec<(FlightNumber, Vec<Passport>)>,
    pub saves: usize,
    pub fail_saves: bool,
}

/// In-memory persistence whose contents the test can inspect and whose
/// saves can be made to fail.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct MemoryStore {
    pub state: Rc<RefCell<MemoryState>>,
}

#[allow(dead_code)]
impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following save fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.state.borrow_mut().fail_saves = failing;
    }

    fn check(&self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_saves {
            return Err(Error::Io(io::Error::other("disk full")));
        }
        state.saves += 1;
        Ok(())
    }
}

impl Persistence for MemoryStore {
    fn load_flights(&self) -> Result<Vec<Flight>> {
        Ok(self.state.borrow().flights.clone())
    }

    fn load_customers(&self) -> Result<Vec<Customer>> {
        Ok(self.state.borrow().customers.clone())
    }

    fn load_queues(&self) -> Result<Vec<(FlightNumber, Vec<Passport>)>> {
        Ok(self.state.borrow().queues.clone())
    }

    fn save_flights(&mut self, flights: &FlightStore) -> Result<()> {
        self.check()?;
        self.state.borrow_mut().flights = flights.list_all().cloned().collect();
        Ok(())
    }

    fn save_customers(&mut self, customers: &CustomerStore) -> Result<()> {
        self.check()?;
        self.state.borrow_mut().customers = customers.list_all().cloned().collect();
        Ok(())
    }

    fn save_queues(&mut self, queues: &QueueRegistry) -> Result<()> {
        self.check()?;
        self.state.borrow_mut().queues = queues
            .iter()
            .map(|queue| (queue.flight(), queue.iter().map(QueueEntry::passport).collect()))
            .collect();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_defaults() {
        let flight = FlightFixture::new(7).spec().build().unwrap();
        assert_eq!(flight.economy_seats(), 8);
        assert_eq!(flight.cost(), 100);

        let customer = CustomerFixture::new(3).spec().build().unwrap();
        assert_eq!(customer.discount(), DiscountTier::None);
    }
}
