//! Flight and customer maintenance.

use serde::Serialize;

use crate::customer::{Customer, CustomerSpec, CustomerUpdate, Passport};
use crate::engine::ReservationEngine;
use crate::error::{Error, Result};
use crate::flight::{Flight, FlightNumber, FlightSpec, FlightUpdate};

/// What deleting a flight did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionReport {
    /// The removed flight.
    pub flight: Flight,
    /// Every customer who held the flight, with the amount refunded.
    pub refunds: Vec<(Passport, i64)>,
}

impl ReservationEngine {
    /// Adds a flight and an empty waiting queue for it.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateFlight`], or whatever [`FlightSpec::build`] rejects.
    pub fn add_flight(&mut self, spec: FlightSpec) -> Result<()> {
        let number = spec.number;
        self.flights.create(spec)?;
        self.queues.get_or_create(number);
        log::info!("added flight {number}");
        self.touch(true, false, true);
        self.commit();
        Ok(())
    }

    /// Changes the provided fields of a flight, all or nothing.
    ///
    /// # Errors
    ///
    /// [`Error::FlightNotFound`], or [`Error::InvalidUpdate`] with the
    /// flight left untouched.
    pub fn update_flight(&mut self, number: FlightNumber, update: &FlightUpdate) -> Result<()> {
        self.flights.find_mut(number)?.apply_update(update)?;
        log::info!("updated flight {number}");
        self.touch(true, false, false);
        self.commit();
        Ok(())
    }

    /// Deletes a flight nobody is waiting for.
    ///
    /// Every customer holding the flight loses the booking and is refunded
    /// the full base cost, whatever class or discount they booked with.
    ///
    /// # Errors
    ///
    /// [`Error::FlightNotFound`], or [`Error::FlightHasQueue`] while its
    /// waiting queue is not empty.
    pub fn delete_flight(&mut self, number: FlightNumber) -> Result<DeletionReport> {
        let flight = self.flights.delete(number, &self.queues)?;
        self.queues.remove(number);

        let refund = i64::from(flight.cost());
        let mut refunds = Vec::new();
        for passport in self.customers.holders_of(number) {
            let customer = self.customers.find_mut(passport)?;
            if customer.remove_booking(number, refund) {
                refunds.push((passport, refund));
            }
        }

        log::info!(
            "deleted flight {number}, refunded {} customer(s)",
            refunds.len()
        );
        self.touch(true, !refunds.is_empty(), true);
        self.commit();
        Ok(DeletionReport { flight, refunds })
    }

    /// Registers a customer with no bookings.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicatePassport`], or whatever [`CustomerSpec::build`] rejects.
    pub fn register_customer(&mut self, spec: CustomerSpec) -> Result<()> {
        let passport = spec.passport;
        self.customers.register(spec)?;
        log::info!("registered customer {passport}");
        self.touch(false, true, false);
        self.commit();
        Ok(())
    }

    /// Changes a customer's contact details or discount tier.
    ///
    /// Future prices and refunds use the new tier. Snapshots already in
    /// waiting queues keep the old details.
    ///
    /// # Errors
    ///
    /// [`Error::CustomerNotFound`] or [`Error::Validation`].
    pub fn update_customer(&mut self, passport: Passport, update: &CustomerUpdate) -> Result<()> {
        self.customers.find_mut(passport)?.apply_update(update)?;
        log::info!("updated customer {passport}");
        self.touch(false, true, false);
        self.commit();
        Ok(())
    }

    /// Removes a customer without bookings and takes them out of every
    /// waiting queue.
    ///
    /// # Errors
    ///
    /// [`Error::CustomerNotFound`], or [`Error::CustomerHasBookings`] while
    /// they still hold a booking.
    pub fn remove_customer(&mut self, passport: Passport) -> Result<Customer> {
        let bookings = self.customers.find(passport)?.bookings().len();
        if bookings > 0 {
            return Err(Error::CustomerHasBookings { passport, bookings });
        }
        let customer = self.customers.remove(passport)?;
        let left = self.queues.purge_passport(passport);

        log::info!(
            "removed customer {passport}, who left {} queue(s)",
            left.len()
        );
        self.touch(false, true, !left.is_empty());
        self.commit();
        Ok(customer)
    }
}
