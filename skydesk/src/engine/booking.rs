//! Quoting, booking and joining a waiting queue.

use serde::Serialize;

use crate::customer::{Customer, CustomerSpec, DiscountTier, Passport};
use crate::engine::ReservationEngine;
use crate::error::{Error, Result};
use crate::flight::{Flight, FlightNumber, SeatClass};

/// The customer side of a booking request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patron {
    /// A registered customer.
    Existing(Passport),
    /// Someone to register when the operation commits.
    New(CustomerSpec),
}

impl Patron {
    /// The patron's passport.
    #[must_use]
    pub const fn passport(&self) -> Passport {
        match self {
            Self::Existing(passport) => *passport,
            Self::New(spec) => spec.passport,
        }
    }
}

/// A priced seat on a flight: a quote, or the receipt of a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    /// The flight.
    pub flight: FlightNumber,
    /// The customer.
    pub passport: Passport,
    /// The seat class.
    pub class: SeatClass,
    /// Base cost times the class multiplier.
    pub base_fare: i64,
    /// Discount tier applied.
    pub discount: DiscountTier,
    /// Amount charged.
    pub price: i64,
}

impl Ticket {
    pub(crate) fn price(flight: &Flight, passport: Passport, class: SeatClass, discount: DiscountTier) -> Self {
        let base_fare = flight.fare(class);
        Self {
            flight: flight.number(),
            passport,
            class,
            base_fare,
            discount,
            price: discount.apply(base_fare),
        }
    }
}

/// A checked patron: who they are and, if new, their unsaved record.
struct Admission {
    passport: Passport,
    discount: DiscountTier,
    newcomer: Option<Customer>,
}

impl ReservationEngine {
    fn admit(&self, patron: &Patron) -> Result<Admission> {
        match patron {
            Patron::Existing(passport) => {
                let customer = self.customers.find(*passport)?;
                Ok(Admission {
                    passport: *passport,
                    discount: customer.discount(),
                    newcomer: None,
                })
            }
            Patron::New(spec) => {
                if self.customers.exists(spec.passport) {
                    return Err(Error::DuplicatePassport(spec.passport));
                }
                let customer = spec.clone().build()?;
                Ok(Admission {
                    passport: spec.passport,
                    discount: customer.discount(),
                    newcomer: Some(customer),
                })
            }
        }
    }

    fn ensure_not_booked(&self, passport: Passport, number: FlightNumber) -> Result<()> {
        match self.customers.find(passport) {
            Ok(customer) if customer.has_booking(number) => Err(Error::AlreadyBooked {
                passport,
                flight: number,
            }),
            _ => Ok(()),
        }
    }

    fn prepare(
        &self,
        patron: &Patron,
        number: FlightNumber,
        class: SeatClass,
    ) -> Result<(Ticket, Option<Customer>)> {
        let flight = self.flights.find(number)?;
        let admission = self.admit(patron)?;
        self.ensure_not_booked(admission.passport, number)?;

        if flight.is_fully_booked() {
            return Err(Error::FullyBooked(number));
        }
        if flight.available(class) == 0 {
            return Err(Error::ClassFull {
                flight: number,
                class,
            });
        }

        let ticket = Ticket::price(flight, admission.passport, class, admission.discount);
        Ok((ticket, admission.newcomer))
    }

    /// Prices a booking without making it.
    ///
    /// Runs every check [`book_flight`](Self::book_flight) runs, in the same
    /// order, so a successful quote means the booking would succeed now.
    ///
    /// # Errors
    ///
    /// Same as [`book_flight`](Self::book_flight).
    pub fn quote(&self, patron: &Patron, number: FlightNumber, class: SeatClass) -> Result<Ticket> {
        self.prepare(patron, number, class).map(|(ticket, _)| ticket)
    }

    /// Books a seat of `class` on a flight.
    ///
    /// The price is the base cost, doubled for business, less the patron's
    /// discount. A new patron is registered as part of the booking. If the
    /// customer was waiting in the flight's queue they leave it.
    ///
    /// # Errors
    ///
    /// In order of checking: [`Error::FlightNotFound`],
    /// [`Error::CustomerNotFound`] or [`Error::DuplicatePassport`],
    /// [`Error::AlreadyBooked`], [`Error::FullyBooked`] when no seat of
    /// either class is free (the patron may [`enqueue`](Self::enqueue)),
    /// and [`Error::ClassFull`] when only the other class has room.
    pub fn book_flight(
        &mut self,
        patron: Patron,
        number: FlightNumber,
        class: SeatClass,
    ) -> Result<Ticket> {
        let (ticket, newcomer) = self.prepare(&patron, number, class)?;

        if let Some(customer) = newcomer {
            self.customers.insert(customer)?;
        }
        self.flights.reserve_seat(number, class)?;
        self.customers
            .find_mut(ticket.passport)?
            .add_booking(number, ticket.price);
        let left_queue = self
            .queues
            .get_mut(number)
            .and_then(|queue| queue.remove_by_passport(ticket.passport))
            .is_some();

        log::info!(
            "booked {} {} seat on flight {} for {}",
            ticket.passport,
            class,
            number,
            ticket.price
        );
        self.touch(true, true, left_queue);
        self.commit();
        Ok(ticket)
    }

    /// Adds the patron to the waiting queue of a flight.
    ///
    /// Returns the patron's 1-based position. A patron already waiting for
    /// the flight keeps their place and gets it back unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::FlightNotFound`], [`Error::CustomerNotFound`] or
    /// [`Error::DuplicatePassport`], and [`Error::AlreadyBooked`].
    pub fn enqueue(&mut self, patron: Patron, number: FlightNumber) -> Result<usize> {
        self.flights.find(number)?;
        let admission = self.admit(&patron)?;
        self.ensure_not_booked(admission.passport, number)?;

        if let Some(position) = self.queue_position(admission.passport, number) {
            return Ok(position);
        }

        let registered = admission.newcomer.is_some();
        let snapshot = match admission.newcomer {
            Some(customer) => {
                self.customers.insert(customer.clone())?;
                customer
            }
            None => self.customers.find(admission.passport)?.clone(),
        };
        let position = self.queues.get_or_create(number).enqueue(snapshot);

        log::info!(
            "{} joined the queue for flight {} at position {position}",
            admission.passport,
            number
        );
        self.touch(false, registered, true);
        self.commit();
        Ok(position)
    }
}
