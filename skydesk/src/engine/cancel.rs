//! Cancellation and promotion from the waiting queue.

use serde::Serialize;

use crate::customer::Passport;
use crate::engine::ReservationEngine;
use crate::error::{Error, Result};
use crate::flight::{FlightNumber, SeatClass};

/// What a cancellation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cancellation {
    /// A booking was cancelled and refunded.
    Booking {
        /// Amount credited back to the customer.
        refund: i64,
        /// The seat class returned to the pool, if the flight had one booked.
        freed: Option<SeatClass>,
        /// The waiting customer moved into the freed seat, if any.
        promotion: Option<Promotion>,
    },
    /// The customer only left the waiting queue; nothing was refunded.
    Waitlist {
        /// Position they held.
        position: usize,
    },
}

/// A waiting customer booked on every flight they were queued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Promotion {
    /// The promoted customer.
    pub passport: Passport,
    /// Each flight booked, in flight-number order, with the amount charged.
    pub bookings: Vec<(FlightNumber, i64)>,
}

impl Promotion {
    /// Sum charged over every booked flight.
    #[must_use]
    pub fn total_charged(&self) -> i64 {
        self.bookings.iter().map(|(_, price)| price).sum()
    }
}

impl ReservationEngine {
    /// Cancels a customer's booking or queue place on a flight.
    ///
    /// A customer who is waiting for the flight, not booked on it, simply
    /// leaves the queue. Otherwise the booking is dropped and the customer
    /// is refunded the base cost less their current discount, regardless of
    /// the class they paid for. One seat is freed, economy first, and the
    /// head of the flight's queue is offered a promotion.
    ///
    /// # Errors
    ///
    /// [`Error::CustomerNotFound`], or [`Error::BookingNotFound`] if the
    /// customer neither holds nor waits for the flight. Nothing changes on
    /// error.
    pub fn cancel_booking(
        &mut self,
        passport: Passport,
        number: FlightNumber,
    ) -> Result<Cancellation> {
        let customer = self.customers.find(passport)?;
        if !customer.has_booking(number) {
            let left = self
                .queues
                .get_mut(number)
                .and_then(|queue| {
                    let position = queue.position(passport)?;
                    queue.remove_by_passport(passport).map(|_| position)
                })
                .ok_or(Error::BookingNotFound {
                    passport,
                    flight: number,
                })?;
            log::info!("{passport} left the queue for flight {number}");
            self.touch(false, false, true);
            self.commit();
            return Ok(Cancellation::Waitlist { position: left });
        }

        let discount = customer.discount();
        let (refund, freed) = match self.flights.find_mut(number) {
            Ok(flight) => {
                let refund = discount.apply(i64::from(flight.cost()));
                (refund, flight.release())
            }
            Err(_) => {
                log::warn!("{passport} held a booking on missing flight {number}");
                (0, None)
            }
        };
        self.customers
            .find_mut(passport)?
            .remove_booking(number, refund);
        log::info!("cancelled {passport} on flight {number}, refunded {refund}");

        let promotion = self.promote(number)?;
        self.touch(true, true, promotion.is_some());
        self.commit();
        Ok(Cancellation::Booking {
            refund,
            freed,
            promotion,
        })
    }

    /// Offers freed seats to the head of a flight's waiting queue.
    ///
    /// The head customer is promoted only if every flight they are waiting
    /// for has an economy seat free; they then get an economy seat on all
    /// of them at once, priced with their current discount. Otherwise the
    /// queue stays as it is: nobody behind the head is considered.
    ///
    /// A head entry whose customer no longer exists is dropped and nothing
    /// else happens. So are the entries of a head customer who already
    /// holds a seat on one of the flights they wait for.
    ///
    /// # Errors
    ///
    /// Returns an error only if the stores are inconsistent.
    pub fn promote_from_queue(&mut self, number: FlightNumber) -> Result<Option<Promotion>> {
        let promotion = self.promote(number)?;
        if promotion.is_some() {
            self.touch(true, true, true);
            self.commit();
        }
        Ok(promotion)
    }

    pub(crate) fn promote(&mut self, number: FlightNumber) -> Result<Option<Promotion>> {
        let Some(head) = self.queues.get(number).and_then(|q| q.peek_oldest()) else {
            return Ok(None);
        };
        let passport = head.passport();

        let Ok(customer) = self.customers.find(passport) else {
            if let Some(queue) = self.queues.get_mut(number) {
                queue.dequeue_oldest();
            }
            log::warn!("dropped stale queue entry {passport} from flight {number}");
            self.touch(false, false, true);
            return Ok(None);
        };
        let discount = customer.discount();

        let wishlist = self.queues.flights_waited_on(passport);
        let already_booked: Vec<FlightNumber> = wishlist
            .iter()
            .copied()
            .filter(|wanted| customer.has_booking(*wanted))
            .collect();
        if !already_booked.is_empty() {
            for booked in already_booked {
                if let Some(queue) = self.queues.get_mut(booked) {
                    queue.remove_by_passport(passport);
                }
                log::warn!("dropped queue entry {passport}: already booked on flight {booked}");
            }
            self.touch(false, false, true);
            return Ok(None);
        }
        let blocked = wishlist.iter().find(|wanted| {
            self.flights
                .find(**wanted)
                .map_or(true, |flight| flight.available(SeatClass::Economy) == 0)
        });
        if let Some(blocked) = blocked {
            log::debug!("{passport} stays at the head of flight {number}: flight {blocked} has no economy seat");
            return Ok(None);
        }

        let mut bookings = Vec::with_capacity(wishlist.len());
        for wanted in wishlist {
            if let Some(queue) = self.queues.get_mut(wanted) {
                queue.remove_by_passport(passport);
            }
            let flight = self.flights.find_mut(wanted)?;
            flight.reserve(SeatClass::Economy)?;
            let price = discount.apply(i64::from(flight.cost()));
            self.customers
                .find_mut(passport)?
                .add_booking(wanted, price);
            bookings.push((wanted, price));
        }

        log::info!(
            "promoted {passport} from the queue of flight {number} onto {} flight(s)",
            bookings.len()
        );
        Ok(Some(Promotion { passport, bookings }))
    }
}
