//! Operator-driven allocation of seats to a flight's waiting queue.

use serde::Serialize;

use crate::customer::{Customer, Passport};
use crate::engine::{ReservationEngine, Ticket};
use crate::error::Result;
use crate::flight::{Flight, FlightNumber, SeatClass};
use crate::queue::QueueEntry;

/// The person at the desk deciding what each waiting customer gets.
///
/// The engine presents the head of the queue again after every decline, so
/// an operator must eventually return `None` from
/// [`choose_class`](Self::choose_class) to end a session that does not
/// drain the queue.
pub trait QueueOperator {
    /// Picks a class for the head customer, or `None` to stop the session.
    fn choose_class(&mut self, flight: &Flight, entry: &QueueEntry) -> Option<SeatClass>;

    /// Confirms (`true`) or declines the priced offer.
    fn confirm(&mut self, offer: &Ticket) -> bool;

    /// Told that the chosen class has no free seat; counts as a decline.
    fn class_unavailable(&mut self, _flight: &Flight, _class: SeatClass) {}
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Nobody is left waiting.
    #[default]
    QueueEmpty,
    /// Neither class has a free seat.
    NoSeats,
    /// The operator ended the session.
    OperatorStopped,
}

/// Outcome of a queue management session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueueSession {
    /// Bookings made, in order.
    pub allocated: Vec<Ticket>,
    /// Queue entries dropped because the customer no longer exists or
    /// already holds a seat on the flight.
    pub dropped: Vec<Passport>,
    /// Offers declined, unavailable classes included.
    pub declined: usize,
    /// Customers still waiting afterwards.
    pub remaining: usize,
    /// Whether the emptied queue was removed from the registry.
    pub queue_removed: bool,
    /// Why the session ended.
    pub stop: StopReason,
}

impl ReservationEngine {
    /// Walks a flight's waiting queue from the head, letting `operator`
    /// allocate seats one customer at a time.
    ///
    /// Offers are priced with the customer's current discount. A confirmed
    /// offer books the seat and removes the customer from the queue; a
    /// declined one leaves them at the head. An emptied queue is removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`](crate::Error::FlightNotFound) if
    /// the flight does not exist.
    pub fn manage_queue(
        &mut self,
        number: FlightNumber,
        operator: &mut dyn QueueOperator,
    ) -> Result<QueueSession> {
        self.flights.find(number)?;
        let mut session = QueueSession::default();

        loop {
            let Some(entry) = self.queues.get(number).and_then(|q| q.peek_oldest()) else {
                session.stop = StopReason::QueueEmpty;
                break;
            };
            let passport = entry.passport();

            let Ok(customer) = self.customers.find(passport) else {
                if let Some(queue) = self.queues.get_mut(number) {
                    queue.dequeue_oldest();
                }
                log::warn!("dropped stale queue entry {passport} from flight {number}");
                session.dropped.push(passport);
                continue;
            };
            if customer.has_booking(number) {
                if let Some(queue) = self.queues.get_mut(number) {
                    queue.dequeue_oldest();
                }
                log::warn!("dropped queue entry {passport}: already booked on flight {number}");
                session.dropped.push(passport);
                continue;
            }

            let flight = self.flights.find(number)?;
            if flight.is_fully_booked() {
                session.stop = StopReason::NoSeats;
                break;
            }

            let Some(class) = operator.choose_class(flight, entry) else {
                session.stop = StopReason::OperatorStopped;
                break;
            };
            if flight.available(class) == 0 {
                operator.class_unavailable(flight, class);
                session.declined += 1;
                continue;
            }

            let offer = offer_for(flight, customer, class);
            if !operator.confirm(&offer) {
                log::debug!("{passport} declined a {class} seat on flight {number}");
                session.declined += 1;
                continue;
            }

            self.flights.reserve_seat(number, class)?;
            self.customers
                .find_mut(passport)?
                .add_booking(number, offer.price);
            if let Some(queue) = self.queues.get_mut(number) {
                queue.dequeue_oldest();
            }
            log::info!("allocated a {class} seat on flight {number} to {passport}");
            session.allocated.push(offer);
        }

        session.remaining = self.queues.get(number).map_or(0, |q| q.size());
        if session.remaining == 0 && self.queues.remove(number).is_some() {
            session.queue_removed = true;
        }

        let booked = !session.allocated.is_empty();
        let queue_changed = booked || !session.dropped.is_empty() || session.queue_removed;
        if booked || queue_changed {
            self.touch(booked, booked, queue_changed);
            self.commit();
        }
        Ok(session)
    }
}

fn offer_for(flight: &Flight, customer: &Customer, class: SeatClass) -> Ticket {
    Ticket::price(flight, customer.passport(), class, customer.discount())
}
