//! Property-based tests for `ReservationEngine` consistency.

use super::{Patron, QueueOperator, ReservationEngine, Ticket};
use crate::customer::{CustomerSpec, DiscountTier, Passport};
use crate::flight::{ClockTime, Flight, FlightNumber, FlightSpec, FlightUpdate, SeatClass};
use crate::queue::QueueEntry;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Book(u32, u32, SeatClass),
    Enqueue(u32, u32),
    Cancel(u32, u32),
    Delete(u32),
    Resize(u32, u32, u32),
    Remove(u32),
    Manage(u32, usize),
}

fn class_strategy() -> impl Strategy<Value = SeatClass> {
    prop_oneof![Just(SeatClass::Business), Just(SeatClass::Economy)]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let flight = 1u32..=4;
    let passport = 1u32..=8;
    prop_oneof![
        4 => (passport.clone(), flight.clone(), class_strategy()).prop_map(|(p, f, c)| Op::Book(p, f, c)),
        3 => (passport.clone(), flight.clone()).prop_map(|(p, f)| Op::Enqueue(p, f)),
        4 => (passport.clone(), flight.clone()).prop_map(|(p, f)| Op::Cancel(p, f)),
        1 => flight.clone().prop_map(Op::Delete),
        1 => (flight.clone(), 0u32..6, 0u32..4).prop_map(|(f, t, b)| Op::Resize(f, t, b)),
        1 => passport.prop_map(Op::Remove),
        1 => (flight, 0usize..4).prop_map(|(f, n)| Op::Manage(f, n)),
    ]
}

/// Always offers economy and accepts, for a fixed number of customers.
struct Accepting(usize);

impl QueueOperator for Accepting {
    fn choose_class(&mut self, _flight: &Flight, _entry: &QueueEntry) -> Option<SeatClass> {
        if self.0 == 0 {
            return None;
        }
        self.0 -= 1;
        Some(SeatClass::Economy)
    }

    fn confirm(&mut self, _offer: &Ticket) -> bool {
        true
    }
}

fn seeded_engine() -> ReservationEngine {
    let mut engine = ReservationEngine::new();
    for number in 1..=4 {
        engine
            .add_flight(FlightSpec {
                number: FlightNumber::new(number),
                origin: "North".into(),
                destination: "South".into(),
                departure: ClockTime::new(1, 0).unwrap(),
                arrival: ClockTime::new(2, 0).unwrap(),
                cost: 10 * number,
                total_seats: 3,
                business_seats: 1,
                ..FlightSpec::default()
            })
            .unwrap();
    }
    for passport in 1..=8 {
        engine
            .register_customer(CustomerSpec {
                passport: Passport::new(passport),
                name: "Test".into(),
                surname: "Traveller".into(),
                nationality: "Nowhere".into(),
                address: "Somewhere".into(),
                phone: "0".into(),
                discount: DiscountTier::from_code((passport % 5) as u8).unwrap_or_default(),
            })
            .unwrap();
    }
    engine
}

fn apply(engine: &mut ReservationEngine, op: &Op) {
    let flight = FlightNumber::new;
    let passport = Passport::new;
    // Rejections are expected; only the resulting state matters.
    let _ = match *op {
        Op::Book(p, f, class) => engine
            .book_flight(Patron::Existing(passport(p)), flight(f), class)
            .map(drop),
        Op::Enqueue(p, f) => engine.enqueue(Patron::Existing(passport(p)), flight(f)).map(drop),
        Op::Cancel(p, f) => engine.cancel_booking(passport(p), flight(f)).map(drop),
        Op::Delete(f) => engine.delete_flight(flight(f)).map(drop),
        Op::Resize(f, total, business) => engine.update_flight(
            flight(f),
            &FlightUpdate {
                total_seats: Some(total),
                business_seats: Some(business),
                ..FlightUpdate::default()
            },
        ),
        Op::Remove(p) => engine.remove_customer(passport(p)).map(drop),
        Op::Manage(f, n) => engine.manage_queue(flight(f), &mut Accepting(n)).map(drop),
    };
}

fn check_invariants(engine: &ReservationEngine) -> Result<(), TestCaseError> {
    for flight in engine.schedule() {
        prop_assert!(flight.booked_business() <= flight.business_seats());
        prop_assert!(flight.booked_economy() <= flight.economy_seats());
        prop_assert_eq!(
            flight.business_seats() + flight.economy_seats(),
            flight.total_seats()
        );
        let holders = engine
            .customers()
            .filter(|c| c.has_booking(flight.number()))
            .count();
        prop_assert_eq!(flight.total_booked() as usize, holders);
    }

    for customer in engine.customers() {
        let mut seen = customer.bookings().to_vec();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), customer.bookings().len());
        for booked in customer.bookings() {
            prop_assert!(engine.flight(*booked).is_ok());
        }
    }

    for queue in engine.queues() {
        prop_assert!(engine.flight(queue.flight()).is_ok());
        for entry in queue.iter() {
            if let Ok(customer) = engine.customer(entry.passport()) {
                prop_assert!(!customer.has_booking(queue.flight()));
            }
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // Seat counts, booking lists and queues agree after any operation sequence
    #[test]
    fn engine_state_stays_consistent(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut engine = seeded_engine();
        for op in &ops {
            apply(&mut engine, op);
            check_invariants(&engine)?;
        }
    }

    // Cancelling something that was never booked or queued changes nothing
    #[test]
    fn cancel_unknown_booking_is_inert(passport in 1u32..=8, number in 1u32..=4) {
        let mut engine = seeded_engine();
        let before: Vec<i64> = engine.customers().map(|c| c.total_spent()).collect();

        let result = engine.cancel_booking(Passport::new(passport), FlightNumber::new(number));
        prop_assert!(result.is_err());

        let after: Vec<i64> = engine.customers().map(|c| c.total_spent()).collect();
        prop_assert_eq!(before, after);
        prop_assert!(engine.schedule().all(|f| f.total_booked() == 0));
    }

    // A booking followed by its cancellation nets out to the class premium
    #[test]
    fn book_then_cancel_nets_class_premium(
        passport in 1u32..=8,
        number in 1u32..=4,
        class in class_strategy(),
    ) {
        let mut engine = seeded_engine();
        let ticket = engine
            .book_flight(Patron::Existing(Passport::new(passport)), FlightNumber::new(number), class)
            .unwrap();
        engine.cancel_booking(Passport::new(passport), FlightNumber::new(number)).unwrap();

        let customer = engine.customer(Passport::new(passport)).unwrap();
        let refund = ticket.discount.apply(i64::from(10 * number));
        prop_assert_eq!(customer.total_spent(), ticket.price - refund);
        prop_assert!(customer.bookings().is_empty());
    }
}
