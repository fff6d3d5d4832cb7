//! Per-flight waiting queues.
//!
//! A [`WaitingQueue`] is a strict FIFO of customer snapshots taken when they
//! joined. Snapshots are kept for display and persistence only; decisions
//! about seats and prices are always made against the live customer record.

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::customer::{Customer, Passport};
use crate::flight::FlightNumber;

/// One waiting customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueEntry {
    customer: Customer,
    joined_at: DateTime<Utc>,
}

impl QueueEntry {
    /// The customer as they were when joining.
    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.customer
    }

    /// The waiting customer's passport.
    #[must_use]
    pub const fn passport(&self) -> Passport {
        self.customer.passport()
    }

    /// When the customer joined the queue.
    #[must_use]
    pub const fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    /// Time spent waiting as of `now`, never negative.
    #[must_use]
    pub fn waited(&self, now: DateTime<Utc>) -> Duration {
        (now - self.joined_at).max(Duration::zero())
    }
}

/// The waiting queue of a single flight.
///
/// # Examples
///
/// ```
/// use skydesk::{CustomerSpec, DiscountTier, FlightNumber, Passport, WaitingQueue};
///
/// let customer = CustomerSpec {
///     passport: Passport::new(1),
///     name: "Ada".into(),
///     surname: "Lovelace".into(),
///     nationality: "British".into(),
///     address: "London".into(),
///     phone: "123".into(),
///     discount: DiscountTier::None,
/// }
/// .build()
/// .unwrap();
///
/// let mut queue = WaitingQueue::new(FlightNumber::new(100));
/// assert_eq!(queue.enqueue(customer), 1);
/// assert_eq!(queue.position(Passport::new(1)), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitingQueue {
    flight: FlightNumber,
    entries: VecDeque<QueueEntry>,
}

impl WaitingQueue {
    /// Creates an empty queue for `flight`.
    #[must_use]
    pub const fn new(flight: FlightNumber) -> Self {
        Self {
            flight,
            entries: VecDeque::new(),
        }
    }

    /// The flight this queue waits for.
    #[must_use]
    pub const fn flight(&self) -> FlightNumber {
        self.flight
    }

    /// Appends a snapshot joining now and returns its 1-based position.
    pub fn enqueue(&mut self, snapshot: Customer) -> usize {
        self.enqueue_at(snapshot, Utc::now())
    }

    /// Appends a snapshot with an explicit join time.
    ///
    /// The queue is ordered by arrival, not by `joined_at`; callers restoring
    /// a queue must replay entries oldest first.
    pub fn enqueue_at(&mut self, snapshot: Customer, joined_at: DateTime<Utc>) -> usize {
        self.entries.push_back(QueueEntry {
            customer: snapshot,
            joined_at,
        });
        self.entries.len()
    }

    /// Removes and returns the oldest entry.
    pub fn dequeue_oldest(&mut self) -> Option<QueueEntry> {
        self.entries.pop_front()
    }

    /// The oldest entry, if any.
    #[must_use]
    pub fn peek_oldest(&self) -> Option<&QueueEntry> {
        self.entries.front()
    }

    /// Removes the first entry for `passport`, wherever it stands.
    pub fn remove_by_passport(&mut self, passport: Passport) -> Option<QueueEntry> {
        let at = self.entries.iter().position(|e| e.passport() == passport)?;
        self.entries.remove(at)
    }

    /// 1-based rank of `passport`, if queued.
    #[must_use]
    pub fn position(&self, passport: Passport) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.passport() == passport)
            .map(|at| at + 1)
    }

    /// Returns `true` if `passport` is queued.
    #[must_use]
    pub fn contains(&self, passport: Passport) -> bool {
        self.entries.iter().any(|e| e.passport() == passport)
    }

    /// Number of waiting customers.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nobody is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &QueueEntry> {
        self.entries.iter()
    }
}

/// All waiting queues, keyed by flight number.
#[derive(Debug, Clone, Default)]
pub struct QueueRegistry {
    queues: BTreeMap<FlightNumber, WaitingQueue>,
}

impl QueueRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The queue for `flight`, if one exists.
    #[must_use]
    pub fn get(&self, flight: FlightNumber) -> Option<&WaitingQueue> {
        self.queues.get(&flight)
    }

    /// Mutable access to the queue for `flight`.
    pub fn get_mut(&mut self, flight: FlightNumber) -> Option<&mut WaitingQueue> {
        self.queues.get_mut(&flight)
    }

    /// The queue for `flight`, created empty if missing.
    pub fn get_or_create(&mut self, flight: FlightNumber) -> &mut WaitingQueue {
        self.queues
            .entry(flight)
            .or_insert_with(|| WaitingQueue::new(flight))
    }

    /// Drops the queue for `flight`.
    pub fn remove(&mut self, flight: FlightNumber) -> Option<WaitingQueue> {
        self.queues.remove(&flight)
    }

    /// How many customers wait for `flight`.
    #[must_use]
    pub fn waiting_count(&self, flight: FlightNumber) -> usize {
        self.get(flight).map_or(0, WaitingQueue::size)
    }

    /// Every flight whose queue currently holds `passport`, ascending.
    #[must_use]
    pub fn flights_waited_on(&self, passport: Passport) -> Vec<FlightNumber> {
        self.queues
            .values()
            .filter(|queue| queue.contains(passport))
            .map(WaitingQueue::flight)
            .collect()
    }

    /// Removes `passport` from every queue; returns the flights it left.
    pub fn purge_passport(&mut self, passport: Passport) -> Vec<FlightNumber> {
        self.queues
            .values_mut()
            .filter_map(|queue| queue.remove_by_passport(passport).map(|_| queue.flight()))
            .collect()
    }

    /// Queues in flight-number order.
    pub fn iter(&self) -> impl Iterator<Item = &WaitingQueue> {
        self.queues.values()
    }

    /// Number of queues, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queues.len()
    }

    /// Returns `true` if there are no queues at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::{CustomerSpec, DiscountTier};

    fn customer(passport: u32) -> Customer {
        CustomerSpec {
            passport: Passport::new(passport),
            name: "Alan".into(),
            surname: "Turing".into(),
            nationality: "British".into(),
            address: "Wilmslow".into(),
            phone: "1954".into(),
            discount: DiscountTier::None,
        }
        .build()
        .unwrap()
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = WaitingQueue::new(FlightNumber::new(1));
        assert_eq!(queue.enqueue(customer(3)), 1);
        assert_eq!(queue.enqueue(customer(1)), 2);
        assert_eq!(queue.enqueue(customer(2)), 3);

        assert_eq!(queue.peek_oldest().unwrap().passport(), Passport::new(3));
        assert_eq!(queue.dequeue_oldest().unwrap().passport(), Passport::new(3));
        assert_eq!(queue.position(Passport::new(2)), Some(2));
        assert_eq!(queue.size(), 2);
    }

    #[test]
    fn test_remove_by_passport_from_middle() {
        let mut queue = WaitingQueue::new(FlightNumber::new(1));
        for passport in [1, 2, 3] {
            queue.enqueue(customer(passport));
        }
        let removed = queue.remove_by_passport(Passport::new(2)).unwrap();
        assert_eq!(removed.passport(), Passport::new(2));
        assert!(!queue.contains(Passport::new(2)));
        assert_eq!(queue.position(Passport::new(3)), Some(2));
        assert!(queue.remove_by_passport(Passport::new(9)).is_none());
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = WaitingQueue::new(FlightNumber::new(1));
        assert!(queue.is_empty());
        assert!(queue.peek_oldest().is_none());
        assert!(queue.dequeue_oldest().is_none());
        assert_eq!(queue.position(Passport::new(1)), None);
    }

    #[test]
    fn test_waited_is_never_negative() {
        let mut queue = WaitingQueue::new(FlightNumber::new(1));
        let joined = Utc::now();
        queue.enqueue_at(customer(1), joined);
        let entry = queue.peek_oldest().unwrap();
        assert_eq!(entry.waited(joined - Duration::minutes(5)), Duration::zero());
        assert_eq!(entry.waited(joined + Duration::minutes(5)), Duration::minutes(5));
    }

    #[test]
    fn test_registry_wishlist_and_purge() {
        let mut registry = QueueRegistry::new();
        registry.get_or_create(FlightNumber::new(30)).enqueue(customer(1));
        registry.get_or_create(FlightNumber::new(10)).enqueue(customer(1));
        registry.get_or_create(FlightNumber::new(20)).enqueue(customer(2));

        assert_eq!(
            registry.flights_waited_on(Passport::new(1)),
            [FlightNumber::new(10), FlightNumber::new(30)]
        );
        assert_eq!(registry.waiting_count(FlightNumber::new(20)), 1);
        assert_eq!(registry.waiting_count(FlightNumber::new(99)), 0);

        let left = registry.purge_passport(Passport::new(1));
        assert_eq!(left, [FlightNumber::new(10), FlightNumber::new(30)]);
        assert!(registry.flights_waited_on(Passport::new(1)).is_empty());
        // Emptied queues stay registered.
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_registry_iterates_in_flight_order() {
        let mut registry = QueueRegistry::new();
        for number in [5, 1, 3] {
            registry.get_or_create(FlightNumber::new(number));
        }
        let order: Vec<u32> = registry.iter().map(|q| q.flight().value()).collect();
        assert_eq!(order, [1, 3, 5]);
        assert!(registry.remove(FlightNumber::new(3)).is_some());
        assert!(registry.get(FlightNumber::new(3)).is_none());
    }
}
