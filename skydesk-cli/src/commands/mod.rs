//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `add_flight`, `update_flight`, `delete_flight`: flight maintenance
//! - `schedule`, `flight_info`: flight listings
//! - `register`, `update_customer`, `remove_customer`: customer maintenance
//! - `customers`, `customer_info`: customer listings
//! - `book`: quote or book a seat, optionally joining the queue
//! - `enqueue`: join a flight's waiting queue
//! - `cancel`: cancel a booking or leave a queue
//! - `queue`: show a flight's waiting queue
//! - `manage_queue`: allocate seats to waiting customers

pub mod add_flight;
pub mod book;
pub mod cancel;
pub mod customer_info;
pub mod customers;
pub mod delete_flight;
pub mod enqueue;
pub mod flight_info;
pub mod manage_queue;
pub mod queue;
pub mod register;
pub mod remove_customer;
pub mod schedule;
pub mod update_customer;
pub mod update_flight;

pub use add_flight::AddFlightCommand;
pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use customer_info::CustomerInfoCommand;
pub use customers::CustomersCommand;
pub use delete_flight::DeleteFlightCommand;
pub use enqueue::EnqueueCommand;
pub use flight_info::FlightInfoCommand;
pub use manage_queue::ManageQueueCommand;
pub use queue::QueueCommand;
pub use register::RegisterCommand;
pub use remove_customer::RemoveCustomerCommand;
pub use schedule::ScheduleCommand;
pub use update_customer::UpdateCustomerCommand;
pub use update_flight::UpdateFlightCommand;
