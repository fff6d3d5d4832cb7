//! End-to-end booking tests.
//!
//! Every step runs as a separate process, so these also check that state
//! survives the save and load between invocations.

mod common;

use common::{customer_flags, parse_number, TestEnv};
use predicates::prelude::*;

#[test]
fn test_book_prints_discounted_price() {
    let env = TestEnv::new();
    env.add_flight(100, 200, 10, 2);
    env.register(7, "student");

    // Business doubles the fare, student takes 15% off.
    assert_eq!(env.book(100, 7, "business"), 340);

    let customer = env.json_of(&["customer-info", "7", "--format", "json"]);
    assert_eq!(customer["customer"]["total_spent"], 340);
    assert_eq!(customer["customer"]["bookings"], serde_json::json!([100]));

    let info = env.json_of(&["flight-info", "100", "--format", "json"]);
    assert_eq!(info["flight"]["booked_business"], 1);
    assert_eq!(info["waiting"], 0);
}

#[test]
fn test_book_registers_new_customer_inline() {
    let env = TestEnv::new();
    env.add_flight(100, 150, 4, 1);

    let stdout = env.stdout_of(
        &[
            vec!["book", "100", "--passport", "42"],
            customer_flags(42).iter().map(String::as_str).collect(),
            vec!["--discount", "senior"],
        ]
        .concat(),
    );
    assert_eq!(parse_number(&stdout), 120);

    let customers = env.json_of(&["customers", "--format", "json"]);
    assert_eq!(customers[0]["passport"], 42);
    assert_eq!(customers[0]["discount"], "senior");
}

#[test]
fn test_partial_customer_details_are_rejected() {
    let env = TestEnv::new();
    env.add_flight(100, 150, 4, 1);
    env.command()
        .args(["book", "100", "--passport", "42", "--name", "Only"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("--surname"));
}

#[test]
fn test_dry_run_does_not_book() {
    let env = TestEnv::new();
    env.add_flight(100, 200, 10, 2);
    env.register(7, "military");

    let stdout = env.stdout_of(&["book", "100", "--passport", "7", "--dry-run"]);
    assert_eq!(parse_number(&stdout), 180);

    let info = env.json_of(&["flight-info", "100", "--format", "json"]);
    assert_eq!(info["flight"]["booked_economy"], 0);
    let customer = env.json_of(&["customer-info", "7", "--format", "json"]);
    assert_eq!(customer["customer"]["total_spent"], 0);
}

#[test]
fn test_wait_joins_queue_of_full_flight() {
    let env = TestEnv::new();
    env.add_flight(100, 100, 1, 0);
    env.register(1, "none");
    env.register(2, "none");
    env.book(100, 1, "economy");

    let stdout = env.stdout_of(&["book", "100", "--passport", "2", "--wait"]);
    assert_eq!(parse_number(&stdout), 1);

    let queue = env.json_of(&["queue", "100", "--format", "json"]);
    assert_eq!(queue[0]["passport"], 2);
    assert_eq!(queue[0]["position"], 1);
}

#[test]
fn test_cancel_refunds_and_promotes_head_of_queue() {
    let env = TestEnv::new();
    env.add_flight(100, 100, 1, 0);
    env.register(1, "student");
    env.register(2, "none");
    env.book(100, 1, "economy");
    let position = parse_number(&env.stdout_of(&["enqueue", "100", "--passport", "2"]));
    assert_eq!(position, 1);

    env.command()
        .args(["cancel", "100", "--passport", "1"])
        .assert()
        .success()
        .stdout("85\n")
        .stderr(predicate::str::contains("Promoted 2"));

    let promoted = env.json_of(&["customer-info", "2", "--format", "json"]);
    assert_eq!(promoted["customer"]["bookings"], serde_json::json!([100]));
    assert_eq!(promoted["customer"]["total_spent"], 100);
    assert_eq!(promoted["queues"], serde_json::json!([]));

    let cancelled = env.json_of(&["customer-info", "1", "--format", "json"]);
    assert_eq!(cancelled["customer"]["total_spent"], 0);
}

#[test]
fn test_cancel_while_queued_refunds_nothing() {
    let env = TestEnv::new();
    env.add_flight(100, 100, 1, 0);
    env.register(1, "none");
    env.register(2, "none");
    env.book(100, 1, "economy");
    env.stdout_of(&["enqueue", "100", "--passport", "2"]);

    env.command()
        .args(["cancel", "100", "--passport", "2"])
        .assert()
        .success()
        .stdout("0\n");
    let queue = env.json_of(&["queue", "100", "--format", "json"]);
    assert_eq!(queue, serde_json::json!([]));
}

#[test]
fn test_delete_flight_prints_refunds() {
    let env = TestEnv::new();
    env.add_flight(100, 100, 5, 1);
    env.register(1, "none");
    env.register(2, "frequent-flyer");
    env.book(100, 1, "economy");
    env.book(100, 2, "business");

    env.command()
        .args(["delete-flight", "100"])
        .assert()
        .success()
        .stdout("1\t100\n2\t100\n");

    let customers = env.json_of(&["customers", "--format", "json"]);
    assert_eq!(customers[0]["bookings"], serde_json::json!([]));
    // Refunds are the base cost whatever was paid.
    assert_eq!(customers[1]["total_spent"], 50);
}

#[test]
fn test_update_and_remove_customer() {
    let env = TestEnv::new();
    env.register(3, "none");

    env.command()
        .args(["update-customer", "3", "--phone", "2109999999", "--discount", "senior"])
        .assert()
        .success();
    let customer = env.json_of(&["customer-info", "3", "--format", "json"]);
    assert_eq!(customer["customer"]["phone"], "2109999999");
    assert_eq!(customer["customer"]["discount"], "senior");
    assert_eq!(customer["customer"]["name"], "Name3");

    env.command().args(["remove-customer", "3"]).assert().success();
    env.command().args(["customer-info", "3"]).assert().code(1);
}

#[test]
fn test_update_flight_changes_fare() {
    let env = TestEnv::new();
    env.add_flight(100, 100, 5, 1);
    env.command()
        .args(["update-flight", "100", "--cost", "250", "--weather", "rain"])
        .assert()
        .success();

    let info = env.json_of(&["flight-info", "100", "--format", "json"]);
    assert_eq!(info["flight"]["cost"], 250);
    assert_eq!(info["flight"]["weather"], "rain");
}

#[test]
fn test_no_autosave_still_saves_once() {
    let env = TestEnv::new();
    env.command()
        .arg("--no-autosave")
        .args(["add-flight", "9", "--from", "Oslo", "--to", "Bergen"])
        .args(["--departs", "07:15", "--arrives", "08:10", "--cost", "80", "--seats", "3"])
        .assert()
        .success();

    assert!(env.read_data_file("flights.txt").starts_with("9,Oslo,Bergen,07:15,08:10,80,"));
}
