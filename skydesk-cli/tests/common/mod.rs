//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary data directory
//! - Command builder helpers for the usual desk setup steps
//! - Small parsers for command output

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test.
const SKYDESK_ENV_VARS: [&str; 5] = [
    "SKYDESK_DATA_DIR",
    "SKYDESK_FLIGHTS_FILE",
    "SKYDESK_CUSTOMERS_FILE",
    "SKYDESK_QUEUES_FILE",
    "SKYDESK_AUTOSAVE",
];

/// Test environment with an isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the skydesk data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; the first saving command does.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("desk");
        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("skydesk").expect("Failed to find skydesk binary");
        for var in SKYDESK_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env_remove("SKYDESK_OUTPUT_FORMAT");
        cmd
    }

    /// Get a command builder pointed at this environment's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Add a flight from Athens to Rome costing `cost`.
    pub fn add_flight(&self, number: u32, cost: u32, seats: u32, business: u32) {
        self.command()
            .args(["add-flight", &number.to_string()])
            .args(["--from", "Athens", "--to", "Rome"])
            .args(["--departs", "09:30", "--arrives", "11:00"])
            .args(["--cost", &cost.to_string()])
            .args(["--seats", &seats.to_string()])
            .args(["--business", &business.to_string()])
            .args(["--plane", "A320"])
            .assert()
            .success();
    }

    /// Register a customer with the given discount tier.
    pub fn register(&self, passport: u32, discount: &str) {
        self.command()
            .args(["register", &passport.to_string()])
            .args(customer_flags(passport))
            .args(["--discount", discount])
            .assert()
            .success();
    }

    /// Book an existing customer and return the printed price.
    pub fn book(&self, flight: u32, passport: u32, class: &str) -> i64 {
        let stdout = self.stdout_of(&[
            "book",
            &flight.to_string(),
            "--passport",
            &passport.to_string(),
            "--class",
            class,
        ]);
        parse_number(&stdout)
    }

    /// Run a command that must succeed and return its stdout.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run");
        assert!(
            output.status.success(),
            "{args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Run a JSON listing command and parse its stdout.
    pub fn json_of(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.stdout_of(args);
        serde_json::from_str(&stdout).expect("Failed to parse JSON output")
    }

    /// Contents of a snapshot file in the data directory.
    pub fn read_data_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.data_dir.join(name)).expect("Failed to read data file")
    }
}

/// Contact flags for a new customer named after their passport.
pub fn customer_flags(passport: u32) -> Vec<String> {
    [
        ("--name", format!("Name{passport}")),
        ("--surname", "Traveller".to_string()),
        ("--nationality", "Greek".to_string()),
        ("--address", "Ermou 1".to_string()),
        ("--phone", "2100000000".to_string()),
    ]
    .into_iter()
    .flat_map(|(flag, value)| [flag.to_string(), value])
    .collect()
}

/// Parse the single number a command prints on stdout.
pub fn parse_number(output: &str) -> i64 {
    output
        .trim()
        .parse()
        .unwrap_or_else(|_| panic!("Expected a number, got {output:?}"))
}
