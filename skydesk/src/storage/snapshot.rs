//! Flat-file snapshot persistence.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};

use crate::customer::{Customer, CustomerStore, Passport};
use crate::error::Result;
use crate::flight::{Flight, FlightNumber, FlightStore};
use crate::queue::QueueRegistry;
use crate::storage::codec::{
    decode_customer, decode_flight, decode_queue, encode_customer, encode_flight, encode_queue,
    FIELD_DELIMITER, QUEUE_DELIMITER,
};
use crate::storage::{Persistence, StorageConfig};

/// Reads and writes the three snapshot files of a data directory.
///
/// Every save rewrites the whole file: the records go to a sibling
/// temporary file which then replaces the snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    config: StorageConfig,
}

impl SnapshotStore {
    /// Creates a store over the files named by `config`.
    #[must_use]
    pub const fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// The file locations in use.
    #[must_use]
    pub const fn config(&self) -> &StorageConfig {
        &self.config
    }
}

impl Persistence for SnapshotStore {
    fn load_flights(&self) -> Result<Vec<Flight>> {
        read_records(&self.config.flights_path(), FIELD_DELIMITER, decode_flight)
    }

    fn load_customers(&self) -> Result<Vec<Customer>> {
        read_records(&self.config.customers_path(), FIELD_DELIMITER, decode_customer)
    }

    fn load_queues(&self) -> Result<Vec<(FlightNumber, Vec<Passport>)>> {
        read_records(&self.config.queues_path(), QUEUE_DELIMITER, decode_queue)
    }

    fn save_flights(&mut self, flights: &FlightStore) -> Result<()> {
        write_records(
            &self.config.flights_path(),
            FIELD_DELIMITER,
            flights.list_all().map(encode_flight),
        )
    }

    fn save_customers(&mut self, customers: &CustomerStore) -> Result<()> {
        write_records(
            &self.config.customers_path(),
            FIELD_DELIMITER,
            customers.list_all().map(encode_customer),
        )
    }

    fn save_queues(&mut self, queues: &QueueRegistry) -> Result<()> {
        write_records(
            &self.config.queues_path(),
            QUEUE_DELIMITER,
            queues.iter().map(encode_queue),
        )
    }
}

/// Reads every decodable record of `path`.
///
/// A missing file reads as empty. Records that fail to decode are skipped
/// with a warning; only I/O failures abort the load.
fn read_records<T>(
    path: &Path,
    delimiter: u8,
    decode: impl Fn(&StringRecord, u64) -> Result<T>,
) -> Result<Vec<T>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("{} does not exist yet, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(delimiter)
        .from_reader(file);

    let mut items = Vec::new();
    for (at, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                log::warn!("{}: skipping unreadable record: {e}", path.display());
                continue;
            }
        };
        let line = record
            .position()
            .map_or(at as u64 + 1, csv::Position::line);
        match decode(&record, line) {
            Ok(item) => items.push(item),
            Err(e) => log::warn!("{}: {e}", path.display()),
        }
    }
    log::debug!("loaded {} record(s) from {}", items.len(), path.display());
    Ok(items)
}

/// Replaces `path` with `records`, one per line.
fn write_records(
    path: &Path,
    delimiter: u8,
    records: impl Iterator<Item = StringRecord>,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let staging = staging_path(path);

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .delimiter(delimiter)
        .from_path(&staging)?;
    let mut count = 0usize;
    for record in records {
        writer.write_record(&record)?;
        count += 1;
    }
    writer.flush()?;
    drop(writer);

    fs::rename(&staging, path)?;
    log::debug!("saved {count} record(s) to {}", path.display());
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
