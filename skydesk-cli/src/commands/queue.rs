//! Queue command implementation.

use crate::error::CliError;
use crate::output::{write_queue, OutputFormat};
use crate::utils::{open_engine, GlobalOptions};
use clap::Args;
use skydesk::{FlightNumber, WaitingQueue};

/// Show a flight's waiting queue, oldest first.
#[derive(Args)]
pub struct QueueCommand {
    /// Flight number
    #[arg(value_name = "FLIGHT")]
    pub flight: FlightNumber,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "SKYDESK_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

impl QueueCommand {
    /// Execute the queue command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let engine = open_engine(global)?;
        let empty = WaitingQueue::new(self.flight);
        let queue = engine.queue(self.flight)?.unwrap_or(&empty);

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_queue(&mut handle, self.format, queue, chrono::Utc::now())
    }
}
