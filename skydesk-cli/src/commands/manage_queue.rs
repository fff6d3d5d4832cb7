//! Manage-queue command implementation.
//!
//! Walks a flight's waiting queue from the head and lets the operator pick
//! a class and confirm the price for each customer. Answers are read from
//! stdin one line at a time; prompts go to stderr so stdout stays clean.

use crate::error::CliError;
use crate::output::{write_json, OutputFormat};
use crate::utils::{open_engine, save, GlobalOptions};
use clap::Args;
use skydesk::{Flight, FlightNumber, QueueEntry, QueueOperator, SeatClass, StopReason, Ticket};
use std::io::{BufRead, Write};

/// Allocate seats to customers waiting for a flight.
#[derive(Args)]
pub struct ManageQueueCommand {
    /// Flight number
    #[arg(value_name = "FLIGHT")]
    pub flight: FlightNumber,

    /// Offer this class to everyone instead of asking
    #[arg(long)]
    pub class: Option<SeatClass>,

    /// Accept every offer instead of asking
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Output format for the session summary (csv prints a table)
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

/// A queue operator answering from a line-oriented reader.
///
/// For the class prompt, `b`/`business` and `e`/`economy` pick a class;
/// anything else, or end of input, stops the session. For the price prompt,
/// `y`/`yes` confirms and anything else declines. End of input at the price
/// prompt stops the session, as does any decline once the class is fixed.
pub struct PromptOperator<R, W> {
    input: R,
    prompts: W,
    class: Option<SeatClass>,
    confirm_all: bool,
    stopped: bool,
}

impl<R: BufRead, W: Write> PromptOperator<R, W> {
    /// Creates an operator reading answers from `input` and writing
    /// prompts to `prompts`.
    pub fn new(input: R, prompts: W) -> Self {
        Self {
            input,
            prompts,
            class: None,
            confirm_all: false,
            stopped: false,
        }
    }

    /// Answers every class prompt with `class`.
    ///
    /// The session stops once that class runs out.
    #[must_use]
    pub fn with_class(mut self, class: Option<SeatClass>) -> Self {
        self.class = class;
        self
    }

    /// Confirms every offer without asking.
    #[must_use]
    pub fn with_confirm_all(mut self, confirm_all: bool) -> Self {
        self.confirm_all = confirm_all;
        self
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        // Prompt write failures are not fatal; the answer still decides.
        let _ = write!(self.prompts, "{prompt} ");
        let _ = self.prompts.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_lowercase()),
        }
    }
}

impl<R: BufRead, W: Write> QueueOperator for PromptOperator<R, W> {
    fn choose_class(&mut self, flight: &Flight, entry: &QueueEntry) -> Option<SeatClass> {
        if self.stopped {
            return None;
        }
        if self.class.is_some() {
            return self.class;
        }
        let customer = entry.customer();
        let prompt = format!(
            "{} {} ({}) waiting for flight {}: business {} / economy {} free. Class [b/e, q to stop]?",
            customer.name(),
            customer.surname(),
            entry.passport(),
            flight.number(),
            flight.available(SeatClass::Business),
            flight.available(SeatClass::Economy),
        );
        match self.ask(&prompt)?.as_str() {
            "b" | "business" => Some(SeatClass::Business),
            "e" | "economy" => Some(SeatClass::Economy),
            _ => None,
        }
    }

    fn confirm(&mut self, offer: &Ticket) -> bool {
        if self.confirm_all {
            return true;
        }
        let prompt = format!(
            "{} seat for {}: fare {}, {} discount, price {}. Confirm [y/n]?",
            offer.class, offer.passport, offer.base_fare, offer.discount, offer.price
        );
        match self.ask(&prompt).as_deref() {
            Some("y" | "yes") => true,
            None => {
                self.stopped = true;
                false
            }
            Some(_) => {
                // A fixed class would re-offer the same seat forever.
                if self.class.is_some() {
                    self.stopped = true;
                }
                false
            }
        }
    }

    fn class_unavailable(&mut self, flight: &Flight, class: SeatClass) {
        if self.class.is_some() {
            self.stopped = true;
        }
        let _ = writeln!(
            self.prompts,
            "No {class} seats left on flight {}",
            flight.number()
        );
    }
}

impl ManageQueueCommand {
    /// Execute the manage-queue command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut engine = open_engine(global)?;

        let stdin = std::io::stdin();
        let mut operator = PromptOperator::new(stdin.lock(), std::io::stderr())
            .with_class(self.class)
            .with_confirm_all(self.yes);
        let session = engine.manage_queue(self.flight, &mut operator)?;
        save(&mut engine)?;

        if self.format == OutputFormat::Json {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            return write_json(&mut handle, &session);
        }

        for ticket in &session.allocated {
            println!("{}\t{}\t{}", ticket.passport, ticket.class, ticket.price);
        }
        if !global.quiet {
            for passport in &session.dropped {
                eprintln!("Dropped {passport}: no longer registered");
            }
            let stop = match session.stop {
                StopReason::QueueEmpty => "queue empty",
                StopReason::NoSeats => "no seats left",
                StopReason::OperatorStopped => "stopped",
            };
            eprintln!(
                "Allocated {} seat(s), {} declined, {} still waiting ({stop})",
                session.allocated.len(),
                session.declined,
                session.remaining
            );
        }
        Ok(())
    }
}
