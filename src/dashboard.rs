//! Display state for the comparison view and the fetch-on-change cycle.
//!
//! A change of the selected pair yields a [`LoadTicket`]. The ticket is run
//! (usually on a worker thread) with [`run_load`] and its outcome handed back
//! to [`Dashboard::complete`]. Only the most recent ticket may update the
//! displayed rows, so a slow answer for an old selection never replaces the
//! data of a newer one.

use crate::api::HistoricalSource;
use crate::error::SelectionError;
use crate::format::format_date;
use crate::models::{SeriesRow, Slot};
use crate::reshape::reshape;
use crate::selection::CountryPair;

pub const PLACEHOLDER: &str = "Loading data...";

/// A load request bound to the selection it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub pair: CountryPair,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Vec<SeriesRow>),
    /// Fetch or decode failed; the message is kept for logs and status lines.
    Failed(String),
}

impl LoadOutcome {
    pub fn into_rows(self) -> Vec<SeriesRow> {
        match self {
            LoadOutcome::Loaded(rows) => rows,
            LoadOutcome::Failed(_) => Vec::new(),
        }
    }
}

/// Fetch the ticket's pair from `source` and reshape it.
pub fn run_load<S>(source: &S, ticket: &LoadTicket) -> LoadOutcome
where
    S: HistoricalSource + ?Sized,
{
    match source.fetch(ticket.pair.as_slice()) {
        Ok(records) => LoadOutcome::Loaded(reshape(&records)),
        Err(e) => {
            log::error!(
                "Error fetching or transforming data for {} (load #{}): {e}",
                ticket.pair,
                ticket.generation
            );
            LoadOutcome::Failed(e.to_string())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pair: CountryPair,
    rows: Vec<SeriesRow>,
    date_labels: Vec<String>,
    generation: u64,
    pending: Option<u64>,
    last_error: Option<String>,
}

impl Dashboard {
    pub fn new(pair: CountryPair) -> Self {
        Self {
            pair,
            ..Self::default()
        }
    }

    pub fn pair(&self) -> &CountryPair {
        &self.pair
    }

    pub fn rows(&self) -> &[SeriesRow] {
        &self.rows
    }

    /// Axis labels for `rows`, one per row, formatted once when the rows arrive.
    pub fn date_labels(&self) -> &[String] {
        &self.date_labels
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Text to show instead of the chart, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some(PLACEHOLDER)
    }

    /// Apply a selector change. `Ok(None)` means nothing changed.
    pub fn select(&mut self, slot: Slot, country: &str) -> Result<Option<LoadTicket>, SelectionError> {
        if self.pair.select(slot, country)? {
            Ok(Some(self.begin_load()))
        } else {
            Ok(None)
        }
    }

    /// Start a load for the current pair, superseding any load in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.pending = Some(self.generation);
        LoadTicket {
            generation: self.generation,
            pair: self.pair.clone(),
        }
    }

    /// Store the outcome of `ticket`. Returns `false` if the ticket was superseded
    /// and its outcome dropped.
    pub fn complete(&mut self, ticket: &LoadTicket, outcome: LoadOutcome) -> bool {
        if self.pending != Some(ticket.generation) {
            log::debug!(
                "dropping stale result for {} (load #{}, current #{})",
                ticket.pair,
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.pending = None;
        match outcome {
            LoadOutcome::Loaded(rows) => {
                self.date_labels = rows.iter().map(|r| format_date(&r.date_time)).collect();
                self.rows = rows;
                self.last_error = None;
            }
            LoadOutcome::Failed(msg) => {
                self.rows.clear();
                self.date_labels.clear();
                self.last_error = Some(msg);
            }
        }
        true
    }

    /// Synchronous convenience: begin, run and complete one load.
    pub fn reload<S>(&mut self, source: &S) -> bool
    where
        S: HistoricalSource + ?Sized,
    {
        let ticket = self.begin_load();
        let outcome = run_load(source, &ticket);
        self.complete(&ticket, outcome)
    }
}
