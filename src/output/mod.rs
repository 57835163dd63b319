//! Result writers.
//!
//! The simulation produces a turn history and a visit summary; how those are
//! persisted is pluggable through `ResultWriter`. Two formats ship:
//!
//! - `CsvWriter`: `<stem>_turns.csv` and `<stem>_summary.csv`
//! - `JsonWriter`: `<stem>.json` with `turns` and `summary` arrays
//!
//! In both, turn 0's roll is written as `TurnRecord::SENTINEL_ROLL`.

mod csv;
mod json;

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::simulation::{TurnRecord, VisitSummary};

pub use self::csv::{write_summary_csv, write_turns_csv, CsvWriter};
pub use self::json::{write_json, JsonWriter};

/// Errors raised while writing results.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// A result file could not be created, written or flushed.
    #[error("failed to write {path}")]
    Io {
        /// File being written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be encoded as CSV.
    #[error("csv encoding failed: {0}")]
    Csv(#[from] ::csv::Error),

    /// The report could not be encoded as JSON.
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl OutputError {
    /// Attach `path` to an encoder error caused by I/O, so the caller learns
    /// which file failed. Pure encoding errors pass through unchanged.
    #[must_use]
    pub fn at(self, path: &Path) -> Self {
        match self {
            OutputError::Csv(err) => {
                let kind = match err.kind() {
                    ::csv::ErrorKind::Io(io) => io.kind(),
                    _ => return OutputError::Csv(err),
                };
                OutputError::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(kind, err),
                }
            }
            OutputError::Json(err) if err.is_io() => OutputError::Io {
                path: path.to_path_buf(),
                source: err.into(),
            },
            other => other,
        }
    }
}

/// One simulated run, ready to be written.
#[derive(Clone, Copy, Debug)]
pub struct RunResult<'a> {
    /// Turn records, placement first.
    pub history: &'a [TurnRecord],
    /// Visit counts for the same run.
    pub summary: &'a VisitSummary,
}

/// Flat turn row as written to disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRow {
    /// Turn number, 0 for placement.
    pub turn: u32,
    /// Dice sum, or `TurnRecord::SENTINEL_ROLL` on turn 0.
    pub roll: u8,
    /// Raw id of the tile the player ended on.
    pub player_position: u32,
}

impl From<&TurnRecord> for TurnRow {
    fn from(record: &TurnRecord) -> Self {
        Self {
            turn: record.turn,
            roll: record.roll_value(),
            player_position: record.player_position.raw(),
        }
    }
}

/// Persists run results under a directory.
pub trait ResultWriter {
    /// Write `result` into `dir`, naming files after `stem`.
    ///
    /// Returns the paths written.
    fn write(&self, dir: &Path, stem: &str, result: &RunResult<'_>) -> Result<Vec<PathBuf>, OutputError>;
}

/// Supported output formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    /// The writer for this format.
    #[must_use]
    pub fn writer(self) -> Box<dyn ResultWriter> {
        match self {
            OutputFormat::Csv => Box::new(CsvWriter),
            OutputFormat::Json => Box::new(JsonWriter::default()),
        }
    }
}

/// File stem for a run's results: `<config stem>_<millis>`, plus `_run<k>`
/// when part of a batch.
#[must_use]
pub fn result_stem(config_path: &Path, millis: u128, run: Option<usize>) -> String {
    let base = config_path
        .file_stem()
        .map_or_else(|| "results".to_string(), |s| s.to_string_lossy().into_owned());
    match run {
        Some(run) => format!("{base}_{millis}_run{run}"),
        None => format!("{base}_{millis}"),
    }
}

/// Milliseconds since the Unix epoch, for result file names.
#[must_use]
pub fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

pub(crate) fn create_file(path: &Path) -> Result<std::fs::File, OutputError> {
    std::fs::File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
