//! CSV output.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::{create_file, OutputError, ResultWriter, RunResult, TurnRow};
use crate::simulation::{TurnRecord, VisitSummary};

/// Write `turn,roll,player_position` rows.
pub fn write_turns_csv<W: Write>(writer: W, history: &[TurnRecord]) -> Result<(), OutputError> {
    let mut csv = ::csv::Writer::from_writer(writer);
    for record in history {
        csv.serialize(TurnRow::from(record))?;
    }
    csv.flush().map_err(::csv::Error::from)?;
    Ok(())
}

/// Write `tile,visits` rows in first-appearance order.
///
/// An empty summary writes nothing, not even a header.
pub fn write_summary_csv<W: Write>(writer: W, summary: &VisitSummary) -> Result<(), OutputError> {
    let mut csv = ::csv::Writer::from_writer(writer);
    for entry in summary.iter() {
        csv.serialize(entry)?;
    }
    csv.flush().map_err(::csv::Error::from)?;
    Ok(())
}

/// Writes `<stem>_turns.csv` and `<stem>_summary.csv`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CsvWriter;

impl ResultWriter for CsvWriter {
    fn write(&self, dir: &Path, stem: &str, result: &RunResult<'_>) -> Result<Vec<PathBuf>, OutputError> {
        let turns_path = dir.join(format!("{stem}_turns.csv"));
        write_turns_csv(create_file(&turns_path)?, result.history)
            .map_err(|e| e.at(&turns_path))?;

        let summary_path = dir.join(format!("{stem}_summary.csv"));
        write_summary_csv(create_file(&summary_path)?, result.summary)
            .map_err(|e| e.at(&summary_path))?;

        log::info!("wrote {} and {}", turns_path.display(), summary_path.display());
        Ok(vec![turns_path, summary_path])
    }
}
