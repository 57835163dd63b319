//! JSON output.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{create_file, OutputError, ResultWriter, RunResult, TurnRow};

#[derive(Serialize)]
struct JsonReport<'a> {
    turns: Vec<TurnRow>,
    summary: &'a crate::simulation::VisitSummary,
}

/// Write a run as `{ "turns": [...], "summary": [...] }`.
pub fn write_json<W: Write>(writer: W, result: &RunResult<'_>, pretty: bool) -> Result<(), OutputError> {
    let report = JsonReport {
        turns: result.history.iter().map(TurnRow::from).collect(),
        summary: result.summary,
    };
    if pretty {
        serde_json::to_writer_pretty(writer, &report)?;
    } else {
        serde_json::to_writer(writer, &report)?;
    }
    Ok(())
}

/// Writes `<stem>.json`.
#[derive(Clone, Copy, Debug)]
pub struct JsonWriter {
    /// Indent the output.
    pub pretty: bool,
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ResultWriter for JsonWriter {
    fn write(&self, dir: &Path, stem: &str, result: &RunResult<'_>) -> Result<Vec<PathBuf>, OutputError> {
        let path = dir.join(format!("{stem}.json"));
        let mut file = std::io::BufWriter::new(create_file(&path)?);
        write_json(&mut file, result, self.pretty).map_err(|e| e.at(&path))?;
        file.flush().map_err(|source| OutputError::Io {
            path: path.clone(),
            source,
        })?;

        log::info!("wrote {}", path.display());
        Ok(vec![path])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DiceRoll, TileId};
    use crate::simulation::{summarize, TurnRecord};

    #[test]
    fn test_compact_json() {
        let history = vec![
            TurnRecord::placement(TileId::new(2)),
            TurnRecord { turn: 1, roll: DiceRoll::new(11), player_position: TileId::new(12) },
        ];
        let summary = summarize(&history);
        let mut buf = Vec::new();

        write_json(&mut buf, &RunResult { history: &history, summary: &summary }, false).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            concat!(
                r#"{"turns":[{"turn":0,"roll":0,"player_position":2},"#,
                r#"{"turn":1,"roll":11,"player_position":12}],"#,
                r#""summary":[{"tile":2,"visits":1},{"tile":12,"visits":1}]}"#
            )
        );
    }

    #[test]
    fn test_pretty_json_parses() {
        let history = vec![TurnRecord::placement(TileId::new(7))];
        let summary = summarize(&history);
        let mut buf = Vec::new();

        write_json(&mut buf, &RunResult { history: &history, summary: &summary }, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["turns"][0]["player_position"], 7);
        assert_eq!(value["summary"][0]["visits"], 1);
    }
}
