//! JSON-lines output: one object per snapshot, one for the verdict.

use std::io::Write;

use serde::Serialize;

use super::{PlayerRow, Snapshot, StatusSink};
use crate::error::ReportError;
use crate::rules::GameResult;

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Line<'a> {
    Snapshot {
        index: usize,
        players: &'a [PlayerRow],
    },
    Finished {
        message: String,
        result: &'a GameResult,
    },
}

/// Writes snapshots as JSON lines.
pub struct JsonLinesReporter<W: Write> {
    out: W,
    snapshots: usize,
}

impl<W: Write> JsonLinesReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, snapshots: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &Line<'_>) -> Result<(), ReportError> {
        serde_json::to_writer(&mut self.out, line)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> StatusSink for JsonLinesReporter<W> {
    fn snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ReportError> {
        let line = Line::Snapshot {
            index: self.snapshots,
            players: &snapshot.players,
        };
        self.write_line(&line)?;
        self.snapshots += 1;
        Ok(())
    }

    fn finish(&mut self, result: &GameResult) -> Result<(), ReportError> {
        let line = Line::Finished {
            message: result.to_string(),
            result,
        };
        self.write_line(&line)?;
        self.out.flush()?;
        Ok(())
    }
}
