//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `cell_snapshots` and `round_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{CellSnapshotRow, OutputResult, RoundSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS cell_snapshots (
                 round    INTEGER NOT NULL,
                 title    TEXT    NOT NULL,
                 row      INTEGER NOT NULL,
                 col      INTEGER NOT NULL,
                 occupant INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS round_summaries (
                 round       INTEGER PRIMARY KEY,
                 evaluated   INTEGER NOT NULL,
                 unsatisfied INTEGER NOT NULL,
                 relocated   INTEGER NOT NULL,
                 skipped     INTEGER NOT NULL,
                 similarity  REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_cells(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO cell_snapshots (round, title, row, col, occupant) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.round as i64,
                    row.title(),
                    row.row,
                    row.col,
                    row.occupant,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO round_summaries \
             (round, evaluated, unsatisfied, relocated, skipped, similarity) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.round as i64,
                row.evaluated as i64,
                row.unsatisfied as i64,
                row.relocated as i64,
                row.skipped as i64,
                row.similarity,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
