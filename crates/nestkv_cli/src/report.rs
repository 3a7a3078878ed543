//! End-of-run statistics report.

use crate::error::CliResult;
use crate::repl::RunSummary;
use clap::ValueEnum;
use nestkv_core::{Storage, Store, StoreStats};
use serde::Serialize;
use std::io::Write;

/// Output format of the statistics report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StatsFormat {
    /// Human-readable table.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

/// Statistics printed when `--stats` is given.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    /// Lines read.
    pub lines: usize,
    /// Lines that failed.
    pub errors: usize,
    /// Keys present at exit.
    pub keys: usize,
    /// Transactions still open at exit.
    pub open_transactions: usize,
    /// SET commands.
    pub sets: u64,
    /// UNSET commands.
    pub unsets: u64,
    /// GET commands.
    pub gets: u64,
    /// NUMEQUALTO commands.
    pub count_queries: u64,
    /// BEGIN commands.
    pub begins: u64,
    /// Successful COMMIT commands.
    pub commits: u64,
    /// Successful ROLLBACK commands.
    pub rollbacks: u64,
    /// Undo actions recorded.
    pub undo_actions_recorded: u64,
    /// Undo actions replayed.
    pub undo_actions_replayed: u64,
    /// Deepest nesting reached.
    pub max_depth: usize,
}

impl StatsReport {
    /// Builds a report from a finished run.
    pub fn new(summary: &RunSummary, store: &Store) -> Self {
        let StoreStats {
            sets,
            unsets,
            gets,
            count_queries,
            begins,
            commits,
            rollbacks,
            undo_actions_recorded,
            undo_actions_replayed,
            max_depth,
        } = store.stats();

        Self {
            lines: summary.lines,
            errors: summary.errors,
            keys: store.storage().len(),
            open_transactions: store.depth(),
            sets,
            unsets,
            gets,
            count_queries,
            begins,
            commits,
            rollbacks,
            undo_actions_recorded,
            undo_actions_replayed,
            max_depth,
        }
    }

    /// Writes the report in `format`.
    pub fn write<W: Write>(&self, mut out: W, format: StatsFormat) -> CliResult<()> {
        match format {
            StatsFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(self)?)?;
            }
            StatsFormat::Text => self.write_text(out)?,
        }
        Ok(())
    }

    fn write_text<W: Write>(&self, mut out: W) -> CliResult<()> {
        writeln!(out, "Session Statistics")?;
        writeln!(out, "==================")?;
        writeln!(out, "Lines:             {} ({} errors)", self.lines, self.errors)?;
        writeln!(out, "Keys at exit:      {}", self.keys)?;
        writeln!(out, "Open transactions: {}", self.open_transactions)?;
        writeln!(out)?;
        writeln!(
            out,
            "Commands:          {} SET, {} UNSET, {} GET, {} NUMEQUALTO",
            self.sets, self.unsets, self.gets, self.count_queries
        )?;
        writeln!(
            out,
            "Transactions:      {} BEGIN, {} COMMIT, {} ROLLBACK (max depth {})",
            self.begins, self.commits, self.rollbacks, self.max_depth
        )?;
        writeln!(
            out,
            "Undo actions:      {} recorded, {} replayed",
            self.undo_actions_recorded, self.undo_actions_replayed
        )?;
        Ok(())
    }
}
