//! High-score file on disk: a JSON array of `[score, "name"]` pairs.

use std::path::Path;

use quadris_engine::{HighscoreEntry, HighscoreLedger};

use crate::util::{self, Output};

/// Loads the ledger at `path`; a missing file is an empty ledger.
pub(crate) fn load(path: &Path) -> anyhow::Result<HighscoreLedger> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no highscore file yet");
        return Ok(HighscoreLedger::new());
    }
    util::read_json_file("highscore", path)
}

/// Replaces the file at `path`; a failed write leaves the previous list.
pub(crate) fn save(path: &Path, ledger: &HighscoreLedger) -> anyhow::Result<()> {
    let mut output = Output::create(path)?;
    output.write_json(ledger)?;
    output.persist()
}

/// Adds `entry` to the ledger at `path` and returns it with the new rank.
///
/// The file is only rewritten when the entry made the list.
pub(crate) fn record(
    path: &Path,
    entry: HighscoreEntry,
) -> anyhow::Result<(HighscoreLedger, Option<usize>)> {
    let mut ledger = load(path)?;
    let rank = ledger.insert(entry);
    if let Some(rank) = rank {
        save(path, &ledger)?;
        tracing::info!(rank, path = %path.display(), "highscore recorded");
    }
    Ok((ledger, rank))
}
