//! Loads a ranking snapshot from disk.
//!
//! Loading is an explicit, externally invoked step: the engine never reads
//! files on its own. Expected failure kinds (missing file, malformed rows,
//! empty data) degrade to "no snapshot" so callers fall back to the fixed
//! splits; anything else is returned as an error.

use std::io::ErrorKind;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::errors::{Error, RankingError, Result};

use super::rankings_model::{AssetRanking, RankingSnapshot};

#[derive(Deserialize)]
#[serde(untagged)]
enum RankingDocument {
    Rows(Vec<AssetRanking>),
    Wrapped { rankings: Vec<AssetRanking> },
}

impl RankingDocument {
    fn into_rows(self) -> Vec<AssetRanking> {
        match self {
            RankingDocument::Rows(rows) => rows,
            RankingDocument::Wrapped { rankings } => rankings,
        }
    }
}

/// On-disk encodings accepted for ranking snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingFormat {
    /// Array of rows, or an object with a `rankings` array
    Json,
    /// Header `asset_class,rank,hybrid_score`; a blank score means missing
    Csv,
}

impl RankingFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => Ok(RankingFormat::Json),
            Some("csv") => Ok(RankingFormat::Csv),
            other => Err(Error::Ranking(RankingError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            ))),
        }
    }
}

/// Parses ranking rows from in-memory content.
pub fn parse_rankings(content: &str, format: RankingFormat) -> Result<Vec<AssetRanking>> {
    let rows = match format {
        RankingFormat::Json => serde_json::from_str::<RankingDocument>(content)?.into_rows(),
        RankingFormat::Csv => {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(content.as_bytes());
            reader
                .deserialize::<AssetRanking>()
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    if let Some(bad) = rows.iter().find(|r| r.rank == 0) {
        return Err(Error::Ranking(RankingError::Malformed(format!(
            "rank must be at least 1 (asset class '{}')",
            bad.asset_class
        ))));
    }
    Ok(rows)
}

/// Loads the snapshot stored at `path`.
///
/// Returns `Ok(None)` when the file does not exist, cannot be parsed or
/// holds no rows. Unsupported extensions and I/O failures other than
/// "not found" are returned as errors.
pub fn load_ranking_snapshot(path: &Path) -> Result<Option<RankingSnapshot>> {
    let format = RankingFormat::from_path(path)?;

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                "Ranking file not found at {}; using rule-based allocation only",
                path.display()
            );
            return Ok(None);
        }
        Err(e) => {
            return Err(Error::Ranking(RankingError::Io(format!(
                "{}: {}",
                path.display(),
                e
            ))))
        }
    };

    let parsed = String::from_utf8(bytes)
        .map_err(|e| Error::Ranking(RankingError::Malformed(format!("not valid UTF-8: {}", e))))
        .and_then(|content| parse_rankings(&content, format));
    let rows = match parsed {
        Ok(rows) => rows,
        Err(Error::Ranking(RankingError::Malformed(reason))) => {
            warn!(
                "Ignoring malformed ranking file {}: {}; using rule-based allocation only",
                path.display(),
                reason
            );
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    if rows.is_empty() {
        warn!("Ranking file {} holds no rows", path.display());
        return Ok(None);
    }

    info!(
        "Loaded ranking snapshot from {} ({} assets)",
        path.display(),
        rows.len()
    );
    Ok(Some(
        RankingSnapshot::new(rows).with_source(path.display().to_string()),
    ))
}
