//! One-shot import: JSON file → normalizer → database.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::models::RawHike;
use crate::normalize::normalize_hike;
use crate::repository::{DieselError, HikeRepository};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid hike data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Database(#[from] DieselError),
}

/// Row counts written by an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub hikes: usize,
    pub peaks: usize,
    pub trailheads: usize,
    pub seasons: usize,
}

/// Parse the import file contents: a JSON array of hike objects.
pub fn parse_hikes(json: &str) -> Result<Vec<RawHike>, ImportError> {
    Ok(serde_json::from_str(json)?)
}

/// Normalize and store each hike in order. Each hike is its own transaction;
/// re-importing a hike replaces its previous rows.
pub async fn import_hikes(
    repo: &HikeRepository,
    hikes: &[RawHike],
) -> Result<ImportSummary, ImportError> {
    let mut summary = ImportSummary::default();

    for raw in hikes {
        let hike = normalize_hike(raw);
        tracing::debug!(number = hike.number, name = %hike.name, "Importing hike");

        if let Some(bonus) = &raw.bonus_peaks {
            tracing::debug!(number = hike.number, bonus_peaks = %bonus, "Skipping bonus peaks");
        }

        repo.save(&hike).await?;

        summary.hikes += 1;
        summary.peaks += hike.peaks.len();
        summary.trailheads += usize::from(hike.trailhead.is_some());
        summary.seasons += hike.seasons.len();
    }

    tracing::info!(
        hikes = summary.hikes,
        peaks = summary.peaks,
        trailheads = summary.trailheads,
        seasons = summary.seasons,
        "Import complete"
    );

    Ok(summary)
}

/// Read `path` and import every hike in it.
pub async fn import_file(repo: &HikeRepository, path: &Path) -> Result<ImportSummary, ImportError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ImportError::Io {
            path: path.display().to_string(),
            source,
        })?;
    let hikes = parse_hikes(&json)?;
    tracing::info!("Loaded {} hikes from {}", hikes.len(), path.display());
    import_hikes(repo, &hikes).await
}
