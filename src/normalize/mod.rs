//! Free-text normalization for hike records.
//!
//! Everything in here is pure and total: unrecognised text degrades to a
//! documented default, never to an error. The import pipeline is the only
//! consumer; the query side reads normalized values back from the database.

mod gps;
mod peaks;
mod season;
mod text;

pub use gps::{parse_coordinate, parse_gps};
pub use peaks::{parse_peaks, ParsedPeak};
pub use season::{parse_climbing_season, MonthRange, DEFAULT_SEASON};
pub use text::{
    parse_class, parse_crowd_level, parse_difficulty, parse_distance, parse_elevation,
    parse_hiking_time, CLASS_TABLE, DEFAULT_CLASS, DEFAULT_CROWD_LEVEL, HOURS_PER_DAY,
};

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::models::RawHike;

/// Trailhead name used when the start elevation has no parenthetical.
pub const DEFAULT_TRAILHEAD_NAME: &str = "Main Trailhead";

static PARENTHETICAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

/// Trailhead derived from `trailhead_gps` and `start_elevation`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedTrailhead {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: i32,
}

/// A hike with every free-text field resolved to typed values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedHike {
    pub id: i32,
    pub number: i32,
    pub name: String,
    pub description: String,
    pub round_trip_miles: f64,
    pub hiking_time_min: f64,
    pub hiking_time_max: f64,
    pub difficulty_rating: f64,
    pub difficulty_label: String,
    pub class_numeric: f64,
    pub class_text: String,
    pub start_elevation: i32,
    pub total_elevation_gain: i32,
    pub terrain: String,
    pub crowd_level_numeric: i32,
    pub crowd_level_text: String,
    pub is_overnight: bool,
    pub gear_advisor: Option<String>,
    pub location: Option<String>,
    pub peaks: Vec<ParsedPeak>,
    pub trailhead: Option<ParsedTrailhead>,
    pub seasons: Vec<MonthRange>,
    /// Original `best_time_to_climb` text, empty when absent.
    pub season_text: String,
}

/// Name of the trailhead: the first parenthetical in the start elevation text.
pub fn trailhead_name(start_elevation: &str) -> String {
    PARENTHETICAL_RE
        .captures(start_elevation)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| DEFAULT_TRAILHEAD_NAME.to_string())
}

/// Normalize one raw record.
pub fn normalize_hike(raw: &RawHike) -> NormalizedHike {
    let difficulty_rating = parse_difficulty(&raw.difficulty);
    if difficulty_rating == 0.0 {
        tracing::debug!(number = raw.number, text = %raw.difficulty, "No difficulty rating found");
    }

    let class_numeric = parse_class(&raw.class_text);
    if !CLASS_TABLE.iter().any(|(label, _)| *label == raw.class_text) {
        tracing::debug!(number = raw.number, text = %raw.class_text, "Unknown class, using default");
    }

    let (crowd_level_numeric, crowd_level_text) = parse_crowd_level(&raw.crowd_level);
    let (hiking_time_min, hiking_time_max) = parse_hiking_time(&raw.hiking_time);
    let start_elevation = parse_elevation(&raw.start_elevation);

    let trailhead = raw.trailhead_gps.as_deref().map(|gps| {
        let (latitude, longitude) = parse_gps(gps);
        if latitude == 0.0 && longitude == 0.0 {
            tracing::debug!(number = raw.number, text = %gps, "Unparseable trailhead GPS");
        }
        ParsedTrailhead {
            name: trailhead_name(&raw.start_elevation),
            latitude,
            longitude,
            elevation: start_elevation,
        }
    });

    let season_text = raw.best_time_to_climb.clone().unwrap_or_default();
    let seasons = parse_climbing_season(&season_text);

    NormalizedHike {
        id: raw.number,
        number: raw.number,
        name: raw.name.clone(),
        description: raw.description.clone(),
        round_trip_miles: parse_distance(&raw.round_trip_distance),
        hiking_time_min,
        hiking_time_max,
        difficulty_rating,
        difficulty_label: raw.difficulty.clone(),
        class_numeric,
        class_text: raw.class_text.clone(),
        start_elevation,
        total_elevation_gain: parse_elevation(&raw.total_elevation_gain),
        terrain: raw.terrain.clone(),
        crowd_level_numeric,
        crowd_level_text: crowd_level_text.to_string(),
        is_overnight: raw.is_overnight(),
        gear_advisor: raw.gear_advisor.clone(),
        location: raw.location.clone(),
        peaks: parse_peaks(raw),
        trailhead,
        seasons,
        season_text,
    }
}
