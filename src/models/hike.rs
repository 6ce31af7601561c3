//! Persisted hike entities and the shapes returned by the query API.

use serde::{Deserialize, Serialize};

/// Peak elevation (feet) at or above which a hike counts as a fourteener.
pub const FOURTEENER_ELEVATION: i32 = 14_000;

/// A row of the `hikes` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hike {
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
    /// Reserved; the importer never fills it.
    pub bonus_peaks: Option<String>,
}

/// A row of the `hikes_with_peaks` view: the hike plus its primary peak elevation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HikeWithPeak {
    #[serde(flatten)]
    pub hike: Hike,
    pub highest_peak_elevation: Option<i32>,
}

impl HikeWithPeak {
    pub fn is_fourteener(&self) -> bool {
        self.highest_peak_elevation
            .is_some_and(|elevation| elevation >= FOURTEENER_ELEVATION)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    pub peak_name: Option<String>,
    pub elevation: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trailhead {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: i32,
}

impl Trailhead {
    /// Whether the coordinates carry real data. The GPS parser falls back to
    /// (0.0, 0.0) for text it can't read.
    pub fn has_coordinates(&self) -> bool {
        !(self.latitude == 0.0 && self.longitude == 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimbingSeason {
    pub start_month: i32,
    pub end_month: i32,
    pub season_text: String,
}

/// One entry of `GET /hikes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HikeListItem {
    #[serde(flatten)]
    pub hike: HikeWithPeak,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub distance_from_reference: Option<f64>,
    pub climbing_seasons: Vec<ClimbingSeason>,
    pub is_in_season: bool,
}

/// Response of `GET /hikes/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HikeDetail {
    #[serde(flatten)]
    pub hike: Hike,
    /// Ordered by elevation, highest first.
    pub peaks: Vec<Peak>,
    pub trailheads: Vec<Trailhead>,
    pub climbing_seasons: Vec<ClimbingSeason>,
    pub is_in_season: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyBucket {
    pub difficulty_label: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassBucket {
    pub class_text: String,
    pub count: i64,
}

/// Aggregates over the whole dataset. Averages and extremes are `None` when
/// there are no hikes (or no peaks, for the peak extremes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HikeStats {
    pub total_hikes: i64,
    pub fourteeners: i64,
    pub avg_distance: Option<f64>,
    pub avg_elevation_gain: Option<f64>,
    pub avg_difficulty: Option<f64>,
    pub shortest_distance: Option<f64>,
    pub longest_distance: Option<f64>,
    pub lowest_peak: Option<i32>,
    pub highest_peak: Option<i32>,
    pub difficulty_distribution: Vec<DifficultyBucket>,
    pub class_distribution: Vec<ClassBucket>,
}
