//! Typed inputs for the hike list query.

use serde::{Deserialize, Serialize};

/// Inclusive optional bounds on one value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: PartialOrd + Copy> RangeFilter<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub fn is_set(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Inclusive membership test. An unset bound doesn't constrain.
    pub fn contains(&self, value: T) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Sortable columns of the hike list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Number,
    Name,
    DifficultyRating,
    RoundTripMiles,
    TotalElevationGain,
    HighestPeakElevation,
    ClassNumeric,
    HikingTimeMin,
    HikingTimeMax,
    DistanceFromReference,
}

impl SortKey {
    pub const ALL: [SortKey; 10] = [
        Self::Number,
        Self::Name,
        Self::DifficultyRating,
        Self::RoundTripMiles,
        Self::TotalElevationGain,
        Self::HighestPeakElevation,
        Self::ClassNumeric,
        Self::HikingTimeMin,
        Self::HikingTimeMax,
        Self::DistanceFromReference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Name => "name",
            Self::DifficultyRating => "difficulty_rating",
            Self::RoundTripMiles => "round_trip_miles",
            Self::TotalElevationGain => "total_elevation_gain",
            Self::HighestPeakElevation => "highest_peak_elevation",
            Self::ClassNumeric => "class_numeric",
            Self::HikingTimeMin => "hiking_time_min",
            Self::HikingTimeMax => "hiking_time_max",
            Self::DistanceFromReference => "distance_from_reference",
        }
    }

    /// Parse a sort key. `distance_from_denver` is accepted as a legacy alias.
    pub fn from_str(s: &str) -> Option<Self> {
        if s == "distance_from_denver" {
            return Some(Self::DistanceFromReference);
        }
        Self::ALL.into_iter().find(|key| key.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// A validated hike list request.
///
/// Numeric filters combine with AND. `hiking_time.min` bounds
/// `hiking_time_min` and `hiking_time.max` bounds `hiking_time_max`.
#[derive(Debug, Clone, PartialEq)]
pub struct HikeQuery {
    pub difficulty: RangeFilter<f64>,
    pub distance: RangeFilter<f64>,
    pub hiking_time: RangeFilter<f64>,
    pub elevation_gain: RangeFilter<i32>,
    pub class: RangeFilter<f64>,
    pub crowd: RangeFilter<i32>,
    pub distance_from_reference: RangeFilter<f64>,
    pub fourteeners_only: bool,
    pub overnight_only: bool,
    pub in_season_only: bool,
    pub search: Option<String>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub limit: i64,
    pub offset: i64,
}

impl HikeQuery {
    pub const MAX_LIMIT: i64 = 100;

    /// Whether filtering or ordering depends on the computed reference distance,
    /// which forces pagination to happen after the database read.
    pub fn needs_distance(&self) -> bool {
        self.distance_from_reference.is_set() || self.sort_by == SortKey::DistanceFromReference
    }
}

impl Default for HikeQuery {
    fn default() -> Self {
        Self {
            difficulty: RangeFilter::default(),
            distance: RangeFilter::default(),
            hiking_time: RangeFilter::default(),
            elevation_gain: RangeFilter::default(),
            class: RangeFilter::default(),
            crowd: RangeFilter::default(),
            distance_from_reference: RangeFilter::default(),
            fourteeners_only: false,
            overnight_only: false,
            in_season_only: false,
            search: None,
            sort_by: SortKey::default(),
            sort_order: SortOrder::default(),
            limit: Self::MAX_LIMIT,
            offset: 0,
        }
    }
}
