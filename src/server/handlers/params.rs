//! Query-string parameters for the hike list and their validation.

use std::cmp::Ordering;
use std::fmt::Display;

use serde::Deserialize;

use crate::models::{HikeQuery, RangeFilter, SortKey, SortOrder};
use crate::server::error::ApiError;

/// Raw `GET /hikes` parameters, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct HikeListParams {
    pub min_difficulty: Option<f64>,
    pub max_difficulty: Option<f64>,
    pub min_distance: Option<f64>,
    pub max_distance: Option<f64>,
    pub min_time: Option<f64>,
    pub max_time: Option<f64>,
    pub min_elevation_gain: Option<i32>,
    pub max_elevation_gain: Option<i32>,
    pub min_class: Option<f64>,
    pub max_class: Option<f64>,
    pub min_crowd: Option<i32>,
    pub max_crowd: Option<i32>,
    #[serde(alias = "min_distance_from_denver")]
    pub min_distance_from_reference: Option<f64>,
    #[serde(alias = "max_distance_from_denver")]
    pub max_distance_from_reference: Option<f64>,
    pub fourteeners_only: Option<bool>,
    pub overnight_only: Option<bool>,
    pub in_season_only: Option<bool>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

fn within<T>(name: &'static str, value: Option<T>, min: T, max: T) -> Result<Option<T>, ApiError>
where
    T: PartialOrd + Display + Copy,
{
    match value {
        Some(v) if !(min..=max).contains(&v) => Err(ApiError::invalid(
            name,
            format!("must be between {} and {}", min, max),
        )),
        other => Ok(other),
    }
}

fn positive<T>(name: &'static str, value: Option<T>) -> Result<Option<T>, ApiError>
where
    T: PartialOrd + Default + Copy,
{
    match value {
        Some(v) if v.partial_cmp(&T::default()) != Some(Ordering::Greater) => {
            Err(ApiError::invalid(name, "must be greater than 0"))
        }
        other => Ok(other),
    }
}

impl HikeListParams {
    /// Validate every parameter and build the query.
    /// The first invalid parameter is reported.
    pub fn into_query(self) -> Result<HikeQuery, ApiError> {
        let sort_by = match self.sort_by.as_deref() {
            None => SortKey::default(),
            Some(s) => SortKey::from_str(s).ok_or_else(|| {
                let allowed: Vec<_> = SortKey::ALL.iter().map(SortKey::as_str).collect();
                ApiError::invalid("sort_by", format!("must be one of: {}", allowed.join(", ")))
            })?,
        };
        let sort_order = match self.sort_order.as_deref() {
            None => SortOrder::default(),
            Some(s) => SortOrder::from_str(s)
                .ok_or_else(|| ApiError::invalid("sort_order", "must be one of: asc, desc"))?,
        };

        let limit = within("limit", self.limit, 1, HikeQuery::MAX_LIMIT)?;
        let offset = match self.offset {
            Some(o) if o < 0 => return Err(ApiError::invalid("offset", "must be 0 or greater")),
            other => other,
        };

        Ok(HikeQuery {
            difficulty: RangeFilter::new(
                within("min_difficulty", self.min_difficulty, 1.0, 10.0)?,
                within("max_difficulty", self.max_difficulty, 1.0, 10.0)?,
            ),
            distance: RangeFilter::new(
                positive("min_distance", self.min_distance)?,
                positive("max_distance", self.max_distance)?,
            ),
            hiking_time: RangeFilter::new(
                positive("min_time", self.min_time)?,
                positive("max_time", self.max_time)?,
            ),
            elevation_gain: RangeFilter::new(
                positive("min_elevation_gain", self.min_elevation_gain)?,
                positive("max_elevation_gain", self.max_elevation_gain)?,
            ),
            class: RangeFilter::new(
                within("min_class", self.min_class, 1.0, 4.0)?,
                within("max_class", self.max_class, 1.0, 4.0)?,
            ),
            crowd: RangeFilter::new(
                within("min_crowd", self.min_crowd, 1, 5)?,
                within("max_crowd", self.max_crowd, 1, 5)?,
            ),
            distance_from_reference: RangeFilter::new(
                positive("min_distance_from_reference", self.min_distance_from_reference)?,
                positive("max_distance_from_reference", self.max_distance_from_reference)?,
            ),
            fourteeners_only: self.fourteeners_only.unwrap_or(false),
            overnight_only: self.overnight_only.unwrap_or(false),
            in_season_only: self.in_season_only.unwrap_or(false),
            search: self.search.filter(|s| !s.is_empty()),
            sort_by,
            sort_order,
            limit: limit.unwrap_or(HikeQuery::MAX_LIMIT),
            offset: offset.unwrap_or(0),
        })
    }
}
