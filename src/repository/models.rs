//! Diesel row types for the hike tables.

use diesel::prelude::*;

use crate::schema;

/// Hike record from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::hikes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HikeRecord {
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
    pub bonus_peaks: Option<String>,
}

/// New hike for insertion. `bonus_peaks` is left to its NULL default.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::hikes)]
pub struct NewHike<'a> {
    pub id: i32,
    pub number: i32,
    pub name: &'a str,
    pub description: &'a str,
    pub round_trip_miles: f64,
    pub hiking_time_min: f64,
    pub hiking_time_max: f64,
    pub difficulty_rating: f64,
    pub difficulty_label: &'a str,
    pub class_numeric: f64,
    pub class_text: &'a str,
    pub start_elevation: i32,
    pub total_elevation_gain: i32,
    pub terrain: &'a str,
    pub crowd_level_numeric: i32,
    pub crowd_level_text: &'a str,
    pub is_overnight: bool,
    pub gear_advisor: Option<&'a str>,
    pub location: Option<&'a str>,
}

/// Row of the `hikes_with_peaks` view.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = schema::hikes_with_peaks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HikeWithPeakRecord {
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
    pub bonus_peaks: Option<String>,
    pub highest_peak_elevation: Option<i32>,
}

/// Peak record from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::peaks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PeakRecord {
    pub id: i32,
    pub hike_id: i32,
    pub peak_name: Option<String>,
    pub elevation: i32,
    pub is_primary: bool,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = schema::peaks)]
pub struct NewPeak<'a> {
    pub hike_id: i32,
    pub peak_name: Option<&'a str>,
    pub elevation: i32,
    pub is_primary: bool,
}

/// Trailhead record from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::trailheads)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TrailheadRecord {
    pub id: i32,
    pub hike_id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = schema::trailheads)]
pub struct NewTrailhead<'a> {
    pub hike_id: i32,
    pub name: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: i32,
}

/// Climbing season record from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::climbing_seasons)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ClimbingSeasonRecord {
    pub id: i32,
    pub hike_id: i32,
    pub start_month: i32,
    pub end_month: i32,
    pub season_text: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = schema::climbing_seasons)]
pub struct NewClimbingSeason<'a> {
    pub hike_id: i32,
    pub start_month: i32,
    pub end_month: i32,
    pub season_text: &'a str,
}
