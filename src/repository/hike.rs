//! Hike repository: import writes and read-only queries.
//!
//! Every method opens its own connection and drops it before returning.

use std::collections::HashMap;

use diesel::prelude::*;
use diesel_async::{AsyncConnection, RunQueryDsl};

use super::models::{
    ClimbingSeasonRecord, HikeRecord, HikeWithPeakRecord, NewClimbingSeason, NewHike, NewPeak,
    NewTrailhead, PeakRecord, TrailheadRecord,
};
use super::pool::{DieselError, SqlitePool};
use super::util::like_contains_pattern;
use crate::models::{
    ClassBucket, ClimbingSeason, DifficultyBucket, Hike, HikeQuery, HikeStats, HikeWithPeak, Peak,
    SortKey, SortOrder, Trailhead, FOURTEENER_ELEVATION,
};
use crate::normalize::NormalizedHike;
use crate::schema::{climbing_seasons, hikes, hikes_with_peaks, peaks, trailheads};

impl From<HikeRecord> for Hike {
    fn from(r: HikeRecord) -> Self {
        Hike {
            id: r.id,
            number: r.number,
            name: r.name,
            description: r.description,
            round_trip_miles: r.round_trip_miles,
            hiking_time_min: r.hiking_time_min,
            hiking_time_max: r.hiking_time_max,
            difficulty_rating: r.difficulty_rating,
            difficulty_label: r.difficulty_label,
            class_numeric: r.class_numeric,
            class_text: r.class_text,
            start_elevation: r.start_elevation,
            total_elevation_gain: r.total_elevation_gain,
            terrain: r.terrain,
            crowd_level_numeric: r.crowd_level_numeric,
            crowd_level_text: r.crowd_level_text,
            is_overnight: r.is_overnight,
            gear_advisor: r.gear_advisor,
            location: r.location,
            bonus_peaks: r.bonus_peaks,
        }
    }
}

impl From<HikeWithPeakRecord> for HikeWithPeak {
    fn from(r: HikeWithPeakRecord) -> Self {
        HikeWithPeak {
            highest_peak_elevation: r.highest_peak_elevation,
            hike: Hike {
                id: r.id,
                number: r.number,
                name: r.name,
                description: r.description,
                round_trip_miles: r.round_trip_miles,
                hiking_time_min: r.hiking_time_min,
                hiking_time_max: r.hiking_time_max,
                difficulty_rating: r.difficulty_rating,
                difficulty_label: r.difficulty_label,
                class_numeric: r.class_numeric,
                class_text: r.class_text,
                start_elevation: r.start_elevation,
                total_elevation_gain: r.total_elevation_gain,
                terrain: r.terrain,
                crowd_level_numeric: r.crowd_level_numeric,
                crowd_level_text: r.crowd_level_text,
                is_overnight: r.is_overnight,
                gear_advisor: r.gear_advisor,
                location: r.location,
                bonus_peaks: r.bonus_peaks,
            },
        }
    }
}

impl From<PeakRecord> for Peak {
    fn from(r: PeakRecord) -> Self {
        Peak {
            peak_name: r.peak_name,
            elevation: r.elevation,
        }
    }
}

impl From<TrailheadRecord> for Trailhead {
    fn from(r: TrailheadRecord) -> Self {
        Trailhead {
            name: r.name,
            latitude: r.latitude,
            longitude: r.longitude,
            elevation: r.elevation,
        }
    }
}

impl From<ClimbingSeasonRecord> for ClimbingSeason {
    fn from(r: ClimbingSeasonRecord) -> Self {
        ClimbingSeason {
            start_month: r.start_month,
            end_month: r.end_month,
            season_text: r.season_text,
        }
    }
}

impl<'a> From<&'a NormalizedHike> for NewHike<'a> {
    fn from(h: &'a NormalizedHike) -> Self {
        NewHike {
            id: h.id,
            number: h.number,
            name: &h.name,
            description: &h.description,
            round_trip_miles: h.round_trip_miles,
            hiking_time_min: h.hiking_time_min,
            hiking_time_max: h.hiking_time_max,
            difficulty_rating: h.difficulty_rating,
            difficulty_label: &h.difficulty_label,
            class_numeric: h.class_numeric,
            class_text: &h.class_text,
            start_elevation: h.start_elevation,
            total_elevation_gain: h.total_elevation_gain,
            terrain: &h.terrain,
            crowd_level_numeric: h.crowd_level_numeric,
            crowd_level_text: &h.crowd_level_text,
            is_overnight: h.is_overnight,
            gear_advisor: h.gear_advisor.as_deref(),
            location: h.location.as_deref(),
        }
    }
}

/// SQL `LIMIT`/`OFFSET` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

/// A list row with the child data the query service needs.
#[derive(Debug, Clone)]
pub struct HikeRow {
    pub hike: HikeWithPeak,
    /// Lowest-id trailhead, if any.
    pub trailhead: Option<Trailhead>,
    pub seasons: Vec<ClimbingSeason>,
}

/// A hike with all of its child rows.
#[derive(Debug, Clone)]
pub struct HikeParts {
    pub hike: Hike,
    pub peaks: Vec<Peak>,
    pub trailheads: Vec<Trailhead>,
    pub seasons: Vec<ClimbingSeason>,
}

#[derive(diesel::QueryableByName)]
struct SummaryRow {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    total_hikes: i64,
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    fourteeners: i64,
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Double>)]
    avg_distance: Option<f64>,
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Double>)]
    avg_elevation_gain: Option<f64>,
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Double>)]
    avg_difficulty: Option<f64>,
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Double>)]
    shortest_distance: Option<f64>,
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Double>)]
    longest_distance: Option<f64>,
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Integer>)]
    lowest_peak: Option<i32>,
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Integer>)]
    highest_peak: Option<i32>,
}

#[derive(diesel::QueryableByName)]
struct DifficultyCount {
    #[diesel(sql_type = diesel::sql_types::Text)]
    difficulty_label: String,
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

#[derive(diesel::QueryableByName)]
struct ClassCount {
    #[diesel(sql_type = diesel::sql_types::Text)]
    class_text: String,
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

/// Order a boxed `hikes_with_peaks` query by `$col`, ties broken by id.
macro_rules! order_by {
    ($query:expr, $col:expr, $order:expr) => {
        match $order {
            SortOrder::Asc => $query.order(($col.asc(), hikes_with_peaks::id.asc())),
            SortOrder::Desc => $query.order(($col.desc(), hikes_with_peaks::id.asc())),
        }
    };
}

/// Diesel-based hike repository.
#[derive(Clone)]
pub struct HikeRepository {
    pool: SqlitePool,
}

impl HikeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Write one normalized hike and its children in a single transaction.
    ///
    /// Existing child rows for the hike are removed first, so saving the same
    /// hike twice leaves one copy of everything.
    pub async fn save(&self, hike: &NormalizedHike) -> Result<(), DieselError> {
        let mut conn = self.pool.get().await?;
        let id = hike.id;

        conn.transaction(|conn| {
            Box::pin(async move {
                diesel::delete(peaks::table.filter(peaks::hike_id.eq(id)))
                    .execute(conn)
                    .await?;
                diesel::delete(trailheads::table.filter(trailheads::hike_id.eq(id)))
                    .execute(conn)
                    .await?;
                diesel::delete(climbing_seasons::table.filter(climbing_seasons::hike_id.eq(id)))
                    .execute(conn)
                    .await?;

                diesel::replace_into(hikes::table)
                    .values(NewHike::from(hike))
                    .execute(conn)
                    .await?;

                for peak in &hike.peaks {
                    diesel::insert_into(peaks::table)
                        .values(NewPeak {
                            hike_id: id,
                            peak_name: peak.name.as_deref(),
                            elevation: peak.elevation,
                            is_primary: peak.is_primary,
                        })
                        .execute(conn)
                        .await?;
                }

                if let Some(trailhead) = &hike.trailhead {
                    diesel::insert_into(trailheads::table)
                        .values(NewTrailhead {
                            hike_id: id,
                            name: &trailhead.name,
                            latitude: trailhead.latitude,
                            longitude: trailhead.longitude,
                            elevation: trailhead.elevation,
                        })
                        .execute(conn)
                        .await?;
                }

                for season in &hike.seasons {
                    diesel::insert_into(climbing_seasons::table)
                        .values(NewClimbingSeason {
                            hike_id: id,
                            start_month: season.start_month as i32,
                            end_month: season.end_month as i32,
                            season_text: &hike.season_text,
                        })
                        .execute(conn)
                        .await?;
                }

                Ok::<_, DieselError>(())
            })
        })
        .await
    }

    /// Count all hikes.
    pub async fn count(&self) -> Result<i64, DieselError> {
        let mut conn = self.pool.get().await?;
        hikes::table.count().get_result(&mut conn).await
    }

    /// Get a hike by id.
    pub async fn get(&self, id: i32) -> Result<Option<Hike>, DieselError> {
        let mut conn = self.pool.get().await?;

        hikes::table
            .find(id)
            .select(HikeRecord::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|opt| opt.map(Hike::from))
    }

    /// Load a hike with its peaks (highest first), trailheads and seasons.
    pub async fn get_parts(&self, id: i32) -> Result<Option<HikeParts>, DieselError> {
        let mut conn = self.pool.get().await?;

        let Some(record) = hikes::table
            .find(id)
            .select(HikeRecord::as_select())
            .first(&mut conn)
            .await
            .optional()?
        else {
            return Ok(None);
        };

        let peaks: Vec<PeakRecord> = peaks::table
            .filter(peaks::hike_id.eq(id))
            .order((peaks::elevation.desc(), peaks::id.asc()))
            .select(PeakRecord::as_select())
            .load(&mut conn)
            .await?;

        let trailheads: Vec<TrailheadRecord> = trailheads::table
            .filter(trailheads::hike_id.eq(id))
            .order(trailheads::id.asc())
            .select(TrailheadRecord::as_select())
            .load(&mut conn)
            .await?;

        let seasons: Vec<ClimbingSeasonRecord> = climbing_seasons::table
            .filter(climbing_seasons::hike_id.eq(id))
            .order(climbing_seasons::id.asc())
            .select(ClimbingSeasonRecord::as_select())
            .load(&mut conn)
            .await?;

        Ok(Some(HikeParts {
            hike: record.into(),
            peaks: peaks.into_iter().map(Peak::from).collect(),
            trailheads: trailheads.into_iter().map(Trailhead::from).collect(),
            seasons: seasons.into_iter().map(ClimbingSeason::from).collect(),
        }))
    }

    /// Run the SQL part of a list query.
    ///
    /// Applies every column filter and the column sort. The reference-distance
    /// filter and sort are left to the caller; for a distance sort the rows
    /// come back in id order. `page` is pushed into SQL when given.
    pub async fn find(
        &self,
        query: &HikeQuery,
        page: Option<Page>,
    ) -> Result<Vec<HikeRow>, DieselError> {
        let mut conn = self.pool.get().await?;

        let mut sql = hikes_with_peaks::table
            .select(HikeWithPeakRecord::as_select())
            .into_boxed();

        if let Some(min) = query.difficulty.min {
            sql = sql.filter(hikes_with_peaks::difficulty_rating.ge(min));
        }
        if let Some(max) = query.difficulty.max {
            sql = sql.filter(hikes_with_peaks::difficulty_rating.le(max));
        }
        if let Some(min) = query.distance.min {
            sql = sql.filter(hikes_with_peaks::round_trip_miles.ge(min));
        }
        if let Some(max) = query.distance.max {
            sql = sql.filter(hikes_with_peaks::round_trip_miles.le(max));
        }
        if let Some(min) = query.hiking_time.min {
            sql = sql.filter(hikes_with_peaks::hiking_time_min.ge(min));
        }
        if let Some(max) = query.hiking_time.max {
            sql = sql.filter(hikes_with_peaks::hiking_time_max.le(max));
        }
        if let Some(min) = query.elevation_gain.min {
            sql = sql.filter(hikes_with_peaks::total_elevation_gain.ge(min));
        }
        if let Some(max) = query.elevation_gain.max {
            sql = sql.filter(hikes_with_peaks::total_elevation_gain.le(max));
        }
        if let Some(min) = query.class.min {
            sql = sql.filter(hikes_with_peaks::class_numeric.ge(min));
        }
        if let Some(max) = query.class.max {
            sql = sql.filter(hikes_with_peaks::class_numeric.le(max));
        }
        if let Some(min) = query.crowd.min {
            sql = sql.filter(hikes_with_peaks::crowd_level_numeric.ge(min));
        }
        if let Some(max) = query.crowd.max {
            sql = sql.filter(hikes_with_peaks::crowd_level_numeric.le(max));
        }
        if query.fourteeners_only {
            sql = sql.filter(hikes_with_peaks::highest_peak_elevation.ge(FOURTEENER_ELEVATION));
        }
        if query.overnight_only {
            sql = sql.filter(hikes_with_peaks::is_overnight.eq(true));
        }
        if let Some(term) = query.search.as_deref().filter(|t| !t.is_empty()) {
            let pattern = like_contains_pattern(term);
            sql = sql.filter(
                hikes_with_peaks::name
                    .like(pattern.clone())
                    .escape('\\')
                    .or(hikes_with_peaks::description.like(pattern).escape('\\')),
            );
        }

        sql = match query.sort_by {
            SortKey::Number => order_by!(sql, hikes_with_peaks::number, query.sort_order),
            SortKey::Name => order_by!(sql, hikes_with_peaks::name, query.sort_order),
            SortKey::DifficultyRating => {
                order_by!(sql, hikes_with_peaks::difficulty_rating, query.sort_order)
            }
            SortKey::RoundTripMiles => {
                order_by!(sql, hikes_with_peaks::round_trip_miles, query.sort_order)
            }
            SortKey::TotalElevationGain => {
                order_by!(sql, hikes_with_peaks::total_elevation_gain, query.sort_order)
            }
            SortKey::HighestPeakElevation => {
                order_by!(sql, hikes_with_peaks::highest_peak_elevation, query.sort_order)
            }
            SortKey::ClassNumeric => {
                order_by!(sql, hikes_with_peaks::class_numeric, query.sort_order)
            }
            SortKey::HikingTimeMin => {
                order_by!(sql, hikes_with_peaks::hiking_time_min, query.sort_order)
            }
            SortKey::HikingTimeMax => {
                order_by!(sql, hikes_with_peaks::hiking_time_max, query.sort_order)
            }
            SortKey::DistanceFromReference => sql.order(hikes_with_peaks::id.asc()),
        };

        if let Some(page) = page {
            sql = sql.limit(page.limit).offset(page.offset);
        }

        let records: Vec<HikeWithPeakRecord> = sql.load(&mut conn).await?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = records.iter().map(|r| r.id).collect();

        let trailhead_records: Vec<TrailheadRecord> = trailheads::table
            .filter(trailheads::hike_id.eq_any(ids.clone()))
            .order(trailheads::id.asc())
            .select(TrailheadRecord::as_select())
            .load(&mut conn)
            .await?;
        let mut first_trailheads: HashMap<i32, Trailhead> = HashMap::new();
        for record in trailhead_records {
            first_trailheads
                .entry(record.hike_id)
                .or_insert_with(|| record.into());
        }

        let season_records: Vec<ClimbingSeasonRecord> = climbing_seasons::table
            .filter(climbing_seasons::hike_id.eq_any(ids))
            .order(climbing_seasons::id.asc())
            .select(ClimbingSeasonRecord::as_select())
            .load(&mut conn)
            .await?;
        let mut seasons: HashMap<i32, Vec<ClimbingSeason>> = HashMap::new();
        for record in season_records {
            seasons.entry(record.hike_id).or_default().push(record.into());
        }

        Ok(records
            .into_iter()
            .map(|record| {
                let id = record.id;
                HikeRow {
                    hike: record.into(),
                    trailhead: first_trailheads.remove(&id),
                    seasons: seasons.remove(&id).unwrap_or_default(),
                }
            })
            .collect())
    }

    /// Aggregate statistics over every hike.
    pub async fn stats(&self) -> Result<HikeStats, DieselError> {
        let mut conn = self.pool.get().await?;

        let summary: SummaryRow = diesel::sql_query(
            r#"SELECT
                COUNT(*) AS total_hikes,
                COUNT(CASE WHEN highest_peak_elevation >= ? THEN 1 END) AS fourteeners,
                AVG(round_trip_miles) AS avg_distance,
                AVG(total_elevation_gain) AS avg_elevation_gain,
                AVG(difficulty_rating) AS avg_difficulty,
                MIN(round_trip_miles) AS shortest_distance,
                MAX(round_trip_miles) AS longest_distance,
                MIN(highest_peak_elevation) AS lowest_peak,
                MAX(highest_peak_elevation) AS highest_peak
            FROM hikes_with_peaks"#,
        )
        .bind::<diesel::sql_types::Integer, _>(FOURTEENER_ELEVATION)
        .get_result(&mut conn)
        .await?;

        let difficulty: Vec<DifficultyCount> = diesel::sql_query(
            "SELECT difficulty_label, COUNT(*) AS count FROM hikes \
             GROUP BY difficulty_label ORDER BY MIN(difficulty_rating), difficulty_label",
        )
        .load(&mut conn)
        .await?;

        let class: Vec<ClassCount> = diesel::sql_query(
            "SELECT class_text, COUNT(*) AS count FROM hikes \
             GROUP BY class_text ORDER BY MIN(class_numeric), class_text",
        )
        .load(&mut conn)
        .await?;

        Ok(HikeStats {
            total_hikes: summary.total_hikes,
            fourteeners: summary.fourteeners,
            avg_distance: summary.avg_distance,
            avg_elevation_gain: summary.avg_elevation_gain,
            avg_difficulty: summary.avg_difficulty,
            shortest_distance: summary.shortest_distance,
            longest_distance: summary.longest_distance,
            lowest_peak: summary.lowest_peak,
            highest_peak: summary.highest_peak,
            difficulty_distribution: difficulty
                .into_iter()
                .map(|row| DifficultyBucket {
                    difficulty_label: row.difficulty_label,
                    count: row.count,
                })
                .collect(),
            class_distribution: class
                .into_iter()
                .map(|row| ClassBucket {
                    class_text: row.class_text,
                    count: row.count,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RangeFilter, RawHike};
    use crate::normalize::normalize_hike;
    use crate::repository::DbContext;
    use tempfile::tempdir;

    fn raw(number: i32, name: &str, difficulty: &str, peak: Option<&str>) -> RawHike {
        RawHike {
            number,
            name: name.to_string(),
            description: format!("{} description", name),
            difficulty: difficulty.to_string(),
            class_text: "2".to_string(),
            crowd_level: "Low".to_string(),
            round_trip_distance: format!("{} miles", number * 2),
            hiking_time: "3-5 hours".to_string(),
            start_elevation: "9,000' (Lower Lot)".to_string(),
            total_elevation_gain: "2,500'".to_string(),
            terrain: "Trail".to_string(),
            peak_elevation: peak.map(str::to_string),
            trailhead_gps: Some("39°45.0'N, 105°30.0'W".to_string()),
            best_time_to_climb: Some("June-September".to_string()),
            ..Default::default()
        }
    }

    async fn setup() -> (HikeRepository, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let ctx = DbContext::from_sqlite_path(&dir.path().join("test.db"));
        ctx.init_schema().await.unwrap();
        (ctx.hikes(), dir)
    }

    #[tokio::test]
    async fn test_save_and_get_parts() {
        let (repo, _dir) = setup().await;
        let mut record = raw(1, "Twin Summits", "6/10", None);
        record.peak_elevations = Some("East Twin: 12,100'; West Twin: 12,400'".to_string());
        repo.save(&normalize_hike(&record)).await.unwrap();

        let parts = repo.get_parts(1).await.unwrap().unwrap();
        assert_eq!(parts.hike.name, "Twin Summits");
        assert_eq!(parts.hike.bonus_peaks, None);
        // Highest first regardless of which is primary
        assert_eq!(parts.peaks[0].peak_name.as_deref(), Some("West Twin"));
        assert_eq!(parts.peaks[1].peak_name.as_deref(), Some("East Twin"));
        assert_eq!(parts.trailheads.len(), 1);
        assert_eq!(parts.trailheads[0].name, "Lower Lot");
        assert_eq!(parts.seasons.len(), 1);
        assert_eq!(parts.seasons[0].season_text, "June-September");

        assert!(repo.get_parts(99).await.unwrap().is_none());
        assert!(repo.get(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_is_idempotent() {
        let (repo, _dir) = setup().await;
        let hike = normalize_hike(&raw(4, "Repeat Peak", "5/10", Some("10,000'")));
        repo.save(&hike).await.unwrap();
        repo.save(&hike).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let parts = repo.get_parts(4).await.unwrap().unwrap();
        assert_eq!(parts.peaks.len(), 1);
        assert_eq!(parts.trailheads.len(), 1);
        assert_eq!(parts.seasons.len(), 1);
    }

    #[tokio::test]
    async fn test_find_filters_sort_and_page() {
        let (repo, _dir) = setup().await;
        for (n, name, difficulty, peak) in [
            (1, "Charlie", "3/10", Some("9,000'")),
            (2, "Alpha", "8/10", Some("14,100'")),
            (3, "Bravo", "5/10", None),
            (4, "Delta", "5/10", Some("11,000'")),
        ] {
            repo.save(&normalize_hike(&raw(n, name, difficulty, peak)))
                .await
                .unwrap();
        }

        let query = HikeQuery {
            difficulty: RangeFilter::new(None, Some(5.0)),
            sort_by: SortKey::Name,
            ..Default::default()
        };
        let rows = repo.find(&query, None).await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.hike.hike.name.as_str()).collect();
        assert_eq!(names, vec!["Bravo", "Charlie", "Delta"]);
        assert!(rows.iter().all(|r| r.trailhead.is_some()));
        assert!(rows.iter().all(|r| r.seasons.len() == 1));

        let fourteeners = HikeQuery {
            fourteeners_only: true,
            ..Default::default()
        };
        let rows = repo.find(&fourteeners, None).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hike.hike.name, "Alpha");

        // NULL peak elevation sorts last when descending
        let by_peak = HikeQuery {
            sort_by: SortKey::HighestPeakElevation,
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        let rows = repo.find(&by_peak, Some(Page { limit: 2, offset: 2 })).await.unwrap();
        let numbers: Vec<_> = rows.iter().map(|r| r.hike.hike.number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_find_search_escapes_wildcards() {
        let (repo, _dir) = setup().await;
        repo.save(&normalize_hike(&raw(1, "100% Ridge", "4/10", None)))
            .await
            .unwrap();
        repo.save(&normalize_hike(&raw(2, "Plain Ridge", "4/10", None)))
            .await
            .unwrap();

        let query = HikeQuery {
            search: Some("100%".to_string()),
            ..Default::default()
        };
        assert_eq!(repo.find(&query, None).await.unwrap().len(), 1);

        let query = HikeQuery {
            search: Some("ridge".to_string()),
            ..Default::default()
        };
        assert_eq!(repo.find(&query, None).await.unwrap().len(), 2);

        let query = HikeQuery {
            search: Some("%".to_string()),
            ..Default::default()
        };
        assert_eq!(repo.find(&query, None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_stats() {
        let (repo, _dir) = setup().await;

        let empty = repo.stats().await.unwrap();
        assert_eq!(empty.total_hikes, 0);
        assert_eq!(empty.avg_distance, None);
        assert!(empty.difficulty_distribution.is_empty());

        repo.save(&normalize_hike(&raw(1, "A", "4/10", Some("14,200'"))))
            .await
            .unwrap();
        repo.save(&normalize_hike(&raw(2, "B", "4/10", Some("12,000'"))))
            .await
            .unwrap();
        repo.save(&normalize_hike(&raw(3, "C", "2/10", None)))
            .await
            .unwrap();

        let stats = repo.stats().await.unwrap();
        assert_eq!(stats.total_hikes, 3);
        assert_eq!(stats.fourteeners, 1);
        assert_eq!(stats.shortest_distance, Some(2.0));
        assert_eq!(stats.longest_distance, Some(6.0));
        assert_eq!(stats.lowest_peak, Some(12000));
        assert_eq!(stats.highest_peak, Some(14200));
        assert_eq!(
            stats.difficulty_distribution,
            vec![
                DifficultyBucket {
                    difficulty_label: "2/10".to_string(),
                    count: 1
                },
                DifficultyBucket {
                    difficulty_label: "4/10".to_string(),
                    count: 2
                },
            ]
        );
        assert_eq!(stats.class_distribution.len(), 1);
        assert_eq!(stats.class_distribution[0].count, 3);
    }
}
