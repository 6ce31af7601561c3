//! Read-side query service.
//!
//! Wraps the repository with the values that are derived at query time:
//! distance from the reference point and in-season status.

use std::cmp::Ordering;

use chrono::NaiveDate;

use super::geo::GeoPoint;
use super::season::any_in_season;
use crate::models::{HikeDetail, HikeListItem, HikeQuery, HikeStats, SortKey, SortOrder};
use crate::repository::{DieselError, HikeRepository, HikeRow, Page};

/// Answers list, detail and stats queries over the imported hikes.
#[derive(Clone)]
pub struct QueryService {
    repo: HikeRepository,
    reference: GeoPoint,
    season_buffer_days: u64,
}

impl QueryService {
    pub fn new(repo: HikeRepository, reference: GeoPoint, season_buffer_days: u64) -> Self {
        Self {
            repo,
            reference,
            season_buffer_days,
        }
    }

    pub fn reference(&self) -> GeoPoint {
        self.reference
    }

    /// Filtered, sorted, paginated hike list as of `today`.
    ///
    /// The in-season filter runs on the page after pagination, so a page can
    /// hold fewer than `limit` items even when more matching hikes exist.
    pub async fn list_hikes(
        &self,
        query: &HikeQuery,
        today: NaiveDate,
    ) -> Result<Vec<HikeListItem>, DieselError> {
        let mut items: Vec<HikeListItem> = if query.needs_distance() {
            let rows = self.repo.find(query, None).await?;
            let mut items: Vec<HikeListItem> = rows
                .into_iter()
                .map(|row| self.enrich(row, today))
                .filter(|item| {
                    !query.distance_from_reference.is_set()
                        || item
                            .distance_from_reference
                            .is_some_and(|d| query.distance_from_reference.contains(d))
                })
                .collect();

            if query.sort_by == SortKey::DistanceFromReference {
                sort_by_distance(&mut items, query.sort_order);
            }

            let offset = usize::try_from(query.offset).unwrap_or(0);
            let limit = usize::try_from(query.limit).unwrap_or(0);
            items.into_iter().skip(offset).take(limit).collect()
        } else {
            let page = Page {
                limit: query.limit,
                offset: query.offset,
            };
            self.repo
                .find(query, Some(page))
                .await?
                .into_iter()
                .map(|row| self.enrich(row, today))
                .collect()
        };

        if query.in_season_only {
            items.retain(|item| item.is_in_season);
        }

        Ok(items)
    }

    /// Full detail for one hike, or `None` when the id doesn't exist.
    pub async fn get_hike(&self, id: i32, today: NaiveDate) -> Result<Option<HikeDetail>, DieselError> {
        let Some(parts) = self.repo.get_parts(id).await? else {
            return Ok(None);
        };

        let is_in_season = any_in_season(&parts.seasons, today, self.season_buffer_days);
        Ok(Some(HikeDetail {
            hike: parts.hike,
            peaks: parts.peaks,
            trailheads: parts.trailheads,
            climbing_seasons: parts.seasons,
            is_in_season,
        }))
    }

    /// Dataset-wide statistics. Ignores all filters.
    pub async fn stats(&self) -> Result<HikeStats, DieselError> {
        self.repo.stats().await
    }

    fn enrich(&self, row: HikeRow, today: NaiveDate) -> HikeListItem {
        let distance_from_reference = row
            .trailhead
            .as_ref()
            .filter(|t| t.has_coordinates())
            .map(|t| self.reference.distance_to(&GeoPoint::new(t.latitude, t.longitude)));
        let is_in_season = any_in_season(&row.seasons, today, self.season_buffer_days);

        HikeListItem {
            latitude: row.trailhead.as_ref().map(|t| t.latitude),
            longitude: row.trailhead.as_ref().map(|t| t.longitude),
            hike: row.hike,
            distance_from_reference,
            climbing_seasons: row.seasons,
            is_in_season,
        }
    }
}

/// Unknown distances sort first ascending and last descending; ties by id.
fn sort_by_distance(items: &mut [HikeListItem], order: SortOrder) {
    items.sort_by(|a, b| {
        let by_distance = match (a.distance_from_reference, b.distance_from_reference) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => x.total_cmp(&y),
        };
        let by_distance = match order {
            SortOrder::Asc => by_distance,
            SortOrder::Desc => by_distance.reverse(),
        };
        by_distance.then(a.hike.hike.id.cmp(&b.hike.hike.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RangeFilter, RawHike};
    use crate::normalize::normalize_hike;
    use crate::repository::DbContext;
    use tempfile::tempdir;

    const DENVER: GeoPoint = GeoPoint::new(39.7392, -104.9903);

    fn raw(number: i32, gps: Option<&str>, season: &str) -> RawHike {
        RawHike {
            number,
            name: format!("Hike {}", number),
            description: String::new(),
            difficulty: "5/10".to_string(),
            class_text: "2".to_string(),
            crowd_level: "Low".to_string(),
            round_trip_distance: "6 miles".to_string(),
            hiking_time: "4 hours".to_string(),
            start_elevation: "9,000'".to_string(),
            total_elevation_gain: "2,000'".to_string(),
            terrain: "Trail".to_string(),
            trailhead_gps: gps.map(str::to_string),
            best_time_to_climb: Some(season.to_string()),
            ..Default::default()
        }
    }

    async fn setup(hikes: &[RawHike]) -> (QueryService, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let ctx = DbContext::from_sqlite_path(&dir.path().join("test.db"));
        ctx.init_schema().await.unwrap();
        let repo = ctx.hikes();
        for hike in hikes {
            repo.save(&normalize_hike(hike)).await.unwrap();
        }
        (QueryService::new(repo, DENVER, 15), dir)
    }

    fn july() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 10).unwrap()
    }

    #[tokio::test]
    async fn test_distance_sort_and_filter() {
        let (service, _dir) = setup(&[
            // ~24 miles (Boulder area)
            raw(1, Some("40°00.9'N, 105°16.2'W"), "June-September"),
            // no trailhead
            raw(2, None, "June-September"),
            // ~60 miles
            raw(3, Some("39°38.0'N, 106°04.0'W"), "June-September"),
            // unparseable coordinates
            raw(4, Some("somewhere"), "June-September"),
        ])
        .await;

        let query = HikeQuery {
            sort_by: SortKey::DistanceFromReference,
            ..Default::default()
        };
        let items = service.list_hikes(&query, july()).await.unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.hike.hike.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
        assert!(items[0].distance_from_reference.is_none());
        assert_eq!(items[1].latitude, Some(0.0));

        let query = HikeQuery {
            sort_by: SortKey::DistanceFromReference,
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        let items = service.list_hikes(&query, july()).await.unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.hike.hike.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);

        let query = HikeQuery {
            distance_from_reference: RangeFilter::new(None, Some(40.0)),
            ..Default::default()
        };
        let items = service.list_hikes(&query, july()).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].hike.hike.id, 1);

        let query = HikeQuery {
            sort_by: SortKey::DistanceFromReference,
            limit: 1,
            offset: 2,
            ..Default::default()
        };
        let items = service.list_hikes(&query, july()).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].hike.hike.id, 1);
    }

    #[tokio::test]
    async fn test_in_season_filter_runs_after_pagination() {
        let (service, _dir) = setup(&[
            raw(1, None, "December-February"),
            raw(2, None, "December-February"),
            raw(3, None, "June-September"),
            raw(4, None, "June-September"),
        ])
        .await;

        let query = HikeQuery {
            in_season_only: true,
            limit: 2,
            ..Default::default()
        };
        // The first page holds the two winter hikes, both out of season in July
        let items = service.list_hikes(&query, july()).await.unwrap();
        assert!(items.is_empty());

        let query = HikeQuery {
            in_season_only: true,
            ..Default::default()
        };
        let items = service.list_hikes(&query, july()).await.unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.hike.hike.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[tokio::test]
    async fn test_get_hike() {
        let (service, _dir) = setup(&[raw(5, Some("40°00.9'N, 105°16.2'W"), "July")]).await;

        let detail = service.get_hike(5, july()).await.unwrap().unwrap();
        assert_eq!(detail.hike.number, 5);
        assert!(detail.is_in_season);
        assert_eq!(detail.trailheads.len(), 1);
        assert_eq!(detail.climbing_seasons[0].start_month, 7);

        assert!(service.get_hike(6, july()).await.unwrap().is_none());
    }
}
