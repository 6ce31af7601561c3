//! End-to-end: import a JSON file, then query it through the service layer.

use chrono::NaiveDate;
use tempfile::tempdir;

use summit_hikes::config::Settings;
use summit_hikes::models::{HikeQuery, RangeFilter, SortKey, SortOrder};
use summit_hikes::services::{import_file, ImportError};

const HIKES_JSON: &str = r#"[
    {
        "number": 1,
        "name": "Grays and Torreys",
        "description": "Two fourteeners from Stevens Gulch",
        "difficulty": "6/10",
        "class": "1",
        "crowd_level": "Very high",
        "round_trip_distance": "8.25 miles",
        "hiking_time": "5-7 hours",
        "start_elevation": "11,280' (Stevens Gulch Trailhead)",
        "total_elevation_gain": "3,600'",
        "terrain": "Well-worn trail",
        "peak_elevations": "Grays Peak: 14,270'; Torreys Peak: 14,267'",
        "trailhead_gps": "39°39.6'N, 105°47.0'W",
        "best_time_to_climb": "June-September"
    },
    {
        "number": 2,
        "name": "Green Mountain",
        "description": "Winter-friendly foothills summit",
        "difficulty": "3/10",
        "class": "1",
        "crowd_level": "Moderate",
        "round_trip_distance": "5.5 miles",
        "hiking_time": "2-3 hours",
        "start_elevation": "5,800'",
        "total_elevation_gain": "2,300'",
        "terrain": "Trail",
        "peak_elevation": "8,144'",
        "trailhead_gps": "39°59.8'N, 105°17.5'W",
        "best_time_to_climb": "November-March"
    },
    {
        "number": 3,
        "name": "Lost Creek Traverse",
        "description": "Remote multi-day 100% backcountry route",
        "difficulty": "8/10",
        "class": "2+",
        "crowd_level": "Hermit-level solitude",
        "round_trip_distance": "24 miles",
        "hiking_time": "2-3 days",
        "start_elevation": "8,200'",
        "total_elevation_gain": "5,100'",
        "terrain": "Faint trail",
        "label": "GOOD OVERNIGHT",
        "best_time_to_climb": "sometime"
    }
]"#;

async fn imported_settings() -> (Settings, tempfile::TempDir) {
    let dir = tempdir().unwrap();
    let settings = Settings::with_data_dir(dir.path().join("data"));
    settings.ensure_directories().unwrap();

    let ctx = settings.create_db_context();
    ctx.init_schema().await.unwrap();

    let file = dir.path().join("hikes.json");
    std::fs::write(&file, HIKES_JSON).unwrap();
    let summary = import_file(&ctx.hikes(), &file).await.unwrap();
    assert_eq!(summary.hikes, 3);
    assert_eq!(summary.peaks, 3);
    assert_eq!(summary.trailheads, 2);
    assert_eq!(summary.seasons, 3);

    (settings, dir)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn import_then_list_with_filters() {
    let (settings, _dir) = imported_settings().await;
    let service = settings.query_service();
    let july = date(2025, 7, 1);

    let all = service.list_hikes(&HikeQuery::default(), july).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].hike.highest_peak_elevation, Some(14270));
    assert!(all[0].hike.is_fourteener());
    assert_eq!(all[2].hike.hike.hiking_time_min, 24.0);
    assert_eq!(all[2].distance_from_reference, None);

    let fourteeners = HikeQuery {
        fourteeners_only: true,
        ..Default::default()
    };
    let items = service.list_hikes(&fourteeners, july).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].hike.hike.name, "Grays and Torreys");

    let search = HikeQuery {
        search: Some("100%".to_string()),
        ..Default::default()
    };
    let items = service.list_hikes(&search, july).await.unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0].hike.hike.is_overnight);

    let easy_by_difficulty = HikeQuery {
        difficulty: RangeFilter::new(None, Some(6.0)),
        sort_by: SortKey::DifficultyRating,
        sort_order: SortOrder::Desc,
        ..Default::default()
    };
    let items = service.list_hikes(&easy_by_difficulty, july).await.unwrap();
    let numbers: Vec<_> = items.iter().map(|i| i.hike.hike.number).collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[tokio::test]
async fn seasons_follow_the_calendar() {
    let (settings, _dir) = imported_settings().await;
    let service = settings.query_service();

    let in_season = HikeQuery {
        in_season_only: true,
        ..Default::default()
    };

    let january: Vec<_> = service
        .list_hikes(&in_season, date(2026, 1, 15))
        .await
        .unwrap()
        .iter()
        .map(|i| i.hike.hike.number)
        .collect();
    assert_eq!(january, vec![2]);

    let july: Vec<_> = service
        .list_hikes(&in_season, date(2025, 7, 15))
        .await
        .unwrap()
        .iter()
        .map(|i| i.hike.hike.number)
        .collect();
    assert_eq!(july, vec![1, 3]);
}

#[tokio::test]
async fn detail_and_stats() {
    let (settings, _dir) = imported_settings().await;
    let service = settings.query_service();

    let detail = service.get_hike(1, date(2025, 8, 1)).await.unwrap().unwrap();
    let elevations: Vec<_> = detail.peaks.iter().map(|p| p.elevation).collect();
    assert_eq!(elevations, vec![14270, 14267]);
    assert_eq!(detail.trailheads[0].name, "Stevens Gulch Trailhead");
    assert!(detail.is_in_season);

    assert!(service.get_hike(42, date(2025, 8, 1)).await.unwrap().is_none());

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.total_hikes, 3);
    assert_eq!(stats.fourteeners, 1);
    assert_eq!(stats.highest_peak, Some(14270));
    assert_eq!(stats.lowest_peak, Some(8144));
    assert_eq!(stats.shortest_distance, Some(5.5));
    assert_eq!(stats.longest_distance, Some(24.0));
}

#[tokio::test]
async fn malformed_file_is_rejected() {
    let dir = tempdir().unwrap();
    let settings = Settings::with_data_dir(dir.path().to_path_buf());
    let ctx = settings.create_db_context();
    ctx.init_schema().await.unwrap();

    let file = dir.path().join("broken.json");
    std::fs::write(&file, "[{\"number\": 1").unwrap();
    let result = import_file(&ctx.hikes(), &file).await;
    assert!(matches!(result, Err(ImportError::Json(_))));
    assert_eq!(ctx.hikes().count().await.unwrap(), 0);
}
