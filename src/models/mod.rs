//! Data models for summit hikes.

mod hike;
mod query;
mod raw_hike;

pub use hike::{
    ClassBucket, ClimbingSeason, DifficultyBucket, Hike, HikeDetail, HikeListItem, HikeStats,
    HikeWithPeak, Peak, Trailhead, FOURTEENER_ELEVATION,
};
pub use query::{HikeQuery, RangeFilter, SortKey, SortOrder};
pub use raw_hike::RawHike;
