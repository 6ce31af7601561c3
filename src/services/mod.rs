//! Service layer for summit hikes.
//!
//! Domain logic shared by the CLI and the web server: the import pipeline and
//! the read-side query service with its query-time derivations.

pub mod geo;
pub mod import;
pub mod query;
pub mod season;

pub use geo::{haversine_miles, GeoPoint, EARTH_RADIUS_MILES};
pub use import::{import_file, import_hikes, parse_hikes, ImportError, ImportSummary};
pub use query::QueryService;
pub use season::{any_in_season, is_in_season, season_window, DEFAULT_BUFFER_DAYS};
