//! Repository layer for database persistence.
//!
//! All database access uses Diesel ORM against SQLite through diesel-async.

pub mod context;
pub mod hike;
pub mod models;
pub mod pool;
pub mod util;

pub use context::DbContext;
pub use hike::{HikeParts, HikeRepository, HikeRow, Page};
pub use pool::{DieselError, SqlitePool};
