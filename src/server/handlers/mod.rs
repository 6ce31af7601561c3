//! HTTP request handlers for the web server.

mod api;
mod hikes;
mod params;

pub use api::{health, root, stats};
pub use hikes::{hike_detail, list_hikes};
pub use params::HikeListParams;
