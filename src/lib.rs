//! Summit hikes: a catalogue of mountain hikes.
//!
//! Free-text hike records are normalized into typed values, stored in
//! SQLite, and served through a read-only JSON API with filtering, sorting,
//! distance from a reference point and climbing-season awareness.

pub mod cli;
pub mod config;
pub mod models;
pub mod normalize;
pub mod repository;
pub mod schema;
pub mod server;
pub mod services;
