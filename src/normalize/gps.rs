//! Degrees/decimal-minutes GPS parsing.

use regex::Regex;
use std::sync::LazyLock;

static COORDINATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)°(\d+(?:\.\d+)?)'?\s*([NSEW])").unwrap());

/// Convert one coordinate like `39°45.2'N` into signed decimal degrees.
///
/// South and west are negative. Unparseable input gives 0.0.
pub fn parse_coordinate(text: &str) -> f64 {
    let Some(caps) = COORDINATE_RE.captures(text) else {
        return 0.0;
    };

    let degrees: f64 = caps[1].parse().unwrap_or(0.0);
    let minutes: f64 = caps[2].parse().unwrap_or(0.0);
    let decimal = degrees + minutes / 60.0;

    match &caps[3] {
        "S" | "W" => -decimal,
        _ => decimal,
    }
}

/// Parse `"lat, lon"` into `(latitude, longitude)`.
///
/// Anything other than exactly two comma-separated halves yields `(0.0, 0.0)`;
/// a malformed half yields 0.0 for that half only.
pub fn parse_gps(text: &str) -> (f64, f64) {
    let parts: Vec<&str> = text.split(',').collect();
    match parts.as_slice() {
        [lat, lon] => (parse_coordinate(lat.trim()), parse_coordinate(lon.trim())),
        _ => (0.0, 0.0),
    }
}
