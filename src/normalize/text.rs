//! Scalar field parsers: difficulty, class, crowd level, distance, time and elevation.
//!
//! Every parser is total. Text that doesn't match a known shape yields the
//! documented default instead of an error.

use regex::Regex;
use std::sync::LazyLock;

/// Default class rating for descriptions missing from [`CLASS_TABLE`].
pub const DEFAULT_CLASS: f64 = 2.0;

/// Default crowd level when no keyword matches.
pub const DEFAULT_CROWD_LEVEL: i32 = 3;

/// Hiking hours assumed per day for multi-day trips (minimum, maximum).
pub const HOURS_PER_DAY: (f64, f64) = (8.0, 12.0);

static DIFFICULTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)/10").unwrap());

static DISTANCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*miles").unwrap());

static TIME_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)-(\d+(?:\.\d+)?)\s*hours").unwrap());

static TIME_DAYS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*days?").unwrap());

static TIME_SINGLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*hours?").unwrap());

// Applied after commas are stripped, so "14,265'" is seen as "14265'".
static ELEVATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{1,2}\d{3}").unwrap());

/// Known class descriptions and their numeric grade.
///
/// Lookup is exact-string. A description that merely shares words with an
/// entry does not match it.
pub const CLASS_TABLE: &[(&str, f64)] = &[
    ("1", 1.0),
    ("1; 2 for the last 0.5 mile", 1.5),
    ("2", 2.0),
    ("2 with long class 1 sections", 2.0),
    ("2+", 2.3),
    ("2+/3", 2.5),
    ("2+; optional class 3 moves on summit", 2.3),
    ("2/2+", 2.2),
    ("3", 3.0),
    ("3 with significant exposure", 3.0),
    ("3/3+", 3.3),
    ("3; class 2 hike in", 3.0),
];

type CrowdRule = (fn(&str) -> bool, i32);

/// Crowd keyword rules, checked in order against the lowercased text.
/// "low to moderate" must hit the combined rule before "low" alone.
const CROWD_RULES: &[CrowdRule] = &[
    (|t: &str| t.contains("hermit"), 1),
    (|t: &str| t.contains("low") && t.contains("moderate"), 3),
    (|t: &str| t.contains("low"), 2),
    (|t: &str| t.contains("high"), 5),
    (|t: &str| t.contains("moderate") || t.contains("medium"), 4),
];

fn capture_f64(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Extract the rating preceding `/10`, e.g. `"7/10 (hard)"` → 7.0.
pub fn parse_difficulty(text: &str) -> f64 {
    capture_f64(&DIFFICULTY_RE, text).unwrap_or(0.0)
}

/// Map a class description to its numeric grade, defaulting to 2.0.
pub fn parse_class(text: &str) -> f64 {
    CLASS_TABLE
        .iter()
        .find(|(label, _)| *label == text)
        .map(|(_, grade)| *grade)
        .unwrap_or(DEFAULT_CLASS)
}

/// Map a crowd description to a 1–5 level, returning the original text alongside.
pub fn parse_crowd_level(text: &str) -> (i32, &str) {
    let lower = text.to_lowercase();
    let level = CROWD_RULES
        .iter()
        .find(|(matches, _)| matches(&lower))
        .map(|(_, level)| *level)
        .unwrap_or(DEFAULT_CROWD_LEVEL);
    (level, text)
}

/// Extract the number immediately preceding "miles".
pub fn parse_distance(text: &str) -> f64 {
    capture_f64(&DISTANCE_RE, text).unwrap_or(0.0)
}

/// Parse hiking time into `(min_hours, max_hours)`.
///
/// Patterns are tried in order: an "A-B hours" range, "N day(s)" scaled by
/// [`HOURS_PER_DAY`], then a single "N hour(s)". No match gives `(0.0, 0.0)`.
pub fn parse_hiking_time(text: &str) -> (f64, f64) {
    if let Some(caps) = TIME_RANGE_RE.captures(text) {
        let min = caps[1].parse().unwrap_or(0.0);
        let max = caps[2].parse().unwrap_or(0.0);
        return (min, max);
    }

    if let Some(days) = capture_f64(&TIME_DAYS_RE, text) {
        return (days * HOURS_PER_DAY.0, days * HOURS_PER_DAY.1);
    }

    if let Some(hours) = capture_f64(&TIME_SINGLE_RE, text) {
        return (hours, hours);
    }

    (0.0, 0.0)
}

/// Extract a thousands-scale elevation in feet, e.g. `"8,144'"` → 8144.
pub fn parse_elevation(text: &str) -> i32 {
    let stripped = text.replace(',', "");
    ELEVATION_RE
        .find(&stripped)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(parse_difficulty("7/10"), 7.0);
        assert_eq!(parse_difficulty("Strenuous (8.5/10)"), 8.5);
        assert_eq!(parse_difficulty("10/10 - brutal"), 10.0);
        assert_eq!(parse_difficulty("hard"), 0.0);
        assert_eq!(parse_difficulty(""), 0.0);
    }

    #[test]
    fn test_parse_class_exact_match() {
        assert_eq!(parse_class("1"), 1.0);
        assert_eq!(parse_class("2+"), 2.3);
        assert_eq!(parse_class("3/3+"), 3.3);
        assert_eq!(parse_class("1; 2 for the last 0.5 mile"), 1.5);
        assert_eq!(parse_class("3; class 2 hike in"), 3.0);
    }

    #[test]
    fn test_parse_class_unknown_defaults() {
        // Shares words with "3 with significant exposure" but isn't in the table
        assert_eq!(parse_class("3 with exposure"), DEFAULT_CLASS);
        assert_eq!(parse_class("4"), DEFAULT_CLASS);
        assert_eq!(parse_class(" 3"), DEFAULT_CLASS);
        assert_eq!(parse_class(""), DEFAULT_CLASS);
    }

    #[test]
    fn test_parse_crowd_level_precedence() {
        assert_eq!(parse_crowd_level("Hermit-level solitude"), (1, "Hermit-level solitude"));
        assert_eq!(parse_crowd_level("Low to moderate").0, 3);
        assert_eq!(parse_crowd_level("Low").0, 2);
        assert_eq!(parse_crowd_level("HIGH on weekends").0, 5);
        assert_eq!(parse_crowd_level("Moderate").0, 4);
        assert_eq!(parse_crowd_level("medium").0, 4);
        assert_eq!(parse_crowd_level("unknown").0, DEFAULT_CROWD_LEVEL);
    }

    #[test]
    fn test_parse_crowd_level_hermit_beats_everything() {
        assert_eq!(parse_crowd_level("hermit, but high on holidays").0, 1);
    }

    #[test]
    fn test_parse_distance() {
        assert_eq!(parse_distance("7.5 miles round trip"), 7.5);
        assert_eq!(parse_distance("12miles"), 12.0);
        assert_eq!(parse_distance("about 3 km"), 0.0);
    }

    #[test]
    fn test_parse_hiking_time_range() {
        assert_eq!(parse_hiking_time("4-6 hours"), (4.0, 6.0));
        assert_eq!(parse_hiking_time("2.5-3.5 hours"), (2.5, 3.5));
    }

    #[test]
    fn test_parse_hiking_time_days() {
        assert_eq!(parse_hiking_time("2 days"), (16.0, 24.0));
        assert_eq!(parse_hiking_time("1 day"), (8.0, 12.0));
    }

    #[test]
    fn test_parse_hiking_time_single() {
        assert_eq!(parse_hiking_time("4 hours"), (4.0, 4.0));
        assert_eq!(parse_hiking_time("1 hour"), (1.0, 1.0));
    }

    #[test]
    fn test_parse_hiking_time_range_wins_over_single() {
        // Contains both a range and a lone "hours" figure; the range is tried first
        assert_eq!(parse_hiking_time("5-7 hours (or 9 hours with detour)"), (5.0, 7.0));
    }

    #[test]
    fn test_parse_hiking_time_no_match() {
        assert_eq!(parse_hiking_time("all afternoon"), (0.0, 0.0));
    }

    #[test]
    fn test_parse_elevation() {
        assert_eq!(parse_elevation("8,144'"), 8144);
        assert_eq!(parse_elevation("14,265 feet"), 14265);
        assert_eq!(parse_elevation("9,300' (Bear Lake Trailhead)"), 9300);
        assert_eq!(parse_elevation("3,200' gain"), 3200);
        assert_eq!(parse_elevation("850'"), 0);
        assert_eq!(parse_elevation("n/a"), 0);
    }
}
