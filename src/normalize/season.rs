//! Climbing-season text → month ranges.

use serde::{Deserialize, Serialize};

/// Range used when the text names no usable months.
pub const DEFAULT_SEASON: MonthRange = MonthRange {
    start_month: 6,
    end_month: 9,
};

/// Full and abbreviated month spellings. Matching is plain substring search
/// on the lowercased text.
const MONTH_NAMES: &[(&str, u32)] = &[
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

/// An inclusive range of months, 1–12.
///
/// `start_month > end_month` means the range wraps the year boundary,
/// e.g. November → March.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRange {
    pub start_month: u32,
    pub end_month: u32,
}

impl MonthRange {
    pub const fn new(start_month: u32, end_month: u32) -> Self {
        Self {
            start_month,
            end_month,
        }
    }

    pub const fn year_round() -> Self {
        Self::new(1, 12)
    }

    /// Whether the range crosses December → January.
    pub fn wraps(&self) -> bool {
        self.start_month > self.end_month
    }
}

/// Distinct months mentioned in `lower`, ordered by first occurrence.
fn months_by_position(lower: &str) -> Vec<u32> {
    let mut found: Vec<(usize, u32)> = Vec::new();

    for (name, month) in MONTH_NAMES {
        let Some(pos) = lower.find(name) else {
            continue;
        };
        match found.iter_mut().find(|(_, m)| m == month) {
            Some(entry) if pos < entry.0 => entry.0 = pos,
            Some(_) => {}
            None => found.push((pos, *month)),
        }
    }

    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, month)| month).collect()
}

/// Parse free-text climbing season into month ranges.
///
/// - "year-round" anywhere → `[(1, 12)]`
/// - exactly two distinct months and a hyphen → one range in textual order,
///   kept as-is when it wraps
/// - exactly one month → `[(m, m)]`
/// - anything else → [`DEFAULT_SEASON`]
pub fn parse_climbing_season(text: &str) -> Vec<MonthRange> {
    let lower = text.to_lowercase();

    if lower.contains("year-round") {
        return vec![MonthRange::year_round()];
    }

    match months_by_position(&lower).as_slice() {
        [start, end] if text.contains('-') => vec![MonthRange::new(*start, *end)],
        [month] => vec![MonthRange::new(*month, *month)],
        _ => vec![DEFAULT_SEASON],
    }
}
