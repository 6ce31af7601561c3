//! Peak extraction from `peak_elevation` / `peak_elevations`.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::text::parse_elevation;
use crate::models::RawHike;

// "Green Mountain: 8,144'; Bear Peak: 8,461'"
static PEAK_PAIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^:;]+):\s*(\d{1,2},?\d{3})").unwrap());

/// A peak parsed from a hike record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPeak {
    /// `None` for single-peak hikes, where the hike name is the peak.
    pub name: Option<String>,
    pub elevation: i32,
    pub is_primary: bool,
}

/// Parse the peaks of a hike.
///
/// `peak_elevation` wins over `peak_elevations` when both are present. The
/// first peak is primary. A record with neither field has no peaks.
pub fn parse_peaks(hike: &RawHike) -> Vec<ParsedPeak> {
    let pairs: Vec<(Option<String>, i32)> = if let Some(single) = &hike.peak_elevation {
        vec![(None, parse_elevation(single))]
    } else if let Some(multi) = &hike.peak_elevations {
        PEAK_PAIR_RE
            .captures_iter(multi)
            .map(|caps| (Some(caps[1].trim().to_string()), parse_elevation(&caps[2])))
            .collect()
    } else {
        Vec::new()
    };

    pairs
        .into_iter()
        .enumerate()
        .map(|(i, (name, elevation))| ParsedPeak {
            name,
            elevation,
            is_primary: i == 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hike_with(single: Option<&str>, multi: Option<&str>) -> RawHike {
        RawHike {
            peak_elevation: single.map(str::to_string),
            peak_elevations: multi.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_peak_is_unnamed_and_primary() {
        let peaks = parse_peaks(&hike_with(Some("14,265'"), None));
        assert_eq!(
            peaks,
            vec![ParsedPeak {
                name: None,
                elevation: 14265,
                is_primary: true,
            }]
        );
    }

    #[test]
    fn test_multiple_named_peaks() {
        let peaks = parse_peaks(&hike_with(
            None,
            Some("Green Mountain: 8,144'; Bear Peak: 8,461'"),
        ));
        assert_eq!(peaks.len(), 2);
        assert_eq!(peaks[0].name.as_deref(), Some("Green Mountain"));
        assert_eq!(peaks[0].elevation, 8144);
        assert!(peaks[0].is_primary);
        assert_eq!(peaks[1].name.as_deref(), Some("Bear Peak"));
        assert_eq!(peaks[1].elevation, 8461);
        assert!(!peaks[1].is_primary);
    }

    #[test]
    fn test_single_field_takes_precedence() {
        let peaks = parse_peaks(&hike_with(Some("13,000'"), Some("Other: 9,000'")));
        assert_eq!(peaks.len(), 1);
        assert_eq!(peaks[0].elevation, 13000);
    }

    #[test]
    fn test_no_peak_fields() {
        assert!(parse_peaks(&hike_with(None, None)).is_empty());
    }

    #[test]
    fn test_unparseable_multi_yields_nothing() {
        assert!(parse_peaks(&hike_with(None, Some("several summits"))).is_empty());
    }
}
