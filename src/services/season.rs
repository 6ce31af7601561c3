//! Climbing-season membership for a given day.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::models::ClimbingSeason;

/// Days added on both sides of a season window by default.
pub const DEFAULT_BUFFER_DAYS: u64 = 15;

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// Concrete unbuffered window for a month range, relative to `today`.
///
/// A non-wrapping range sits in `today`'s year. A wrapping range (start after
/// end) runs from this year into the next when `today` is on or after the
/// start month, and from last year into this one otherwise.
pub fn season_window(start_month: u32, end_month: u32, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&start_month) || !(1..=12).contains(&end_month) {
        return None;
    }

    let year = today.year();
    let (start_year, end_year) = if start_month <= end_month {
        (year, year)
    } else if today.month() >= start_month {
        (year, year + 1)
    } else {
        (year - 1, year)
    };

    let start = NaiveDate::from_ymd_opt(start_year, start_month, 1)?;
    let end = last_day_of_month(end_year, end_month)?;
    Some((start, end))
}

/// Whether `today` falls inside the season window widened by `buffer_days`
/// on both ends. Bounds are inclusive; invalid months are never in season.
pub fn is_in_season(start_month: u32, end_month: u32, today: NaiveDate, buffer_days: u64) -> bool {
    let Some((start, end)) = season_window(start_month, end_month, today) else {
        return false;
    };

    let buffer = Days::new(buffer_days);
    let start = start.checked_sub_days(buffer).unwrap_or(NaiveDate::MIN);
    let end = end.checked_add_days(buffer).unwrap_or(NaiveDate::MAX);

    start <= today && today <= end
}

/// A hike is in season if any of its season rows is.
pub fn any_in_season(seasons: &[ClimbingSeason], today: NaiveDate, buffer_days: u64) -> bool {
    seasons.iter().any(|season| {
        match (u32::try_from(season.start_month), u32::try_from(season.end_month)) {
            (Ok(start), Ok(end)) => is_in_season(start, end, today, buffer_days),
            _ => false,
        }
    })
}
