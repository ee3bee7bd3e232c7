//! U.S. daylight saving time, as legislated from 2007 onward.
//!
//! DST starts at 02:00 local standard time on the second Sunday in March
//! and ends at 02:00 local daylight time on the first Sunday in November.
//! Earlier years used different transition dates; the rule is applied to
//! them unchanged and will be wrong for most of them.

use crate::calendar::day_of_week;
use crate::types::ObserverLocation;

/// Local hour at which both transitions happen.
pub const TRANSITION_HOUR: u32 = 2;

/// First year the current U.S. rule applies to.
pub const FIRST_RULE_YEAR: i32 = 2007;

fn first_sunday(year: i32, month: u32) -> u32 {
    1 + (7 - day_of_week(year, month, 1)) % 7
}

pub fn second_sunday_in_march(year: i32) -> u32 {
    first_sunday(year, 3) + 7
}

pub fn first_sunday_in_november(year: i32) -> u32 {
    first_sunday(year, 11)
}

/// Whether DST is in effect at the given local date and hour.
///
/// During the repeated hour in November (01:00-02:00) the time is taken
/// to be daylight time.
pub fn is_daylight_saving(year: i32, month: u32, day: u32, hour: u32) -> bool {
    match month {
        3 => {
            let start = second_sunday_in_march(year);
            day > start || (day == start && hour >= TRANSITION_HOUR)
        }
        4..=10 => true,
        11 => {
            let end = first_sunday_in_november(year);
            day < end || (day == end && hour < TRANSITION_HOUR)
        }
        _ => false,
    }
}

/// Picks the observer's daylight or standard UTC offset.
pub fn utc_offset_hours(location: &ObserverLocation, is_dst: bool) -> i32 {
    if is_dst {
        location.daylight_utc_offset_hours()
    } else {
        location.standard_utc_offset_hours()
    }
}
