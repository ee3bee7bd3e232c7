//! Gregorian calendar arithmetic.
//!
//! None of these functions validate their inputs: out-of-range months or
//! days produce meaningless numbers, and months outside 1..=12 panic on
//! the table lookup. Validate with [`crate::CivilDateTime::new`] first.

/// Days elapsed before the first of each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

/// 1-based ordinal day of the year.
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let leap_day = u32::from(month > 2 && leap_year(year));
    DAYS_BEFORE_MONTH[(month - 1) as usize] + day + leap_day
}

/// Day of the week, 0 = Sunday through 6 = Saturday.
///
/// Zeller's congruence, with January and February counted as months 13
/// and 14 of the previous year.
pub fn day_of_week(year: i32, month: u32, day: u32) -> u32 {
    let (m, y) = if month < 3 {
        (month as i32 + 12, year - 1)
    } else {
        (month as i32, year)
    };
    let k = y.rem_euclid(100);
    let j = y.div_euclid(100);
    let h = (day as i32 + 13 * (m + 1) / 5 + k + k / 4 + j / 4 + 5 * j).rem_euclid(7);
    // Zeller counts from Saturday
    ((h + 6) % 7) as u32
}
