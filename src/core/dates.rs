use chrono::{Datelike, Duration, Local, NaiveDate, SecondsFormat, Utc};

/// Weeks the seeded plan covers; later dates keep showing the last week.
pub const PLAN_WEEKS: i64 = 4;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Row timestamp: RFC 3339 UTC, second precision.
pub fn now_stamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// The Monday on or before the given date. Weeks run Monday..Sunday.
pub fn week_start(d: NaiveDate) -> NaiveDate {
    d - Duration::days(i64::from(d.weekday().num_days_from_monday()))
}

/// ISO day of week: Monday = 1 .. Sunday = 7.
pub fn iso_dow(d: NaiveDate) -> u32 {
    d.weekday().number_from_monday()
}

/// 1-based index of the week containing `target`, counted from the week
/// containing `start` and clamped to the seeded plan length. A target
/// before the start clamps to week 1.
pub fn plan_week_number(start: NaiveDate, target: NaiveDate) -> u32 {
    let delta_days = (week_start(target) - week_start(start)).num_days();
    let week = delta_days.div_euclid(7) + 1;
    week.clamp(1, PLAN_WEEKS) as u32
}
