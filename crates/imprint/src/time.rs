//! Date/time field rendering.
//!
//! Each [`TimeField`] maps to one field of the timestamp, read in the
//! timestamp's own zone offset. Month and weekday names come from fixed
//! English tables; there is no locale or zone-database dependence.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use imprint_directive::TimeField;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub(crate) fn render_field(field: TimeField, ts: &DateTime<FixedOffset>) -> String {
    match field {
        TimeField::Hour024 => format!("{:02}", ts.hour()),
        TimeField::Hour012 => format!("{:02}", ts.hour12().1),
        TimeField::Hour24 => ts.hour().to_string(),
        TimeField::Hour12 => ts.hour12().1.to_string(),
        TimeField::Minute => format!("{:02}", ts.minute()),
        TimeField::Second => format!("{:02}", ts.second()),
        TimeField::Millis => format!("{:03}", ts.timestamp_subsec_millis()),
        TimeField::Nanos => format!("{:09}", ts.timestamp_subsec_nanos()),
        TimeField::AmPm => meridiem(ts).to_string(),
        TimeField::TzNumeric => zone_numeric(ts),
        TimeField::TzName => zone_name(ts),
        TimeField::EpochSeconds => ts.timestamp().to_string(),
        TimeField::EpochMillis => ts.timestamp_millis().to_string(),
        TimeField::MonthLong => month_name(ts).to_string(),
        TimeField::MonthShort => month_name(ts)[..3].to_string(),
        TimeField::DayLong => weekday_name(ts).to_string(),
        TimeField::DayShort => weekday_name(ts)[..3].to_string(),
        TimeField::YearLong => format!("{:04}", ts.year()),
        TimeField::YearShort => format!("{:02}", ts.year().rem_euclid(100)),
        TimeField::Century => format!("{:02}", ts.year().div_euclid(100)),
        TimeField::DayOfYear => format!("{:03}", ts.ordinal()),
        TimeField::DayZero => format!("{:02}", ts.day()),
        TimeField::DaySpace => format!("{:2}", ts.day()),
        TimeField::HourMinute => format!("{:02}:{:02}", ts.hour(), ts.minute()),
        TimeField::HourMinuteSecond => {
            format!("{:02}:{:02}:{:02}", ts.hour(), ts.minute(), ts.second())
        }
        TimeField::Clock12 => format!(
            "{:02}:{:02}:{:02} {}",
            ts.hour12().1,
            ts.minute(),
            ts.second(),
            meridiem(ts)
        ),
        TimeField::DateUs => format!(
            "{:02}/{:02}/{:02}",
            ts.month(),
            ts.day(),
            ts.year().rem_euclid(100)
        ),
        TimeField::DateIso => format!("{:04}-{:02}-{:02}", ts.year(), ts.month(), ts.day()),
        TimeField::Full => full_text(ts),
    }
}

/// Full date+time text, also the `%s` form of a timestamp:
/// `Mon Jan 05 14:30:09 UTC 2026`.
pub(crate) fn full_text(ts: &DateTime<FixedOffset>) -> String {
    format!(
        "{} {} {:02} {:02}:{:02}:{:02} {} {:04}",
        &weekday_name(ts)[..3],
        &month_name(ts)[..3],
        ts.day(),
        ts.hour(),
        ts.minute(),
        ts.second(),
        zone_name(ts),
        ts.year()
    )
}

fn month_name(ts: &DateTime<FixedOffset>) -> &'static str {
    MONTHS[ts.month0() as usize]
}

fn weekday_name(ts: &DateTime<FixedOffset>) -> &'static str {
    WEEKDAYS[ts.weekday().num_days_from_sunday() as usize]
}

fn meridiem(ts: &DateTime<FixedOffset>) -> &'static str {
    if ts.hour12().0 {
        "PM"
    } else {
        "AM"
    }
}

fn zone_numeric(ts: &DateTime<FixedOffset>) -> String {
    let seconds = ts.offset().local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let magnitude = seconds.unsigned_abs();
    format!("{sign}{:02}{:02}", magnitude / 3600, (magnitude % 3600) / 60)
}

/// Without a zone database there is no name to give; zero offset reads as
/// UTC, anything else falls back to the numeric form.
fn zone_name(ts: &DateTime<FixedOffset>) -> String {
    if ts.offset().local_minus_utc() == 0 {
        "UTC".to_string()
    } else {
        zone_numeric(ts)
    }
}
