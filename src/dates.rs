//! Human-friendly rendering of `created_at` timestamps.
//!
//! Pure functions of the timestamp and a reference "now"; the store itself
//! never calls into this module.

use std::fmt;

use chrono::{DateTime, Datelike, Local, Months, NaiveDateTime, TimeZone, Utc};

const MINUTES_PER_HOUR: f64 = 60.0;
const MINUTES_PER_DAY: f64 = 1440.0;
const MINUTES_PER_MONTH: f64 = 43200.0;

/// Feed-style date: relative under an hour, time of day under a day,
/// weekday and time under a week, otherwise the calendar date.
/// Rendered in the time zone of `now`.
pub fn format_post_date_at<Tz>(created_at: DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let elapsed = now.with_timezone(&Utc) - created_at;
    let hours = elapsed.num_seconds() as f64 / 3600.0;

    if hours < 1.0 {
        return format_relative_time_at(created_at, now);
    }

    let local = created_at.with_timezone(&now.timezone());
    if hours < 24.0 {
        local.format("%-I:%M %p").to_string()
    } else if hours < 168.0 {
        local.format("%a %-I:%M %p").to_string()
    } else {
        local.format("%b %-d, %Y").to_string()
    }
}

/// Distance between `created_at` and `now` in words, with an "ago" or
/// "in" suffix.
pub fn format_relative_time_at<Tz: TimeZone>(created_at: DateTime<Utc>, now: &DateTime<Tz>) -> String {
    let elapsed = now.with_timezone(&Utc) - created_at;
    let seconds = elapsed.num_seconds();

    let created = created_at.with_timezone(&now.timezone()).naive_local();
    let reference = now.naive_local();
    let (earlier, later) = if seconds < 0 { (reference, created) } else { (created, reference) };
    let distance = distance_in_words(seconds.unsigned_abs(), calendar_months_between(earlier, later));

    if seconds < 0 {
        format!("in {}", distance)
    } else {
        format!("{} ago", distance)
    }
}

pub fn format_post_date(created_at: DateTime<Utc>) -> String {
    format_post_date_at(created_at, &Local::now())
}

pub fn format_relative_time(created_at: DateTime<Utc>) -> String {
    format_relative_time_at(created_at, &Local::now())
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Whole calendar months from `earlier` to `later`.
fn calendar_months_between(earlier: NaiveDateTime, later: NaiveDateTime) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());
    if months > 0 {
        let reached = earlier
            .checked_add_months(Months::new(months as u32))
            .map_or(false, |d| d <= later);
        if !reached {
            months -= 1;
        }
    }
    months.max(0)
}

fn distance_in_words(seconds: u64, calendar_months: i64) -> String {
    let exact_minutes = seconds as f64 / 60.0;
    let minutes = exact_minutes.round() as i64;

    if minutes < 1 {
        return "less than a minute".to_string();
    }
    if minutes < 45 {
        return plural(minutes, "minute");
    }
    if minutes < 1440 {
        let hours = (exact_minutes / MINUTES_PER_HOUR).round() as i64;
        return format!("about {}", plural(hours, "hour"));
    }
    if minutes < 2520 {
        return "1 day".to_string();
    }
    if minutes < 43200 {
        let days = (exact_minutes / MINUTES_PER_DAY).round() as i64;
        return plural(days, "day");
    }
    if minutes < 86400 {
        let months = (exact_minutes / MINUTES_PER_MONTH).round() as i64;
        return format!("about {}", plural(months, "month"));
    }

    let months = calendar_months;
    if months < 12 {
        let nearest = (exact_minutes / MINUTES_PER_MONTH).round() as i64;
        return plural(nearest, "month");
    }

    let years = months / 12;
    match months % 12 {
        0..=2 => format!("about {}", plural(years, "year")),
        3..=8 => format!("over {}", plural(years, "year")),
        _ => format!("almost {}", plural(years + 1, "year")),
    }
}
