use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

/// Splits an attendance timestamp into the date and time labels shown in
/// the roster, e.g. `("Jan 5, 2025", "10:30 AM")`.
pub fn format_attended_at(at: DateTime<Utc>, tz: Tz) -> (String, String) {
    let local = at.with_timezone(&tz);
    (
        local.format("%b %-d, %Y").to_string(),
        local.format("%I:%M %p").to_string(),
    )
}
