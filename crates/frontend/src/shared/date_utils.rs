//! Utilities for date and time formatting
//!
//! Timestamps are shown in Vietnam time (UTC+7) using the vi-VN layout
//! `HH:MM:SS D/M/YYYY`.
use chrono::{DateTime, Duration, Utc};

use super::display::NOT_AVAILABLE;

const VIETNAM_UTC_OFFSET_HOURS: i64 = 7;

/// Format a UTC timestamp as vi-VN date-time
/// Example: 2024-03-15T07:02:26Z -> "14:02:26 15/3/2024"
pub fn format_datetime_vi(dt: &DateTime<Utc>) -> String {
    let local = dt.naive_utc() + Duration::hours(VIETNAM_UTC_OFFSET_HOURS);
    local.format("%H:%M:%S %-d/%-m/%Y").to_string()
}

/// Same as [`format_datetime_vi`], with "N/A" for a missing timestamp
pub fn format_datetime_vi_opt(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(format_datetime_vi)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
