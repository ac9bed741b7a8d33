//! Display formatting for money, token amounts, and timestamps
//!
//! Everything here is pure string building; timestamps come in as Unix
//! milliseconds and are formatted at render time.

use chrono::DateTime;

/// Format a USD value with cents: 55000.0 -> "$55,000.00"
pub fn usd(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as i128;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Format a USD value without cents: 1.2e12 -> "$1,200,000,000,000"
pub fn usd_whole(value: f64) -> String {
    format!("${}", group_thousands(value.round() as i128))
}

/// Format a token amount: grouped thousands, at most three fraction
/// digits, trailing zeros dropped. 0.5 -> "0.5", 10000.0 -> "10,000"
pub fn amount(value: f64) -> String {
    let scaled = (value.abs() * 1000.0).round() as i128;
    let sign = if value < 0.0 && scaled > 0 { "-" } else { "" };
    let mut out = format!("{}{}", sign, group_thousands(scaled / 1000));
    let frac = (scaled % 1000) as u32;
    if frac > 0 {
        let digits = format!("{frac:03}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Format a millisecond timestamp as "Jan 15, 2025 14:30" (UTC)
pub fn date_time(ts_ms: i64) -> String {
    DateTime::from_timestamp_millis(ts_ms)
        .map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
        .unwrap_or_default()
}

/// Format how long ago a millisecond timestamp was, relative to `now_ms`
///
/// Falls back to the plain date once it is more than a month old.
pub fn time_ago(ts_ms: i64, now_ms: i64) -> String {
    let secs = (now_ms - ts_ms).max(0) / 1000;
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    if secs < 60 {
        "just now".to_string()
    } else if mins < 60 {
        plural(mins, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 30 {
        plural(days, "day")
    } else {
        DateTime::from_timestamp_millis(ts_ms)
            .map(|dt| dt.format("%b %d, %Y").to_string())
            .unwrap_or_default()
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

fn group_thousands(mut n: i128) -> String {
    let neg = n < 0;
    n = n.abs();
    let mut groups = Vec::new();
    loop {
        let chunk = n % 1000;
        n /= 1000;
        if n == 0 {
            groups.push(chunk.to_string());
            break;
        }
        groups.push(format!("{chunk:03}"));
    }
    groups.reverse();
    let joined = groups.join(",");
    if neg {
        format!("-{joined}")
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const HOUR_MS: i64 = 3_600_000;
    const DAY_MS: i64 = 24 * HOUR_MS;

    #[test]
    fn test_usd() {
        assert_eq!(usd(55_000.0), "$55,000.00");
        assert_eq!(usd(0.1), "$0.10");
        assert_eq!(usd(1_234_567.891), "$1,234,567.89");
        assert_eq!(usd(0.0), "$0.00");
        assert_eq!(usd(-42.5), "-$42.50");
    }

    #[test]
    fn test_usd_whole() {
        assert_eq!(usd_whole(1_200_000_000_000.0), "$1,200,000,000,000");
        assert_eq!(usd_whole(16_000_000_000.0), "$16,000,000,000");
        assert_eq!(usd_whole(999.4), "$999");
    }

    #[test]
    fn test_amount() {
        assert_eq!(amount(0.5), "0.5");
        assert_eq!(amount(10_000.0), "10,000");
        assert_eq!(amount(150.0), "150");
        assert_eq!(amount(0.123456), "0.123");
        assert_eq!(amount(5_000.0), "5,000");
        assert_eq!(amount(2.0), "2");
        assert_eq!(amount(60_000.25), "60,000.25");
    }

    #[test]
    fn test_date_time() {
        let ts = Utc
            .with_ymd_and_hms(2025, 1, 15, 14, 30, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(date_time(ts), "Jan 15, 2025 14:30");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc
            .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .unwrap()
            .timestamp_millis();

        assert_eq!(time_ago(now - 30_000, now), "just now");
        assert_eq!(time_ago(now - 60_000, now), "1 minute ago");
        assert_eq!(time_ago(now - 5 * 60_000, now), "5 minutes ago");
        assert_eq!(time_ago(now - HOUR_MS, now), "1 hour ago");
        assert_eq!(time_ago(now - 5 * HOUR_MS, now), "5 hours ago");
        assert_eq!(time_ago(now - 26 * HOUR_MS, now), "1 day ago");
        assert_eq!(time_ago(now - 3 * DAY_MS, now), "3 days ago");
        // future timestamps clamp to "just now"
        assert_eq!(time_ago(now + HOUR_MS, now), "just now");
    }

    #[test]
    fn test_time_ago_falls_back_to_date() {
        let ts = Utc
            .with_ymd_and_hms(2025, 1, 15, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(time_ago(ts, ts + 40 * DAY_MS), "Jan 15, 2025");
    }
}
