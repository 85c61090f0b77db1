//! Display helpers for addresses, counts and dates.

use chrono::{DateTime, Timelike, Utc};

/// Upper bound for displayed counts.
pub const CLAMP_MAX: u64 = 1_000_000_000;

/// Values above this switch to compact notation.
const COMPACT_THRESHOLD: u64 = 1_000_000;

/// `0x1234...cdef` style shortening.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Clamp a count into `[0, CLAMP_MAX]` and format it for display.
pub fn clamp_number(value: u64) -> String {
    let value = value.min(CLAMP_MAX);
    if value < COMPACT_THRESHOLD {
        return group_thousands(value);
    }

    let (scaled, suffix) = if value >= 1_000_000_000 {
        (value as f64 / 1_000_000_000.0, "B")
    } else {
        (value as f64 / 1_000_000.0, "M")
    };
    let text = format!("{:.1}", (scaled * 10.0).floor() / 10.0);
    format!("{}{}", text.trim_end_matches(".0"), suffix)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Date only at UTC midnight, date and time otherwise.
pub fn format_date(date: &DateTime<Utc>) -> String {
    if date.hour() == 0 && date.minute() == 0 && date.second() == 0 {
        date.format("%Y-%m-%d").to_string()
    } else {
        date.format("%Y-%m-%d %H:%M UTC").to_string()
    }
}

/// Minted share as a percentage in `[0, 100]`.
pub fn minted_progress(total_minted: u64, max_supply: u64) -> f64 {
    let max = max_supply.max(1) as f64;
    (total_minted as f64 / max * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_address() {
        assert_eq!(
            truncate_address("0x8b7a6a2b6de1b1a1e2a8bc2d9e3a3c2b7f94ec0b2fd2fbd1e9d1bc3c43d5f7a1"),
            "0x8b7a...f7a1"
        );
        assert_eq!(truncate_address("0x1234"), "0x1234");
        assert_eq!(truncate_address(""), "");
    }

    #[test]
    fn test_clamp_number() {
        assert_eq!(clamp_number(0), "0");
        assert_eq!(clamp_number(999), "999");
        assert_eq!(clamp_number(12_345), "12,345");
        assert_eq!(clamp_number(999_999), "999,999");
        assert_eq!(clamp_number(1_250_000), "1.2M");
        assert_eq!(clamp_number(3_000_000), "3M");
        assert_eq!(clamp_number(u64::MAX), "1B");
    }

    #[test]
    fn test_format_date() {
        let midnight = Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_date(&midnight), "2099-01-01");

        let afternoon = Utc.with_ymd_and_hms(2024, 6, 3, 14, 30, 0).unwrap();
        assert_eq!(format_date(&afternoon), "2024-06-03 14:30 UTC");
    }

    #[test]
    fn test_minted_progress() {
        assert_eq!(minted_progress(25, 100), 25.0);
        assert_eq!(minted_progress(5, 0), 100.0);
        assert_eq!(minted_progress(0, 0), 0.0);
        assert_eq!(minted_progress(200, 100), 100.0);
    }
}
