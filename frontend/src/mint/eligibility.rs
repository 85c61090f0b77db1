//! Mint window evaluation.
//!
//! Turns the externally fetched [`CollectionData`] and the current time into
//! the status notes shown under the mint form and the submit gate.

use chrono::{DateTime, Utc};

use crate::types::CollectionData;

/// Presentation state of the mint window at a given instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintStatus {
    /// Set while the mint has not opened yet.
    pub starts_at: Option<DateTime<Utc>>,
    /// Set while a finite mint window is still open or upcoming.
    pub ends_at: Option<DateTime<Utc>>,
    /// The finite mint window is over.
    pub ended: bool,
    /// Minting is currently open.
    pub active: bool,
}

impl MintStatus {
    /// Evaluate `data` at `now`.
    ///
    /// Absent fields suppress the matching note rather than failing.
    pub fn evaluate(data: &CollectionData, now: DateTime<Utc>) -> Self {
        let infinite = data.is_mint_infinite.unwrap_or(false);

        let starts_at = data.start_date.filter(|start| now < *start);
        let finite_end = data.end_date.filter(|_| !infinite);
        let ends_at = finite_end.filter(|end| now < *end);
        let ended = finite_end.map_or(false, |end| now > end);

        let active = data.is_mint_active.unwrap_or_else(|| {
            let started = data.start_date.map_or(true, |start| now >= start);
            let total = data.total_minted.unwrap_or(0);
            let max = data.max_supply.unwrap_or(1);
            started && !ended && total < max
        });

        Self {
            starts_at,
            ends_at,
            ended,
            active,
        }
    }

    /// Mint has a start time in the future.
    pub fn not_started(&self) -> bool {
        self.starts_at.is_some()
    }

    /// Whether the Mint button is disabled.
    ///
    /// Mirrors the active flag as-is: the button is disabled exactly while
    /// minting is open. See DESIGN.md before changing this.
    pub fn submit_disabled(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn data() -> CollectionData {
        CollectionData {
            total_minted: Some(10),
            max_supply: Some(100),
            ..Default::default()
        }
    }

    #[test]
    fn test_future_start_is_not_started() {
        let data = CollectionData {
            start_date: Some(day(2099, 1, 1)),
            ..data()
        };
        let status = MintStatus::evaluate(&data, day(2024, 1, 1));

        assert!(status.not_started());
        assert_eq!(status.starts_at, Some(day(2099, 1, 1)));
        assert!(!status.ended);
        assert!(!status.active);
        assert!(!status.submit_disabled());
    }

    #[test]
    fn test_past_end_has_ended() {
        let data = CollectionData {
            start_date: Some(day(2019, 1, 1)),
            end_date: Some(day(2020, 1, 1)),
            is_mint_infinite: Some(false),
            ..data()
        };
        let status = MintStatus::evaluate(&data, day(2024, 1, 1));

        assert!(status.ended);
        assert!(!status.not_started());
        assert_eq!(status.ends_at, None);
        assert!(!status.active);
    }

    #[test]
    fn test_infinite_never_ends() {
        let data = CollectionData {
            start_date: Some(day(2019, 1, 1)),
            end_date: Some(day(2020, 1, 1)),
            is_mint_infinite: Some(true),
            ..data()
        };
        let status = MintStatus::evaluate(&data, day(2024, 1, 1));

        assert!(!status.ended);
        assert_eq!(status.ends_at, None);
        assert!(status.active);
    }

    #[test]
    fn test_open_window_shows_end_and_disables_submit() {
        let data = CollectionData {
            start_date: Some(day(2023, 1, 1)),
            end_date: Some(day(2025, 1, 1)),
            ..data()
        };
        let status = MintStatus::evaluate(&data, day(2024, 1, 1));

        assert_eq!(status.ends_at, Some(day(2025, 1, 1)));
        assert!(status.active);
        assert!(status.submit_disabled());
    }

    #[test]
    fn test_sold_out_is_inactive() {
        let data = CollectionData {
            total_minted: Some(100),
            max_supply: Some(100),
            ..Default::default()
        };
        let status = MintStatus::evaluate(&data, day(2024, 1, 1));
        assert!(!status.active);
    }

    #[test]
    fn test_external_active_flag_wins() {
        let data = CollectionData {
            start_date: Some(day(2099, 1, 1)),
            is_mint_active: Some(true),
            ..data()
        };
        let status = MintStatus::evaluate(&data, day(2024, 1, 1));
        assert!(status.active);
        assert!(status.not_started());
    }

    #[test]
    fn test_empty_data_renders_nothing() {
        let status = MintStatus::evaluate(&CollectionData::default(), day(2024, 1, 1));
        assert_eq!(status.starts_at, None);
        assert_eq!(status.ends_at, None);
        assert!(!status.ended);
    }
}
