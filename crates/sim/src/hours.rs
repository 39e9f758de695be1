//! The business-hours gate: a pure predicate over a fixed timezone.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Timelike, Utc};

/// Opening and closing hours in a fixed UTC offset, as a half-open interval:
/// the shop is open when `open_hour <= local_hour < close_hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    open_hour: u32,
    close_hour: u32,
    offset: FixedOffset,
}

impl BusinessHours {
    pub fn new(open_hour: u32, close_hour: u32, offset: FixedOffset) -> Self {
        Self {
            open_hour,
            close_hour,
            offset,
        }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Local calendar date of `t`, used as the business date for balances.
    pub fn business_date(&self, t: DateTime<Utc>) -> chrono::NaiveDate {
        t.with_timezone(&self.offset).date_naive()
    }

    /// Whether the shop is open at `t`.
    pub fn is_open(&self, t: DateTime<Utc>) -> bool {
        let hour = t.with_timezone(&self.offset).hour();
        self.open_hour <= hour && hour < self.close_hour
    }

    /// The next opening instant strictly relevant to a closed `t`: today's
    /// opening if it is still ahead, otherwise tomorrow's.
    pub fn next_opening(&self, t: DateTime<Utc>) -> DateTime<Utc> {
        let local = t.with_timezone(&self.offset);
        let date = if local.hour() < self.open_hour {
            local.date_naive()
        } else {
            local.date_naive() + Duration::days(1)
        };
        date.and_hms_opt(self.open_hour, 0, 0)
            .and_then(|naive| self.offset.from_local_datetime(&naive).single())
            .map(|opening| opening.with_timezone(&Utc))
            .unwrap_or(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn eastern() -> BusinessHours {
        BusinessHours::new(7, 19, FixedOffset::west_opt(5 * 3600).unwrap())
    }

    fn at_utc(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 12, h, m, 0).unwrap()
    }

    #[test]
    fn open_interval_is_half_open() {
        // 12:00 UTC = 07:00 local: first open minute.
        assert!(eastern().is_open(at_utc(12, 0)));
        // 11:59 UTC = 06:59 local: still closed.
        assert!(!eastern().is_open(at_utc(11, 59)));
        // 24:00 UTC = 19:00 local: closed again (exclusive bound).
        assert!(!eastern().is_open(at_utc(23, 59) + Duration::minutes(1)));
        assert!(eastern().is_open(at_utc(23, 59)));
    }

    #[test]
    fn next_opening_before_open_is_same_day() {
        let next = eastern().next_opening(at_utc(9, 30)); // 04:30 local
        assert_eq!(next, at_utc(12, 0));
    }

    #[test]
    fn next_opening_after_close_is_next_day() {
        let late = Utc.with_ymd_and_hms(2026, 8, 13, 1, 0, 0).unwrap(); // 20:00 local Aug 12
        let next = eastern().next_opening(late);
        assert_eq!(next, Utc.with_ymd_and_hms(2026, 8, 13, 12, 0, 0).unwrap());
    }

    #[test]
    fn business_date_follows_local_clock() {
        // 03:00 UTC on the 13th is still the 12th locally.
        let t = Utc.with_ymd_and_hms(2026, 8, 13, 3, 0, 0).unwrap();
        assert_eq!(
            eastern().business_date(t),
            chrono::NaiveDate::from_ymd_opt(2026, 8, 12).unwrap()
        );
    }

    proptest! {
        /// Property: is_open(t) iff OPEN <= local hour < CLOSE.
        #[test]
        fn is_open_matches_definition(secs in 0i64..=(4 * 365 * 24 * 3600)) {
            let t = Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap();
            let hours = eastern();
            let local_hour = t.with_timezone(&hours.offset()).hour();
            prop_assert_eq!(hours.is_open(t), (7..19).contains(&local_hour));
        }

        /// Property: the next opening is strictly in the future and lands
        /// exactly on the opening hour.
        #[test]
        fn next_opening_lands_on_open_hour(secs in 0i64..=(4 * 365 * 24 * 3600)) {
            let t = Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap();
            let hours = eastern();
            let next = hours.next_opening(t);
            let local = next.with_timezone(&hours.offset());
            prop_assert!(next > t);
            prop_assert_eq!(local.hour(), 7);
            prop_assert_eq!((local.minute(), local.second()), (0, 0));
        }
    }
}
