use crate::holidays::holiday_on;
use crate::models::DayOff;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Weekend,
    Holiday(&'static str),
    DayOff,
    Business,
}

impl DayKind {
    pub fn label(self) -> &'static str {
        match self {
            DayKind::Weekend => "weekend",
            DayKind::Holiday(_) => "holiday",
            DayKind::DayOff => "day_off",
            DayKind::Business => "business",
        }
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Weekend wins over holiday, holiday over a declared day off.
pub fn classify_day(date: NaiveDate, day_offs: &[DayOff]) -> DayKind {
    if is_weekend(date) {
        return DayKind::Weekend;
    }
    if let Some(name) = holiday_on(date) {
        return DayKind::Holiday(name);
    }
    if day_offs.iter().any(|day_off| day_off.date == date) {
        return DayKind::DayOff;
    }
    DayKind::Business
}

pub fn is_business_day(date: NaiveDate, day_offs: &[DayOff]) -> bool {
    classify_day(date, day_offs) == DayKind::Business
}

pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Business days from `start` through the end of its month, both inclusive.
pub fn count_remaining_business_days(start: NaiveDate, day_offs: &[DayOff]) -> u32 {
    count_business_days_between(start, last_day_of_month(start), day_offs)
}

/// Business days in a whole month; `None` when year/month is not a real month.
pub fn business_days_in_month(year: i32, month: u32, day_offs: &[DayOff]) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(count_remaining_business_days(first, day_offs))
}

fn count_business_days_between(start: NaiveDate, end: NaiveDate, day_offs: &[DayOff]) -> u32 {
    if start > end {
        return 0;
    }
    let span = (end - start).num_days();
    (0..=span)
        .map(|offset| start + Duration::days(offset))
        .filter(|date| is_business_day(*date, day_offs))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn weekends_are_never_business_days() {
        let saturday = ymd(2025, 3, 8);
        let sunday = ymd(2025, 3, 9);
        let day_offs = vec![DayOff::new(saturday)];
        assert!(!is_business_day(saturday, &day_offs));
        assert!(!is_business_day(sunday, &[]));
        assert_eq!(classify_day(saturday, &day_offs), DayKind::Weekend);
    }

    #[test]
    fn holidays_are_not_business_days() {
        let wellness = ymd(2025, 3, 7);
        assert!(!is_business_day(wellness, &[]));
        assert_eq!(
            classify_day(wellness, &[]),
            DayKind::Holiday("Monthly Wellness Day")
        );
    }

    #[test]
    fn declared_day_off_blocks_a_weekday() {
        let monday = ymd(2025, 3, 10);
        assert!(is_business_day(monday, &[]));
        assert!(!is_business_day(monday, &[DayOff::new(monday)]));
    }

    #[test]
    fn unknown_years_fall_back_to_weekends_and_day_offs() {
        // 2030-12-25 is a Wednesday; the table has no 2030 rows.
        assert!(is_business_day(ymd(2030, 12, 25), &[]));
    }

    #[test]
    fn remaining_days_in_march_2025() {
        // Weekdays Mar 3..31: 21, minus Mar 7.
        assert_eq!(count_remaining_business_days(ymd(2025, 3, 3), &[]), 20);
    }

    #[test]
    fn day_off_reduces_count_by_one() {
        let start = ymd(2025, 3, 3);
        let without = count_remaining_business_days(start, &[]);
        let with = count_remaining_business_days(start, &[DayOff::new(ymd(2025, 3, 10))]);
        assert_eq!(without - with, 1);
    }

    #[test]
    fn day_off_before_start_is_ignored() {
        let start = ymd(2025, 3, 12);
        let day_offs = vec![DayOff::new(ymd(2025, 3, 10))];
        assert_eq!(
            count_remaining_business_days(start, &day_offs),
            count_remaining_business_days(start, &[])
        );
    }

    #[test]
    fn last_business_day_of_month_counts_itself() {
        // 2025-03-31 is a Monday.
        assert_eq!(count_remaining_business_days(ymd(2025, 3, 31), &[]), 1);
        // 2025-05-31 is a Saturday.
        assert_eq!(count_remaining_business_days(ymd(2025, 5, 31), &[]), 0);
    }

    #[test]
    fn count_never_exceeds_raw_day_span() {
        for day in 1..=31 {
            let start = ymd(2025, 12, day);
            let raw = (last_day_of_month(start) - start).num_days() as u32 + 1;
            assert!(count_remaining_business_days(start, &[]) <= raw);
        }
    }

    #[test]
    fn month_ends() {
        assert_eq!(last_day_of_month(ymd(2024, 2, 10)), ymd(2024, 2, 29));
        assert_eq!(last_day_of_month(ymd(2025, 12, 1)), ymd(2025, 12, 31));
    }

    #[test]
    fn whole_month_counts() {
        // 23 weekdays in Dec 2025, minus Christmas Eve and Christmas Day.
        assert_eq!(business_days_in_month(2025, 12, &[]), Some(21));
        assert_eq!(business_days_in_month(2025, 13, &[]), None);
    }
}
