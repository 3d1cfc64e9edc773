use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: &'static str,
}

/// (year, month, day, name). Adding a year means appending rows here.
const HOLIDAY_TABLE: &[(i32, u32, u32, &str)] = &[
    (2024, 1, 1, "New Year's Day"),
    (2024, 1, 15, "Martin Luther King Day"),
    (2024, 3, 8, "Monthly Wellness Day"),
    (2024, 4, 19, "Spring Holiday"),
    (2024, 5, 27, "Memorial Day"),
    (2024, 6, 19, "Juneteenth"),
    (2024, 7, 4, "Independence Day"),
    (2024, 9, 2, "Labor Day"),
    (2024, 10, 14, "US Wellness Day"),
    (2024, 11, 11, "Veterans Day"),
    (2024, 11, 28, "US Thanksgiving Day"),
    (2024, 11, 29, "Day After Thanksgiving"),
    (2024, 12, 24, "Christmas Eve"),
    (2024, 12, 25, "Christmas Day"),
    (2025, 1, 1, "New Year's Day"),
    (2025, 1, 20, "Martin Luther King Day"),
    (2025, 3, 7, "Monthly Wellness Day"),
    (2025, 4, 18, "Spring Holiday"),
    (2025, 5, 26, "Memorial Day"),
    (2025, 6, 19, "Juneteenth"),
    (2025, 7, 4, "Independence Day"),
    (2025, 9, 1, "Labor Day"),
    (2025, 10, 13, "US Wellness Day"),
    (2025, 11, 11, "Veterans Day"),
    (2025, 11, 27, "US Thanksgiving Day"),
    (2025, 11, 28, "Day After Thanksgiving"),
    (2025, 12, 24, "Christmas Eve"),
    (2025, 12, 25, "Christmas Day"),
];

/// Name of the holiday falling on `date`, if any. Years missing from the
/// table simply have no holidays.
pub fn holiday_on(date: NaiveDate) -> Option<&'static str> {
    let (year, month, day) = (date.year(), date.month(), date.day());
    HOLIDAY_TABLE
        .iter()
        .find(|(y, m, d, _)| *y == year && *m == month && *d == day)
        .map(|(_, _, _, name)| *name)
}

/// All holidays, or only those of `year` when given.
pub fn holidays(year: Option<i32>) -> Vec<Holiday> {
    HOLIDAY_TABLE
        .iter()
        .filter(|(y, ..)| year.is_none_or(|wanted| wanted == *y))
        .filter_map(|&(y, m, d, name)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| Holiday { date, name })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wellness_day_is_a_holiday() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(holiday_on(date), Some("Monthly Wellness Day"));
    }

    #[test]
    fn unknown_year_has_no_holidays() {
        let date = NaiveDate::from_ymd_opt(2031, 12, 25).unwrap();
        assert_eq!(holiday_on(date), None);
        assert!(holidays(Some(2031)).is_empty());
    }

    #[test]
    fn table_rows_are_valid_dates() {
        assert_eq!(holidays(None).len(), HOLIDAY_TABLE.len());
        assert_eq!(holidays(Some(2025)).len(), 14);
    }

    #[test]
    fn juneteenth_2024_is_observed_on_the_nineteenth() {
        let nineteenth = NaiveDate::from_ymd_opt(2024, 6, 19).unwrap();
        let twenty_third = NaiveDate::from_ymd_opt(2024, 6, 23).unwrap();
        assert_eq!(holiday_on(nineteenth), Some("Juneteenth"));
        assert_eq!(holiday_on(twenty_third), None);
    }
}
