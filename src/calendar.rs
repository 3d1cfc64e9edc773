use crate::business_days::{business_days_in_month, classify_day, last_day_of_month, DayKind};
use crate::models::{AppData, CalendarDay, CalendarMonth};
use chrono::{Datelike, NaiveDate};

/// One entry per day of `year`-`month` with its classification and events.
/// `None` when the month does not exist.
pub fn build_month(year: i32, month: u32, data: &AppData) -> Option<CalendarMonth> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let day_offs = data.day_offs();
    let business_days = business_days_in_month(year, month, &day_offs)?;
    let last = last_day_of_month(first);

    let days = first
        .iter_days()
        .take_while(|date| *date <= last)
        .map(|date| {
            let kind = classify_day(date, &day_offs);
            let (holiday, day_off_reason) = match kind {
                DayKind::Holiday(name) => (Some(name), None),
                DayKind::DayOff => (
                    None,
                    day_offs
                        .iter()
                        .find(|day_off| day_off.date == date)
                        .and_then(|day_off| day_off.reason.clone()),
                ),
                _ => (None, None),
            };
            let events = data
                .events
                .iter()
                .filter(|event| event.date == date)
                .cloned()
                .collect();
            CalendarDay {
                date,
                kind: kind.label(),
                holiday,
                day_off_reason,
                events,
            }
        })
        .collect();

    Some(CalendarMonth {
        year: first.year(),
        month: first.month(),
        business_days,
        days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalendarEvent, EventKind};

    fn event(day: u32, kind: EventKind) -> CalendarEvent {
        CalendarEvent {
            id: format!("e{day}"),
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            title: "Vacation".to_string(),
            kind,
            notes: None,
        }
    }

    #[test]
    fn march_2025_grid() {
        let data = AppData {
            activities: Vec::new(),
            events: vec![event(10, EventKind::DayOff), event(11, EventKind::Event)],
        };
        let month = build_month(2025, 3, &data).unwrap();

        assert_eq!(month.days.len(), 31);
        // 21 weekdays, minus the wellness day and the day off.
        assert_eq!(month.business_days, 19);
        assert_eq!(month.days[0].kind, "weekend");
        assert_eq!(month.days[6].kind, "holiday");
        assert_eq!(month.days[6].holiday, Some("Monthly Wellness Day"));
        assert_eq!(month.days[9].kind, "day_off");
        assert_eq!(month.days[9].day_off_reason.as_deref(), Some("Vacation"));
        assert_eq!(month.days[10].day_off_reason, None);
        assert_eq!(month.days[10].kind, "business");
        assert_eq!(month.days[10].events.len(), 1);
    }

    #[test]
    fn invalid_month_is_none() {
        assert!(build_month(2025, 0, &AppData::default()).is_none());
    }
}
