use crate::business_days::count_remaining_business_days;
use crate::models::{Activity, DayOff};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    pub completed_count: u64,
    pub goal: i64,
    pub remaining_working_days: u32,
    pub sal_needed: u64,
    pub daily_target: u64,
    pub goal_met: bool,
    pub progress_percent: f64,
}

pub fn same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}

/// Progress toward `monthly_goal` for the month containing `today`.
pub fn project_monthly_progress(
    activities: &[Activity],
    day_offs: &[DayOff],
    today: NaiveDate,
    monthly_goal: i64,
) -> MonthlyProjection {
    let completed_count = activities
        .iter()
        .filter(|activity| same_month(activity.date, today))
        .count() as u64;
    let remaining_working_days = count_remaining_business_days(today, day_offs);

    let completed = i64::try_from(completed_count).unwrap_or(i64::MAX);
    let sal_needed = monthly_goal.saturating_sub(completed).max(0) as u64;
    let daily_target = if remaining_working_days > 0 {
        sal_needed.div_ceil(u64::from(remaining_working_days))
    } else {
        0
    };

    let progress_percent = if monthly_goal <= 0 {
        100.0
    } else {
        (completed_count as f64 / monthly_goal as f64 * 100.0).min(100.0)
    };

    MonthlyProjection {
        completed_count,
        goal: monthly_goal,
        remaining_working_days,
        sal_needed,
        daily_target,
        goal_met: completed >= monthly_goal,
        progress_percent,
    }
}
