use crate::dates::deserialize_calendar_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    pub contact: String,
    #[serde(default)]
    pub connected_with: String,
    #[serde(default)]
    pub appointment_booked: bool,
    #[serde(default)]
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Event,
    DayOff,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: String,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    pub title: String,
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A declared non-working date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOff {
    pub date: NaiveDate,
    pub reason: Option<String>,
}

impl DayOff {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, reason: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

impl AppData {
    /// Days off declared through `day_off` calendar events.
    pub fn day_offs(&self) -> Vec<DayOff> {
        self.events
            .iter()
            .filter(|event| event.kind == EventKind::DayOff)
            .map(|event| DayOff {
                date: event.date,
                reason: event.notes.clone().or_else(|| Some(event.title.clone())),
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct ActivityRequest {
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    pub contact: String,
    #[serde(default)]
    pub connected_with: String,
    #[serde(default)]
    pub appointment_booked: bool,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct EventRequest {
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    pub title: String,
    pub kind: EventKind,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentFilter {
    #[default]
    All,
    Yes,
    No,
}

#[derive(Debug, Default, Deserialize)]
pub struct ActivityQuery {
    pub date: Option<String>,
    pub contact: Option<String>,
    #[serde(default)]
    pub appointment: AppointmentFilter,
}

#[derive(Debug, Default, Deserialize)]
pub struct TodayQuery {
    pub today: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HolidayQuery {
    pub year: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MonthlyStats {
    pub month: String,
    pub total_sals: u64,
    pub total_appointments: u64,
    pub referral_revenue: u64,
    pub appointment_revenue: u64,
    pub monthly_earnings: u64,
    pub average_revenue_per_activity: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MemberShare {
    pub name: String,
    pub referrals: u64,
    pub appointments: u64,
    pub percent: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ReferralDistribution {
    pub month: String,
    pub total_referrals: u64,
    pub total_revenue: u64,
    pub members: Vec<MemberShare>,
}

#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_off_reason: Option<String>,
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub business_days: u32,
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Serialize)]
pub struct Department {
    pub name: &'static str,
    pub experts: &'static [&'static str],
}

pub const DEPARTMENTS: &[Department] = &[
    Department {
        name: "MemberClicks",
        experts: &["Rory", "Cam"],
    },
    Department {
        name: "A2Z Events",
        experts: &["Jeff", "Jon"],
    },
    Department {
        name: "RegTech (GTR)",
        experts: &["Matt"],
    },
    Department {
        name: "Add-ons and Extensions",
        experts: &["Cindy", "Haley"],
    },
    Department {
        name: "WildApricot",
        experts: &["Ben"],
    },
];
