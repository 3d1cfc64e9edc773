use crate::dates::parse_calendar_date;
use crate::errors::AppError;
use crate::models::{Activity, ActivityQuery, AppointmentFilter};
use chrono::NaiveDate;

#[derive(Debug, Default)]
pub struct ActivityFilter {
    pub date: Option<NaiveDate>,
    pub contact: Option<String>,
    pub appointment: AppointmentFilter,
}

impl ActivityFilter {
    pub fn from_query(query: ActivityQuery) -> Result<Self, AppError> {
        let date = match query.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                parse_calendar_date(raw)
                    .ok_or_else(|| AppError::bad_request(format!("invalid date filter: {raw}")))?,
            ),
        };
        let contact = query
            .contact
            .map(|contact| contact.trim().to_lowercase())
            .filter(|contact| !contact.is_empty());

        Ok(Self {
            date,
            contact,
            appointment: query.appointment,
        })
    }

    pub fn matches(&self, activity: &Activity) -> bool {
        if self.date.is_some_and(|date| activity.date != date) {
            return false;
        }
        if let Some(needle) = &self.contact {
            if !activity.contact.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        match self.appointment {
            AppointmentFilter::All => true,
            AppointmentFilter::Yes => activity.appointment_booked,
            AppointmentFilter::No => !activity.appointment_booked,
        }
    }
}

/// Matching activities, newest date first, then most recently created.
pub fn filter_activities(activities: &[Activity], filter: &ActivityFilter) -> Vec<Activity> {
    let mut matched: Vec<Activity> = activities
        .iter()
        .filter(|activity| filter.matches(activity))
        .cloned()
        .collect();
    matched.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    matched
}
