use crate::activities::{filter_activities, ActivityFilter};
use crate::calendar::build_month;
use crate::dates::parse_calendar_date;
use crate::errors::AppError;
use crate::holidays::{holidays, Holiday};
use crate::models::{
    Activity, ActivityQuery, ActivityRequest, CalendarEvent, CalendarMonth, Department,
    EventRequest, HolidayQuery, MonthlyStats, ReferralDistribution, TodayQuery, DEPARTMENTS,
};
use crate::projection::{project_monthly_progress, MonthlyProjection};
use crate::state::AppState;
use crate::stats::{build_referrals_at, build_stats_at};
use crate::storage::commit;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Local, NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

pub async fn get_progress(
    State(state): State<AppState>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<MonthlyProjection>, AppError> {
    let today = resolve_today(&query)?;
    let data = state.data.lock().await;
    let projection = project_monthly_progress(
        &data.activities,
        &data.day_offs(),
        today,
        state.settings.monthly_goal,
    );
    debug!(%today, ?projection, "monthly projection");
    Ok(Json(projection))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<MonthlyStats>, AppError> {
    let today = resolve_today(&query)?;
    let data = state.data.lock().await;
    Ok(Json(build_stats_at(today, &data, state.settings.payments)))
}

pub async fn get_referrals(
    State(state): State<AppState>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<ReferralDistribution>, AppError> {
    let today = resolve_today(&query)?;
    let data = state.data.lock().await;
    Ok(Json(build_referrals_at(today, &data, state.settings.payments)))
}

pub async fn list_activities(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<Vec<Activity>>, AppError> {
    let filter = ActivityFilter::from_query(query)?;
    let data = state.data.lock().await;
    Ok(Json(filter_activities(&data.activities, &filter)))
}

pub async fn create_activity(
    State(state): State<AppState>,
    Json(payload): Json<ActivityRequest>,
) -> Result<(StatusCode, Json<Activity>), AppError> {
    let contact = required(&payload.contact, "contact")?;
    let now = Utc::now().to_rfc3339();
    let activity = Activity {
        id: Uuid::new_v4().to_string(),
        date: payload.date,
        contact,
        connected_with: payload.connected_with.trim().to_string(),
        appointment_booked: payload.appointment_booked,
        notes: payload.notes,
        created_at: now.clone(),
        updated_at: now,
    };

    let mut data = state.data.lock().await;
    let mut next = data.clone();
    next.activities.push(activity.clone());
    commit(&state.settings.data_path, &mut data, next).await?;

    info!(id = %activity.id, date = %activity.date, "activity logged");
    Ok((StatusCode::CREATED, Json(activity)))
}

pub async fn update_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ActivityRequest>,
) -> Result<Json<Activity>, AppError> {
    let contact = required(&payload.contact, "contact")?;
    let mut data = state.data.lock().await;
    let mut next = data.clone();
    let activity = next
        .activities
        .iter_mut()
        .find(|activity| activity.id == id)
        .ok_or_else(|| AppError::not_found(format!("activity {id} not found")))?;
    activity.date = payload.date;
    activity.contact = contact;
    activity.connected_with = payload.connected_with.trim().to_string();
    activity.appointment_booked = payload.appointment_booked;
    activity.notes = payload.notes;
    activity.updated_at = Utc::now().to_rfc3339();
    let updated = activity.clone();

    commit(&state.settings.data_path, &mut data, next).await?;

    info!(id = %updated.id, "activity updated");
    Ok(Json(updated))
}

pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if !data.activities.iter().any(|activity| activity.id == id) {
        return Err(AppError::not_found(format!("activity {id} not found")));
    }
    let mut next = data.clone();
    next.activities.retain(|activity| activity.id != id);
    commit(&state.settings.data_path, &mut data, next).await?;

    info!(%id, "activity deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_events(State(state): State<AppState>) -> Json<Vec<CalendarEvent>> {
    let data = state.data.lock().await;
    let mut events = data.events.clone();
    events.sort_by(|a, b| a.date.cmp(&b.date));
    Json(events)
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<EventRequest>,
) -> Result<(StatusCode, Json<CalendarEvent>), AppError> {
    let event = CalendarEvent {
        id: Uuid::new_v4().to_string(),
        date: payload.date,
        title: required(&payload.title, "title")?,
        kind: payload.kind,
        notes: payload.notes,
    };

    let mut data = state.data.lock().await;
    let mut next = data.clone();
    next.events.push(event.clone());
    commit(&state.settings.data_path, &mut data, next).await?;

    info!(id = %event.id, date = %event.date, kind = ?event.kind, "calendar event added");
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EventRequest>,
) -> Result<Json<CalendarEvent>, AppError> {
    let title = required(&payload.title, "title")?;
    let mut data = state.data.lock().await;
    let mut next = data.clone();
    let event = next
        .events
        .iter_mut()
        .find(|event| event.id == id)
        .ok_or_else(|| AppError::not_found(format!("event {id} not found")))?;
    event.date = payload.date;
    event.title = title;
    event.kind = payload.kind;
    event.notes = payload.notes;
    let updated = event.clone();

    commit(&state.settings.data_path, &mut data, next).await?;

    info!(id = %updated.id, kind = ?updated.kind, "calendar event updated");
    Ok(Json(updated))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if !data.events.iter().any(|event| event.id == id) {
        return Err(AppError::not_found(format!("event {id} not found")));
    }
    let mut next = data.clone();
    next.events.retain(|event| event.id != id);
    commit(&state.settings.data_path, &mut data, next).await?;

    info!(%id, "calendar event deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_calendar_month(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<CalendarMonth>, AppError> {
    let data = state.data.lock().await;
    build_month(year, month, &data)
        .map(Json)
        .ok_or_else(|| AppError::bad_request(format!("invalid month: {year}-{month}")))
}

pub async fn get_holidays(Query(query): Query<HolidayQuery>) -> Json<Vec<Holiday>> {
    Json(holidays(query.year))
}

pub async fn get_team() -> Json<&'static [Department]> {
    Json(DEPARTMENTS)
}

fn resolve_today(query: &TodayQuery) -> Result<NaiveDate, AppError> {
    match query.today.as_deref() {
        None => Ok(Local::now().date_naive()),
        Some(raw) => parse_calendar_date(raw)
            .ok_or_else(|| AppError::bad_request(format!("invalid date: {raw}"))),
    }
}

fn required(value: &str, field: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::bad_request(format!("{field} must not be empty")));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::AppData;
    use std::path::PathBuf;

    fn unwritable_state(name: &str, data: AppData) -> (AppState, PathBuf) {
        let mut dir = std::env::temp_dir();
        dir.push(format!("sal_tracker_handlers_{}_{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let settings = Settings {
            data_path: dir.clone(),
            ..Settings::default()
        };
        (AppState::new(settings, data), dir)
    }

    fn request(date: &str) -> ActivityRequest {
        ActivityRequest {
            date: parse_calendar_date(date).unwrap(),
            contact: "John Doe".to_string(),
            connected_with: "Matt".to_string(),
            appointment_booked: false,
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn failed_save_does_not_log_activity() {
        let (state, dir) = unwritable_state("create", AppData::default());

        let result = create_activity(State(state.clone()), Json(request("2025-03-03"))).await;
        let err = result.expect_err("save into a directory must fail");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let Json(listed) = list_activities(State(state.clone()), Query(ActivityQuery::default()))
            .await
            .unwrap();
        assert!(listed.is_empty());

        let today = TodayQuery {
            today: Some("2025-03-03".to_string()),
        };
        let Json(progress) = get_progress(State(state), Query(today)).await.unwrap();
        assert_eq!(progress.completed_count, 0);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn failed_save_keeps_deleted_event() {
        let mut data = AppData::default();
        data.events.push(CalendarEvent {
            id: "e1".to_string(),
            date: parse_calendar_date("2025-03-10").unwrap(),
            title: "Vacation".to_string(),
            kind: crate::models::EventKind::DayOff,
            notes: None,
        });
        let (state, dir) = unwritable_state("delete", data);

        let result = delete_event(State(state.clone()), Path("e1".to_string())).await;
        assert!(result.is_err());

        let Json(events) = list_events(State(state)).await;
        assert_eq!(events.len(), 1);
        let _ = std::fs::remove_dir_all(dir);
    }
}
