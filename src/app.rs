use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/referrals", get(handlers::get_referrals))
        .route(
            "/api/activities",
            get(handlers::list_activities).post(handlers::create_activity),
        )
        .route(
            "/api/activities/:id",
            put(handlers::update_activity).delete(handlers::delete_activity),
        )
        .route(
            "/api/events",
            get(handlers::list_events).post(handlers::create_event),
        )
        .route(
            "/api/events/:id",
            put(handlers::update_event).delete(handlers::delete_event),
        )
        .route("/api/calendar/:year/:month", get(handlers::get_calendar_month))
        .route("/api/holidays", get(handlers::get_holidays))
        .route("/api/team", get(handlers::get_team))
        .with_state(state)
}
