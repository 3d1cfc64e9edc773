pub mod activities;
pub mod app;
pub mod business_days;
pub mod calendar;
pub mod config;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod holidays;
pub mod models;
pub mod projection;
pub mod state;
pub mod stats;
pub mod storage;

pub use app::router;
pub use business_days::{count_remaining_business_days, is_business_day};
pub use config::Settings;
pub use projection::{project_monthly_progress, MonthlyProjection};
pub use state::AppState;
pub use storage::load_data;
