use crate::config::Settings;
use crate::models::AppData;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(settings: Settings, data: AppData) -> Self {
        Self {
            settings: Arc::new(settings),
            data: Arc::new(Mutex::new(data)),
        }
    }
}
