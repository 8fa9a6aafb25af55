use std::sync::Arc;

use crate::application::services::RelayService;

#[derive(Clone)]
pub struct AppState {
    pub relay_service: Arc<RelayService>,
}

impl AppState {
    pub fn new(relay_service: Arc<RelayService>) -> Self {
        Self { relay_service }
    }
}
