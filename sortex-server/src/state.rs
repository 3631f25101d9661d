use std::fmt;
use std::sync::Arc;

use sortex_core::FleetUnitOfWork;

use crate::config::Config;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub unit_of_work: Arc<FleetUnitOfWork>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(unit_of_work: Arc<FleetUnitOfWork>, config: Arc<Config>) -> Self {
        Self {
            unit_of_work,
            config,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
