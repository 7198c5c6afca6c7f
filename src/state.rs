use std::sync::Arc;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::repositories::ToolSource;

/// Shared handler state: where tools come from and what day it is.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ToolSource>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// State backed by `source` and the system's local date.
    pub fn new(source: Arc<dyn ToolSource>) -> Self {
        Self {
            source,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
