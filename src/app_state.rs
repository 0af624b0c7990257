use std::sync::Arc;

use crate::classify::PushClassifier;
use crate::collaborators::{QueueCollector, TableStore};
use crate::config::HookConfig;
use crate::dispatch::DispatchEngine;

pub struct AppState {
    engine: DispatchEngine,
}

impl AppState {
    pub fn new(
        config: &HookConfig,
        queue: Arc<dyn QueueCollector>,
        table: Arc<dyn TableStore>,
    ) -> Self {
        Self {
            engine: DispatchEngine::new(PushClassifier::from_config(config), queue, table),
        }
    }

    pub fn engine(&self) -> &DispatchEngine {
        &self.engine
    }
}
