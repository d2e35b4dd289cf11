//! InMemorySink - テスト用の EventSink

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::TrackEvent;
use crate::ports::{EventSink, SinkError};

#[derive(Debug, Default)]
pub struct InMemorySink {
    events: Mutex<Vec<TrackEvent>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TrackEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl EventSink for InMemorySink {
    async fn emit(&self, event: TrackEvent) -> Result<(), SinkError> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
        Ok(())
    }
}
