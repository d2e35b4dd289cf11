//! InMemoryTracker - 開発用・テスト用の Tracker
//!
//! 受け取ったイベントを順番通りに保持するだけです。集計はしません。

use std::sync::Mutex;

use crate::domain::{DecisionEvent, RewardEvent, TrackEvent};
use crate::ports::{TrackError, Tracker};

#[derive(Debug, Default)]
pub struct InMemoryTracker {
    events: Mutex<Vec<TrackEvent>>,
}

impl InMemoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 受け取った順のイベント
    pub fn events(&self) -> Vec<TrackEvent> {
        self.lock().clone()
    }

    pub fn decisions(&self) -> Vec<DecisionEvent> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                TrackEvent::Decision(d) => Some(d.clone()),
                TrackEvent::Reward(_) => None,
            })
            .collect()
    }

    pub fn rewards(&self) -> Vec<RewardEvent> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                TrackEvent::Reward(r) => Some(r.clone()),
                TrackEvent::Decision(_) => None,
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<TrackEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Tracker for InMemoryTracker {
    fn track(&self, event: TrackEvent) -> Result<(), TrackError> {
        self.lock().push(event);
        Ok(())
    }
}
