//! TrackingEnv - tracking に必要な依存をまとめたもの
//!
//! DecisionModel が保持し、生成した CoreDecision ごとに clone して渡します。
//! 中身はすべて Arc なので clone は安価です。

use std::sync::Arc;

use tracing::info;

use crate::domain::{DecisionError, DecisionId, ModelName, RewardEvent, TrackEvent};
use crate::ports::{Clock, IdGenerator, Tracker};

/// decision event に含める runners-up の既定上限
pub const DEFAULT_MAX_RUNNERS_UP: usize = 50;

#[derive(Clone)]
pub(crate) struct TrackingEnv {
    pub(crate) tracker: Option<Arc<dyn Tracker>>,
    pub(crate) id_generator: Arc<dyn IdGenerator>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) max_runners_up: usize,
}

impl TrackingEnv {
    pub(crate) fn tracker(&self, model: &ModelName) -> Result<&Arc<dyn Tracker>, DecisionError> {
        self.tracker
            .as_ref()
            .ok_or_else(|| DecisionError::TrackerNotConfigured(model.to_string()))
    }

    /// 追跡済みの decision_id に reward event を送る
    pub(crate) fn emit_reward(
        &self,
        model: &ModelName,
        decision_id: DecisionId,
        reward: f64,
    ) -> Result<(), DecisionError> {
        if !reward.is_finite() {
            return Err(DecisionError::InvalidReward(reward));
        }
        let tracker = self.tracker(model)?;
        let event = RewardEvent {
            message_id: self.id_generator.generate_message_id(),
            decision_id,
            model: model.clone(),
            timestamp: self.clock.now(),
            reward,
        };
        tracker.track(TrackEvent::Reward(event))?;
        info!(model = %model, decision_id = %decision_id, reward, "reward added");
        Ok(())
    }
}
