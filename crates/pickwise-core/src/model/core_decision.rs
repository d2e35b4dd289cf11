//! CoreDecision - DecisionCore の標準実装
//!
//! encode 済みの variant と Ranking を保持し、tracking と reward を
//! TrackingEnv 経由で Tracker に送ります。
//!
//! # One-shot ID
//! - `track()` の最初の成功だけが ID を確定させる（Mutex で保護）
//! - Tracker が失敗した場合、ID は未設定のまま（再試行できる）
//! - 2 回目以降の `track()` は同じ ID を返し、イベントは送らない

use std::sync::{Mutex, MutexGuard};

use rand::seq::SliceRandom;
use serde_json::Value;
use tracing::{debug, info};

use super::tracking::TrackingEnv;
use crate::domain::{
    DecisionError, DecisionEvent, DecisionId, Givens, ModelName, Ranking, TrackEvent,
};
use crate::ports::DecisionCore;

pub struct CoreDecision {
    model: ModelName,
    variants: Vec<Value>,
    givens: Option<Givens>,
    ranking: Ranking,
    id: Mutex<Option<DecisionId>>,
    env: TrackingEnv,
}

impl CoreDecision {
    pub(crate) fn new(
        model: ModelName,
        variants: Vec<Value>,
        givens: Option<Givens>,
        ranking: Ranking,
        env: TrackingEnv,
    ) -> Self {
        debug_assert_eq!(variants.len(), ranking.len());
        Self {
            model,
            variants,
            givens,
            ranking,
            id: Mutex::new(None),
            env,
        }
    }

    pub fn model(&self) -> &ModelName {
        &self.model
    }

    fn lock_id(&self) -> MutexGuard<'_, Option<DecisionId>> {
        // Option<DecisionId> は panic で壊れないので poison は無視してよい
        self.id.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn decision_event(&self, decision_id: DecisionId) -> DecisionEvent {
        let positions = self.ranking.positions();
        let runner_count = self.env.max_runners_up.min(positions.len() - 1);
        let runners_up = positions[1..=runner_count]
            .iter()
            .map(|&i| self.variants[i].clone())
            .collect();
        let sample = positions[1 + runner_count..]
            .choose(&mut rand::thread_rng())
            .map(|&i| self.variants[i].clone());

        DecisionEvent {
            message_id: self.env.id_generator.generate_message_id(),
            decision_id,
            model: self.model.clone(),
            timestamp: self.env.clock.now(),
            variant: self.variants[self.ranking.best()].clone(),
            count: self.variants.len(),
            givens: self.givens.clone(),
            runners_up,
            sample,
        }
    }
}

impl DecisionCore for CoreDecision {
    fn variants(&self) -> &[Value] {
        &self.variants
    }

    fn ranked_positions(&self) -> &[usize] {
        self.ranking.positions()
    }

    fn givens(&self) -> Option<&Givens> {
        self.givens.as_ref()
    }

    fn id(&self) -> Option<DecisionId> {
        *self.lock_id()
    }

    fn track(&self) -> Result<DecisionId, DecisionError> {
        let mut id = self.lock_id();
        if let Some(existing) = *id {
            debug!(model = %self.model, decision_id = %existing, "decision already tracked");
            return Ok(existing);
        }

        let tracker = self.env.tracker(&self.model)?;
        let decision_id = self.env.id_generator.generate_decision_id();
        tracker.track(TrackEvent::Decision(self.decision_event(decision_id)))?;
        *id = Some(decision_id);

        info!(
            model = %self.model,
            decision_id = %decision_id,
            count = self.variants.len(),
            "decision tracked"
        );
        Ok(decision_id)
    }

    fn add_reward(&self, reward: f64) -> Result<(), DecisionError> {
        if !reward.is_finite() {
            return Err(DecisionError::InvalidReward(reward));
        }
        let decision_id = self.id().ok_or(DecisionError::NotTracked)?;
        self.env.emit_reward(&self.model, decision_id, reward)
    }

    fn peek(&self) -> usize {
        self.ranking.best()
    }

    fn get(&self) -> usize {
        self.ranking.best()
    }
}
