//! Tracking events emitted by a decision.
//!
//! These are the records a tracker forwards for later reward attribution.
//! Transport and aggregation are not handled here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::givens::Givens;
use super::ids::{DecisionId, MessageId};
use super::model_name::ModelName;

/// A decision was made: the best variant plus enough context to learn from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionEvent {
    pub message_id: MessageId,
    pub decision_id: DecisionId,
    pub model: ModelName,
    pub timestamp: DateTime<Utc>,

    /// The best variant.
    pub variant: Value,

    /// Total number of variants that were ranked.
    pub count: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub givens: Option<Givens>,

    /// Variants ranked directly after the best one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runners_up: Vec<Value>,

    /// One variant drawn at random from those ranked after the runners-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<Value>,
}

/// A reward was attributed to a tracked decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardEvent {
    pub message_id: MessageId,
    pub decision_id: DecisionId,
    pub model: ModelName,
    pub timestamp: DateTime<Utc>,
    pub reward: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrackEvent {
    Decision(DecisionEvent),
    Reward(RewardEvent),
}

impl TrackEvent {
    pub fn decision_id(&self) -> DecisionId {
        match self {
            TrackEvent::Decision(e) => e.decision_id,
            TrackEvent::Reward(e) => e.decision_id,
        }
    }

    pub fn message_id(&self) -> MessageId {
        match self {
            TrackEvent::Decision(e) => e.message_id,
            TrackEvent::Reward(e) => e.message_id,
        }
    }

    pub fn model(&self) -> &ModelName {
        match self {
            TrackEvent::Decision(e) => &e.model,
            TrackEvent::Reward(e) => &e.model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use ulid::Ulid;

    #[test]
    fn reward_event_is_tagged() {
        let event = TrackEvent::Reward(RewardEvent {
            message_id: MessageId::from(Ulid::nil()),
            decision_id: DecisionId::from(Ulid::nil()),
            model: ModelName::new("songs").unwrap(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
            reward: 1.5,
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], json!("reward"));
        assert_eq!(json["model"], json!("songs"));
        assert_eq!(json["reward"], json!(1.5));
        assert_eq!(json["decision_id"], json!(format!("dec-{}", Ulid::nil())));
    }

    #[test]
    fn decision_event_omits_empty_fields() {
        let event = TrackEvent::Decision(DecisionEvent {
            message_id: MessageId::from(Ulid::nil()),
            decision_id: DecisionId::from(Ulid::nil()),
            model: ModelName::new("songs").unwrap(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
            variant: json!("a"),
            count: 1,
            givens: None,
            runners_up: vec![],
            sample: None,
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], json!("decision"));
        assert!(json.get("givens").is_none());
        assert!(json.get("runners_up").is_none());
        assert!(json.get("sample").is_none());
    }
}
