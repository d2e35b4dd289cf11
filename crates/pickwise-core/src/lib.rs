//! pickwise-core
//!
//! Typed decision API: rank caller-typed variants, track the decision, and
//! attribute rewards to it. Scoring and event delivery sit behind ports.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, givens, ranking, events, errors）
//! - **ports**: 抽象化レイヤー（Scorer, Tracker, EventSink, DecisionCore, など）
//! - **model**: ranking entry point（DecisionModel, DecisionContext, CoreDecision）
//! - **typed**: 型付き Decision API（Decision<T>, VariantCodec）
//! - **impls**: 実装（FallbackScorer, InMemoryTracker, ChannelTracker など開発用）
//! - **app**: ForwardLoop（tracking イベントの配送）

pub mod app;
pub mod domain;
pub mod impls;
pub mod model;
pub mod ports;
pub mod typed;

pub use crate::domain::{DecisionError, DecisionId, Givens, TrackEvent};
pub use crate::model::{DecisionContext, DecisionModel, ModelConfig};
pub use crate::typed::Decision;
