//! Model - ranking entry point と標準の決定オブジェクト
//!
//! # 主要コンポーネント
//! - **DecisionModel**: 型付き variant を受け取り Decision<T> を返す
//! - **DecisionContext**: givens を束縛した DecisionModel
//! - **CoreDecision**: DecisionCore の標準実装（tracking / reward）
//! - **DecisionModelBuilder**: ports のワイヤリング
//! - **ModelConfig**: JSON 設定

pub mod builder;
pub mod config;
pub mod context;
pub mod core_decision;
pub mod decision_model;
pub mod multivariate;
mod tracking;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, DecisionModelBuilder};
pub use self::config::ModelConfig;
pub use self::context::DecisionContext;
pub use self::core_decision::CoreDecision;
pub use self::decision_model::DecisionModel;
pub use self::tracking::DEFAULT_MAX_RUNNERS_UP;
