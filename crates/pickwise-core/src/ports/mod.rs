//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! スコアリング（学習済みモデル）、トラッキング送信、givens の供給は
//! 外部のコンポーネントが担い、ここではそのインターフェースだけを定義します。

pub mod clock;
pub mod decision_core;
pub mod event_sink;
pub mod givens_provider;
pub mod id_generator;
pub mod scorer;
pub mod tracker;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::decision_core::DecisionCore;
pub use self::event_sink::{EventSink, SinkError};
pub use self::givens_provider::{GivensProvider, NoGivensProvider, StaticGivensProvider};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::scorer::{ScoreError, Scorer};
pub use self::tracker::{TrackError, Tracker};
