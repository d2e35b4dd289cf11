//! Impls - ports の実装（開発用・テスト用）
//!
//! # 含まれる実装
//! - **FallbackScorer**: モデル未ロード時の scorer（入力順を保つ）
//! - **InMemoryTracker**: イベントをメモリに保持
//! - **ChannelTracker**: tokio の channel にイベントを流す
//! - **JsonLinesSink / InMemorySink**: EventSink
//!
//! 学習済みモデルによる推論やネットワーク送信の実装はこのクレートには含めません。

pub mod channel_tracker;
pub mod fallback_scorer;
pub mod inmem_sink;
pub mod inmem_tracker;
pub mod jsonl_sink;

// 主要な型を再エクスポート
pub use self::channel_tracker::ChannelTracker;
pub use self::fallback_scorer::FallbackScorer;
pub use self::inmem_sink::InMemorySink;
pub use self::inmem_tracker::InMemoryTracker;
pub use self::jsonl_sink::JsonLinesSink;
