//! Tracker port - トラッキングイベントの受け渡し
//!
//! Tracker は同期的にイベントを受け取るだけです。
//! ネットワーク送信などのブロッキング処理は実装側（または後段の EventSink）の責務です。

use crate::domain::TrackEvent;

#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("tracking channel is closed")]
    Closed,

    #[error("{0}")]
    Other(String),
}

pub trait Tracker: Send + Sync {
    fn track(&self, event: TrackEvent) -> Result<(), TrackError>;
}
