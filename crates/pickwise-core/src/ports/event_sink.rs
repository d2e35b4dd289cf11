//! EventSink port - トラッキングイベントの最終的な書き出し先
//!
//! # 実装
//! - JsonLinesSink: 1 行 1 JSON で書き出す
//! - InMemorySink: テスト用

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::TrackEvent;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to serialize event: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write event: {0}")]
    Io(#[from] std::io::Error),
}

/// EventSink はトラッキングイベントを記録
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: TrackEvent) -> Result<(), SinkError>;
}

#[async_trait]
impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    async fn emit(&self, event: TrackEvent) -> Result<(), SinkError> {
        (**self).emit(event).await
    }
}
