//! ChannelTracker - イベントを tokio の channel に流す Tracker
//!
//! # 学習ポイント
//! - 同期 API（Tracker）から非同期の後段（ForwardLoop → EventSink）への受け渡し
//! - UnboundedSender::send はブロックしないので同期コンテキストから呼べる
//!
//! # 使用例
//! ```ignore
//! let (tracker, rx) = ChannelTracker::channel();
//! tokio::spawn(ForwardLoop::new(sink).run(rx));
//! let model = DecisionModel::builder("songs").tracker(Arc::new(tracker)).build()?;
//! ```

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::domain::TrackEvent;
use crate::ports::{TrackError, Tracker};

#[derive(Debug, Clone)]
pub struct ChannelTracker {
    tx: UnboundedSender<TrackEvent>,
}

impl ChannelTracker {
    pub fn channel() -> (Self, UnboundedReceiver<TrackEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Tracker for ChannelTracker {
    fn track(&self, event: TrackEvent) -> Result<(), TrackError> {
        self.tx.send(event).map_err(|_| TrackError::Closed)
    }
}
