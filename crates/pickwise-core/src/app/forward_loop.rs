//! ForwardLoop - ChannelTracker のイベントを EventSink に配送
//!
//! # フロー
//! 1. UnboundedReceiver::recv() でイベントを受け取る
//! 2. EventSink::emit() で書き出す
//! 3. 失敗は warn ログを出して次のイベントへ進む
//! 4. すべての sender が drop されたら終了し、配送できた件数を返す

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, warn};

use crate::domain::TrackEvent;
use crate::ports::EventSink;

pub struct ForwardLoop<S> {
    sink: S,
}

impl<S: EventSink> ForwardLoop<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub async fn run(self, mut rx: UnboundedReceiver<TrackEvent>) -> usize {
        let mut forwarded = 0;
        while let Some(event) = rx.recv().await {
            let message_id = event.message_id();
            match self.sink.emit(event).await {
                Ok(()) => {
                    forwarded += 1;
                    debug!(message_id = %message_id, "event forwarded");
                }
                Err(e) => {
                    warn!(message_id = %message_id, error = %e, "failed to forward event");
                }
            }
        }
        debug!(forwarded, "forward loop finished");
        forwarded
    }
}
