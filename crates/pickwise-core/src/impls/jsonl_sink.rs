//! JsonLinesSink - 1 行 1 JSON でイベントを書き出す EventSink
//!
//! stdout やファイルなど任意の `Write` に書けます。
//! 書き込みは Mutex で直列化し、1 イベントごとに flush します。

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::TrackEvent;
use crate::ports::{EventSink, SinkError};

pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<W: Write + Send> EventSink for JsonLinesSink<W> {
    async fn emit(&self, event: TrackEvent) -> Result<(), SinkError> {
        let line = serde_json::to_string(&event)?;
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }
}
