//! App - アプリケーション層
//!
//! # 主要コンポーネント
//! - **ForwardLoop**: ChannelTracker が受け取ったイベントを EventSink へ配送

pub mod forward_loop;

pub use self::forward_loop::ForwardLoop;
