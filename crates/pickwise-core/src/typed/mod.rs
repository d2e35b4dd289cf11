//! Typed - 型付き Decision API
//!
//! # 二層構造
//! - **表層（Typed）**: `Decision<T>` - 呼び出し側の型で variant を扱う
//! - **内部（Dyn）**: `DecisionCore` trait - object-safe, JSON に型消去された core
//!
//! 型付き → JSON は VariantCodec、JSON → 型付きは position による復元です。

pub mod codec;
pub mod decision;

pub use self::codec::{CodecError, VariantCodec};
pub use self::decision::Decision;
