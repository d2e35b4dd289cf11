//! VariantCodec - 型付き variant と JSON の相互変換
//!
//! core に渡すのは encode 済みの `serde_json::Value` だけです。
//! 型付きの値は adapter 側が保持し、position で復元するので decode は不要です。

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
#[error("variant at position {position} is not JSON encodable: {source}")]
pub struct CodecError {
    pub position: usize,
    #[source]
    pub source: serde_json::Error,
}

/// VariantCodec は T を JSON に encode する
pub struct VariantCodec;

impl VariantCodec {
    pub fn encode<T: Serialize>(variant: &T) -> Result<Value, serde_json::Error> {
        serde_json::to_value(variant)
    }

    /// 順序を保ったまま全 variant を encode する
    pub fn encode_all<T: Serialize>(variants: &[T]) -> Result<Vec<Value>, CodecError> {
        variants
            .iter()
            .enumerate()
            .map(|(position, variant)| {
                Self::encode(variant).map_err(|source| CodecError { position, source })
            })
            .collect()
    }
}
