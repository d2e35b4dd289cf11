//! Scorer port - variant のスコアリング
//!
//! 学習済みモデルによる推論はこの trait の向こう側に置きます。
//! このクレートには開発用の `FallbackScorer` だけを含めます。

use serde_json::Value;

use crate::domain::Givens;

#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("model is not loaded")]
    ModelNotLoaded,

    #[error("{0}")]
    Other(String),
}

/// Scorer は encode 済みの variant にスコアを付ける
///
/// # 契約
/// - 戻り値の長さは `variants.len()` と一致すること
/// - スコアが大きいほど良い
pub trait Scorer: Send + Sync {
    fn score(&self, variants: &[Value], givens: Option<&Givens>) -> Result<Vec<f64>, ScoreError>;
}
