//! FallbackScorer - モデル未ロード時の scorer
//!
//! ランダムなスコアを生成し、降順に並べてから返します。
//! スコアは入力順に単調減少するので、ranking は呼び出し側の順序と一致します。

use rand::Rng;
use serde_json::Value;

use crate::domain::Givens;
use crate::ports::{ScoreError, Scorer};

/// 生成するノイズの大きさ
const NOISE_SCALE: f64 = 1e-3;

#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackScorer;

impl FallbackScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for FallbackScorer {
    fn score(&self, variants: &[Value], _givens: Option<&Givens>) -> Result<Vec<f64>, ScoreError> {
        let mut rng = rand::thread_rng();
        let mut scores: Vec<f64> = (0..variants.len())
            .map(|_| rng.gen_range(-1.0..1.0) * NOISE_SCALE)
            .collect();
        scores.sort_by(|a, b| b.total_cmp(a));
        Ok(scores)
    }
}
