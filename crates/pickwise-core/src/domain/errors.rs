//! Errors - エラー型と分類
//!
//! 回復可能なエラーは `DecisionError` として返します。
//! adapter と core の契約違反（範囲外の position など）は panic します。

use super::model_name::InvalidModelName;
use super::ranking::RankingError;
use crate::ports::scorer::ScoreError;
use crate::ports::tracker::TrackError;
use crate::typed::codec::CodecError;

/// DecisionError は決定の生成・追跡・報酬の各操作で発生するエラー
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    #[error("variants must not be empty")]
    EmptyVariants,

    #[error(transparent)]
    InvalidModelName(#[from] InvalidModelName),

    #[error("failed to encode variants: {0}")]
    Encode(#[from] CodecError),

    #[error("scoring failed: {0}")]
    Score(#[from] ScoreError),

    #[error("scorer returned {actual} scores for {expected} variants")]
    ScoreCountMismatch { expected: usize, actual: usize },

    #[error("invalid ranking: {0}")]
    Ranking(#[from] RankingError),

    #[error("no tracker is configured for model '{0}'")]
    TrackerNotConfigured(String),

    #[error("add_reward() called before track()")]
    NotTracked,

    #[error("reward must be a finite number, got {0}")]
    InvalidReward(f64),

    #[error("tracking failed: {0}")]
    Track(#[from] TrackError),
}
