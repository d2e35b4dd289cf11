//! DecisionModelBuilder - DecisionModel の構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）: モデル名は build() 時に検証する
//! - 未指定の port には開発用の既定実装を使う

use std::sync::Arc;

use super::config::ModelConfig;
use super::decision_model::DecisionModel;
use super::tracking::{DEFAULT_MAX_RUNNERS_UP, TrackingEnv};
use crate::domain::{InvalidModelName, ModelName};
use crate::impls::FallbackScorer;
use crate::ports::{
    Clock, GivensProvider, IdGenerator, NoGivensProvider, Scorer, StaticGivensProvider,
    SystemClock, Tracker, UlidGenerator,
};

/// DecisionModelBuilder は DecisionModel を構築
///
/// # 使用例
/// ```ignore
/// let model = DecisionModel::builder("greetings")
///     .tracker(tracker.clone())
///     .max_runners_up(10)
///     .build()?;
/// ```
///
/// # 既定値
/// - scorer: FallbackScorer（入力順を保つ）
/// - tracker: なし（track() は TrackerNotConfigured を返す）
/// - givens_provider: NoGivensProvider
/// - clock: SystemClock / id_generator: UlidGenerator
pub struct DecisionModelBuilder {
    name: String,
    scorer: Option<Arc<dyn Scorer>>,
    tracker: Option<Arc<dyn Tracker>>,
    givens_provider: Option<Arc<dyn GivensProvider>>,
    clock: Option<Arc<dyn Clock>>,
    id_generator: Option<Arc<dyn IdGenerator>>,
    max_runners_up: usize,
}

/// BuildError は DecisionModel 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    InvalidModelName(#[from] InvalidModelName),
}

impl DecisionModelBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scorer: None,
            tracker: None,
            givens_provider: None,
            clock: None,
            id_generator: None,
            max_runners_up: DEFAULT_MAX_RUNNERS_UP,
        }
    }

    /// 設定ファイルの内容から builder を作る
    ///
    /// `givens` が空でなければ StaticGivensProvider として組み込みます。
    pub fn from_config(config: ModelConfig) -> Self {
        let builder = Self::new(config.model_name).max_runners_up(config.max_runners_up);
        if config.givens.is_empty() {
            builder
        } else {
            builder.givens_provider(Arc::new(StaticGivensProvider::new(config.givens)))
        }
    }

    pub fn scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn tracker(mut self, tracker: Arc<dyn Tracker>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    pub fn givens_provider(mut self, provider: Arc<dyn GivensProvider>) -> Self {
        self.givens_provider = Some(provider);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = Some(id_generator);
        self
    }

    pub fn max_runners_up(mut self, max_runners_up: usize) -> Self {
        self.max_runners_up = max_runners_up;
        self
    }

    pub fn build(self) -> Result<DecisionModel, BuildError> {
        let name = ModelName::new(self.name)?;
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let id_generator = self
            .id_generator
            .unwrap_or_else(|| Arc::new(UlidGenerator::new(clock.clone())));
        let env = TrackingEnv {
            tracker: self.tracker,
            id_generator,
            clock,
            max_runners_up: self.max_runners_up,
        };

        Ok(DecisionModel::from_parts(
            name,
            self.scorer.unwrap_or_else(|| Arc::new(FallbackScorer::new())),
            self.givens_provider.unwrap_or_else(|| Arc::new(NoGivensProvider)),
            env,
        ))
    }
}
