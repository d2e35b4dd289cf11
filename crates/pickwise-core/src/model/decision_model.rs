//! DecisionModel - ranking の entry point
//!
//! 型付きの variant を受け取り、encode → givens 合成 → scoring → ranking を行い、
//! CoreDecision を `Decision<T>` で包んで返します。
//!
//! givens 付きの呼び出しは `given()` が返す DecisionContext を使います。

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use super::builder::DecisionModelBuilder;
use super::context::DecisionContext;
use super::tracking::TrackingEnv;
use crate::domain::{DecisionError, DecisionId, Givens, ModelName};
use crate::ports::{GivensProvider, Scorer};
use crate::typed::Decision;

pub struct DecisionModel {
    name: ModelName,
    scorer: Arc<dyn Scorer>,
    givens_provider: Arc<dyn GivensProvider>,
    env: TrackingEnv,
}

impl DecisionModel {
    pub fn builder(name: impl Into<String>) -> DecisionModelBuilder {
        DecisionModelBuilder::new(name)
    }

    pub(crate) fn from_parts(
        name: ModelName,
        scorer: Arc<dyn Scorer>,
        givens_provider: Arc<dyn GivensProvider>,
        env: TrackingEnv,
    ) -> Self {
        Self {
            name,
            scorer,
            givens_provider,
            env,
        }
    }

    pub fn name(&self) -> &ModelName {
        &self.name
    }

    pub(crate) fn scorer(&self) -> &dyn Scorer {
        self.scorer.as_ref()
    }

    pub(crate) fn givens_provider(&self) -> &dyn GivensProvider {
        self.givens_provider.as_ref()
    }

    pub(crate) fn env(&self) -> &TrackingEnv {
        &self.env
    }

    /// givens を束縛した context を返す
    pub fn given(&self, givens: Givens) -> DecisionContext<'_> {
        DecisionContext::new(self, Some(givens))
    }

    fn context(&self) -> DecisionContext<'_> {
        DecisionContext::new(self, None)
    }

    /// variant をスコア順に並べた Decision を返す
    pub fn rank<T: Serialize + Clone>(&self, variants: Vec<T>) -> Result<Decision<T>, DecisionError> {
        self.context().rank(variants)
    }

    /// `rank()` と同じ
    pub fn choose_from<T: Serialize + Clone>(
        &self,
        variants: Vec<T>,
    ) -> Result<Decision<T>, DecisionError> {
        self.context().rank(variants)
    }

    pub fn score<T: Serialize>(&self, variants: &[T]) -> Result<Vec<f64>, DecisionError> {
        self.context().score(variants)
    }

    /// 最良の variant を選んで track し、その値と ID を返す
    pub fn which<T: Serialize + Clone>(
        &self,
        variants: Vec<T>,
    ) -> Result<(T, DecisionId), DecisionError> {
        self.context().which(variants)
    }

    pub fn choose_multivariate(
        &self,
        variants: &Map<String, Value>,
    ) -> Result<Decision<Value>, DecisionError> {
        self.context().choose_multivariate(variants)
    }

    /// Decision が手元に無くても、ID さえあれば reward を送れる
    pub fn add_reward(&self, decision_id: DecisionId, reward: f64) -> Result<(), DecisionError> {
        self.env.emit_reward(&self.name, decision_id, reward)
    }
}

impl std::fmt::Debug for DecisionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionModel")
            .field("name", &self.name)
            .field("tracking", &self.env.tracker.is_some())
            .field("max_runners_up", &self.env.max_runners_up)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrackEvent;
    use crate::impls::InMemoryTracker;
    use crate::ports::ScoreError;
    use serde_json::json;

    /// variant 自身の数値をそのままスコアにする
    struct ValueScorer;

    impl Scorer for ValueScorer {
        fn score(&self, variants: &[Value], _givens: Option<&Givens>) -> Result<Vec<f64>, ScoreError> {
            variants
                .iter()
                .map(|v| v.as_f64().ok_or_else(|| ScoreError::Other(format!("not a number: {v}"))))
                .collect()
        }
    }

    /// 文字列の variant を固定の順位表で採点する
    struct TableScorer(Vec<(&'static str, f64)>);

    impl Scorer for TableScorer {
        fn score(&self, variants: &[Value], _givens: Option<&Givens>) -> Result<Vec<f64>, ScoreError> {
            Ok(variants
                .iter()
                .map(|v| {
                    self.0
                        .iter()
                        .find(|(name, _)| v.as_str() == Some(*name))
                        .map(|(_, s)| *s)
                        .unwrap_or(0.0)
                })
                .collect())
        }
    }

    struct ShortScorer;

    impl Scorer for ShortScorer {
        fn score(&self, _variants: &[Value], _givens: Option<&Givens>) -> Result<Vec<f64>, ScoreError> {
            Ok(vec![1.0])
        }
    }

    fn tracked_model(scorer: Arc<dyn Scorer>) -> (DecisionModel, Arc<InMemoryTracker>) {
        let tracker = Arc::new(InMemoryTracker::new());
        let model = DecisionModel::builder("songs")
            .scorer(scorer)
            .tracker(tracker.clone())
            .build()
            .unwrap();
        (model, tracker)
    }

    #[test]
    fn rank_orders_typed_variants_by_score() {
        let (model, _) = tracked_model(Arc::new(TableScorer(vec![("A", 0.5), ("B", 0.1), ("C", 0.9)])));

        let decision = model.rank(vec!["A", "B", "C"]).unwrap();

        assert_eq!(decision.ranked(), &["C", "A", "B"]);
        assert_eq!(*decision.best(), "C");
    }

    #[test]
    fn rank_keeps_duplicates_distinct() {
        #[derive(Debug, Clone, Serialize)]
        #[serde(transparent)]
        struct Labeled {
            value: f64,
            #[serde(skip)]
            label: &'static str,
        }

        let (model, _) = tracked_model(Arc::new(ValueScorer));
        let variants = vec![
            Labeled { value: 10.0, label: "first" },
            Labeled { value: 20.0, label: "middle" },
            Labeled { value: 10.0, label: "last" },
        ];

        let decision = model.rank(variants).unwrap();

        let labels: Vec<&str> = decision.ranked().iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["middle", "first", "last"]);
    }

    #[test]
    fn rank_rejects_empty_variants() {
        let (model, _) = tracked_model(Arc::new(ValueScorer));
        let result = model.rank(Vec::<f64>::new());
        assert!(matches!(result, Err(DecisionError::EmptyVariants)));
    }

    #[test]
    fn rank_reports_score_count_mismatch() {
        let (model, _) = tracked_model(Arc::new(ShortScorer));
        let result = model.rank(vec![1, 2, 3]);
        assert!(matches!(
            result,
            Err(DecisionError::ScoreCountMismatch { expected: 3, actual: 1 })
        ));
    }

    #[test]
    fn rank_propagates_scorer_errors() {
        let (model, _) = tracked_model(Arc::new(ValueScorer));
        let result = model.rank(vec!["not numeric"]);
        assert!(matches!(result, Err(DecisionError::Score(ScoreError::Other(_)))));
    }

    #[test]
    fn score_returns_scorer_output() {
        let (model, _) = tracked_model(Arc::new(ValueScorer));
        assert_eq!(model.score(&[3.0, 1.0]).unwrap(), vec![3.0, 1.0]);
    }

    #[test]
    fn default_scorer_keeps_input_order() {
        let model = DecisionModel::builder("songs").build().unwrap();
        let variants: Vec<u32> = (0..20).collect();

        let decision = model.rank(variants.clone()).unwrap();

        assert_eq!(decision.ranked(), variants.as_slice());
    }

    #[test]
    fn which_tracks_and_returns_best() {
        let (model, tracker) = tracked_model(Arc::new(ValueScorer));

        let (best, id) = model.which(vec![1.0, 5.0, 3.0]).unwrap();

        assert_eq!(best, 5.0);
        let decisions = tracker.decisions();
        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].decision_id, id);
        assert_eq!(decisions[0].variant, json!(5.0));
    }

    #[test]
    fn model_add_reward_targets_decision_id() {
        let (model, tracker) = tracked_model(Arc::new(ValueScorer));
        let (_, id) = model.which(vec![1.0, 2.0]).unwrap();

        model.add_reward(id, 0.25).unwrap();

        let rewards = tracker.rewards();
        assert_eq!(rewards.len(), 1);
        assert_eq!(rewards[0].decision_id, id);
        assert_eq!(rewards[0].reward, 0.25);
    }

    #[test]
    fn decision_lifecycle_through_the_model() {
        let (model, tracker) = tracked_model(Arc::new(ValueScorer));
        let decision = model.rank(vec![2.0, 4.0]).unwrap();
        assert!(decision.id().is_none());

        let id = decision.track().unwrap();
        decision.add_reward(1.0).unwrap();

        assert_eq!(decision.id(), Some(id));
        assert_eq!(decision.ranked(), &[4.0, 2.0]);
        let events = tracker.events();
        assert!(matches!(events[0], TrackEvent::Decision(_)));
        assert!(matches!(events[1], TrackEvent::Reward(_)));
    }

    #[test]
    fn choose_multivariate_ranks_combinations() {
        let model = DecisionModel::builder("themes").build().unwrap();
        let variants = json!({ "color": ["red", "blue"], "size": [1, 2] });
        let Value::Object(map) = variants else { unreachable!() };

        let decision = model.choose_multivariate(&map).unwrap();

        assert_eq!(decision.ranked().len(), 4);
        assert_eq!(decision.best(), &json!({ "color": "red", "size": 1 }));
    }

    #[test]
    fn choose_multivariate_rejects_empty_input() {
        let model = DecisionModel::builder("themes").build().unwrap();
        let result = model.choose_multivariate(&Map::new());
        assert!(matches!(result, Err(DecisionError::EmptyVariants)));
    }
}
