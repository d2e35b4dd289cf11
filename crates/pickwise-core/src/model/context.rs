//! DecisionContext - givens を束縛した DecisionModel への参照
//!
//! ranking の実処理はここにあり、DecisionModel の同名メソッドは
//! givens なしの context に委譲します。

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::core_decision::CoreDecision;
use super::decision_model::DecisionModel;
use super::multivariate;
use crate::domain::{DecisionError, DecisionId, Givens, Ranking};
use crate::typed::{Decision, VariantCodec};

pub struct DecisionContext<'a> {
    model: &'a DecisionModel,
    givens: Option<Givens>,
}

impl<'a> DecisionContext<'a> {
    pub(crate) fn new(model: &'a DecisionModel, givens: Option<Givens>) -> Self {
        Self { model, givens }
    }

    pub fn givens(&self) -> Option<&Givens> {
        self.givens.as_ref()
    }

    /// variant をスコア順に並べた Decision を返す
    ///
    /// # フロー
    /// 1. 空の入力を拒否
    /// 2. VariantCodec で JSON に encode
    /// 3. GivensProvider で givens を合成
    /// 4. Scorer で採点 → Ranking
    /// 5. CoreDecision を Decision<T> で包む
    pub fn rank<T: Serialize + Clone>(&self, variants: Vec<T>) -> Result<Decision<T>, DecisionError> {
        if variants.is_empty() {
            return Err(DecisionError::EmptyVariants);
        }
        let encoded = VariantCodec::encode_all(&variants)?;
        let givens = self.resolved_givens();
        let scores = self.score_encoded(&encoded, givens.as_ref())?;
        let ranking = Ranking::from_scores(&scores)?;

        let name = self.model.name();
        debug!(model = %name, count = encoded.len(), best = ranking.best(), "variants ranked");

        let core = CoreDecision::new(name.clone(), encoded, givens, ranking, self.model.env().clone());
        Ok(Decision::new(Box::new(core), variants))
    }

    /// `rank()` と同じ
    pub fn choose_from<T: Serialize + Clone>(
        &self,
        variants: Vec<T>,
    ) -> Result<Decision<T>, DecisionError> {
        self.rank(variants)
    }

    pub fn score<T: Serialize>(&self, variants: &[T]) -> Result<Vec<f64>, DecisionError> {
        if variants.is_empty() {
            return Err(DecisionError::EmptyVariants);
        }
        let encoded = VariantCodec::encode_all(variants)?;
        let givens = self.resolved_givens();
        self.score_encoded(&encoded, givens.as_ref())
    }

    pub fn which<T: Serialize + Clone>(
        &self,
        variants: Vec<T>,
    ) -> Result<(T, DecisionId), DecisionError> {
        let decision = self.rank(variants)?;
        let id = decision.track()?;
        Ok((decision.best().clone(), id))
    }

    pub fn choose_multivariate(
        &self,
        variants: &Map<String, Value>,
    ) -> Result<Decision<Value>, DecisionError> {
        self.rank(multivariate::combinations(variants))
    }

    fn resolved_givens(&self) -> Option<Givens> {
        self.model
            .givens_provider()
            .givens(self.model.name(), self.givens.as_ref())
    }

    fn score_encoded(
        &self,
        encoded: &[Value],
        givens: Option<&Givens>,
    ) -> Result<Vec<f64>, DecisionError> {
        let scores = self.model.scorer().score(encoded, givens)?;
        if scores.len() != encoded.len() {
            return Err(DecisionError::ScoreCountMismatch {
                expected: encoded.len(),
                actual: scores.len(),
            });
        }
        Ok(scores)
    }
}
