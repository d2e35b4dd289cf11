//! Decision<T> - 型付きの決定 adapter
//!
//! core（`dyn DecisionCore`）は encode 済みの JSON しか扱いません。
//! この adapter は呼び出し側が渡した型付きの variant を保持し、
//! core が返す position を使って `ranked` を復元します。
//!
//! # 学習ポイント
//! - Type erasure の逆方向（erased → typed）の復元
//! - 値の等価性ではなく position で対応付ける（重複値も区別できる）
//! - 契約違反は panic で即座に失敗させる

use crate::domain::{DecisionError, DecisionId, Givens};
use crate::ports::DecisionCore;

/// ranking 済みの決定
///
/// `DecisionModel::rank()` などの ranking entry point からのみ生成されます。
///
/// # 使用例
/// ```ignore
/// let decision = model.rank(vec!["Hello", "Hi", "Hey"])?;
/// println!("{}", decision.best());
/// decision.track()?;
/// decision.add_reward(1.0)?;
/// ```
pub struct Decision<T> {
    core: Box<dyn DecisionCore>,
    variants: Vec<T>,
    givens: Option<Givens>,
    ranked: Vec<T>,
}

impl<T: Clone> Decision<T> {
    /// core と元の variant から adapter を構築する
    ///
    /// # Panics
    /// - core の variant 数と `variants.len()` が一致しない場合
    /// - core の ranked position が範囲外の場合
    pub(crate) fn new(core: Box<dyn DecisionCore>, variants: Vec<T>) -> Self {
        assert_eq!(
            core.variants().len(),
            variants.len(),
            "decision core scored {} variants but {} typed variants were supplied",
            core.variants().len(),
            variants.len()
        );
        let ranked = core
            .ranked_positions()
            .iter()
            .map(|&position| variant_at(&variants, position).clone())
            .collect();
        let givens = core.givens().cloned();

        Self {
            core,
            variants,
            givens,
            ranked,
        }
    }
}

impl<T> Decision<T> {
    /// `track()` が呼ばれるまでは `None`
    pub fn id(&self) -> Option<DecisionId> {
        self.core.id()
    }

    /// scoring に使われた givens
    pub fn givens(&self) -> Option<&Givens> {
        self.givens.as_ref()
    }

    /// 元の順序の variant
    pub fn variants(&self) -> &[T] {
        &self.variants
    }

    /// スコアの高い順に並べた variant
    pub fn ranked(&self) -> &[T] {
        &self.ranked
    }

    /// 最良の variant（`ranked()[0]`）
    ///
    /// variant は常に 1 件以上あります（ranking entry point が空入力を拒否する）。
    pub fn best(&self) -> &T {
        &self.ranked[0]
    }

    /// 決定を記録して ID を返す
    ///
    /// 2 回目以降の呼び出しで何が起きるかは core が決めます。
    pub fn track(&self) -> Result<DecisionId, DecisionError> {
        self.core.track()
    }

    /// 追跡済みの決定に報酬を加える
    pub fn add_reward(&self, reward: f64) -> Result<(), DecisionError> {
        self.core.add_reward(reward)
    }

    #[deprecated(note = "Use best() instead")]
    #[allow(deprecated)]
    pub fn peek(&self) -> &T {
        variant_at(&self.variants, self.core.peek())
    }

    #[deprecated(note = "Use best() instead")]
    #[allow(deprecated)]
    pub fn get(&self) -> &T {
        variant_at(&self.variants, self.core.get())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Decision<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decision")
            .field("id", &self.id())
            .field("ranked", &self.ranked)
            .field("givens", &self.givens)
            .finish_non_exhaustive()
    }
}

fn variant_at<T>(variants: &[T], position: usize) -> &T {
    variants.get(position).unwrap_or_else(|| {
        panic!(
            "decision core returned position {position}, but only {} variants exist",
            variants.len()
        )
    })
}
