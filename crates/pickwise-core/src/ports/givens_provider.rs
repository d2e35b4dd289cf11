//! GivensProvider port - 追加の givens を供給
//!
//! アプリ全体で共通の context（言語、プラットフォームなど）を
//! 呼び出しごとの givens に合成するために使います。

use crate::domain::{Givens, ModelName};

pub trait GivensProvider: Send + Sync {
    /// `givens` は呼び出し側が渡した context。戻り値が scoring と tracking に使われる。
    fn givens(&self, model: &ModelName, givens: Option<&Givens>) -> Option<Givens>;
}

/// 呼び出し側の givens をそのまま返す
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGivensProvider;

impl GivensProvider for NoGivensProvider {
    fn givens(&self, _model: &ModelName, givens: Option<&Givens>) -> Option<Givens> {
        givens.cloned()
    }
}

/// 固定の givens を呼び出し側の givens の下に敷く
///
/// キーが衝突した場合は呼び出し側の値が優先されます。
#[derive(Debug, Clone, Default)]
pub struct StaticGivensProvider {
    base: Givens,
}

impl StaticGivensProvider {
    pub fn new(base: Givens) -> Self {
        Self { base }
    }
}

impl GivensProvider for StaticGivensProvider {
    fn givens(&self, _model: &ModelName, givens: Option<&Givens>) -> Option<Givens> {
        match givens {
            Some(context) => Some(self.base.merged_with(context)),
            None if self.base.is_empty() => None,
            None => Some(self.base.clone()),
        }
    }
}
