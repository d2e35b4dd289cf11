//! DecisionCore port - 型消去された決定オブジェクト
//!
//! `typed::Decision<T>` はこの trait の背後にある core に
//! ranking・tracking・reward をすべて委譲します。
//!
//! # Position ベースの契約
//! core は variant そのものではなく、元の variant 列への position を返します。
//! これにより型付きの値を検索なしで復元できます。

use serde_json::Value;

use crate::domain::{DecisionError, DecisionId, Givens};

pub trait DecisionCore: Send + Sync {
    /// scoring に使った encode 済みの variant（元の順序）
    fn variants(&self) -> &[Value];

    /// `variants()` への position を良い順に並べたもの
    ///
    /// `0..variants().len()` の順列であること。
    fn ranked_positions(&self) -> &[usize];

    fn givens(&self) -> Option<&Givens>;

    /// `track()` が成功するまでは `None`
    fn id(&self) -> Option<DecisionId>;

    fn track(&self) -> Result<DecisionId, DecisionError>;

    fn add_reward(&self, reward: f64) -> Result<(), DecisionError>;

    /// 最良の variant の position（tracking なし）
    #[deprecated(note = "Use ranked_positions() instead")]
    fn peek(&self) -> usize;

    /// 最良の variant の position（tracking なし）
    #[deprecated(note = "Use ranked_positions() instead")]
    fn get(&self) -> usize;
}
