//! Domain identifiers (strongly-typed IDs).
//!
//! # ULID ベースの ID + ジェネリック実装
//! 決定 (decision) とトラッキングメッセージの ID は ULID で表現します。
//! Phantom type パターンで `DecisionId` と `MessageId` を型レベルで区別します。
//!
//! ## ULID の特性
//! - **時刻でソート可能**: timestamp が先頭にあるため、生成順序でソートできる
//! - **分散生成可能**: 調整なしで複数のクライアントで生成できる
//!
//! ## 文字列表現
//! `Display` / `FromStr` / serde はすべて `{prefix}{ULID}` 形式（例: `dec-01H...`）。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use ulid::Ulid;

/// IdMarker は各 ID 型のマーカー trait
///
/// Display で使うプレフィックス（"dec-", "msg-"）を提供します。
pub trait IdMarker: Send + Sync + 'static {
    /// Display で使うプレフィックス
    fn prefix() -> &'static str;
}

/// ジェネリック ID 型
///
/// `T` は PhantomData で、実行時にはメモリを消費しませんが、
/// コンパイル時に型安全性を提供します。
///
/// # 例
/// ```ignore
/// let decision_id: DecisionId = Id::from(Ulid::new());
/// let message_id: MessageId = Id::from(Ulid::new());
/// // decision_id と message_id は異なる型なので、混同できない
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    /// ULID から Id を作成
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    /// 内部の ULID を取得
    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

/// ParseIdError は文字列から ID への変換エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIdError {
    #[error("id '{0}' is missing the expected prefix '{1}'")]
    MissingPrefix(String, &'static str),

    #[error("id '{0}' does not contain a valid ULID")]
    InvalidUlid(String),
}

impl<T: IdMarker> FromStr for Id<T> {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .strip_prefix(T::prefix())
            .ok_or_else(|| ParseIdError::MissingPrefix(s.to_string(), T::prefix()))?;
        let ulid = Ulid::from_string(raw).map_err(|_| ParseIdError::InvalidUlid(s.to_string()))?;
        Ok(Self::from_ulid(ulid))
    }
}

impl<T: IdMarker> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: IdMarker> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Decision のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Decision {}

impl IdMarker for Decision {
    fn prefix() -> &'static str {
        "dec-"
    }
}

/// トラッキングメッセージのマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Message {}

impl IdMarker for Message {
    fn prefix() -> &'static str {
        "msg-"
    }
}

/// 追跡済みの決定を一意に識別する ID
pub type DecisionId = Id<Decision>;

/// トラッキングイベント 1 件ごとの ID
pub type MessageId = Id<Message>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_prefix() {
        let ulid = Ulid::new();
        let decision_id = DecisionId::from(ulid);
        let message_id = MessageId::from(ulid);

        assert_eq!(decision_id.to_string(), format!("dec-{ulid}"));
        assert_eq!(message_id.to_string(), format!("msg-{ulid}"));
    }

    #[test]
    fn parse_accepts_display_output() {
        let id = DecisionId::from(Ulid::new());
        let parsed: DecisionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_wrong_prefix() {
        let message_id = MessageId::from(Ulid::new()).to_string();
        let result = message_id.parse::<DecisionId>();
        assert!(matches!(result, Err(ParseIdError::MissingPrefix(_, "dec-"))));
    }

    #[test]
    fn parse_rejects_garbage() {
        let result = "dec-not-a-ulid".parse::<DecisionId>();
        assert!(matches!(result, Err(ParseIdError::InvalidUlid(_))));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = DecisionId::from(Ulid::new());
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));

        let back: DecisionId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }
}
