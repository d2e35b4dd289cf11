//! ModelName - モデル名の検証付き newtype
//!
//! 命名規約:
//! - 1〜64 文字
//! - 先頭は ASCII 英数字
//! - 2 文字目以降は ASCII 英数字または `_` `-` `.`

use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_LEN: usize = 64;

/// 検証済みのモデル名
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelName(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid model name '{0}': expected 1-64 chars of [A-Za-z0-9_.-] starting with a letter or digit")]
pub struct InvalidModelName(pub String);

impl ModelName {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidModelName> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(InvalidModelName(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        name.len() <= MAX_LEN
            && first.is_ascii_alphanumeric()
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    }
}

impl TryFrom<String> for ModelName {
    type Error = InvalidModelName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModelName> for String {
    fn from(name: ModelName) -> Self {
        name.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
