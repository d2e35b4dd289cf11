//! ModelConfig - JSON で読み込むモデル設定
//!
//! ```json
//! {
//!   "model_name": "greetings",
//!   "max_runners_up": 10,
//!   "givens": { "platform": "linux" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::tracking::DEFAULT_MAX_RUNNERS_UP;
use crate::domain::Givens;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model_name: String,

    /// decision event に含める runners-up の上限
    #[serde(default = "default_max_runners_up")]
    pub max_runners_up: usize,

    /// すべての決定に共通で付与する givens
    #[serde(default)]
    pub givens: Givens,
}

fn default_max_runners_up() -> usize {
    DEFAULT_MAX_RUNNERS_UP
}

impl ModelConfig {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            max_runners_up: DEFAULT_MAX_RUNNERS_UP,
            givens: Givens::new(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_apply_when_fields_are_missing() {
        let config = ModelConfig::from_json(r#"{ "model_name": "greetings" }"#).unwrap();
        assert_eq!(config, ModelConfig::new("greetings"));
    }

    #[test]
    fn reads_all_fields() {
        let config = ModelConfig::from_json(
            r#"{ "model_name": "themes", "max_runners_up": 3, "givens": { "platform": "linux" } }"#,
        )
        .unwrap();

        assert_eq!(config.model_name, "themes");
        assert_eq!(config.max_runners_up, 3);
        assert_eq!(config.givens.get("platform"), Some(&json!("linux")));
    }
}
