use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use pickwise_core::Givens;
use pickwise_core::app::ForwardLoop;
use pickwise_core::impls::{ChannelTracker, JsonLinesSink};
use pickwise_core::model::{DecisionModelBuilder, ModelConfig};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 1 回分の決定リクエスト
#[derive(Debug, Deserialize)]
struct DecisionRequest {
    variants: Vec<Value>,
    #[serde(default)]
    givens: Option<Givens>,
    #[serde(default)]
    reward: Option<f64>,
}

impl DecisionRequest {
    fn demo() -> Self {
        Self {
            variants: vec![json!("Hello"), json!("Hi"), json!("Hey there")],
            givens: Some([("lang", json!("en"))].into_iter().collect()),
            reward: Some(1.0),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// usage: pickwise-cli [request.json] [model-config.json]
///
/// tracking イベントは JSON lines で stdout に出る。ログは stderr。
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let request = match args.next() {
        Some(path) => read_json::<DecisionRequest>(Path::new(&path))?,
        None => DecisionRequest::demo(),
    };
    let config = match args.next() {
        Some(path) => read_json::<ModelConfig>(Path::new(&path))?,
        None => ModelConfig::new("greetings"),
    };
    if request.variants.is_empty() {
        bail!("request must contain at least one variant");
    }

    // (A) Tracker と配送ループを用意（stdout に JSON lines）
    let (tracker, rx) = ChannelTracker::channel();
    let forwarder = tokio::spawn(ForwardLoop::new(JsonLinesSink::new(std::io::stdout())).run(rx));

    // (B) モデルを構築
    let model = DecisionModelBuilder::from_config(config)
        .tracker(Arc::new(tracker))
        .build()
        .context("invalid model configuration")?;
    info!(model = %model.name(), "model ready");

    // (C) ranking → track → reward
    {
        let decision = model
            .given(request.givens.unwrap_or_default())
            .rank(request.variants)?;
        info!(best = %decision.best(), ranked = ?decision.ranked(), "decision made");

        let id = decision.track()?;
        info!(decision_id = %id, "decision tracked");

        if let Some(reward) = request.reward {
            decision.add_reward(reward)?;
        }
    }

    // (D) モデルを drop すると channel が閉じ、配送ループが終了する
    drop(model);
    let forwarded = forwarder.await.context("forward loop panicked")?;
    info!(forwarded, "done");
    Ok(())
}
