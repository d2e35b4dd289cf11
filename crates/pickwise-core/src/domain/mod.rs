//! Domain model (IDs, givens, ranking, tracking events, errors).

pub mod errors;
pub mod events;
pub mod givens;
pub mod ids;
pub mod model_name;
pub mod ranking;

pub use self::errors::DecisionError;
pub use self::events::{DecisionEvent, RewardEvent, TrackEvent};
pub use self::givens::Givens;
pub use self::ids::{DecisionId, MessageId, ParseIdError};
pub use self::model_name::{InvalidModelName, ModelName};
pub use self::ranking::{Ranking, RankingError};
