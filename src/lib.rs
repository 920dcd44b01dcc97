//! Серверный движок карточной игры KÜNT: четыре места, две колоды,
//! джокеры по нижней карте, выбывание по порогу штрафных очков.
//!
//! Слои:
//!   - `domain` — карты, колода, игроки, комбинации, состояние раунда;
//!   - `rules` — чистые правила: джокер, пер/серия, штрафы;
//!   - `engine` — машина состояний хода и итоги раунда;
//!   - `rooms` — реестр комнат и рассылка состояния;
//!   - `api` — входящие/исходящие сообщения и DTO;
//!   - `infra` — RNG, seed, ID, маппинги.

pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod rooms;
pub mod rules;
pub mod telemetry;

pub use config::GameConfig;
pub use engine::{apply_action, new_round, start_round, EngineError, RoundEngine, RoundStatus};
pub use rooms::RoomRegistry;
