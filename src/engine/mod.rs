//! Движок раунда KÜNT: раздача, ходы, завершение раунда и штрафы.
//!
//! Высокоуровневый объект: `RoundEngine`
//! Основные операции:
//!   - `start_round` / `new_round` – раздать новый раунд
//!   - `apply_action` – применить ход игрока
//!   - `settle_round` – штрафы и выбывание (вызывается движком на KÜNT)

pub mod actions;
pub mod dealing;
pub mod errors;
pub mod game_loop;
pub mod positions;
pub mod round_history;
pub mod scoring;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind};
pub use dealing::{initial_deal, initial_deal_with, InitialDeal};
pub use errors::EngineError;
pub use game_loop::{apply_action, new_round, start_round, RoundEngine, RoundStatus};
pub use round_history::{RoundEvent, RoundEventKind, RoundHistory};
pub use scoring::{settle_round, RoundSummary, SeatPenalty};

/// RNG интерфейс для engine.
/// Реализация – `infra::rng::DeterministicRng` (Mulberry32).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
