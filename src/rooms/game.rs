use tracing::info;

use crate::config::GameConfig;
use crate::domain::{RoomId, RoundState};
use crate::engine::positions::active_count;
use crate::engine::{apply_action, start_round, EngineError, PlayerAction, RoundEngine, RoundStatus};
use crate::infra::RngSeed;

/// Результат команды `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// Раунд ещё идёт: состояние не менялось, его просто рассылают заново.
    Unchanged,
    /// Разыгран новый раунд.
    Dealt,
}

/// Игра одной комнаты: базовый seed + движок текущего раунда.
///
/// Раунд 1 раздаётся базовым seed как есть, раунд N > 1 — seed,
/// выведенным из базового, id комнаты и N. Вся игра воспроизводима
/// по одному числу.
#[derive(Clone, Debug)]
pub struct RoomGame {
    pub room_id: RoomId,
    pub base_seed: RngSeed,
    pub config: GameConfig,
    pub engine: RoundEngine,
}

impl RoomGame {
    /// Новая игра: seed из конфига, иначе от текущего времени.
    pub fn new(room_id: impl Into<RoomId>, config: GameConfig) -> Result<Self, EngineError> {
        let base_seed = config
            .fixed_seed
            .map(RngSeed::from_u32)
            .unwrap_or_else(RngSeed::from_time);
        Self::with_seed(room_id, config, base_seed)
    }

    pub fn with_seed(
        room_id: impl Into<RoomId>,
        config: GameConfig,
        base_seed: RngSeed,
    ) -> Result<Self, EngineError> {
        let room_id = room_id.into();
        let engine = start_round(&config, base_seed.value, None)?;

        info!(room_id = %room_id, seed = base_seed.value, "game created");

        Ok(Self {
            room_id,
            base_seed,
            config,
            engine,
        })
    }

    pub fn state(&self) -> &RoundState {
        &self.engine.state
    }

    /// Не более одного активного игрока: следующий раунд невозможен.
    pub fn is_over(&self) -> bool {
        active_count(&self.engine.state.players) <= 1
    }

    /// Seed раунда `round_no` этой комнаты.
    pub fn round_seed(&self, round_no: u32) -> u32 {
        if round_no <= 1 {
            self.base_seed.value
        } else {
            self.base_seed.derive(&self.room_id, round_no).value
        }
    }

    /// Команда `start`.
    pub fn start_next_round(&mut self) -> Result<StartOutcome, EngineError> {
        if !self.engine.state.is_finished() {
            return Ok(StartOutcome::Unchanged);
        }
        if self.is_over() {
            return Err(EngineError::GameOver);
        }

        let seed = self.round_seed(self.engine.state.round_no + 1);
        self.engine = start_round(&self.config, seed, Some(&self.engine.state))?;

        Ok(StartOutcome::Dealt)
    }

    /// Ход игрока в текущем раунде.
    pub fn apply(&mut self, action: PlayerAction) -> Result<RoundStatus, EngineError> {
        apply_action(&mut self.engine, action)
    }
}
