use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::{MeldId, MeldKind, Phase, RoomId, SeatIndex};
use crate::engine::scoring::SeatPenalty;

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDto {
    pub seat: SeatIndex,
    pub hand: Vec<Card>,
    pub hand_count: usize,
    /// Штраф, если бы раунд закончился сейчас.
    pub hand_penalty: u32,
    pub score: u32,
    pub eliminated: bool,
}

/// DTO выложенной комбинации.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeldDto {
    pub id: MeldId,
    pub owner: SeatIndex,
    pub kind: MeldKind,
    pub cards: Vec<Card>,
}

/// Полный снимок раунда, рассылаемый всем в комнате.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundViewDto {
    pub room_id: RoomId,
    pub round_no: u32,
    pub players: Vec<PlayerDto>,
    pub turn_seat: SeatIndex,
    pub discard_top: Option<Card>,
    /// Сколько карт погребено под верхней картой сброса.
    pub discard_buried: usize,
    pub bottom_card: Card,
    pub stock: Vec<Card>,
    pub stock_count: usize,
    pub melds: Vec<MeldDto>,
    pub phase: Phase,
    pub opened_this_turn: bool,
    pub must_open_this_turn: bool,
    pub winner: Option<SeatIndex>,
}

/// Итоги раунда для клиента.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummaryDto {
    pub round_no: u32,
    pub winner: SeatIndex,
    pub penalties: Vec<SeatPenalty>,
    pub newly_eliminated: Vec<SeatIndex>,
    /// Игра окончена: активным остался не более чем один игрок.
    pub game_over: bool,
}

/// Исходящее сообщение сервера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Актуальное состояние после успешного хода / при подключении.
    State { state: RoundViewDto },

    /// Ход завершил раунд (KÜNT).
    RoundEnd {
        state: RoundViewDto,
        summary: RoundSummaryDto,
    },

    /// Ошибка — только инициатору хода.
    Error { code: String, message: String },
}

impl ServerMessage {
    pub fn to_json(&self) -> String {
        // Все поля сериализуемы без ошибок (нет map с нестроковыми ключами)
        serde_json::to_string(self).unwrap_or_default()
    }
}
