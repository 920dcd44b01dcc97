use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::domain::{Card, MeldId, SeatIndex};
use crate::engine::actions::{PlayerAction, PlayerActionKind};

/// Входящее сообщение клиента.
///
/// Комната и место не передаются: они известны из подключения
/// (`rooms::ConnectionContext`). Карты сопоставляются с рукой по `id`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Начать игру / следующий раунд.
    Start,

    DrawStock,

    DrawDiscard,

    OpenMeld { cards: Vec<Card> },

    AddToMeld { card: Card, meld_id: MeldId },

    Discard { card: Card },
}

impl ClientMessage {
    /// Разобрать сырой JSON. Любая ошибка разбора — `MalformedMessage`.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        serde_json::from_str(raw).map_err(|e| ApiError::MalformedMessage(e.to_string()))
    }

    /// Ход для движка. `Start` — команда уровня комнаты, не ход.
    pub fn into_action(self, seat: SeatIndex) -> Option<PlayerAction> {
        let kind = match self {
            ClientMessage::Start => return None,
            ClientMessage::DrawStock => PlayerActionKind::DrawStock,
            ClientMessage::DrawDiscard => PlayerActionKind::DrawDiscard,
            ClientMessage::OpenMeld { cards } => {
                PlayerActionKind::OpenMeld(cards.into_iter().map(|c| c.id).collect())
            }
            ClientMessage::AddToMeld { card, meld_id } => PlayerActionKind::AddToMeld {
                card: card.id,
                meld: meld_id,
            },
            ClientMessage::Discard { card } => PlayerActionKind::Discard(card.id),
        };

        Some(PlayerAction::new(seat, kind))
    }
}
