use serde::{Deserialize, Serialize};

use crate::domain::{CardId, MeldId, SeatIndex};

/// Тип хода игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    /// Взять верхнюю карту колоды.
    DrawStock,
    /// Взять верхнюю карту сброса (обязывает открыть комбинацию в этом ходу).
    DrawDiscard,
    /// Открыть новую комбинацию из карт руки.
    OpenMeld(Vec<CardId>),
    /// Добавить одну карту к существующей комбинации.
    AddToMeld { card: CardId, meld: MeldId },
    /// Сбросить карту и завершить ход.
    Discard(CardId),
}

/// Конкретный ход игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// С какого места пришёл ход.
    pub seat: SeatIndex,
    pub kind: PlayerActionKind,
}

impl PlayerAction {
    pub fn new(seat: SeatIndex, kind: PlayerActionKind) -> Self {
        Self { seat, kind }
    }
}
