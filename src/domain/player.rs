use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, CardId};
use crate::domain::SeatIndex;

/// Состояние игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    /// Место 0..3, фиксировано на весь раунд.
    pub seat: SeatIndex,
    /// Карты в руке. Порядок — только для отображения.
    pub hand: Vec<Card>,
    /// Накопленные штрафные очки по всем раундам.
    pub score: u32,
    /// Выбыл ли игрок (защёлка: однажды true — навсегда).
    pub eliminated: bool,
}

impl Player {
    pub fn new(seat: SeatIndex, hand: Vec<Card>) -> Self {
        Self {
            seat,
            hand,
            score: 0,
            eliminated: false,
        }
    }

    /// Позиция карты в руке по её id.
    pub fn hand_position(&self, id: CardId) -> Option<usize> {
        self.hand.iter().position(|c| c.id == id)
    }

    pub fn has_card(&self, id: CardId) -> bool {
        self.hand_position(id).is_some()
    }

    pub fn is_active(&self) -> bool {
        !self.eliminated
    }
}
