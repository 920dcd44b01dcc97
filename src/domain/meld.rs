use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::SeatIndex;

/// Стабильный идентификатор комбинации внутри раунда.
pub type MeldId = u32;

/// Вид комбинации.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MeldKind {
    /// Пер: один ранг, разные масти.
    Per,
    /// Серия: одна масть, ранги подряд.
    Seri,
}

/// Выложенная на стол комбинация.
///
/// После валидации меняется только одним способом — добавлением карты
/// через `add_to_meld`, которое валидирует комбинацию заново.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meld {
    pub id: MeldId,
    pub owner: SeatIndex,
    /// Вид по последней успешной валидации.
    pub kind: MeldKind,
    pub cards: Vec<Card>,
}

impl Meld {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
