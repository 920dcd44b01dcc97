use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::meld::{Meld, MeldId};
use crate::domain::player::Player;
use crate::domain::SeatIndex;

/// Фаза хода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Игрок должен взять карту (из колоды или из сброса).
    Draw,
    /// Игрок выкладывает/дополняет комбинации и завершает ход сбросом.
    Meld,
    /// Раунд закончен (кто-то сбросил последнюю карту). Терминальная фаза.
    RoundEnd,
}

/// Полное состояние одного раунда.
///
/// Меняется только через операции `engine::RoundEngine`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundState {
    /// Номер раунда внутри игры (с 1).
    pub round_no: u32,

    /// Четыре игрока, индекс вектора = SeatIndex.
    pub players: Vec<Player>,

    /// Чей сейчас ход.
    pub turn_seat: SeatIndex,

    /// Верхняя карта сброса — единственная видимая и доступная.
    pub discard_top: Option<Card>,

    /// Карты, погребённые под верхней картой сброса. Никем не адресуются,
    /// хранятся только ради сохранения карт.
    pub discard_pile: Vec<Card>,

    /// Нижняя карта: задаёт джокеров раунда и не участвует в игре.
    pub bottom_card: Card,

    /// Колода для добора; следующая карта — первая в векторе.
    pub stock: Vec<Card>,

    /// Все открытые в раунде комбинации (всех игроков).
    pub melds: Vec<Meld>,

    pub phase: Phase,

    /// Открывал ли активный игрок комбинацию в этом ходу.
    pub opened_this_turn: bool,

    /// Взял карту из сброса — обязан открыть комбинацию до сброса.
    pub must_open_this_turn: bool,

    /// Победитель раунда (выставляется ровно при переходе в RoundEnd).
    pub winner: Option<SeatIndex>,

    /// Следующий свободный id комбинации.
    pub next_meld_id: MeldId,
}

impl RoundState {
    pub fn player(&self, seat: SeatIndex) -> Option<&Player> {
        self.players.get(seat as usize)
    }

    pub fn player_mut(&mut self, seat: SeatIndex) -> Option<&mut Player> {
        self.players.get_mut(seat as usize)
    }

    pub fn meld(&self, id: MeldId) -> Option<&Meld> {
        self.melds.iter().find(|m| m.id == id)
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::RoundEnd
    }

    /// Места невыбывших игроков по возрастанию.
    pub fn active_seats(&self) -> Vec<SeatIndex> {
        self.players
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.seat)
            .collect()
    }

    /// Сколько карт учтено в состоянии (включая нижнюю).
    /// Для корректного раунда всегда равно `CardId::POOL_SIZE` (104).
    pub fn card_count(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|p| p.hand.len()).sum();
        let in_melds: usize = self.melds.iter().map(|m| m.cards.len()).sum();

        self.stock.len()
            + in_hands
            + in_melds
            + self.discard_pile.len()
            + usize::from(self.discard_top.is_some())
            + 1
    }
}
