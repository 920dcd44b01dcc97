use serde::{Deserialize, Serialize};

use crate::domain::{Card, MeldId, MeldKind, SeatIndex};
use crate::engine::scoring::SeatPenalty;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundEventKind {
    /// Раунд разыгран: раздача с этим seed.
    RoundDealt {
        round_no: u32,
        seed: u32,
        bottom_card: Card,
        discard_top: Card,
        stock_len: usize,
    },

    DrewFromStock {
        seat: SeatIndex,
        card: Card,
    },

    DrewFromDiscard {
        seat: SeatIndex,
        card: Card,
    },

    MeldOpened {
        seat: SeatIndex,
        meld_id: MeldId,
        kind: MeldKind,
        cards: Vec<Card>,
    },

    AddedToMeld {
        seat: SeatIndex,
        meld_id: MeldId,
        card: Card,
    },

    Discarded {
        seat: SeatIndex,
        card: Card,
    },

    /// KÜNT: место сбросило последнюю карту.
    RoundFinished {
        winner: SeatIndex,
        penalties: Vec<SeatPenalty>,
    },

    PlayerEliminated {
        seat: SeatIndex,
        score: u32,
    },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда (для аудита и реплея).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&RoundEvent> {
        self.events.last()
    }
}
