use crate::domain::{CardId, MeldId, Phase, SeatIndex};

use thiserror::Error;

/// Ошибки движка раунда. Любая ошибка означает, что состояние не изменилось.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Места {0} нет за столом")]
    InvalidSeat(SeatIndex),

    #[error("Сейчас не ход места {seat} (ходит место {turn_seat})")]
    NotYourTurn {
        seat: SeatIndex,
        turn_seat: SeatIndex,
    },

    #[error("Действие недопустимо в фазе {actual:?}")]
    WrongPhase { actual: Phase },

    #[error("Карта взята из сброса: сначала нужно открыть комбинацию")]
    MustOpenBeforeDiscard,

    #[error("Карты {0} нет в руке")]
    CardNotInHand(CardId),

    #[error("Выбранные карты не совпадают с картами в руке")]
    CardsDoNotMatchHand,

    #[error("Карты не образуют ни пер, ни серию")]
    InvalidMeld,

    #[error("Комбинация {0} не найдена")]
    TargetMeldNotFound(MeldId),

    #[error("Колода для добора пуста")]
    StockEmpty,

    #[error("В сбросе нет карты")]
    NoDiscardAvailable,

    #[error("Последнюю карту нужно сбросить, а не выложить")]
    LastCardMustBeDiscarded,

    #[error("Раунд ещё не завершён")]
    RoundInProgress,

    #[error("Игра окончена: за столом остался один игрок")]
    GameOver,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}

impl EngineError {
    /// Стабильный код ошибки для клиента.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidSeat(_) => "INVALID_SEAT",
            EngineError::NotYourTurn { .. } => "NOT_YOUR_TURN",
            EngineError::WrongPhase { .. } => "WRONG_PHASE",
            EngineError::MustOpenBeforeDiscard => "MUST_OPEN_BEFORE_DISCARD",
            EngineError::CardNotInHand(_) => "CARD_NOT_IN_HAND",
            EngineError::CardsDoNotMatchHand => "CARDS_DO_NOT_MATCH_HAND",
            EngineError::InvalidMeld => "INVALID_MELD",
            EngineError::TargetMeldNotFound(_) => "TARGET_MELD_NOT_FOUND",
            EngineError::StockEmpty => "STOCK_EMPTY",
            EngineError::NoDiscardAvailable => "NO_DISCARD_AVAILABLE",
            EngineError::LastCardMustBeDiscarded => "LAST_CARD_MUST_BE_DISCARDED",
            EngineError::RoundInProgress => "ROUND_IN_PROGRESS",
            EngineError::GameOver => "GAME_OVER",
            EngineError::Internal(_) => "INTERNAL",
        }
    }
}
