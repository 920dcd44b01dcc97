use std::collections::HashSet;

use crate::domain::{Card, CardId, Phase, RoundState, SeatIndex};
use crate::engine::actions::PlayerActionKind;
use crate::engine::errors::EngineError;

/// Место существует за столом.
pub fn ensure_seat(state: &RoundState, seat: SeatIndex) -> Result<(), EngineError> {
    if (seat as usize) < state.players.len() {
        Ok(())
    } else {
        Err(EngineError::InvalidSeat(seat))
    }
}

/// Раунд идёт, и сейчас ход именно этого места.
/// После RoundEnd любой ход — `WrongPhase`, чей бы он ни был.
pub fn ensure_turn(state: &RoundState, seat: SeatIndex) -> Result<(), EngineError> {
    ensure_seat(state, seat)?;
    if state.is_finished() {
        return Err(EngineError::WrongPhase {
            actual: state.phase,
        });
    }
    if state.turn_seat == seat {
        Ok(())
    } else {
        Err(EngineError::NotYourTurn {
            seat,
            turn_seat: state.turn_seat,
        })
    }
}

pub fn ensure_phase(state: &RoundState, expected: Phase) -> Result<(), EngineError> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(EngineError::WrongPhase {
            actual: state.phase,
        })
    }
}

/// Общие предусловия хода: очередь и фаза.
/// Остальное (наличие карт, правила) проверяет сама операция.
pub fn validate_action(
    state: &RoundState,
    seat: SeatIndex,
    action: &PlayerActionKind,
) -> Result<(), EngineError> {
    ensure_turn(state, seat)?;

    let expected = match action {
        PlayerActionKind::DrawStock | PlayerActionKind::DrawDiscard => Phase::Draw,
        PlayerActionKind::OpenMeld(_)
        | PlayerActionKind::AddToMeld { .. }
        | PlayerActionKind::Discard(_) => Phase::Meld,
    };
    ensure_phase(state, expected)
}

/// Выбрать из руки карты с заданными id в порядке запроса.
///
/// Каждый id должен встречаться в руке и в запросе ровно один раз.
pub fn pick_cards(hand: &[Card], ids: &[CardId]) -> Result<Vec<Card>, EngineError> {
    let mut seen = HashSet::with_capacity(ids.len());
    let mut picked = Vec::with_capacity(ids.len());

    for id in ids {
        if !seen.insert(*id) {
            return Err(EngineError::CardsDoNotMatchHand);
        }
        let card = hand
            .iter()
            .find(|c| c.id == *id)
            .ok_or(EngineError::CardsDoNotMatchHand)?;
        picked.push(*card);
    }

    Ok(picked)
}
