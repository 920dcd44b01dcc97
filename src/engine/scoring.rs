use serde::{Deserialize, Serialize};

use crate::domain::{RoundState, SeatIndex};
use crate::rules::hand_penalty;

/// Штраф одного места по итогам раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatPenalty {
    pub seat: SeatIndex,
    /// Штраф за карты, оставшиеся в руке.
    pub penalty: u32,
    /// Накопленный счёт после начисления.
    pub total: u32,
}

/// Итоги завершённого раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub round_no: u32,
    /// Место, сбросившее последнюю карту (KÜNT).
    pub winner: SeatIndex,
    /// Штрафы всех, кроме победителя и ранее выбывших.
    pub penalties: Vec<SeatPenalty>,
    /// Кто выбыл именно в этом раунде.
    pub newly_eliminated: Vec<SeatIndex>,
}

/// Начислить штрафы и отметить выбывших.
///
/// Победитель и ранее выбывшие пропускаются. Выбывание проверяется один раз,
/// здесь, а не по ходу раунда.
pub fn settle_round(state: &mut RoundState, winner: SeatIndex, threshold: u32) -> RoundSummary {
    let bottom = state.bottom_card;
    let mut penalties = Vec::new();
    let mut newly_eliminated = Vec::new();

    for player in state.players.iter_mut() {
        if player.seat == winner || player.eliminated {
            continue;
        }

        let penalty = hand_penalty(&player.hand, &bottom);
        player.score += penalty;

        if player.score >= threshold {
            player.eliminated = true;
            newly_eliminated.push(player.seat);
        }

        penalties.push(SeatPenalty {
            seat: player.seat,
            penalty,
            total: player.score,
        });
    }

    RoundSummary {
        round_no: state.round_no,
        winner,
        penalties,
        newly_eliminated,
    }
}
