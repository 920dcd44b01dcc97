use crate::api::dto::{MeldDto, PlayerDto, RoundSummaryDto, RoundViewDto};
use crate::domain::round::RoundState;
use crate::domain::{Meld, Player};
use crate::engine::positions::active_count;
use crate::engine::scoring::RoundSummary;
use crate::rules::hand_penalty;

/// Маппинг игрока в DTO. Штраф руки считается от нижней карты раунда.
pub fn map_player_to_dto(player: &Player, state: &RoundState) -> PlayerDto {
    PlayerDto {
        seat: player.seat,
        hand: player.hand.clone(),
        hand_count: player.hand.len(),
        hand_penalty: hand_penalty(&player.hand, &state.bottom_card),
        score: player.score,
        eliminated: player.eliminated,
    }
}

pub fn map_meld_to_dto(meld: &Meld) -> MeldDto {
    MeldDto {
        id: meld.id,
        owner: meld.owner,
        kind: meld.kind,
        cards: meld.cards.clone(),
    }
}

/// Утилита: маппинг RoundState -> RoundViewDto (полный снимок для рассылки).
pub fn map_round_to_dto(room_id: &str, state: &RoundState) -> RoundViewDto {
    RoundViewDto {
        room_id: room_id.to_string(),
        round_no: state.round_no,
        players: state
            .players
            .iter()
            .map(|p| map_player_to_dto(p, state))
            .collect(),
        turn_seat: state.turn_seat,
        discard_top: state.discard_top,
        discard_buried: state.discard_pile.len(),
        bottom_card: state.bottom_card,
        stock: state.stock.clone(),
        stock_count: state.stock.len(),
        melds: state.melds.iter().map(map_meld_to_dto).collect(),
        phase: state.phase,
        opened_this_turn: state.opened_this_turn,
        must_open_this_turn: state.must_open_this_turn,
        winner: state.winner,
    }
}

/// Итоги раунда -> DTO. `game_over` берётся из состояния после начисления.
pub fn map_summary_to_dto(summary: &RoundSummary, state: &RoundState) -> RoundSummaryDto {
    RoundSummaryDto {
        round_no: summary.round_no,
        winner: summary.winner,
        penalties: summary.penalties.clone(),
        newly_eliminated: summary.newly_eliminated.clone(),
        game_over: active_count(&state.players) <= 1,
    }
}
