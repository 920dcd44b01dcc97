use tracing::{debug, info};

use crate::config::GameConfig;
use crate::domain::{CardId, Meld, MeldId, Phase, Player, RoundState, SeatIndex};
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::dealing::initial_deal;
use crate::engine::errors::EngineError;
use crate::engine::positions::{active_count, first_active_seat, next_active_seat};
use crate::engine::round_history::{RoundEventKind, RoundHistory};
use crate::engine::scoring::{settle_round, RoundSummary};
use crate::engine::validation::{ensure_phase, ensure_turn, pick_cards, validate_action};
use crate::rules::classify_meld;

/// Статус раунда для внешнего кода.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    Ongoing,
    Finished(RoundSummary),
}

/// Движок одного раунда: состояние + история + итог.
///
/// Все операции атомарны: сначала проверяются все предусловия и правила,
/// и только потом состояние меняется целиком. Ошибка = состояние не тронуто.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    pub state: RoundState,
    pub history: RoundHistory,
    /// Seed, которым перемешана колода этого раунда.
    pub seed: u32,
    pub elimination_threshold: u32,
    /// Итоги, когда раунд закончен.
    pub summary: Option<RoundSummary>,
}

/// Новый раунд новой игры (счёт у всех 0) с правилами по умолчанию.
pub fn new_round(seed: u32) -> Result<RoundEngine, EngineError> {
    start_round(&GameConfig::default(), seed, None)
}

/// Старт раунда.
///
/// Если передан предыдущий раунд, он должен быть завершён: счёт и выбывание
/// переносятся, номер раунда увеличивается. Выбывшие всё равно получают руку
/// (раздача и учёт карт не зависят от выбываний), но ходов не делают.
pub fn start_round(
    config: &GameConfig,
    seed: u32,
    previous: Option<&RoundState>,
) -> Result<RoundEngine, EngineError> {
    if let Some(prev) = previous {
        if !prev.is_finished() {
            return Err(EngineError::RoundInProgress);
        }
        if active_count(&prev.players) <= 1 {
            return Err(EngineError::GameOver);
        }
    }

    let deal = initial_deal(seed, config.hand_size)?;

    let players: Vec<Player> = deal
        .hands
        .into_iter()
        .enumerate()
        .map(|(idx, hand)| {
            let mut player = Player::new(idx as SeatIndex, hand);
            if let Some(prev) = previous.and_then(|p| p.players.get(idx)) {
                player.score = prev.score;
                player.eliminated = prev.eliminated;
            }
            player
        })
        .collect();

    let turn_seat = first_active_seat(&players).ok_or(EngineError::GameOver)?;
    let round_no = previous.map(|p| p.round_no + 1).unwrap_or(1);

    let state = RoundState {
        round_no,
        players,
        turn_seat,
        discard_top: Some(deal.discard_top),
        discard_pile: Vec::new(),
        bottom_card: deal.bottom_card,
        stock: deal.stock,
        melds: Vec::new(),
        phase: Phase::Draw,
        opened_this_turn: false,
        must_open_this_turn: false,
        winner: None,
        next_meld_id: 1,
    };

    let mut history = RoundHistory::new();
    history.push(RoundEventKind::RoundDealt {
        round_no,
        seed,
        bottom_card: state.bottom_card,
        discard_top: deal.discard_top,
        stock_len: state.stock.len(),
    });

    info!(
        round_no,
        seed,
        bottom = %state.bottom_card,
        turn_seat,
        "round dealt"
    );

    Ok(RoundEngine {
        state,
        history,
        seed,
        elimination_threshold: config.elimination_threshold,
        summary: None,
    })
}

impl RoundEngine {
    /// Обернуть готовое состояние (фикстуры, восстановление).
    pub fn from_state(state: RoundState, elimination_threshold: u32) -> Self {
        Self {
            state,
            history: RoundHistory::new(),
            seed: 0,
            elimination_threshold,
            summary: None,
        }
    }

    /// Взять верхнюю карту колоды.
    pub fn draw_from_stock(&mut self, seat: SeatIndex) -> Result<RoundStatus, EngineError> {
        ensure_turn(&self.state, seat)?;
        ensure_phase(&self.state, Phase::Draw)?;
        if self.state.stock.is_empty() {
            return Err(EngineError::StockEmpty);
        }

        let card = self.state.stock.remove(0);
        self.state.players[seat as usize].hand.push(card);
        self.state.phase = Phase::Meld;
        self.state.opened_this_turn = false;

        self.history
            .push(RoundEventKind::DrewFromStock { seat, card });
        debug!(seat, card = %card, "drew from stock");

        Ok(RoundStatus::Ongoing)
    }

    /// Взять верхнюю карту сброса. После этого сбросить карту можно только
    /// открыв хотя бы одну комбинацию.
    pub fn draw_from_discard(&mut self, seat: SeatIndex) -> Result<RoundStatus, EngineError> {
        ensure_turn(&self.state, seat)?;
        ensure_phase(&self.state, Phase::Draw)?;
        let card = self
            .state
            .discard_top
            .ok_or(EngineError::NoDiscardAvailable)?;

        self.state.players[seat as usize].hand.push(card);
        // Погребённые карты сброса недоступны: верх пуст до следующего сброса
        self.state.discard_top = None;
        self.state.phase = Phase::Meld;
        self.state.opened_this_turn = false;
        self.state.must_open_this_turn = true;

        self.history
            .push(RoundEventKind::DrewFromDiscard { seat, card });
        debug!(seat, card = %card, "drew from discard");

        Ok(RoundStatus::Ongoing)
    }

    /// Открыть новую комбинацию из карт руки (порядок — как прислал игрок).
    pub fn open_meld(
        &mut self,
        seat: SeatIndex,
        card_ids: &[CardId],
    ) -> Result<RoundStatus, EngineError> {
        ensure_turn(&self.state, seat)?;
        ensure_phase(&self.state, Phase::Meld)?;

        let hand = &self.state.players[seat as usize].hand;
        let picked = pick_cards(hand, card_ids)?;
        let kind =
            classify_meld(&picked, &self.state.bottom_card).ok_or(EngineError::InvalidMeld)?;
        if picked.len() == hand.len() {
            return Err(EngineError::LastCardMustBeDiscarded);
        }

        let remaining = hand
            .iter()
            .filter(|c| !card_ids.contains(&c.id))
            .copied()
            .collect();

        let meld_id = self.state.next_meld_id;
        self.state.next_meld_id += 1;
        self.state.players[seat as usize].hand = remaining;
        self.state.melds.push(Meld {
            id: meld_id,
            owner: seat,
            kind,
            cards: picked.clone(),
        });
        self.state.opened_this_turn = true;
        self.state.must_open_this_turn = false;

        self.history.push(RoundEventKind::MeldOpened {
            seat,
            meld_id,
            kind,
            cards: picked,
        });
        debug!(seat, meld_id, ?kind, "meld opened");

        Ok(RoundStatus::Ongoing)
    }

    /// Добавить карту к любой открытой комбинации.
    ///
    /// Пробная комбинация = карты комбинации + карта; применяется только
    /// если пробная комбинация валидна.
    pub fn add_to_meld(
        &mut self,
        seat: SeatIndex,
        card_id: CardId,
        meld_id: MeldId,
    ) -> Result<RoundStatus, EngineError> {
        ensure_turn(&self.state, seat)?;
        ensure_phase(&self.state, Phase::Meld)?;

        let player = &self.state.players[seat as usize];
        let pos = player
            .hand_position(card_id)
            .ok_or(EngineError::CardNotInHand(card_id))?;
        let meld_idx = self
            .state
            .melds
            .iter()
            .position(|m| m.id == meld_id)
            .ok_or(EngineError::TargetMeldNotFound(meld_id))?;

        let card = player.hand[pos];
        let mut trial = self.state.melds[meld_idx].cards.clone();
        trial.push(card);

        let kind =
            classify_meld(&trial, &self.state.bottom_card).ok_or(EngineError::InvalidMeld)?;
        if player.hand.len() == 1 {
            return Err(EngineError::LastCardMustBeDiscarded);
        }

        let meld = &mut self.state.melds[meld_idx];
        meld.cards = trial;
        meld.kind = kind;
        self.state.players[seat as usize].hand.remove(pos);

        self.history.push(RoundEventKind::AddedToMeld {
            seat,
            meld_id,
            card,
        });
        debug!(seat, meld_id, card = %card, "card added to meld");

        Ok(RoundStatus::Ongoing)
    }

    /// Сбросить карту. Пустая рука после сброса — KÜNT: раунд окончен,
    /// начисляются штрафы. Иначе ход переходит к следующему активному месту.
    pub fn discard(&mut self, seat: SeatIndex, card_id: CardId) -> Result<RoundStatus, EngineError> {
        ensure_turn(&self.state, seat)?;
        ensure_phase(&self.state, Phase::Meld)?;
        if self.state.must_open_this_turn {
            return Err(EngineError::MustOpenBeforeDiscard);
        }

        let pos = self.state.players[seat as usize]
            .hand_position(card_id)
            .ok_or(EngineError::CardNotInHand(card_id))?;
        let next_seat = next_active_seat(&self.state.players, seat)
            .ok_or(EngineError::Internal("no active seat to pass the turn to"))?;

        let card = self.state.players[seat as usize].hand.remove(pos);
        if let Some(buried) = self.state.discard_top.replace(card) {
            self.state.discard_pile.push(buried);
        }

        self.history.push(RoundEventKind::Discarded { seat, card });
        debug!(seat, card = %card, "discarded");

        if self.state.players[seat as usize].hand.is_empty() {
            let summary = self.finish_round(seat);
            return Ok(RoundStatus::Finished(summary));
        }

        self.state.turn_seat = next_seat;
        self.state.phase = Phase::Draw;
        self.state.opened_this_turn = false;

        Ok(RoundStatus::Ongoing)
    }

    /// Завершение раунда: штрафы, выбывание, фаза RoundEnd.
    fn finish_round(&mut self, winner: SeatIndex) -> RoundSummary {
        let summary = settle_round(&mut self.state, winner, self.elimination_threshold);

        self.state.phase = Phase::RoundEnd;
        self.state.winner = Some(winner);
        self.state.opened_this_turn = false;
        self.state.must_open_this_turn = false;

        self.history.push(RoundEventKind::RoundFinished {
            winner,
            penalties: summary.penalties.clone(),
        });
        for &seat in &summary.newly_eliminated {
            let score = self.state.players[seat as usize].score;
            self.history
                .push(RoundEventKind::PlayerEliminated { seat, score });
            info!(seat, score, "player eliminated");
        }

        info!(
            round_no = summary.round_no,
            winner,
            penalties = ?summary.penalties,
            "round finished (KÜNT)"
        );

        self.summary = Some(summary.clone());
        summary
    }
}

/// Применить ход игрока. Возвращает статус раунда (идёт / закончился).
pub fn apply_action(
    engine: &mut RoundEngine,
    action: PlayerAction,
) -> Result<RoundStatus, EngineError> {
    validate_action(&engine.state, action.seat, &action.kind)?;

    match action.kind {
        PlayerActionKind::DrawStock => engine.draw_from_stock(action.seat),
        PlayerActionKind::DrawDiscard => engine.draw_from_discard(action.seat),
        PlayerActionKind::OpenMeld(cards) => engine.open_meld(action.seat, &cards),
        PlayerActionKind::AddToMeld { card, meld } => {
            engine.add_to_meld(action.seat, card, meld)
        }
        PlayerActionKind::Discard(card) => engine.discard(action.seat, card),
    }
}
