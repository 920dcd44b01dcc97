// src/bin/kunt_dev_cli.rs

use rand::seq::SliceRandom;

use kunt_engine::config::GameConfig;
use kunt_engine::domain::{Card, CardId, MeldId, Phase, RoundState, SeatIndex};
use kunt_engine::engine::{EngineError, PlayerAction, PlayerActionKind, RoundStatus};
use kunt_engine::infra::{Mulberry32, RngSeed};
use kunt_engine::rooms::{RoomGame, StartOutcome};
use kunt_engine::rules::{card_penalty, classify_meld};
use kunt_engine::telemetry::init_tracing;

/// Ограничители, чтобы зациклившийся раунд не крутился вечно.
const MAX_TURNS_PER_ROUND: usize = 600;
const MAX_ROUNDS_PER_GAME: u32 = 40;

fn main() {
    init_tracing();

    let config = GameConfig::from_env();
    let games: u32 = std::env::var("KUNT_GAMES")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(1);
    let base = config
        .fixed_seed
        .map(RngSeed::from_u32)
        .unwrap_or_else(RngSeed::from_time);

    println!("kunt_dev_cli: {games} игр(ы), базовый seed = {}", base.value);

    for game_no in 0..games {
        let seed = RngSeed::from_u32(base.value.wrapping_add(game_no));
        let room_id = format!("dev-{game_no}");
        if let Err(err) = play_game(&room_id, config.clone(), seed) {
            println!("[CLI] игра {room_id} прервана: {err}");
        }
    }

    println!("[CLI] Завершение работы dev-CLI.");
}

/// Одна игра: раунды до выбывания всех, кроме одного.
fn play_game(room_id: &str, config: GameConfig, seed: RngSeed) -> Result<(), EngineError> {
    println!();
    println!("================ GAME {room_id} (seed {}) =================", seed.value);

    let mut game = RoomGame::with_seed(room_id, config, seed)?;
    let mut bot_rng = Mulberry32::new(seed.value);

    loop {
        let state = game.state();
        println!();
        println!(
            "------ ROUND {} | нижняя карта {} | seed {} ------",
            state.round_no, state.bottom_card, game.engine.seed
        );

        if !play_round(&mut game, &mut bot_rng)? {
            println!("[CLI] раунд {} застрял, игра остановлена", game.state().round_no);
            return Ok(());
        }

        print_scores(game.state());

        if game.is_over() {
            let survivor = game.state().active_seats();
            println!("[CLI] Игра окончена. Остались: {survivor:?}");
            return Ok(());
        }
        if game.state().round_no >= MAX_ROUNDS_PER_GAME {
            println!("[CLI] лимит раундов, игра остановлена");
            return Ok(());
        }

        match game.start_next_round()? {
            StartOutcome::Dealt => {}
            StartOutcome::Unchanged => return Err(EngineError::Internal("round still running")),
        }
    }
}

/// Возвращает false, если раунд не удалось довести до KÜNT.
fn play_round(game: &mut RoomGame, rng: &mut Mulberry32) -> Result<bool, EngineError> {
    for _turn in 0..MAX_TURNS_PER_ROUND {
        let seat = game.state().turn_seat;

        if !take_card(game, seat)? {
            return Ok(false);
        }

        meld_everything(game, seat)?;

        let card = pick_discard(game.state(), seat, rng)
            .ok_or(EngineError::Internal("bot has nothing to discard"))?;
        let status = game.apply(PlayerAction::new(seat, PlayerActionKind::Discard(card)))?;
        println!("  место {seat}: сброс {}", describe(game.state(), card));

        if let RoundStatus::Finished(summary) = status {
            println!("  KÜNT! место {} сбросило последнюю карту", summary.winner);
            for p in &summary.penalties {
                println!("    место {}: +{} (итого {})", p.seat, p.penalty, p.total);
            }
            for seat in &summary.newly_eliminated {
                println!("    место {seat} выбывает");
            }
            return Ok(true);
        }
    }

    Ok(false)
}

/// Добор: из колоды, а если она пуста — из сброса (только если сразу
/// получится открыть комбинацию).
fn take_card(game: &mut RoomGame, seat: SeatIndex) -> Result<bool, EngineError> {
    let state = game.state();
    if !state.stock.is_empty() {
        game.apply(PlayerAction::new(seat, PlayerActionKind::DrawStock))?;
        return Ok(true);
    }

    let Some(top) = state.discard_top else {
        return Ok(false);
    };
    let mut hand = state.players[seat as usize].hand.clone();
    hand.push(top);
    if find_meld(&hand, &state.bottom_card).is_none() {
        return Ok(false);
    }

    game.apply(PlayerAction::new(seat, PlayerActionKind::DrawDiscard))?;
    println!("  место {seat}: берёт {top} из сброса");
    Ok(true)
}

/// Открыть всё, что открывается, и докинуть карты к чужим комбинациям.
fn meld_everything(game: &mut RoomGame, seat: SeatIndex) -> Result<(), EngineError> {
    loop {
        let state = game.state();
        let hand = &state.players[seat as usize].hand;
        let Some(ids) = find_meld(hand, &state.bottom_card) else {
            break;
        };
        game.apply(PlayerAction::new(seat, PlayerActionKind::OpenMeld(ids.clone())))?;
        let shown: Vec<String> = ids.iter().map(|id| describe(game.state(), *id)).collect();
        println!("  место {seat}: открывает [{}]", shown.join(" "));
    }

    while let Some((card, meld_id)) = find_addition(game.state(), seat) {
        game.apply(PlayerAction::new(
            seat,
            PlayerActionKind::AddToMeld {
                card: card.id,
                meld: meld_id,
            },
        ))?;
        println!("  место {seat}: добавляет {card} к комбинации {meld_id}");
    }

    Ok(())
}

/// Карта руки, которую можно добавить к какой-нибудь комбинации на столе.
fn find_addition(state: &RoundState, seat: SeatIndex) -> Option<(Card, MeldId)> {
    let hand = &state.players[seat as usize].hand;
    if hand.len() <= 1 {
        return None;
    }
    hand.iter().find_map(|card| {
        state
            .melds
            .iter()
            .find(|meld| {
                let mut trial = meld.cards.clone();
                trial.push(*card);
                classify_meld(&trial, &state.bottom_card).is_some()
            })
            .map(|meld| (*card, meld.id))
    })
}

/// Первая валидная тройка из руки, не опустошающая руку.
fn find_meld(hand: &[Card], bottom: &Card) -> Option<Vec<CardId>> {
    if hand.len() < 4 {
        return None;
    }
    for a in 0..hand.len() {
        for b in (a + 1)..hand.len() {
            for c in (b + 1)..hand.len() {
                let trial = [hand[a], hand[b], hand[c]];
                if classify_meld(&trial, bottom).is_some() {
                    return Some(trial.iter().map(|card| card.id).collect());
                }
            }
        }
    }
    None
}

/// Сбросить самую дорогую карту; при равенстве — случайную из них.
fn pick_discard(state: &RoundState, seat: SeatIndex, rng: &mut Mulberry32) -> Option<CardId> {
    if state.phase != Phase::Meld {
        return None;
    }
    let hand = &state.players[seat as usize].hand;
    let worst = hand
        .iter()
        .map(|c| card_penalty(c, &state.bottom_card))
        .max()?;
    let candidates: Vec<&Card> = hand
        .iter()
        .filter(|c| card_penalty(c, &state.bottom_card) == worst)
        .collect();
    candidates.choose(rng).map(|c| c.id)
}

fn describe(state: &RoundState, id: CardId) -> String {
    state
        .players
        .iter()
        .flat_map(|p| p.hand.iter())
        .chain(state.melds.iter().flat_map(|m| m.cards.iter()))
        .chain(state.discard_top.iter())
        .find(|c| c.id == id)
        .map(|c| c.to_string())
        .unwrap_or_else(|| id.to_string())
}

fn print_scores(state: &RoundState) {
    println!("  счёт после раунда {}:", state.round_no);
    for p in &state.players {
        let mark = if p.eliminated { " (выбыл)" } else { "" };
        println!("    место {}: {}{}", p.seat, p.score, mark);
    }
}
