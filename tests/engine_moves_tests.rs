// tests/engine_moves_tests.rs
//
// Успешные ходы движка раунда:
//  1) добор из колоды
//  2) добор из сброса (взводит must_open_this_turn)
//  3) открытие комбинации (порядок карт — как прислал игрок)
//  4) добавление к чужой комбинации, смена вида комбинации
//  5) сброс и передача хода (с пропуском выбывших)
//  6) apply_action и рост истории

use std::str::FromStr;

use kunt_engine::domain::{Card, MeldKind, Phase, Player, RoundState};
use kunt_engine::engine::{
    apply_action, PlayerAction, PlayerActionKind, RoundEngine, RoundEventKind, RoundStatus,
};

// -----------------------------
// ВСПОМОГАТЕЛЬНЫЕ КОНСТРУКТОРЫ
// -----------------------------

fn c(s: &str) -> Card {
    Card::from_str(s).expect("valid card literal")
}

fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| c(s)).collect()
}

/// Раунд из заданных рук. Ходит место 0, фаза Draw.
fn fixture(hands: [&[&str]; 4], bottom: &str, discard: Option<&str>, stock: &[&str]) -> RoundEngine {
    let players = hands
        .iter()
        .enumerate()
        .map(|(seat, hand)| Player::new(seat as u8, cards(hand)))
        .collect();

    let state = RoundState {
        round_no: 1,
        players,
        turn_seat: 0,
        discard_top: discard.map(c),
        discard_pile: Vec::new(),
        bottom_card: c(bottom),
        stock: cards(stock),
        melds: Vec::new(),
        phase: Phase::Draw,
        opened_this_turn: false,
        must_open_this_turn: false,
        winner: None,
        next_meld_id: 1,
    };

    RoundEngine::from_state(state, 101)
}

fn standard() -> RoundEngine {
    fixture(
        [
            &["5h", "5d", "5c", "9s", "Kh"],
            &["5s", "6h", "Jc", "Jd"],
            &["2c", "3c", "8d", "8h"],
            &["Tc", "Td", "Ah", "4s"],
        ],
        "Qh",
        Some("7h"),
        &["Kc", "2d", "3d", "4d"],
    )
}

// -----------------------------
// ДОБОР
// -----------------------------

#[test]
fn draw_from_stock_takes_front_card() {
    let mut e = standard();

    let status = e.draw_from_stock(0).unwrap();

    assert_eq!(status, RoundStatus::Ongoing);
    assert_eq!(e.state.phase, Phase::Meld);
    assert!(e.state.players[0].has_card(c("Kc").id));
    assert_eq!(e.state.players[0].hand.len(), 6);
    assert_eq!(e.state.stock, cards(&["2d", "3d", "4d"]));
    assert!(!e.state.must_open_this_turn);
    assert_eq!(e.state.discard_top, Some(c("7h")));
}

#[test]
fn draw_from_discard_sets_must_open() {
    let mut e = standard();

    e.draw_from_discard(0).unwrap();

    assert_eq!(e.state.phase, Phase::Meld);
    assert!(e.state.players[0].has_card(c("7h").id));
    assert_eq!(e.state.discard_top, None);
    assert!(e.state.must_open_this_turn);
    assert!(!e.state.opened_this_turn);
    assert_eq!(e.state.stock.len(), 4, "stock untouched");
}

// -----------------------------
// ОТКРЫТИЕ КОМБИНАЦИЙ
// -----------------------------

#[test]
fn open_meld_keeps_submitted_order() {
    let mut e = standard();
    e.draw_from_stock(0).unwrap();

    let ids = vec![c("5c").id, c("5h").id, c("5d").id];
    e.open_meld(0, &ids).unwrap();

    let meld = e.state.meld(1).expect("meld 1 exists");
    assert_eq!(meld.owner, 0);
    assert_eq!(meld.kind, MeldKind::Per);
    assert_eq!(meld.cards, cards(&["5c", "5h", "5d"]));

    assert_eq!(e.state.players[0].hand, cards(&["9s", "Kh", "Kc"]));
    assert!(e.state.opened_this_turn);
    assert_eq!(e.state.next_meld_id, 2);
}

#[test]
fn open_meld_clears_must_open() {
    let mut e = fixture(
        [&["5h", "5d", "9s"], &[], &[], &[]],
        "Qh",
        Some("5c"),
        &[],
    );

    e.draw_from_discard(0).unwrap();
    assert!(e.state.must_open_this_turn);

    e.open_meld(0, &[c("5h").id, c("5d").id, c("5c").id]).unwrap();
    assert!(!e.state.must_open_this_turn);

    // теперь сброс разрешён — и это KÜNT
    let status = e.discard(0, c("9s").id).unwrap();
    assert!(matches!(status, RoundStatus::Finished(_)));
}

#[test]
fn meld_ids_are_unique_and_increasing() {
    let mut e = fixture(
        [&["5h", "5d", "5c", "9s", "Ts", "Js", "2h"], &[], &[], &[]],
        "Qh",
        None,
        &["Kc"],
    );
    e.draw_from_stock(0).unwrap();

    e.open_meld(0, &[c("5h").id, c("5d").id, c("5c").id]).unwrap();
    e.open_meld(0, &[c("9s").id, c("Ts").id, c("Js").id]).unwrap();

    let ids: Vec<u32> = e.state.melds.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(e.state.melds[1].kind, MeldKind::Seri);
    assert_eq!(e.state.players[0].hand, cards(&["2h", "Kc"]));
}

// -----------------------------
// ДОБАВЛЕНИЕ К КОМБИНАЦИИ
// -----------------------------

#[test]
fn add_to_any_players_meld() {
    let mut e = standard();
    e.draw_from_stock(0).unwrap();
    e.open_meld(0, &[c("5h").id, c("5d").id, c("5c").id]).unwrap();
    e.discard(0, c("9s").id).unwrap();

    // место 1 добавляет 5s к комбинации места 0
    e.draw_from_stock(1).unwrap();
    e.add_to_meld(1, c("5s").id, 1).unwrap();

    let meld = e.state.meld(1).unwrap();
    assert_eq!(meld.owner, 0, "owner does not change");
    assert_eq!(meld.cards, cards(&["5h", "5d", "5c", "5s"]));
    assert_eq!(meld.kind, MeldKind::Per);
    assert!(!e.state.players[1].has_card(c("5s").id));
}

#[test]
fn add_to_meld_can_change_kind() {
    // нижняя Qh: Qc и Qs — джокеры; [5h Qc Qs] — пер
    let mut e = fixture(
        [&["5h", "Qc", "Qs", "6h", "9d"], &[], &[], &[]],
        "Qh",
        None,
        &["2c"],
    );
    e.draw_from_stock(0).unwrap();
    e.open_meld(0, &[c("5h").id, c("Qc").id, c("Qs").id]).unwrap();
    assert_eq!(e.state.melds[0].kind, MeldKind::Per);

    e.add_to_meld(0, c("6h").id, 1).unwrap();
    assert_eq!(e.state.melds[0].kind, MeldKind::Seri);
    assert_eq!(e.state.melds[0].len(), 4);
}

// -----------------------------
// СБРОС
// -----------------------------

#[test]
fn discard_passes_turn_and_buries_old_top() {
    let mut e = standard();
    e.draw_from_stock(0).unwrap();

    let status = e.discard(0, c("9s").id).unwrap();

    assert_eq!(status, RoundStatus::Ongoing);
    assert_eq!(e.state.turn_seat, 1);
    assert_eq!(e.state.phase, Phase::Draw);
    assert!(!e.state.opened_this_turn);
    assert_eq!(e.state.discard_top, Some(c("9s")));
    assert_eq!(e.state.discard_pile, cards(&["7h"]));
}

#[test]
fn turn_order_wraps_around() {
    let mut e = standard();
    e.state.turn_seat = 3;

    e.draw_from_stock(3).unwrap();
    e.discard(3, c("4s").id).unwrap();

    assert_eq!(e.state.turn_seat, 0);
}

#[test]
fn turn_skips_eliminated_seats() {
    let mut e = standard();
    e.state.players[1].eliminated = true;
    e.state.players[2].eliminated = true;

    e.draw_from_stock(0).unwrap();
    e.discard(0, c("9s").id).unwrap();

    assert_eq!(e.state.turn_seat, 3);
}

// -----------------------------
// apply_action + ИСТОРИЯ
// -----------------------------

#[test]
fn apply_action_dispatches_and_records_history() {
    let mut e = standard();

    apply_action(&mut e, PlayerAction::new(0, PlayerActionKind::DrawStock)).unwrap();
    apply_action(
        &mut e,
        PlayerAction::new(
            0,
            PlayerActionKind::OpenMeld(vec![c("5h").id, c("5d").id, c("5c").id]),
        ),
    )
    .unwrap();
    apply_action(&mut e, PlayerAction::new(0, PlayerActionKind::Discard(c("Kh").id))).unwrap();
    apply_action(&mut e, PlayerAction::new(1, PlayerActionKind::DrawDiscard)).unwrap();
    apply_action(
        &mut e,
        PlayerAction::new(
            1,
            PlayerActionKind::AddToMeld {
                card: c("5s").id,
                meld: 1,
            },
        ),
    )
    .unwrap();

    assert_eq!(e.history.len(), 5);
    for (idx, event) in e.history.events.iter().enumerate() {
        assert_eq!(event.index as usize, idx);
    }

    assert!(matches!(
        e.history.events[0].kind,
        RoundEventKind::DrewFromStock { seat: 0, .. }
    ));
    assert!(matches!(
        e.history.events[1].kind,
        RoundEventKind::MeldOpened { seat: 0, meld_id: 1, kind: MeldKind::Per, .. }
    ));
    assert_eq!(
        e.history.events[2].kind,
        RoundEventKind::Discarded {
            seat: 0,
            card: c("Kh")
        }
    );
    assert_eq!(
        e.history.events[3].kind,
        RoundEventKind::DrewFromDiscard {
            seat: 1,
            card: c("Kh")
        }
    );
    assert!(matches!(
        e.history.last().map(|ev| &ev.kind),
        Some(RoundEventKind::AddedToMeld { seat: 1, meld_id: 1, .. })
    ));
}
