// tests/rooms_tests.rs
//
// Комнаты:
//  - RoomGame: seed раундов, команда start, GameOver;
//  - RoomRegistry: создание/удаление комнат, снимок только подключившемуся,
//    рассылка успешных ходов всем, ошибки только инициатору.

use tokio::sync::mpsc::{self, UnboundedReceiver};

use kunt_engine::api::{ApiError, ClientMessage, ServerMessage};
use kunt_engine::config::GameConfig;
use kunt_engine::domain::Phase;
use kunt_engine::engine::{new_round, EngineError};
use kunt_engine::infra::RngSeed;
use kunt_engine::rooms::{RoomGame, RoomRegistry, StartOutcome};

// -----------------------------
// ВСПОМОГАТЕЛЬНЫЕ
// -----------------------------

fn seeded_config(seed: u32) -> GameConfig {
    GameConfig {
        fixed_seed: Some(seed),
        ..GameConfig::default()
    }
}

fn channel() -> (
    mpsc::UnboundedSender<ServerMessage>,
    UnboundedReceiver<ServerMessage>,
) {
    mpsc::unbounded_channel()
}

/// Все сообщения, накопившиеся в канале.
fn drain(rx: &mut UnboundedReceiver<ServerMessage>) -> Vec<ServerMessage> {
    let mut out = Vec::new();
    while let Ok(msg) = rx.try_recv() {
        out.push(msg);
    }
    out
}

fn error_code(msg: &ServerMessage) -> Option<&str> {
    match msg {
        ServerMessage::Error { code, .. } => Some(code.as_str()),
        _ => None,
    }
}

// -----------------------------
// ROOM GAME
// -----------------------------

#[test]
fn room_game_first_round_uses_base_seed() {
    let game = RoomGame::with_seed("r", GameConfig::default(), RngSeed::from_u32(42)).unwrap();
    assert_eq!(game.engine.seed, 42);
    assert_eq!(game.state(), &new_round(42).unwrap().state);
}

#[test]
fn start_during_round_changes_nothing() {
    let mut game = RoomGame::with_seed("r", GameConfig::default(), RngSeed::from_u32(42)).unwrap();
    let before = game.state().clone();

    assert_eq!(game.start_next_round().unwrap(), StartOutcome::Unchanged);
    assert_eq!(game.state(), &before);
}

#[test]
fn next_round_uses_derived_seed_and_carries_scores() {
    let base = RngSeed::from_u32(42);
    let mut game = RoomGame::with_seed("room-7", GameConfig::default(), base).unwrap();

    game.engine.state.phase = Phase::RoundEnd;
    game.engine.state.winner = Some(1);
    game.engine.state.players[0].score = 40;

    assert_eq!(game.start_next_round().unwrap(), StartOutcome::Dealt);
    assert_eq!(game.state().round_no, 2);
    assert_eq!(game.engine.seed, base.derive("room-7", 2).value);
    assert_eq!(game.engine.seed, game.round_seed(2));
    assert_eq!(game.state().players[0].score, 40);
    assert_eq!(game.state().phase, Phase::Draw);
    assert_eq!(game.state().card_count(), 104);
}

#[test]
fn start_after_game_over_fails() {
    let mut game = RoomGame::with_seed("r", GameConfig::default(), RngSeed::from_u32(1)).unwrap();
    game.engine.state.phase = Phase::RoundEnd;
    for seat in [0usize, 2, 3] {
        game.engine.state.players[seat].eliminated = true;
    }

    assert!(game.is_over());
    assert_eq!(game.start_next_round().unwrap_err(), EngineError::GameOver);
}

// -----------------------------
// REGISTRY
// -----------------------------

#[tokio::test]
async fn first_connect_creates_room_and_sends_snapshot_only_to_connector() {
    let registry = RoomRegistry::new(seeded_config(42));
    let (tx0, mut rx0) = channel();
    let (tx1, mut rx1) = channel();

    let ctx0 = registry.connect("alpha", 0, tx0).await.unwrap();
    assert_eq!(registry.room_count().await, 1);

    let first = drain(&mut rx0);
    assert_eq!(first.len(), 1);
    let ServerMessage::State { state } = &first[0] else {
        panic!("expected state snapshot");
    };
    assert_eq!(state.room_id, "alpha");
    assert_eq!(state.stock_count, 62);
    assert_eq!(state.players[0].hand, new_round(42).unwrap().state.players[0].hand);

    let ctx1 = registry.connect("alpha", 1, tx1).await.unwrap();
    assert_ne!(ctx0.connection_id, ctx1.connection_id);
    assert_eq!(ctx1.seat, 1);
    assert_eq!(drain(&mut rx1).len(), 1);
    assert!(drain(&mut rx0).is_empty(), "existing members get nothing on connect");

    assert_eq!(registry.connection_count("alpha").await, 2);
    assert_eq!(registry.room_count().await, 1);
}

#[tokio::test]
async fn invalid_seat_is_rejected_without_creating_room() {
    let registry = RoomRegistry::new(seeded_config(1));
    let (tx, _rx) = channel();

    let err = registry.connect("alpha", 4, tx).await.unwrap_err();
    assert_eq!(err, ApiError::InvalidSeat(4));
    assert_eq!(registry.room_count().await, 0);
}

#[tokio::test]
async fn successful_move_is_broadcast_to_everyone() {
    let registry = RoomRegistry::new(seeded_config(42));
    let (tx0, mut rx0) = channel();
    let (tx1, mut rx1) = channel();
    let ctx0 = registry.connect("alpha", 0, tx0).await.unwrap();
    let _ctx1 = registry.connect("alpha", 1, tx1).await.unwrap();
    drain(&mut rx0);
    drain(&mut rx1);

    registry
        .dispatch_raw(&ctx0, r#"{"t":"draw_stock"}"#)
        .await
        .unwrap();

    for rx in [&mut rx0, &mut rx1] {
        let got = drain(rx);
        assert_eq!(got.len(), 1);
        let ServerMessage::State { state } = &got[0] else {
            panic!("expected state broadcast");
        };
        assert_eq!(state.phase, Phase::Meld);
        assert_eq!(state.stock_count, 61);
        assert_eq!(state.players[0].hand_count, 11);
    }

    let snapshot = registry.snapshot("alpha").await.unwrap();
    assert_eq!(snapshot.phase, Phase::Meld);
}

#[tokio::test]
async fn rejected_move_goes_only_to_sender() {
    let registry = RoomRegistry::new(seeded_config(42));
    let (tx0, mut rx0) = channel();
    let (tx1, mut rx1) = channel();
    let _ctx0 = registry.connect("alpha", 0, tx0).await.unwrap();
    let ctx1 = registry.connect("alpha", 1, tx1).await.unwrap();
    drain(&mut rx0);
    drain(&mut rx1);
    let before = registry.snapshot("alpha").await.unwrap();

    let err = registry
        .dispatch(&ctx1, ClientMessage::DrawStock)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "NOT_YOUR_TURN");

    let got = drain(&mut rx1);
    assert_eq!(got.len(), 1);
    assert_eq!(error_code(&got[0]), Some("NOT_YOUR_TURN"));
    assert!(drain(&mut rx0).is_empty());

    assert_eq!(registry.snapshot("alpha").await.unwrap(), before);
}

#[tokio::test]
async fn malformed_payload_answers_sender_only() {
    let registry = RoomRegistry::new(seeded_config(42));
    let (tx0, mut rx0) = channel();
    let (tx1, mut rx1) = channel();
    let ctx0 = registry.connect("alpha", 0, tx0).await.unwrap();
    let _ctx1 = registry.connect("alpha", 1, tx1).await.unwrap();
    drain(&mut rx0);
    drain(&mut rx1);

    let err = registry.dispatch_raw(&ctx0, "{{nope").await.unwrap_err();
    assert!(matches!(err, ApiError::MalformedMessage(_)));

    let got = drain(&mut rx0);
    assert_eq!(got.len(), 1);
    assert_eq!(error_code(&got[0]), Some("MALFORMED_MESSAGE"));
    assert!(drain(&mut rx1).is_empty());
}

#[tokio::test]
async fn start_during_round_rebroadcasts_state() {
    let registry = RoomRegistry::new(seeded_config(42));
    let (tx0, mut rx0) = channel();
    let (tx1, mut rx1) = channel();
    let ctx0 = registry.connect("alpha", 0, tx0).await.unwrap();
    let _ctx1 = registry.connect("alpha", 1, tx1).await.unwrap();
    let before = registry.snapshot("alpha").await.unwrap();
    drain(&mut rx0);
    drain(&mut rx1);

    registry.dispatch(&ctx0, ClientMessage::Start).await.unwrap();

    for rx in [&mut rx0, &mut rx1] {
        let got = drain(rx);
        assert_eq!(got, vec![ServerMessage::State { state: before.clone() }]);
    }
}

#[tokio::test]
async fn rooms_are_isolated() {
    let registry = RoomRegistry::new(seeded_config(42));
    let (tx_a, mut rx_a) = channel();
    let (tx_b, mut rx_b) = channel();
    let ctx_a = registry.connect("alpha", 0, tx_a).await.unwrap();
    let _ctx_b = registry.connect("beta", 0, tx_b).await.unwrap();
    drain(&mut rx_a);
    drain(&mut rx_b);

    registry.dispatch(&ctx_a, ClientMessage::DrawStock).await.unwrap();

    assert_eq!(drain(&mut rx_a).len(), 1);
    assert!(drain(&mut rx_b).is_empty());
    assert_eq!(registry.snapshot("beta").await.unwrap().phase, Phase::Draw);
    assert_eq!(registry.room_count().await, 2);
}

#[tokio::test]
async fn last_disconnect_destroys_room() {
    let registry = RoomRegistry::new(seeded_config(42));
    let (tx0, _rx0) = channel();
    let (tx1, _rx1) = channel();
    let ctx0 = registry.connect("alpha", 0, tx0).await.unwrap();
    let ctx1 = registry.connect("alpha", 1, tx1).await.unwrap();

    registry.dispatch(&ctx0, ClientMessage::DrawStock).await.unwrap();

    registry.disconnect(&ctx0).await;
    assert_eq!(registry.connection_count("alpha").await, 1);
    // отключение не трогает состояние раунда
    assert_eq!(registry.snapshot("alpha").await.unwrap().phase, Phase::Meld);

    registry.disconnect(&ctx1).await;
    assert_eq!(registry.room_count().await, 0);
    assert_eq!(registry.connection_count("alpha").await, 0);
    assert!(registry.snapshot("alpha").await.is_none());

    // контекст мёртвого подключения больше ничего не делает
    let err = registry.dispatch(&ctx0, ClientMessage::DrawStock).await.unwrap_err();
    assert_eq!(err, ApiError::RoomNotFound("alpha".into()));
}

#[tokio::test]
async fn reconnect_after_destroy_starts_fresh_room() {
    let registry = RoomRegistry::new(seeded_config(42));
    let (tx0, _rx0) = channel();
    let ctx0 = registry.connect("alpha", 0, tx0).await.unwrap();
    registry.dispatch(&ctx0, ClientMessage::DrawStock).await.unwrap();
    registry.disconnect(&ctx0).await;

    let (tx, mut rx) = channel();
    registry.connect("alpha", 0, tx).await.unwrap();
    let got = drain(&mut rx);
    let ServerMessage::State { state } = &got[0] else {
        panic!("expected state snapshot");
    };
    assert_eq!(state.phase, Phase::Draw);
    assert_eq!(state.stock_count, 62);
}
