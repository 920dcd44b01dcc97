//! Комнаты: реестр комнат, подключения мест и игра по раундам.
//!
//! Транспорт (WebSocket и т.п.) живёт снаружи: он вызывает
//! `RoomRegistry::connect` / `dispatch_raw` / `disconnect` и передаёт
//! исходящий канал как `ConnectionSink`.

pub mod connection;
pub mod game;
pub mod registry;

pub use connection::{ConnectionContext, ConnectionSink};
pub use game::{RoomGame, StartOutcome};
pub use registry::RoomRegistry;
