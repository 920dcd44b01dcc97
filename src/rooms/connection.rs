use tokio::sync::mpsc::UnboundedSender;

use crate::api::dto::ServerMessage;
use crate::domain::{RoomId, SeatIndex};
use crate::infra::ids::ConnectionId;

/// Исходящий канал одного подключения.
///
/// `send` не ждёт и не падает: недоставленное сообщение — забота транспорта.
/// Возвращает false, если получатель уже закрыт.
pub trait ConnectionSink: Send + Sync {
    fn send(&self, message: ServerMessage) -> bool;
}

impl ConnectionSink for UnboundedSender<ServerMessage> {
    fn send(&self, message: ServerMessage) -> bool {
        UnboundedSender::send(self, message).is_ok()
    }
}

/// Контекст подключения: устанавливается один раз при `connect`
/// и передаётся в каждый `dispatch`. Никогда не меняется.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionContext {
    pub connection_id: ConnectionId,
    pub room_id: RoomId,
    pub seat: SeatIndex,
}
