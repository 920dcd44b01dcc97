use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::api::commands::ClientMessage;
use crate::api::dto::{RoundViewDto, ServerMessage};
use crate::api::errors::ApiError;
use crate::config::GameConfig;
use crate::domain::{RoomId, SeatIndex, SEAT_COUNT};
use crate::engine::RoundStatus;
use crate::infra::ids::{ConnectionId, IdGenerator};
use crate::infra::mapping::{map_round_to_dto, map_summary_to_dto};
use crate::rooms::connection::{ConnectionContext, ConnectionSink};
use crate::rooms::game::RoomGame;

/// Участник комнаты: место + исходящий канал.
struct Member {
    seat: SeatIndex,
    sink: Box<dyn ConnectionSink>,
}

/// Внутреннее состояние комнаты (под мьютексом комнаты).
struct RoomInner {
    game: RoomGame,
    members: HashMap<ConnectionId, Member>,
}

impl RoomInner {
    fn snapshot(&self) -> RoundViewDto {
        map_round_to_dto(&self.game.room_id, self.game.state())
    }

    fn send_to(&self, connection_id: ConnectionId, message: ServerMessage) {
        if let Some(member) = self.members.get(&connection_id) {
            if !member.sink.send(message) {
                debug!(connection_id, "sink closed, message dropped");
            }
        }
    }

    fn broadcast(&self, message: &ServerMessage) {
        for (connection_id, member) in &self.members {
            if !member.sink.send(message.clone()) {
                debug!(connection_id, seat = member.seat, "sink closed, broadcast dropped");
            }
        }
    }

    /// Обработать сообщение от места `seat`. Ok — что разослать всем.
    fn handle(&mut self, seat: SeatIndex, message: ClientMessage) -> Result<ServerMessage, ApiError> {
        let Some(action) = message.into_action(seat) else {
            self.game.start_next_round()?;
            return Ok(ServerMessage::State {
                state: self.snapshot(),
            });
        };

        match self.game.apply(action)? {
            RoundStatus::Ongoing => Ok(ServerMessage::State {
                state: self.snapshot(),
            }),
            RoundStatus::Finished(summary) => Ok(ServerMessage::RoundEnd {
                state: self.snapshot(),
                summary: map_summary_to_dto(&summary, self.game.state()),
            }),
        }
    }
}

struct Room {
    inner: Mutex<RoomInner>,
}

/// Реестр комнат.
///
/// Комната создаётся при первом подключении и удаляется, когда уходит
/// последнее. Порядок блокировок: карта комнат, затем комната.
/// Ходы в одной комнате выполняются строго по одному.
pub struct RoomRegistry {
    config: GameConfig,
    ids: IdGenerator,
    rooms: Mutex<HashMap<RoomId, Arc<Room>>>,
}

impl RoomRegistry {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            ids: IdGenerator::new(),
            rooms: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Подключить место к комнате. Снимок состояния получает только
    /// подключившийся.
    pub async fn connect<S>(
        &self,
        room_id: &str,
        seat: SeatIndex,
        sink: S,
    ) -> Result<ConnectionContext, ApiError>
    where
        S: ConnectionSink + 'static,
    {
        if seat as usize >= SEAT_COUNT {
            return Err(ApiError::InvalidSeat(seat));
        }

        let mut rooms = self.rooms.lock().await;

        let room = match rooms.get(room_id) {
            Some(room) => Arc::clone(room),
            None => {
                let game = RoomGame::new(room_id, self.config.clone())?;
                let room = Arc::new(Room {
                    inner: Mutex::new(RoomInner {
                        game,
                        members: HashMap::new(),
                    }),
                });
                rooms.insert(room_id.to_string(), Arc::clone(&room));
                info!(room_id, "room created");
                room
            }
        };

        let mut inner = room.inner.lock().await;
        drop(rooms);

        let connection_id = self.ids.next_connection_id();
        inner.members.insert(
            connection_id,
            Member {
                seat,
                sink: Box::new(sink),
            },
        );

        let snapshot = inner.snapshot();
        inner.send_to(connection_id, ServerMessage::State { state: snapshot });

        info!(room_id, seat, connection_id, "connected");

        Ok(ConnectionContext {
            connection_id,
            room_id: room_id.to_string(),
            seat,
        })
    }

    /// Сырой JSON от клиента.
    pub async fn dispatch_raw(&self, ctx: &ConnectionContext, raw: &str) -> Result<(), ApiError> {
        match ClientMessage::parse(raw) {
            Ok(message) => self.dispatch(ctx, message).await,
            Err(err) => {
                warn!(
                    room_id = %ctx.room_id,
                    seat = ctx.seat,
                    error = %err,
                    "invalid inbound message"
                );
                if let Some(room) = self.room(&ctx.room_id).await {
                    room.inner
                        .lock()
                        .await
                        .send_to(ctx.connection_id, err.to_message());
                }
                Err(err)
            }
        }
    }

    /// Выполнить сообщение клиента.
    ///
    /// Успех: новое состояние (или итоги раунда) уходит всем в комнате.
    /// Ошибка: только инициатору, состояние не меняется, остальные
    /// ничего не получают.
    pub async fn dispatch(
        &self,
        ctx: &ConnectionContext,
        message: ClientMessage,
    ) -> Result<(), ApiError> {
        let room = self
            .room(&ctx.room_id)
            .await
            .ok_or_else(|| ApiError::RoomNotFound(ctx.room_id.clone()))?;

        let mut inner = room.inner.lock().await;
        if !inner.members.contains_key(&ctx.connection_id) {
            // Подключение уже закрыто, комната могла быть пересоздана
            return Err(ApiError::RoomNotFound(ctx.room_id.clone()));
        }

        match inner.handle(ctx.seat, message) {
            Ok(outbound) => {
                inner.broadcast(&outbound);
                Ok(())
            }
            Err(err) => {
                warn!(
                    room_id = %ctx.room_id,
                    seat = ctx.seat,
                    code = err.code(),
                    "move rejected"
                );
                inner.send_to(ctx.connection_id, err.to_message());
                Err(err)
            }
        }
    }

    /// Отключение. Состояние раунда не трогается; пустая комната удаляется.
    pub async fn disconnect(&self, ctx: &ConnectionContext) {
        let mut rooms = self.rooms.lock().await;
        let Some(room) = rooms.get(&ctx.room_id).map(Arc::clone) else {
            return;
        };

        let mut inner = room.inner.lock().await;
        inner.members.remove(&ctx.connection_id);
        info!(
            room_id = %ctx.room_id,
            seat = ctx.seat,
            connection_id = ctx.connection_id,
            "disconnected"
        );

        if inner.members.is_empty() {
            rooms.remove(&ctx.room_id);
            info!(room_id = %ctx.room_id, "room destroyed");
        }
    }

    pub async fn room_count(&self) -> usize {
        self.rooms.lock().await.len()
    }

    /// Подключений в комнате (0, если комнаты нет).
    pub async fn connection_count(&self, room_id: &str) -> usize {
        match self.room(room_id).await {
            Some(room) => room.inner.lock().await.members.len(),
            None => 0,
        }
    }

    /// Текущий снимок комнаты.
    pub async fn snapshot(&self, room_id: &str) -> Option<RoundViewDto> {
        let room = self.room(room_id).await?;
        let inner = room.inner.lock().await;
        Some(inner.snapshot())
    }

    async fn room(&self, room_id: &str) -> Option<Arc<Room>> {
        self.rooms.lock().await.get(room_id).map(Arc::clone)
    }
}
