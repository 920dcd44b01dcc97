use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::dto::ServerMessage;
use crate::domain::RoomId;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Нечитаемый JSON или неизвестный тип сообщения.
    #[error("Некорректное сообщение: {0}")]
    MalformedMessage(String),

    /// Место вне 0..3 при подключении.
    #[error("Места {0} нет за столом")]
    InvalidSeat(u8),

    #[error("Комната {0} не найдена")]
    RoomNotFound(RoomId),

    /// Ошибка движка (ход отклонён).
    #[error("{message}")]
    Engine { code: String, message: String },
}

impl ApiError {
    /// Стабильный код ошибки для клиента.
    pub fn code(&self) -> &str {
        match self {
            ApiError::MalformedMessage(_) => "MALFORMED_MESSAGE",
            ApiError::InvalidSeat(_) => "INVALID_SEAT",
            ApiError::RoomNotFound(_) => "ROOM_NOT_FOUND",
            ApiError::Engine { code, .. } => code.as_str(),
        }
    }

    /// Сообщение `error` для отправки инициатору.
    pub fn to_message(&self) -> ServerMessage {
        ServerMessage::Error {
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Engine {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}
