//! Внешний API движка KÜNT.
//!
//! Здесь описываются:
//! - входящие сообщения (commands.rs) — ходы и `start`;
//! - DTO (dto.rs) — снимок раунда и исходящие сообщения;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;

pub use commands::*;
pub use dto::*;
pub use errors::*;
