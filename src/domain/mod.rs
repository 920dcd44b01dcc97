//! Доменная модель KÜNT: карты, колода, игроки, комбинации, состояние раунда.

pub mod card;
pub mod deck;
pub mod meld;
pub mod player;
pub mod round;

/// Индекс места за столом (0..3).
pub type SeatIndex = u8;

/// Идентификатор комнаты (приходит от транспорта при подключении).
pub type RoomId = String;

/// За столом всегда ровно четыре места.
pub const SEAT_COUNT: usize = 4;

pub use card::*;
pub use deck::*;
pub use meld::*;
pub use player::*;
pub use round::*;
