//! Правила KÜNT: джокер раунда, валидность пер/серий, штрафные очки.
//!
//! Все функции чистые. Движок не дублирует эту логику, а вызывает:
//!   `classify_meld(cards, bottom) -> Option<MeldKind>`
//!   `hand_penalty(hand, bottom) -> u32`

pub mod joker;
pub mod melds;
pub mod penalty;

pub use joker::{count_jokers, is_joker, split_jokers};
pub use melds::{classify_meld, is_valid_run, is_valid_set, MIN_MELD_LEN};
pub use penalty::{card_penalty, hand_penalty};
