use crate::domain::card::{Card, Rank};
use crate::rules::joker::is_joker;

/// Штраф за одну карту, оставшуюся в руке.
///
/// Джокер стоит свой ранг (не фиксированную сумму), туз — 11,
/// 10/J/Q/K — 10, остальные — свой ранг.
pub fn card_penalty(card: &Card, bottom: &Card) -> u32 {
    if is_joker(card, bottom) {
        return u32::from(card.rank.value());
    }
    match card.rank {
        Rank::Ace => 11,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        other => u32::from(other.value()),
    }
}

/// Сумма штрафов по всей руке.
pub fn hand_penalty(hand: &[Card], bottom: &Card) -> u32 {
    hand.iter().map(|c| card_penalty(c, bottom)).sum()
}
