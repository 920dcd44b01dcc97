use std::collections::HashSet;

use crate::domain::card::{Card, Rank};
use crate::domain::meld::MeldKind;
use crate::rules::joker::split_jokers;

/// Минимальный размер любой комбинации.
pub const MIN_MELD_LEN: usize = 3;

/// Пер: ≥3 карт, хотя бы одна обычная, все обычные одного ранга,
/// без повторов мастей среди обычных.
pub fn is_valid_set(cards: &[Card], bottom: &Card) -> bool {
    if cards.len() < MIN_MELD_LEN {
        return false;
    }

    let (regular, _jokers) = split_jokers(cards, bottom);
    let Some(first) = regular.first() else {
        return false;
    };

    if regular.iter().any(|c| c.rank != first.rank) {
        return false;
    }

    let mut suits = HashSet::with_capacity(regular.len());
    regular.iter().all(|c| suits.insert(c.suit))
}

/// Серия: ≥3 карт, хотя бы одна обычная, все обычные одной масти,
/// ранги обычных строго возрастают после сортировки, нет одновременно
/// туза и короля (K-A-2 запрещено даже с джокерами), и джокеров хватает
/// на все пропуски. Лишние джокеры допускаются.
pub fn is_valid_run(cards: &[Card], bottom: &Card) -> bool {
    if cards.len() < MIN_MELD_LEN {
        return false;
    }

    let (regular, jokers) = split_jokers(cards, bottom);
    let Some(first) = regular.first() else {
        return false;
    };

    if regular.iter().any(|c| c.suit != first.suit) {
        return false;
    }

    let mut ranks: Vec<u8> = regular.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable();

    if ranks.contains(&Rank::Ace.value()) && ranks.contains(&Rank::King.value()) {
        return false;
    }

    let mut gaps = 0usize;
    for pair in ranks.windows(2) {
        let diff = pair[1] - pair[0];
        if diff == 0 {
            return false;
        }
        gaps += (diff - 1) as usize;
    }

    jokers >= gaps
}

/// Определить вид комбинации: сначала пер, затем серия.
///
/// Единственная точка, через которую движок проверяет комбинации.
pub fn classify_meld(cards: &[Card], bottom: &Card) -> Option<MeldKind> {
    if is_valid_set(cards, bottom) {
        Some(MeldKind::Per)
    } else if is_valid_run(cards, bottom) {
        Some(MeldKind::Seri)
    } else {
        None
    }
}
