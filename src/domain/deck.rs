use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Сколько стандартных колод сшито вместе.
    pub const COPIES: u8 = 2;

    /// Две стандартные 52-карточные колоды подряд (104 карты) в порядке:
    /// колода 0, затем колода 1; внутри — Hearts, Diamonds, Clubs, Spades,
    /// в каждой масти A..K. Отдельных карт-джокеров нет.
    pub fn double_deck() -> Self {
        let mut cards = Vec::with_capacity(52 * Self::COPIES as usize);
        for copy in 0..Self::COPIES {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit, copy));
                }
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять карту с начала колоды (следующая карта при раздаче и добор).
    pub fn draw_front(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Взять карту с противоположного конца (так выбирается нижняя карта).
    pub fn draw_back(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
