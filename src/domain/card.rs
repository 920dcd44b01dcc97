use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Масть карты. В JSON — одна буква, как у клиента: "H", "D", "C", "S".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    #[serde(rename = "H")]
    Hearts, // ♥
    #[serde(rename = "D")]
    Diamonds, // ♦
    #[serde(rename = "C")]
    Clubs, // ♣
    #[serde(rename = "S")]
    Spades, // ♠
}

/// Цвет масти. Нужен только для определения джокера.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    /// Порядок мастей внутри одной колоды.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Индекс масти 0..3 (используется в CardId).
    pub fn index(self) -> u8 {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }
}

/// Ранг карты: 1 = туз, 11 = валет, 12 = дама, 13 = король.
///
/// На проводе ранг — просто число 1..13.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Числовое значение 1..13.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            1..=13 => Some(Rank::ALL[(value - 1) as usize]),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::from_value(value).ok_or_else(|| format!("Invalid rank value: {value}"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.value()
    }
}

/// Идентификатор карты в общем пуле из двух колод (0..104).
///
/// Схема: `copy * 52 + suit_index * 13 + (rank - 1)`.
/// Номер колоды входит в идентичность, поэтому две «пятёрки червей»
/// из разных колод всегда различимы.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CardId(pub u8);

impl CardId {
    /// Размер пула: две колоды по 52 карты.
    pub const POOL_SIZE: usize = 104;

    pub fn compose(copy: u8, suit: Suit, rank: Rank) -> Self {
        CardId(copy * 52 + suit.index() * 13 + (rank.value() - 1))
    }

    /// Номер колоды (0 или 1).
    pub fn copy_index(self) -> u8 {
        self.0 / 52
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Игральная карта. Джокер — не атрибут карты, а отношение к нижней карте
/// раунда (см. `rules::is_joker`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit, copy: u8) -> Self {
        Self {
            id: CardId::compose(copy, suit, rank),
            suit,
            rank,
        }
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    pub fn copy_index(&self) -> u8 {
        self.id.copy_index()
    }

    /// Короткая подпись без номера колоды: `Ah`, `Td`, `7c`.
    pub fn label(&self) -> String {
        format!("{}{}", self.rank, self.suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

const RANK_CHARS: [char; 13] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
];

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", RANK_CHARS[(self.value() - 1) as usize])
    }
}

impl fmt::Display for Card {
    /// Формат `Ah` для первой колоды и `Ah#1` для второй.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.copy_index() {
            0 => write!(f, "{}{}", self.rank, self.suit),
            copy => write!(f, "{}{}#{}", self.rank, self.suit, copy),
        }
    }
}

/// Парсинг строк вида "Ah", "Td", "7c", "Ks#1".
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (face, copy) = match s.split_once('#') {
            Some((face, copy)) => {
                let copy: u8 = copy
                    .parse()
                    .map_err(|_| format!("Invalid deck copy: {copy}"))?;
                (face, copy)
            }
            None => (s, 0),
        };

        if copy > 1 {
            return Err(format!("Deck copy must be 0 or 1, got {copy}"));
        }

        let mut chars = face.chars();
        let (r_ch, s_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (r, s),
            _ => return Err("Card string must look like `Ah` or `Ah#1`".into()),
        };

        let rank = match r_ch.to_ascii_uppercase() {
            'A' => Rank::Ace,
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            _ => return Err(format!("Invalid rank: {r_ch}")),
        };

        let suit = match s_ch {
            'h' | 'H' => Suit::Hearts,
            'd' | 'D' => Suit::Diamonds,
            'c' | 'C' => Suit::Clubs,
            's' | 'S' => Suit::Spades,
            _ => return Err(format!("Invalid suit: {s_ch}")),
        };

        Ok(Card::new(rank, suit, copy))
    }
}
