use serde::{Deserialize, Serialize};

use crate::domain::{Card, Deck, SEAT_COUNT};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;
use crate::infra::rng::DeterministicRng;

/// Результат начальной раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct InitialDeal {
    /// Руки по местам: индекс = SeatIndex.
    pub hands: Vec<Vec<Card>>,
    pub discard_top: Card,
    pub bottom_card: Card,
    pub stock: Vec<Card>,
}

/// Раздача с seed: перемешать двойную колоду Mulberry32 и раздать.
pub fn initial_deal(seed: u32, hand_size: usize) -> Result<InitialDeal, EngineError> {
    let mut rng = DeterministicRng::from_seed(seed);
    initial_deal_with(&mut rng, hand_size)
}

/// Раздача с произвольным источником случайности.
///
/// Порядок строго фиксирован (от него зависят фикстуры):
/// 1. по `hand_size` карт каждому месту по кругу: 0,1,2,3,0,1,2,3,…
/// 2. следующая карта с начала колоды — верх сброса;
/// 3. карта с противоположного конца — нижняя карта;
/// 4. остаток — колода для добора.
pub fn initial_deal_with<R: RandomSource>(
    rng: &mut R,
    hand_size: usize,
) -> Result<InitialDeal, EngineError> {
    let mut deck = Deck::double_deck();
    rng.shuffle(&mut deck.cards);

    if deck.len() < SEAT_COUNT * hand_size + 2 {
        return Err(EngineError::Internal("hand size too large for a double deck"));
    }

    let mut hands: Vec<Vec<Card>> = vec![Vec::with_capacity(hand_size); SEAT_COUNT];
    for _round in 0..hand_size {
        for hand in hands.iter_mut() {
            let card = deck
                .draw_front()
                .ok_or(EngineError::Internal("deck exhausted while dealing"))?;
            hand.push(card);
        }
    }

    let discard_top = deck
        .draw_front()
        .ok_or(EngineError::Internal("deck exhausted before discard"))?;
    let bottom_card = deck
        .draw_back()
        .ok_or(EngineError::Internal("deck exhausted before bottom card"))?;

    Ok(InitialDeal {
        hands,
        discard_top,
        bottom_card,
        stock: deck.into_cards(),
    })
}
