use crate::domain::card::Card;

/// Джокер раунда: тот же ранг, что у нижней карты, и противоположный цвет.
///
/// Масть нижней карты значения не имеет — важен только цвет.
/// Для нижней дамы червей джокеры — дамы треф и пик, дама бубен — нет.
pub fn is_joker(card: &Card, bottom: &Card) -> bool {
    card.rank == bottom.rank && card.color() != bottom.color()
}

/// Сколько джокеров в группе.
pub fn count_jokers(cards: &[Card], bottom: &Card) -> usize {
    cards.iter().filter(|c| is_joker(c, bottom)).count()
}

/// Разделить группу на обычные карты и джокеров.
pub fn split_jokers<'a>(cards: &'a [Card], bottom: &Card) -> (Vec<&'a Card>, usize) {
    let mut regular = Vec::with_capacity(cards.len());
    let mut jokers = 0;
    for card in cards {
        if is_joker(card, bottom) {
            jokers += 1;
        } else {
            regular.push(card);
        }
    }
    (regular, jokers)
}
