use crate::domain::{Player, SeatIndex};

/// Следующее место по кругу после `current`, пропуская выбывших.
/// Если активен только `current`, вернётся он сам.
pub fn next_active_seat(players: &[Player], current: SeatIndex) -> Option<SeatIndex> {
    let count = players.len();
    if count == 0 {
        return None;
    }

    let mut idx = current as usize;
    for _ in 0..count {
        idx = (idx + 1) % count;
        if players[idx].is_active() {
            return Some(idx as SeatIndex);
        }
    }

    None
}

/// Первое активное место, начиная с 0. С него начинается каждый раунд.
pub fn first_active_seat(players: &[Player]) -> Option<SeatIndex> {
    players.iter().find(|p| p.is_active()).map(|p| p.seat)
}

/// Сколько игроков ещё в игре.
pub fn active_count(players: &[Player]) -> usize {
    players.iter().filter(|p| p.is_active()).count()
}
