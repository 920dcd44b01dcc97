//! Конфиг игры. Значения по умолчанию — правила KÜNT;
//! переменные окружения `KUNT_*` позволяют переопределить их для dev-запусков.

use serde::{Deserialize, Serialize};

/// Карт в руке после раздачи.
pub const DEFAULT_HAND_SIZE: usize = 10;

/// Порог выбывания: накопленные очки ≥ 101.
pub const DEFAULT_ELIMINATION_THRESHOLD: u32 = 101;

/// Больше 25 карт на руку не раздать: 4 × 25 + сброс + нижняя = 102 ≤ 104.
pub const MAX_HAND_SIZE: usize = 25;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub hand_size: usize,
    pub elimination_threshold: u32,
    /// Фиксированный базовый seed для новых комнат (тесты, реплей).
    /// None — seed берётся от текущего времени.
    pub fixed_seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            elimination_threshold: DEFAULT_ELIMINATION_THRESHOLD,
            fixed_seed: None,
        }
    }
}

impl GameConfig {
    /// `KUNT_HAND_SIZE`, `KUNT_ELIMINATION_THRESHOLD`, `KUNT_SEED`.
    /// Непарсящиеся значения молча заменяются значениями по умолчанию.
    pub fn from_env() -> Self {
        let hand_size = read_usize("KUNT_HAND_SIZE", DEFAULT_HAND_SIZE);
        Self {
            hand_size: if (1..=MAX_HAND_SIZE).contains(&hand_size) {
                hand_size
            } else {
                DEFAULT_HAND_SIZE
            },
            elimination_threshold: read_u32(
                "KUNT_ELIMINATION_THRESHOLD",
                DEFAULT_ELIMINATION_THRESHOLD,
            ),
            fixed_seed: std::env::var("KUNT_SEED")
                .ok()
                .and_then(|raw| raw.parse::<u32>().ok()),
        }
    }
}

fn read_u32(key: &str, fallback: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse::<u32>().ok())
        .unwrap_or(fallback)
}

fn read_usize(key: &str, fallback: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(fallback)
}
