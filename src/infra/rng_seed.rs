//! RngSeed — seed раздачи и его детерминированное доменное расширение.
//!
//! Позволяет:
//!   - взять seed из числа (тесты, фикстуры) или из текущего времени (живая игра);
//!   - выводить seed каждого следующего раунда комнаты:
//!         new = H(domain || base || room_id || round_no)
//!   - создавать DeterministicRng из seed.
//!
//! Вся игра в комнате воспроизводится по одному базовому seed.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-битный seed для Mulberry32.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RngSeed {
    pub value: u32,
}

impl RngSeed {
    pub fn from_u32(value: u32) -> Self {
        Self { value }
    }

    /// Seed от текущего времени: миллисекунды с эпохи, обрезанные до u32.
    pub fn from_time() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u32)
            .unwrap_or_default();
        Self { value: millis }
    }

    /// Seed раздачи для раунда `round_no` в комнате `room_id`.
    pub fn derive(&self, room_id: &str, round_no: u32) -> Self {
        let mut hasher = Sha256::new();

        // Доменный префикс
        hasher.update(b"KUNT_ROUND_SEED_V1");

        hasher.update(self.value.to_le_bytes());

        // Room id с префиксом длины
        hasher.update((room_id.len() as u32).to_le_bytes());
        hasher.update(room_id.as_bytes());

        hasher.update(round_no.to_le_bytes());

        let hash = hasher.finalize();
        Self {
            value: u32::from_le_bytes([hash[0], hash[1], hash[2], hash[3]]),
        }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.value)
    }
}
