use rand::{RngCore, SeedableRng};

use crate::domain::card::Card;
use crate::engine::RandomSource;

/// Mulberry32 — быстрый 32-битный PRNG с фиксированной последовательностью
/// для каждого seed. Последовательность не зависит от версии `rand`,
/// поэтому фикстуры раздач стабильны.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.step());
        let lo = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Детерминированный RNG для раздач, тестов и реплея.
/// Одинаковый seed => одинаковая перестановка, бит в бит.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    seed: u32,
    inner: Mulberry32,
}

impl DeterministicRng {
    pub fn from_seed(seed: u32) -> Self {
        Self {
            seed,
            inner: Mulberry32::new(seed),
        }
    }

    /// Seed, с которого стартовал генератор.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl RandomSource for DeterministicRng {
    /// Фишер–Йетс от последнего индекса к первому:
    /// `j = floor(u * (i + 1))`, где `u = next_u32 / 2^32`.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let bound = (i as u64) + 1;
            let j = ((u64::from(self.inner.next_u32()) * bound) >> 32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Перемешать копию набора карт с заданным seed.
pub fn shuffle(cards: &[Card], seed: u32) -> Vec<Card> {
    let mut out = cards.to_vec();
    DeterministicRng::from_seed(seed).shuffle(&mut out);
    out
}
