//! Инфраструктурный слой вокруг движка KÜNT:
//! - генерация ID подключений;
//! - RNG-реализации для движка (Mulberry32);
//! - seed раундов;
//! - маппинги между domain и API.

pub mod ids;
pub mod mapping;
pub mod rng;
pub mod rng_seed;

pub use ids::*;
pub use mapping::*;
pub use rng::*;
pub use rng_seed::RngSeed;
