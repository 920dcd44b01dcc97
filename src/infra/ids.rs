use std::sync::atomic::{AtomicU64, Ordering};

/// Идентификатор одного подключения к комнате.
pub type ConnectionId = u64;

/// Простая генерация ID на основе монотонного счётчика.
#[derive(Debug)]
pub struct IdGenerator {
    connection_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1.
    pub fn new() -> Self {
        Self {
            connection_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_connection_id(&self) -> ConnectionId {
        self.connection_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
