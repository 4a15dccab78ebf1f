use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use super::TileKey;

/// Lifecycle of one tile in memory.
#[derive(Debug)]
pub enum TileSlot<T> {
    /// Requested; waiting for a worker.
    Pending,
    Ready(T),
    /// Fetch or decode failed at the recorded instant.
    Failed(Instant),
}

/// Bounded least-recently-used table of tiles and in-flight requests.
pub struct TileSlots<T> {
    entries: HashMap<TileKey, TileSlot<T>>,
    order: VecDeque<TileKey>,
    max_entries: usize,
    retry_after: Duration,
}

impl<T> TileSlots<T> {
    pub fn new(max_entries: usize, retry_after: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            max_entries: max_entries.max(1),
            retry_after,
        }
    }

    /// Mark `key` as pending if it should be requested now.
    ///
    /// Returns false for tiles that are already loaded or in flight, and for
    /// failed tiles still inside the retry cooldown.
    pub fn claim(&mut self, key: TileKey, now: Instant) -> bool {
        let retry = match self.entries.get(&key) {
            None => true,
            Some(TileSlot::Failed(at)) => now.saturating_duration_since(*at) >= self.retry_after,
            Some(TileSlot::Pending | TileSlot::Ready(_)) => false,
        };
        if retry {
            self.entries.insert(key, TileSlot::Pending);
            self.touch(key);
            self.evict_overflow();
        }
        retry
    }

    /// Store a finished tile. Results for keys no longer tracked are dropped.
    pub fn fill(&mut self, key: TileKey, value: T) -> bool {
        match self.entries.get_mut(&key) {
            Some(slot) => {
                *slot = TileSlot::Ready(value);
                true
            }
            None => false,
        }
    }

    pub fn fail(&mut self, key: TileKey, now: Instant) {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = TileSlot::Failed(now);
        }
    }

    /// Loaded tile for `key`, marking it recently used.
    pub fn get(&mut self, key: TileKey) -> Option<&T> {
        if !matches!(self.entries.get(&key), Some(TileSlot::Ready(_))) {
            return None;
        }
        self.touch(key);
        match self.entries.get(&key) {
            Some(TileSlot::Ready(value)) => Some(value),
            _ => None,
        }
    }

    pub fn slot(&self, key: TileKey) -> Option<&TileSlot<T>> {
        self.entries.get(&key)
    }

    pub fn pending_count(&self) -> usize {
        self.entries
            .values()
            .filter(|slot| matches!(slot, TileSlot::Pending))
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn touch(&mut self, key: TileKey) {
        self.order.retain(|existing| *existing != key);
        self.order.push_front(key);
    }

    fn evict_overflow(&mut self) {
        while self.order.len() > self.max_entries {
            if let Some(removed) = self.order.pop_back() {
                self.entries.remove(&removed);
            }
        }
    }
}
