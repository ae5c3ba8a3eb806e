use std::cell::Cell;
use tracing::trace;

/// Single-entry memo keyed by the last queried state.
///
/// A lookup returns the stored value only when the key matches exactly; any other
/// key recomputes and replaces the entry. `Cell` keeps the owning molecule
/// usable through shared references and makes it `!Sync`.
#[derive(Debug, Clone)]
pub struct StateCache<K: Copy + PartialEq, V: Copy> {
    slot: Cell<Option<(K, V)>>,
}

impl<K: Copy + PartialEq, V: Copy> Default for StateCache<K, V> {
    fn default() -> Self {
        Self {
            slot: Cell::new(None),
        }
    }
}

impl<K: Copy + PartialEq + std::fmt::Debug, V: Copy> StateCache<K, V> {
    pub fn new() -> Self {
        Self {
            slot: Cell::new(None),
        }
    }

    pub fn get_or_compute(&self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some((stored, value)) = self.slot.get() {
            if stored == key {
                return value;
            }
        }
        trace!(?key, "Recomputing cached state.");
        let value = compute();
        self.slot.set(Some((key, value)));
        value
    }

    /// Unconditionally recomputes and stores the entry for `key`.
    pub fn refresh(&self, key: K, compute: impl FnOnce() -> V) -> V {
        let value = compute();
        self.slot.set(Some((key, value)));
        value
    }

    pub fn current_key(&self) -> Option<K> {
        self.slot.get().map(|(key, _)| key)
    }

    pub fn clear(&self) {
        self.slot.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_returns_stored_value_without_recomputing() {
        let cache: StateCache<f64, f64> = StateCache::new();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            42.0
        };
        assert_eq!(cache.get_or_compute(300.0, compute), 42.0);
        assert_eq!(cache.get_or_compute(300.0, compute), 42.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn different_key_forces_recomputation() {
        let cache: StateCache<(f64, f64), u32> = StateCache::new();
        assert_eq!(cache.get_or_compute((300.0, 1000.0), || 1), 1);
        assert_eq!(cache.get_or_compute((300.0, 1001.0), || 2), 2);
        assert_eq!(cache.current_key(), Some((300.0, 1001.0)));
        assert_eq!(cache.get_or_compute((300.0, 1000.0), || 3), 3);
    }

    #[test]
    fn refresh_overwrites_matching_entry() {
        let cache: StateCache<f64, f64> = StateCache::new();
        cache.get_or_compute(500.0, || 1.0);
        assert_eq!(cache.refresh(500.0, || 2.0), 2.0);
        assert_eq!(cache.get_or_compute(500.0, || 3.0), 2.0);
        cache.clear();
        assert_eq!(cache.current_key(), None);
    }
}
