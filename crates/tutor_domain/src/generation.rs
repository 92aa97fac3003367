use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Marker identifying which conversation turn a buffer or fragment belongs
/// to. Work tagged with a stale generation must be discarded at the next
/// suspension resume instead of mutating state that has since been reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Shared monotonically increasing counter handing out generations. Cloning
/// shares the underlying counter.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter(Arc<AtomicU64>);

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The generation currently considered live.
    pub fn current(&self) -> Generation {
        Generation(self.0.load(Ordering::Acquire))
    }

    /// Invalidates all outstanding generations and returns the new live one.
    pub fn advance(&self) -> Generation {
        Generation(self.0.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current() == generation
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_advance_invalidates_previous() {
        let counter = GenerationCounter::new();
        let first = counter.advance();
        assert!(counter.is_current(first));

        let second = counter.advance();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
        assert!(first < second);
    }

    #[test]
    fn test_clones_share_state() {
        let counter = GenerationCounter::new();
        let clone = counter.clone();
        let generation = clone.advance();
        assert_eq!(counter.current(), generation);
    }
}
