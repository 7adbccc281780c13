//! Cyclic segment-name allocation for a naming pass.

use super::types::{NAME_CYCLE, SegmentName};

/// Hands out segment names in the fixed cycle order, wrapping after the
/// seventh.
///
/// One allocator is created per naming pass and shared across every digit
/// in that pass; the cycle does not restart at digit boundaries.
#[derive(Debug, Default)]
pub struct NameAllocator {
    issued: usize,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next name in cycle order.
    pub fn allocate(&mut self) -> SegmentName {
        let name = NAME_CYCLE[self.issued % NAME_CYCLE.len()];
        self.issued += 1;
        name
    }

    /// Step back one position so the next `allocate` re-issues the name
    /// most recently handed out. Backs the naming undo.
    pub fn release_last(&mut self) {
        self.issued = self.issued.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_the_cycle_in_order_without_skips() {
        let mut allocator = NameAllocator::new();
        let first: Vec<SegmentName> = (0..7).map(|_| allocator.allocate()).collect();
        assert_eq!(first, NAME_CYCLE.to_vec());
    }

    #[test]
    fn wraps_after_the_seventh() {
        let mut allocator = NameAllocator::new();
        for _ in 0..7 {
            allocator.allocate();
        }
        // The 8th allocation overall is the first symbol again, even when
        // the pass has moved on to another digit.
        assert_eq!(allocator.allocate(), SegmentName::U);
        assert_eq!(allocator.allocate(), SegmentName::UL);
    }

    #[test]
    fn release_reissues_the_last_name() {
        let mut allocator = NameAllocator::new();
        allocator.allocate();
        let second = allocator.allocate();
        allocator.release_last();
        assert_eq!(allocator.allocate(), second);
        // The cycle resumes where it left off, nothing skipped.
        assert_eq!(allocator.allocate(), SegmentName::UR);
    }

    #[test]
    fn release_on_fresh_allocator_is_guarded() {
        let mut allocator = NameAllocator::new();
        allocator.release_last();
        assert_eq!(allocator.allocate(), SegmentName::U);
    }
}
