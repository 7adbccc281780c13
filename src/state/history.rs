//! Undo stacks for segment placements and name assignments.
//!
//! The crop-region list inside the transform pipeline doubles as its own
//! stack; placements and namings get explicit records here, owned by the
//! session's model aggregate rather than floating free.

/// Ordered record of mutations across the whole session, newest last.
#[derive(Debug, Default)]
pub struct HistoryStacks {
    /// Owning digit index of each placed segment, in placement order.
    placements: Vec<usize>,
    /// `(digit, segment)` of each name assignment, in assignment order.
    namings: Vec<(usize, usize)>,
}

impl HistoryStacks {
    pub fn record_placement(&mut self, digit: usize) {
        self.placements.push(digit);
    }

    pub fn pop_placement(&mut self) -> Option<usize> {
        self.placements.pop()
    }

    pub fn record_naming(&mut self, digit: usize, segment: usize) {
        self.namings.push((digit, segment));
    }

    pub fn pop_naming(&mut self) -> Option<(usize, usize)> {
        self.namings.pop()
    }

    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    pub fn naming_count(&self) -> usize {
        self.namings.len()
    }
}
