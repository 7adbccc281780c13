//! Session-owned digit/segment aggregate.

use super::history::HistoryStacks;
use super::types::{Digit, Segment, SegmentName};
use crate::transform::Point;

/// All digits of the session plus the placement and naming undo stacks.
///
/// Digits are addressed by index. An index recorded in the history stays
/// valid for the lifetime of its entry: digits fill front to back
/// (first-fit), so only the trailing digit can become empty and be removed,
/// and that removal pops the entry referring to it.
#[derive(Debug, Default)]
pub struct SegmentModel {
    digits: Vec<Digit>,
    history: HistoryStacks,
}

impl SegmentModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    pub fn segment_count(&self) -> usize {
        self.digits.iter().map(|d| d.segments.len()).sum()
    }

    pub fn history(&self) -> &HistoryStacks {
        &self.history
    }

    /// First-fit placement: append to the first digit with room, creating a
    /// new digit when every existing one is full. Returns the owning digit
    /// index.
    pub fn place(&mut self, pos: Point) -> usize {
        let idx = match self.digits.iter().position(|d| !d.is_full()) {
            Some(idx) => idx,
            None => {
                self.digits.push(Digit::default());
                self.digits.len() - 1
            }
        };
        self.digits[idx].segments.push(Segment::new(pos));
        self.history.record_placement(idx);
        idx
    }

    /// Remove the most recently placed segment anywhere in the model; a
    /// digit left empty goes with it. Returns false when there is nothing
    /// to undo.
    pub fn undo_place(&mut self) -> bool {
        let Some(idx) = self.history.pop_placement() else {
            return false;
        };
        if let Some(digit) = self.digits.get_mut(idx) {
            digit.segments.pop();
            if digit.is_empty() {
                self.digits.remove(idx);
            }
        }
        true
    }

    /// Index of the first digit that still has unnamed segments.
    pub fn first_unnamed_digit(&self) -> Option<usize> {
        self.digits.iter().position(|d| !d.is_named())
    }

    /// Mark at most one digit as the active naming target.
    pub fn set_active(&mut self, idx: Option<usize>) {
        for (i, digit) in self.digits.iter_mut().enumerate() {
            digit.active = Some(i) == idx;
        }
    }

    /// Assign `name` to the unnamed segment of `digit_idx` nearest to `pos`
    /// (squared Euclidean distance in canonical space). Returns the segment
    /// index, or None when the digit has no unnamed segment.
    pub fn name_nearest(
        &mut self,
        digit_idx: usize,
        pos: Point,
        name: SegmentName,
    ) -> Option<usize> {
        let digit = self.digits.get_mut(digit_idx)?;
        let seg_idx = digit
            .segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.name.is_none())
            .min_by_key(|(_, s)| s.pos.dist_sq(pos))
            .map(|(i, _)| i)?;
        digit.segments[seg_idx].name = Some(name);
        debug_assert!(
            !digit.has_duplicate_names(),
            "duplicate segment name within a digit"
        );
        self.history.record_naming(digit_idx, seg_idx);
        Some(seg_idx)
    }

    /// Clear the most recent name assignment. Returns false when the naming
    /// history is empty.
    pub fn undo_name(&mut self) -> bool {
        let Some((digit_idx, seg_idx)) = self.history.pop_naming() else {
            return false;
        };
        if let Some(segment) = self
            .digits
            .get_mut(digit_idx)
            .and_then(|d| d.segments.get_mut(seg_idx))
        {
            segment.name = None;
        }
        true
    }

    /// Completion gate: every digit is full and fully named.
    pub fn all_complete(&self) -> bool {
        self.digits.iter().all(|d| d.is_complete())
    }
}
