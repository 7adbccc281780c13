//! Digit and segment data types.

use crate::transform::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical names of the seven segments of a display digit:
/// upper bar, upper-left, upper-right, middle bar, bottom-left,
/// bottom-right, bottom bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentName {
    U,
    UL,
    UR,
    M,
    BL,
    BR,
    B,
}

/// Allocation order of one naming cycle.
pub const NAME_CYCLE: [SegmentName; 7] = [
    SegmentName::U,
    SegmentName::UL,
    SegmentName::UR,
    SegmentName::M,
    SegmentName::BL,
    SegmentName::BR,
    SegmentName::B,
];

impl fmt::Display for SegmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SegmentName::U => "U",
            SegmentName::UL => "UL",
            SegmentName::UR => "UR",
            SegmentName::M => "M",
            SegmentName::BL => "BL",
            SegmentName::BR => "BR",
            SegmentName::B => "B",
        };
        f.write_str(s)
    }
}

/// One clickable mark belonging to a digit. The position is canonical-frame
/// space and immutable once placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub pos: Point,
    pub name: Option<SegmentName>,
}

impl Segment {
    pub fn new(pos: Point) -> Self {
        Self { pos, name: None }
    }

    /// Per-frame recognition hook for the downstream pipeline. Stub: the
    /// actual optical read happens outside this tool.
    pub fn scan(&self, _frame: &image::RgbImage) -> bool {
        false
    }
}

pub const SEGMENTS_PER_DIGIT: usize = 7;

/// An ordered group of up to seven segments forming one display digit.
/// Insertion order is placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digit {
    pub segments: Vec<Segment>,
    /// Highlight flag for the digit currently targeted by the naming pass.
    pub active: bool,
}

impl Digit {
    pub fn is_full(&self) -> bool {
        self.segments.len() >= SEGMENTS_PER_DIGIT
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Every segment carries a name.
    pub fn is_named(&self) -> bool {
        self.segments.iter().all(|s| s.name.is_some())
    }

    /// Full and fully named; the completion gate for the session.
    pub fn is_complete(&self) -> bool {
        self.is_full() && self.is_named()
    }

    /// Two segments of one digit sharing a name violates the model. Naming
    /// only ever assigns allocator output, so this is a consistency check.
    pub fn has_duplicate_names(&self) -> bool {
        let mut seen = [false; SEGMENTS_PER_DIGIT];
        for segment in &self.segments {
            if let Some(name) = segment.name {
                let idx = NAME_CYCLE.iter().position(|n| *n == name).unwrap_or(0);
                if seen[idx] {
                    return true;
                }
                seen[idx] = true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_fullness_and_naming() {
        let mut digit = Digit::default();
        assert!(digit.is_empty());
        assert!(digit.is_named()); // vacuously
        for i in 0..SEGMENTS_PER_DIGIT {
            assert!(!digit.is_full());
            digit.segments.push(Segment::new(Point::new(i as i32, 0)));
        }
        assert!(digit.is_full());
        assert!(!digit.is_named());
        assert!(!digit.is_complete());
        for (segment, name) in digit.segments.iter_mut().zip(NAME_CYCLE) {
            segment.name = Some(name);
        }
        assert!(digit.is_complete());
        assert!(!digit.has_duplicate_names());
    }

    #[test]
    fn duplicate_names_are_detected() {
        let mut digit = Digit::default();
        for _ in 0..2 {
            let mut segment = Segment::new(Point::new(0, 0));
            segment.name = Some(SegmentName::M);
            digit.segments.push(segment);
        }
        assert!(digit.has_duplicate_names());
    }
}
