//! Invertible mapping between display (screen) and canonical frame
//! coordinates.
//!
//! The displayed frame is derived from the canonical source frame by
//! applying crop regions in append order, a quadrant rotation, and a
//! display scale factor. `to_canonical` reverses these steps for incoming
//! pointer positions; `to_screen` replays them for marker drawing. The two
//! are mutual inverses up to the ±1 rounding introduced by scaling.

use crate::error::SetterError;
use serde::{Deserialize, Serialize};

/// A position in either screen or canonical frame space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance. Used for nearest-segment lookups.
    pub fn dist_sq(self, other: Point) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

/// A rectangular sub-window, expressed relative to the result of every
/// previously applied crop region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl CropRegion {
    /// Build a region from two drag corners in either order.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            top_left: Point::new(a.x.min(b.x), a.y.min(b.y)),
            bottom_right: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// True when the region encloses no pixels.
    pub fn is_degenerate(&self) -> bool {
        self.top_left.x == self.bottom_right.x || self.top_left.y == self.bottom_right.y
    }

    /// Clamp the region to a frame of the given size, returning
    /// `(x, y, width, height)` of the surviving window.
    pub fn clamped(&self, frame_w: u32, frame_h: u32) -> (u32, u32, u32, u32) {
        let x0 = self.top_left.x.clamp(0, frame_w as i32) as u32;
        let y0 = self.top_left.y.clamp(0, frame_h as i32) as u32;
        let x1 = self.bottom_right.x.clamp(0, frame_w as i32) as u32;
        let y1 = self.bottom_right.y.clamp(0, frame_h as i32) as u32;
        (x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }
}

/// Crop list, rotation quadrant, and display scale for one session.
#[derive(Debug, Clone)]
pub struct TransformPipeline {
    original_size: (u32, u32),
    crops: Vec<CropRegion>,
    quadrant: u8,
    scale: f64,
}

impl TransformPipeline {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            original_size: (width, height),
            crops: Vec::new(),
            quadrant: 0,
            scale: 1.0,
        }
    }

    pub fn original_size(&self) -> (u32, u32) {
        self.original_size
    }

    pub fn crops(&self) -> &[CropRegion] {
        &self.crops
    }

    pub fn quadrant(&self) -> u8 {
        self.quadrant
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn push_crop(&mut self, region: CropRegion) {
        self.crops.push(region);
    }

    /// Drop the most recent crop region. No-op when none exist.
    pub fn pop_crop(&mut self) -> Option<CropRegion> {
        self.crops.pop()
    }

    /// Advance the rotation by one quadrant, wrapping after 270 degrees.
    pub fn advance_rotation(&mut self) {
        self.quadrant = (self.quadrant + 1) % 4;
    }

    /// Frame size after every crop region, before rotation and scaling.
    pub fn cropped_size(&self) -> (u32, u32) {
        let (mut w, mut h) = self.original_size;
        for crop in &self.crops {
            let (_, _, cw, ch) = crop.clamped(w, h);
            w = cw;
            h = ch;
        }
        (w, h)
    }

    /// Recompute the display scale from the current post-crop size. Runs
    /// before every render; the factor is never carried over stale after a
    /// crop or rotation change.
    pub fn refresh_scale(&mut self, bound: u32) -> f64 {
        let (w, h) = self.cropped_size();
        self.scale = if (w > bound || h > bound) && h > 0 {
            f64::from(bound) / f64::from(h)
        } else {
            1.0
        };
        self.scale
    }

    /// Screen position of a crop drag corner -> position relative to the
    /// currently displayed window. Regions are stored relative to the
    /// result of every prior region, so only the display scale is undone;
    /// the crop offsets stay out. Rotation is still at quadrant zero
    /// whenever new regions can be appended.
    pub fn to_crop_relative(&self, pos: Point) -> Point {
        Point::new(
            (f64::from(pos.x) / self.scale).round() as i32,
            (f64::from(pos.y) / self.scale).round() as i32,
        )
    }

    /// Screen position of a pointer event -> canonical frame position:
    /// undo the display scale, add back each crop offset in append order,
    /// then undo the quadrant rotation against the original frame size.
    pub fn to_canonical(&self, pos: Point) -> Result<Point, SetterError> {
        let mut pos = Point::new(
            (f64::from(pos.x) / self.scale).round() as i32,
            (f64::from(pos.y) / self.scale).round() as i32,
        );
        for crop in &self.crops {
            pos.x += crop.top_left.x;
            pos.y += crop.top_left.y;
        }
        self.unrotate(pos)
    }

    /// Canonical frame position -> screen position: rotate against the
    /// original frame size, subtract crop offsets in reverse append order,
    /// then apply the display scale.
    pub fn to_screen(&self, pos: Point) -> Result<Point, SetterError> {
        let mut pos = self.rotate(pos)?;
        for crop in self.crops.iter().rev() {
            pos.x -= crop.top_left.x;
            pos.y -= crop.top_left.y;
        }
        Ok(Point::new(
            (f64::from(pos.x) * self.scale).round() as i32,
            (f64::from(pos.y) * self.scale).round() as i32,
        ))
    }

    fn rotate(&self, pos: Point) -> Result<Point, SetterError> {
        let w = self.original_size.0 as i32;
        let h = self.original_size.1 as i32;
        match self.quadrant {
            0 => Ok(pos),
            1 => Ok(Point::new(pos.y, w - pos.x)),
            2 => Ok(Point::new(w - pos.x, h - pos.y)),
            3 => Ok(Point::new(h - pos.y, pos.x)),
            q => Err(SetterError::InvalidRotation(q)),
        }
    }

    fn unrotate(&self, pos: Point) -> Result<Point, SetterError> {
        let w = self.original_size.0 as i32;
        let h = self.original_size.1 as i32;
        match self.quadrant {
            0 => Ok(pos),
            1 => Ok(Point::new(w - pos.y, pos.x)),
            2 => Ok(Point::new(w - pos.x, h - pos.y)),
            3 => Ok(Point::new(pos.y, h - pos.x)),
            q => Err(SetterError::InvalidRotation(q)),
        }
    }
}
