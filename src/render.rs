//! Full-redraw frame composition.
//!
//! Every render starts over from the source frame: crops in append order,
//! scale refresh, resize, quadrant rotation, then segment markers through
//! the forward transform. Nothing is patched incrementally, which keeps the
//! displayed frame trivially consistent with the session state.

use crate::config::DisplayConfig;
use crate::error::SetterError;
use crate::state::SegmentModel;
use crate::transform::{Point, TransformPipeline};
use image::{Rgb, RgbImage, imageops};
use log::{debug, info, warn};
use std::path::PathBuf;

const OUTLINE_BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const OUTLINE_ACTIVE: Rgb<u8> = Rgb([255, 0, 0]);
const OUTLINE_NAMED: Rgb<u8> = Rgb([0, 255, 0]);

/// Display collaborator: receives each composed frame plus a title naming
/// the current phase.
pub trait Display {
    fn present(&mut self, title: &str, frame: &RgbImage);
}

/// Discards every frame. For headless runs and tests.
#[derive(Debug, Default)]
pub struct NullDisplay;

impl Display for NullDisplay {
    fn present(&mut self, _title: &str, _frame: &RgbImage) {}
}

/// Writes each redraw to a PNG file, overwriting the previous one.
pub struct SnapshotDisplay {
    path: PathBuf,
}

impl SnapshotDisplay {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Display for SnapshotDisplay {
    fn present(&mut self, title: &str, frame: &RgbImage) {
        match frame.save(&self.path) {
            Ok(()) => info!("{title}: snapshot written to {}", self.path.display()),
            Err(e) => warn!("failed to write snapshot {}: {e}", self.path.display()),
        }
    }
}

/// Compose the displayed frame from current session state. Refreshes the
/// pipeline's scale factor as a side effect, so pointer conversions after
/// this render see the dimensions the operator sees.
pub fn render(
    source: &RgbImage,
    pipeline: &mut TransformPipeline,
    model: &SegmentModel,
    display: &DisplayConfig,
) -> Result<RgbImage, SetterError> {
    let mut frame = source.clone();

    for crop in pipeline.crops() {
        let (fw, fh) = frame.dimensions();
        let (x, y, w, h) = crop.clamped(fw, fh);
        if w == 0 || h == 0 {
            debug!("skipping degenerate crop region {crop:?}");
            continue;
        }
        frame = imageops::crop_imm(&frame, x, y, w, h).to_image();
    }

    let scale = pipeline.refresh_scale(display.max_dimension);
    if (scale - 1.0).abs() > f64::EPSILON {
        let (w, h) = frame.dimensions();
        let nw = (f64::from(w) * scale).round().max(1.0) as u32;
        let nh = (f64::from(h) * scale).round().max(1.0) as u32;
        frame = imageops::resize(&frame, nw, nh, imageops::FilterType::Triangle);
    }

    frame = match pipeline.quadrant() {
        0 => frame,
        1 => imageops::rotate90(&frame),
        2 => imageops::rotate180(&frame),
        3 => imageops::rotate270(&frame),
        q => return Err(SetterError::InvalidRotation(q)),
    };

    draw_markers(&mut frame, pipeline, model, display)?;
    Ok(frame)
}

/// Overlay one marker per segment: a filled square sampling the pixel under
/// its center, outlined black, red for the active naming digit, green once
/// named. Markers outside the visible frame are skipped.
fn draw_markers(
    frame: &mut RgbImage,
    pipeline: &TransformPipeline,
    model: &SegmentModel,
    display: &DisplayConfig,
) -> Result<(), SetterError> {
    let half = display.marker_size as i32;
    let (w, h) = frame.dimensions();
    for digit in model.digits() {
        for segment in &digit.segments {
            let pos = pipeline.to_screen(segment.pos)?;
            if pos.x < 0 || pos.y < 0 || pos.x >= w as i32 || pos.y >= h as i32 {
                continue;
            }
            let fill = *frame.get_pixel(pos.x as u32, pos.y as u32);
            let outline = if digit.active {
                OUTLINE_ACTIVE
            } else if segment.name.is_some() {
                OUTLINE_NAMED
            } else {
                OUTLINE_BLACK
            };
            fill_square(frame, pos, half, fill);
            outline_square(frame, pos, half, outline);
        }
    }
    Ok(())
}

fn fill_square(frame: &mut RgbImage, center: Point, half: i32, color: Rgb<u8>) {
    for y in (center.y - half)..=(center.y + half) {
        for x in (center.x - half)..=(center.x + half) {
            put_pixel_checked(frame, x, y, color);
        }
    }
}

fn outline_square(frame: &mut RgbImage, center: Point, half: i32, color: Rgb<u8>) {
    for x in (center.x - half)..=(center.x + half) {
        put_pixel_checked(frame, x, center.y - half, color);
        put_pixel_checked(frame, x, center.y + half, color);
    }
    for y in (center.y - half)..=(center.y + half) {
        put_pixel_checked(frame, center.x - half, y, color);
        put_pixel_checked(frame, center.x + half, y, color);
    }
}

fn put_pixel_checked(frame: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    let (w, h) = frame.dimensions();
    if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
        frame.put_pixel(x as u32, y as u32, color);
    }
}
