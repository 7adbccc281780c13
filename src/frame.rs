//! Frame acquisition seam.
//!
//! Video decoding is an external concern; the session only ever needs the
//! first decoded frame and the frame rate. A still image (or a generated
//! test pattern) stands in for the video here.

use crate::error::SetterError;
use image::RgbImage;
use std::path::PathBuf;

/// Supplies the first decoded frame and the frame rate of the source.
pub trait FrameSource {
    fn first_frame(&mut self) -> Result<RgbImage, SetterError>;
    fn fps(&self) -> f64;
}

/// Reads a still image standing in for the first frame of a video.
pub struct StillImageSource {
    path: PathBuf,
    fps: f64,
}

impl StillImageSource {
    pub fn new(path: impl Into<PathBuf>, fps: f64) -> Self {
        Self {
            path: path.into(),
            fps,
        }
    }
}

impl FrameSource for StillImageSource {
    fn first_frame(&mut self) -> Result<RgbImage, SetterError> {
        let img = image::open(&self.path)
            .map_err(|e| SetterError::Frame(format!("{}: {e}", self.path.display())))?;
        Ok(img.to_rgb8())
    }

    fn fps(&self) -> f64 {
        self.fps
    }
}

/// Gray checkerboard pattern used when no source frame is available.
pub struct TestPatternSource {
    width: u32,
    height: u32,
    fps: f64,
}

impl TestPatternSource {
    pub fn new(width: u32, height: u32, fps: f64) -> Self {
        Self { width, height, fps }
    }
}

impl FrameSource for TestPatternSource {
    fn first_frame(&mut self) -> Result<RgbImage, SetterError> {
        let mut frame = RgbImage::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let v = if (x / 8 + y / 8) % 2 == 0 { 60 } else { 110 };
                frame.put_pixel(x, y, image::Rgb([v, v, v]));
            }
        }
        Ok(frame)
    }

    fn fps(&self) -> f64 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_has_requested_dimensions() {
        let mut source = TestPatternSource::new(64, 48, 29.97);
        let frame = source.first_frame().unwrap();
        assert_eq!(frame.dimensions(), (64, 48));
        assert_eq!(source.fps(), 29.97);
    }

    #[test]
    fn missing_still_image_is_a_frame_error() {
        let mut source = StillImageSource::new("/nonexistent/frame.png", 30.0);
        assert!(matches!(
            source.first_frame(),
            Err(SetterError::Frame(_))
        ));
    }
}
