//! Interactive calibration of seven-segment digit layouts in video frames.
//!
//! The operator crops the first frame down to the display, picks a quadrant
//! rotation, clicks every segment of every digit, then names each segment
//! from the fixed seven-symbol cycle. The recorded canonical positions are
//! handed to a downstream recognition pipeline as an
//! [`export::ExportModel`].
//!
//! Video decoding, the display surface, and event delivery are external
//! collaborators behind the [`frame::FrameSource`], [`render::Display`],
//! and [`event::EventSource`] traits.

pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod frame;
pub mod render;
pub mod session;
pub mod state;
pub mod transform;

pub use error::SetterError;
pub use session::{AnnotationSession, Phase, SessionOutcome};
