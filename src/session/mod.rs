//! The annotation session state machine.
//!
//! Phases run in fixed order (Cropping → Rotating → Placement → Naming →
//! Done), with Aborted reachable from any phase when event delivery dries
//! up. The session consumes exactly one event per iteration and follows
//! every mutation with a full redraw.

mod cropping;
mod naming;
mod placement;
mod rotating;

use crate::config::AppConfig;
use crate::error::SetterError;
use crate::event::{EventSource, InputEvent};
use crate::export::ExportModel;
use crate::frame::FrameSource;
use crate::render::{Display, render};
use crate::state::{NameAllocator, SegmentModel};
use crate::transform::{Point, TransformPipeline};
use image::RgbImage;
use log::{debug, info, warn};

/// Phase of the calibration session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Cropping,
    Rotating,
    Placing,
    Naming,
    Done,
    Aborted,
}

impl Phase {
    /// Window title shown to the operator.
    pub fn title(self) -> &'static str {
        match self {
            Phase::Cropping => "Cropping",
            Phase::Rotating => "Rotating",
            Phase::Placing => "Placement",
            Phase::Naming => "Naming",
            Phase::Done => "Done",
            Phase::Aborted => "Aborted",
        }
    }
}

/// Terminal result of a session run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The operator confirmed a complete, fully named layout.
    Completed(ExportModel),
    /// Event delivery ended; nothing is exported.
    Aborted,
}

/// The controller driving one calibration session over one source frame.
pub struct AnnotationSession {
    config: AppConfig,
    source_frame: RgbImage,
    fps: f64,
    pipeline: TransformPipeline,
    model: SegmentModel,
    phase: Phase,
    /// First corner of an in-flight crop drag.
    pending_corner: Option<Point>,
    /// Fresh per naming pass, shared across every digit in that pass.
    allocator: Option<NameAllocator>,
}

impl AnnotationSession {
    /// Pull the first frame from the source and set up an empty session.
    pub fn new(source: &mut dyn FrameSource, config: AppConfig) -> Result<Self, SetterError> {
        let frame = source.first_frame()?;
        let (width, height) = frame.dimensions();
        info!("session start: {width}x{height} @ {:.2} fps", source.fps());
        Ok(Self {
            fps: source.fps(),
            pipeline: TransformPipeline::new(width, height),
            model: SegmentModel::new(),
            phase: Phase::Cropping,
            pending_corner: None,
            allocator: None,
            source_frame: frame,
            config,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn model(&self) -> &SegmentModel {
        &self.model
    }

    pub fn pipeline(&self) -> &TransformPipeline {
        &self.pipeline
    }

    /// Run the event loop until a terminal phase. Blocks on one event per
    /// iteration; the event source returning `None` aborts the session.
    pub fn run(
        &mut self,
        events: &mut dyn EventSource,
        display: &mut dyn Display,
    ) -> Result<SessionOutcome, SetterError> {
        self.redraw(display)?;
        loop {
            match self.phase {
                Phase::Done => {
                    let export = ExportModel::from_digits(self.model.digits(), self.fps);
                    return Ok(SessionOutcome::Completed(export));
                }
                Phase::Aborted => return Ok(SessionOutcome::Aborted),
                _ => {}
            }
            let Some(event) = events.next_event() else {
                warn!("event source exhausted; aborting session");
                self.phase = Phase::Aborted;
                return Ok(SessionOutcome::Aborted);
            };
            self.dispatch(event)?;
            self.redraw(display)?;
        }
    }

    fn dispatch(&mut self, event: InputEvent) -> Result<(), SetterError> {
        match self.phase {
            Phase::Cropping => cropping::handle(self, event),
            Phase::Rotating => rotating::handle(self, event),
            Phase::Placing => placement::handle(self, event),
            Phase::Naming => naming::handle(self, event),
            Phase::Done | Phase::Aborted => Ok(()),
        }
    }

    fn advance_to(&mut self, phase: Phase) {
        info!("phase: {} -> {}", self.phase.title(), phase.title());
        self.phase = phase;
        if phase == Phase::Naming {
            self.allocator = Some(NameAllocator::new());
        }
    }

    /// Convert a pointer position through the current pipeline. The scale
    /// factor is fresh because every dispatch is preceded by a redraw.
    fn to_canonical(&self, x: i32, y: i32) -> Result<Point, SetterError> {
        self.pipeline.to_canonical(Point::new(x, y))
    }

    fn redraw(&mut self, display: &mut dyn Display) -> Result<(), SetterError> {
        let frame = render(
            &self.source_frame,
            &mut self.pipeline,
            &self.model,
            &self.config.display,
        )?;
        display.present(self.phase.title(), &frame);
        Ok(())
    }

    /// Malformed or out-of-phase events are dropped, not errors.
    fn ignore(&self, event: InputEvent) {
        debug!("ignoring event in {}: {event:?}", self.phase.title());
    }
}
