//! Cropping phase: drag out sub-windows of the frame.

use super::{AnnotationSession, Phase};
use crate::error::SetterError;
use crate::event::{InputEvent, PointerAction};
use crate::transform::{CropRegion, Point};
use log::debug;

pub(super) fn handle(
    session: &mut AnnotationSession,
    event: InputEvent,
) -> Result<(), SetterError> {
    match event {
        InputEvent::Pointer {
            action: PointerAction::Press,
            x,
            y,
        } => {
            // Drag corners are relative to the displayed window, not the
            // canonical frame; prior crop offsets must not leak in.
            session.pending_corner = Some(session.pipeline.to_crop_relative(Point::new(x, y)));
        }
        InputEvent::Pointer {
            action: PointerAction::Release,
            x,
            y,
        } => {
            // A release without a preceding press is dropped.
            if let Some(first) = session.pending_corner.take() {
                let second = session.pipeline.to_crop_relative(Point::new(x, y));
                let region = CropRegion::new(first, second);
                if region.is_degenerate() {
                    debug!("dropping zero-area crop drag at {:?}", region.top_left);
                } else {
                    session.pipeline.push_crop(region);
                }
            }
        }
        InputEvent::Key(code) if code == session.config.keys.confirm => {
            session.advance_to(Phase::Rotating);
        }
        InputEvent::Key(code) if code == session.config.keys.undo => {
            // No-op when nothing has been cropped yet.
            session.pipeline.pop_crop();
        }
        other => session.ignore(other),
    }
    Ok(())
}
