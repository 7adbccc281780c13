//! Rotating phase: step the display through quadrant rotations.

use super::{AnnotationSession, Phase};
use crate::error::SetterError;
use crate::event::InputEvent;

pub(super) fn handle(
    session: &mut AnnotationSession,
    event: InputEvent,
) -> Result<(), SetterError> {
    match event {
        InputEvent::Key(code) if code == session.config.keys.rotate => {
            session.pipeline.advance_rotation();
        }
        InputEvent::Key(code) if code == session.config.keys.confirm => {
            session.advance_to(Phase::Placing);
        }
        other => session.ignore(other),
    }
    Ok(())
}
