//! Placement phase: click segment positions, first-fit into digits.

use super::{AnnotationSession, Phase};
use crate::error::SetterError;
use crate::event::{InputEvent, PointerAction};

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
            let pos = session.to_canonical(x, y)?;
            session.model.place(pos);
        }
        // The older interaction deleted the nearest segment on this button;
        // global undo-last replaced it.
        InputEvent::Pointer {
            action: PointerAction::Tertiary,
            ..
        } => session.ignore(event),
        InputEvent::Key(code) if code == session.config.keys.confirm => {
            session.advance_to(Phase::Naming);
        }
        InputEvent::Key(code) if code == session.config.keys.undo => {
            session.model.undo_place();
        }
        other => session.ignore(other),
    }
    Ok(())
}
