//! Naming phase: assign canonical names to placed segments.
//!
//! A click names the unnamed segment nearest to it within the first digit
//! that is not yet fully named. The allocator is shared across all digits
//! of the pass, so the cycle wraps over digit boundaries.

use super::{AnnotationSession, Phase};
use crate::error::SetterError;
use crate::event::{InputEvent, PointerAction};
use crate::state::NameAllocator;
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
            let pos = session.to_canonical(x, y)?;
            let target = session.model.first_unnamed_digit();
            session.model.set_active(target);
            if let Some(digit) = target {
                let allocator = session
                    .allocator
                    .get_or_insert_with(NameAllocator::new);
                let name = allocator.allocate();
                if session.model.name_nearest(digit, pos, name).is_none() {
                    // Digit vanished or had nothing unnamed; retract the name.
                    allocator.release_last();
                }
            }
        }
        InputEvent::Key(code) if code == session.config.keys.undo => {
            if session.model.undo_name() {
                // Re-issue the cleared symbol on the next assignment so the
                // cycle never skips or duplicates.
                if let Some(allocator) = session.allocator.as_mut() {
                    allocator.release_last();
                }
            }
        }
        InputEvent::Key(code) if code == session.config.keys.confirm => {
            if session.model.all_complete() {
                session.model.set_active(None);
                session.advance_to(Phase::Done);
            } else {
                debug!("confirm ignored: naming incomplete");
            }
        }
        other => session.ignore(other),
    }
    Ok(())
}
