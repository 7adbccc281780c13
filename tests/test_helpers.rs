// Shared helpers for driving scripted calibration sessions.
#![allow(dead_code)]

use videosetter::config::AppConfig;
use videosetter::event::{
    InputEvent, KEY_CONFIRM, KEY_ROTATE, KEY_UNDO, PointerAction, ScriptedEvents,
};
use videosetter::frame::TestPatternSource;
use videosetter::render::NullDisplay;
use videosetter::session::{AnnotationSession, SessionOutcome};

pub fn press(x: i32, y: i32) -> InputEvent {
    InputEvent::Pointer {
        action: PointerAction::Press,
        x,
        y,
    }
}

pub fn release(x: i32, y: i32) -> InputEvent {
    InputEvent::Pointer {
        action: PointerAction::Release,
        x,
        y,
    }
}

pub fn middle(x: i32, y: i32) -> InputEvent {
    InputEvent::Pointer {
        action: PointerAction::Tertiary,
        x,
        y,
    }
}

pub fn key(code: i32) -> InputEvent {
    InputEvent::Key(code)
}

pub fn confirm() -> InputEvent {
    key(KEY_CONFIRM)
}

pub fn undo() -> InputEvent {
    key(KEY_UNDO)
}

pub fn rotate() -> InputEvent {
    key(KEY_ROTATE)
}

/// A press/release pair describing one crop drag.
pub fn drag(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<InputEvent> {
    vec![press(x0, y0), release(x1, y1)]
}

/// Screen positions roughly laid out like the seven segments of one digit,
/// anchored at its top-left corner.
pub fn seven_positions(x0: i32, y0: i32) -> Vec<(i32, i32)> {
    vec![
        (x0 + 10, y0),
        (x0, y0 + 10),
        (x0 + 20, y0 + 10),
        (x0 + 10, y0 + 20),
        (x0, y0 + 30),
        (x0 + 20, y0 + 30),
        (x0 + 10, y0 + 40),
    ]
}

/// A session over a generated test pattern with default bindings.
pub fn new_session(width: u32, height: u32, fps: f64) -> AnnotationSession {
    let mut source = TestPatternSource::new(width, height, fps);
    AnnotationSession::new(&mut source, AppConfig::default()).expect("session setup")
}

/// Feed a fixed event script into the session; exhausting the script while
/// the session is still running aborts it, which the undo/naming suites use
/// to freeze and inspect intermediate state.
pub fn run_script(session: &mut AnnotationSession, events: Vec<InputEvent>) -> SessionOutcome {
    let mut events = ScriptedEvents::new(events);
    let mut display = NullDisplay;
    session.run(&mut events, &mut display).expect("session run")
}
