//! Input event model and the event-delivery seam.
//!
//! The display collaborator feeds the session pointer gestures and key
//! codes one at a time. Key codes follow the usual terminal conventions:
//! carriage return confirms, backspace undoes, `r` advances the rotation.

use crossbeam_channel::Receiver;
use log::debug;
use std::collections::VecDeque;
use std::io::BufRead;

/// Default key code for the confirm action (carriage return).
pub const KEY_CONFIRM: i32 = 13;
/// Default key code for the undo action (backspace).
pub const KEY_UNDO: i32 = 8;
/// Default key code advancing the rotation quadrant (`r`).
pub const KEY_ROTATE: i32 = 114;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Press,
    Release,
    /// Alternate button. Recognized for compatibility with the older
    /// nearest-delete interaction but unused by the current placement flow.
    Tertiary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A pointer gesture at screen coordinates.
    Pointer {
        action: PointerAction,
        x: i32,
        y: i32,
    },
    /// A key press by raw code.
    Key(i32),
}

/// Blocking, one-event-at-a-time delivery from the display collaborator.
///
/// `None` means no further input can ever arrive; the session treats it as
/// an unconditional abort.
pub trait EventSource {
    fn next_event(&mut self) -> Option<InputEvent>;
}

/// A fixed in-memory event sequence, for tests and replays.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    events: VecDeque<InputEvent>,
}

impl ScriptedEvents {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

/// Events delivered over a channel from an embedding UI thread. The sender
/// side going away ends the session.
pub struct ChannelEvents {
    receiver: Receiver<InputEvent>,
}

impl ChannelEvents {
    pub fn new(receiver: Receiver<InputEvent>) -> Self {
        Self { receiver }
    }
}

impl EventSource for ChannelEvents {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.receiver.recv().ok()
    }
}

/// Line-oriented event reader for driving a session from a terminal or a
/// piped script. One event per line:
///
/// ```text
/// press X Y
/// release X Y
/// middle X Y
/// key CODE
/// confirm | undo | rotate | quit
/// ```
///
/// Unrecognized lines are skipped with a debug log; end of input or `quit`
/// ends the session.
pub struct TextEvents<R: BufRead> {
    input: R,
}

impl<R: BufRead> TextEvents<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> EventSource for TextEvents<R> {
    fn next_event(&mut self) -> Option<InputEvent> {
        loop {
            let mut line = String::new();
            let read = self.input.read_line(&mut line).ok()?;
            if read == 0 {
                return None;
            }
            let parts: Vec<&str> = line.split_whitespace().collect();
            let event = match parts.as_slice() {
                [] => continue,
                ["press", x, y] => pointer(PointerAction::Press, x, y),
                ["release", x, y] => pointer(PointerAction::Release, x, y),
                ["middle", x, y] => pointer(PointerAction::Tertiary, x, y),
                ["key", code] => code.parse().ok().map(InputEvent::Key),
                ["confirm"] => Some(InputEvent::Key(KEY_CONFIRM)),
                ["undo"] => Some(InputEvent::Key(KEY_UNDO)),
                ["rotate"] => Some(InputEvent::Key(KEY_ROTATE)),
                ["quit"] => return None,
                _ => None,
            };
            match event {
                Some(event) => return Some(event),
                None => debug!("skipping unrecognized input line: {}", line.trim()),
            }
        }
    }
}

fn pointer(action: PointerAction, x: &str, y: &str) -> Option<InputEvent> {
    Some(InputEvent::Pointer {
        action,
        x: x.parse().ok()?,
        y: y.parse().ok()?,
    })
}
