use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TuiEvent {
    /// A printable key. The run loop feeds this to the pad dispatcher
    /// first; unclaimed characters fall through to the control keys.
    Key(char),
    /// Nudge the volume gauge by a signed amount (arrows ±1, page keys ±10).
    NudgeVolume(i8),
    /// Left mouse click at (column, row), hit-tested against the last draw.
    Click(u16, u16),
    /// Terminal resized; just redraw.
    Resize,
    Quit,
}

/// Poll for an event with timeout (blocks up to `timeout`)
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        translate(event::read().unwrap())
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Map a raw crossterm event to a TuiEvent.
///
/// Key repeat is deliberately not filtered: holding a pad key down
/// retriggers the pad, the same way a held key repeats in the reference
/// environment.
fn translate(raw: Event) -> Option<TuiEvent> {
    match raw {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                // Ctrl+C always quits
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Char(c)) => Some(TuiEvent::Key(c)),
                (_, KeyCode::Up) => Some(TuiEvent::NudgeVolume(1)),
                (_, KeyCode::Down) => Some(TuiEvent::NudgeVolume(-1)),
                (_, KeyCode::PageUp) => Some(TuiEvent::NudgeVolume(10)),
                (_, KeyCode::PageDown) => Some(TuiEvent::NudgeVolume(-10)),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::Click(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
