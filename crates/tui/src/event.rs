//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Keys map differently depending on whether the
//! table or the form has focus.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use roster_protocol::Message;

use crate::state::Focus;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event, focus: Focus) -> Option<Message> {
    match event {
        Event::Key(key) => match focus {
            Focus::Table => key_to_message(*key),
            Focus::Form => key_to_form_message(*key),
        },
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only left-click press events are handled, producing a `ClickAt` message
/// with the click coordinates.
#[must_use]
fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

/// Converts a key event to a message while the table has focus.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Clear the selection |
/// | `Up` | Select previous row |
/// | `Down` | Select next row |
/// | `Enter` or `Space` | Edit the selected row in the form |
/// | `Tab` | Move into the form |
/// | `a` | Add a new employee |
/// | `r` | Refresh |
/// | `?` or `F1` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(&key, 'c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),
        KeyCode::Tab => Some(Message::NextField),

        KeyCode::Char('a') => Some(Message::AddNew),
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a message while the form has focus.
///
/// Printable characters go to the focused field, so the table's letter
/// shortcuts are not available here.
///
/// # Key Bindings (Form)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Ctrl+S` | Save |
/// | `Esc` | Back to the table |
/// | `Tab` or `Down` | Next field |
/// | `Shift+Tab` or `Up` | Previous field |
/// | `Left` / `Right` | Previous / next choice |
/// | `Enter` | Activate the focused field or button |
/// | `Backspace` | Delete last character |
/// | `F1` | Toggle help |
/// | Any char | Input |
#[must_use]
pub fn key_to_form_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(&key, 'c') {
        return Some(Message::Quit);
    }
    if is_ctrl(&key, 's') {
        return Some(Message::Save);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Tab | KeyCode::Down => Some(Message::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Message::PrevField),
        KeyCode::Left => Some(Message::CycleChoice { delta: -1 }),
        KeyCode::Right => Some(Message::CycleChoice { delta: 1 }),

        KeyCode::Enter => Some(Message::Select),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::F(1) => Some(Message::ToggleHelp),

        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Message::Input { ch })
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, MouseEvent, MouseEventKind};

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    fn make_mouse_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        let ctrl_c = make_key_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_message(ctrl_c), Some(Message::Quit));
        assert_eq!(key_to_form_message(ctrl_c), Some(Message::Quit));
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn table_navigation_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Up)),
            Some(Message::NavigateUp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Down)),
            Some(Message::NavigateDown)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Left)), None);
        assert_eq!(key_to_message(make_key(KeyCode::Char('j'))), None);
    }

    #[test]
    fn table_action_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter)),
            Some(Message::Select)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char(' '))),
            Some(Message::Select)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Tab)),
            Some(Message::NextField)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('a'))),
            Some(Message::AddNew)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('r'))),
            Some(Message::Refresh)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Esc)),
            Some(Message::Escape)
        );
    }

    #[test]
    fn help_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?'))),
            Some(Message::ToggleHelp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::F(1))),
            Some(Message::ToggleHelp)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::F(1))),
            Some(Message::ToggleHelp)
        );
        // '?' is text inside the form
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Char('?'))),
            Some(Message::Input { ch: '?' })
        );
    }

    #[test]
    fn form_field_movement() {
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Tab)),
            Some(Message::NextField)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Down)),
            Some(Message::NextField)
        );
        assert_eq!(
            key_to_form_message(make_key_with_modifiers(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Message::PrevField)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Up)),
            Some(Message::PrevField)
        );
    }

    #[test]
    fn form_choice_cycling() {
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Left)),
            Some(Message::CycleChoice { delta: -1 })
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Right)),
            Some(Message::CycleChoice { delta: 1 })
        );
    }

    #[test]
    fn form_text_editing() {
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Char('a'))),
            Some(Message::Input { ch: 'a' })
        );
        assert_eq!(
            key_to_form_message(make_key_with_modifiers(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Message::Input { ch: 'A' })
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Backspace)),
            Some(Message::Backspace)
        );
        assert_eq!(
            key_to_form_message(make_key_with_modifiers(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn form_actions() {
        assert_eq!(
            key_to_form_message(make_key_with_modifiers(
                KeyCode::Char('s'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Save)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Enter)),
            Some(Message::Select)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Esc)),
            Some(Message::Escape)
        );
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(2))), None);
        assert_eq!(key_to_form_message(make_key(KeyCode::F(2))), None);
    }

    #[test]
    fn mouse_left_click_generates_click_at() {
        let mouse = make_mouse_click(10, 5);
        assert_eq!(
            mouse_to_message(&mouse),
            Some(Message::ClickAt { column: 10, row: 5 })
        );
    }

    #[test]
    fn mouse_other_events_ignored() {
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Moved,
        ] {
            let mouse = MouseEvent {
                kind,
                column: 10,
                row: 5,
                modifiers: KeyModifiers::NONE,
            };
            assert_eq!(mouse_to_message(&mouse), None);
        }
    }

    #[test]
    fn event_to_message_routes_keys_by_focus() {
        let key_event = Event::Key(make_key(KeyCode::Char('a')));
        assert_eq!(
            event_to_message(&key_event, Focus::Table),
            Some(Message::AddNew)
        );
        assert_eq!(
            event_to_message(&key_event, Focus::Form),
            Some(Message::Input { ch: 'a' })
        );
    }

    #[test]
    fn event_to_message_handles_mouse_events() {
        let mouse_event = Event::Mouse(make_mouse_click(15, 8));
        assert_eq!(
            event_to_message(&mouse_event, Focus::Form),
            Some(Message::ClickAt { column: 15, row: 8 })
        );
    }

    #[test]
    fn event_to_message_ignores_resize_events() {
        let resize_event = Event::Resize(80, 24);
        assert_eq!(event_to_message(&resize_event, Focus::Table), None);
    }
}
