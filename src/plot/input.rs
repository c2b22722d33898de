//! Keyboard input handling for the interactive display.
//!
//! Dispatches crossterm events to the view state and returns control flow
//! signals to the display loop.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::plot::state::{InputResult, ViewState};

/// Handle any input event.
pub fn handle_event(event: Event, state: &mut ViewState) -> InputResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(key, state),
        Event::Resize(_, _) => {
            state.handle_resize();
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore mouse, focus, paste
    }
}

/// Handle a keyboard event.
pub fn handle_key_event(key: KeyEvent, state: &mut ViewState) -> InputResult {
    // If help is showing, any key closes it
    if state.show_help {
        state.show_help = false;
        state.needs_render = true;
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        KeyCode::Char('?') => {
            state.toggle_help();
            InputResult::Continue
        }
        KeyCode::Char(' ') => {
            state.toggle_pause();
            InputResult::Continue
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            state.speed_up();
            InputResult::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            state.speed_down();
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}
