//! Semantic input actions and their key/mouse mappings.
//!
//! The event loop translates raw crossterm events into `Action`s here and
//! dispatches them to the app state. Global shortcuts (Alt+T, Alt+N) win
//! over everything else; Enter/Space activate whichever control holds
//! focus; mouse clicks resolve through surface hit-testing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::ui::layout::{SurfaceId, Surfaces};

/// Everything the user can ask the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Switch between light and dark.
    ToggleTheme,
    /// Pick and show a new affirmation.
    NewAffirmation,
    /// Move focus to the next control.
    FocusNext,
    /// Move focus to the previous control.
    FocusPrev,
    /// Activate the focused control (Enter/Space).
    Activate,
    /// Exit the dashboard.
    Quit,
}

/// Map a key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // Global shortcuts pre-empt everything else
    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('t') | KeyCode::Char('T') => Some(Action::ToggleTheme),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::NewAffirmation),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Map a mouse event to a semantic Action via surface hit-testing.
///
/// Only left-button presses on a control count as activation.
pub fn map_mouse(mouse: MouseEvent, surfaces: &Surfaces) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    match surfaces.hit(mouse.column, mouse.row)? {
        SurfaceId::ThemeToggle => Some(Action::ToggleTheme),
        SurfaceId::NewAffirmation => Some(Action::NewAffirmation),
    }
}
