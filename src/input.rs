//! Maps terminal events to app actions.

use crate::app::Tab;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Edits on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactInput {
    Char(char),
    Backspace,
    NextField,
    PrevField,
    Submit,
    /// Back to the arcade.
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Jump, or start a session when none is running.
    Flap,
    /// Start when idle, restart otherwise.
    StartButton,
    SwitchTab,
    Quit,
    Contact(ContactInput),
    None,
}

/// Translate a key press for the given tab.
pub fn map_key(tab: Tab, key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match tab {
        Tab::Arcade => match key.code {
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') => Action::Flap,
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Action::StartButton,
            KeyCode::Tab | KeyCode::Char('c') => Action::SwitchTab,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        },
        Tab::Contact => match key.code {
            KeyCode::Esc => Action::Contact(ContactInput::Leave),
            KeyCode::Enter => Action::Contact(ContactInput::Submit),
            KeyCode::Tab | KeyCode::Down => Action::Contact(ContactInput::NextField),
            KeyCode::BackTab | KeyCode::Up => Action::Contact(ContactInput::PrevField),
            KeyCode::Backspace => Action::Contact(ContactInput::Backspace),
            KeyCode::Char(c) => Action::Contact(ContactInput::Char(c)),
            _ => Action::None,
        },
    }
}

/// A left click inside the drawing surface flaps; everything else is ignored.
pub fn map_mouse(tab: Tab, surface: Rect, mouse: MouseEvent) -> Action {
    if tab != Tab::Arcade {
        return Action::None;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if contains(surface, mouse.column, mouse.row) => {
            Action::Flap
        }
        _ => Action::None,
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
