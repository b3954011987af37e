use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::direction::Direction;
use crate::game::Action;
use crate::render::Rect;

/// Translates one terminal event into at most one game action.
pub fn action_for(event: &Event, shuffle_button: Rect) -> Option<Action> {
    match event {
        Event::Key(key) => key_action(key),
        Event::Mouse(mouse) => mouse_action(mouse, shuffle_button),
        _ => None,
    }
}

fn key_action(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Move(Direction::Right)),
        KeyCode::Char('s') => Some(Action::Shuffle),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

fn mouse_action(mouse: &MouseEvent, shuffle_button: Rect) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left)
            if shuffle_button.contains(mouse.column, mouse.row) =>
        {
            Some(Action::Shuffle)
        }
        _ => None,
    }
}
