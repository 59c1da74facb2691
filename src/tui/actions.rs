use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiAction {
    Quit,
    NextFocus,
    PrevFocus,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ToStart,
    ToEnd,
    PageUp,
    PageDown,
    Activate,
    Back,
    SwitchTab,
    OpenInsights,
    InsertChar(char),
    DeleteLeft,
    DeleteRight,
}

pub fn key_pressed() -> Option<KeyEvent> {
    if poll(Duration::from_millis(50)).ok()? {
        if let Event::Key(key) = read().ok()? {
            if key.kind == KeyEventKind::Press {
                return Some(key);
            }
        }
    }
    None
}

pub fn key_action(key: KeyEvent) -> Option<TuiAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(TuiAction::Quit),
            KeyCode::Char('t') => Some(TuiAction::SwitchTab),
            KeyCode::Char('n') => Some(TuiAction::OpenInsights),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(c) => Some(TuiAction::InsertChar(c)),
        KeyCode::Tab => Some(TuiAction::NextFocus),
        KeyCode::BackTab => Some(TuiAction::PrevFocus),
        KeyCode::Up => Some(TuiAction::MoveUp),
        KeyCode::Down => Some(TuiAction::MoveDown),
        KeyCode::Left => Some(TuiAction::MoveLeft),
        KeyCode::Right => Some(TuiAction::MoveRight),
        KeyCode::Home => Some(TuiAction::ToStart),
        KeyCode::End => Some(TuiAction::ToEnd),
        KeyCode::PageUp => Some(TuiAction::PageUp),
        KeyCode::PageDown => Some(TuiAction::PageDown),
        KeyCode::Enter => Some(TuiAction::Activate),
        KeyCode::Esc => Some(TuiAction::Back),
        KeyCode::Backspace => Some(TuiAction::DeleteLeft),
        KeyCode::Delete => Some(TuiAction::DeleteRight),
        _ => None,
    }
}
