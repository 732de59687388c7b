//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::forms::{AddField, BalanceField};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Friend list
    HighlightNext,
    HighlightPrev,
    SelectHighlighted,

    // Composer
    ToggleComposer,

    // Focus
    NextField,
    PrevField,
    FocusList,

    // Form editing
    CharInput(char),
    Backspace,
    Submit,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Which part of the screen receives key input
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Focus {
    #[default]
    FriendList,
    AddName,
    AddImage,
    YouGave,
    FriendGave,
}

impl Focus {
    pub fn is_field(&self) -> bool {
        !matches!(self, Focus::FriendList)
    }

    pub fn add_field(&self) -> Option<AddField> {
        match self {
            Focus::AddName => Some(AddField::Name),
            Focus::AddImage => Some(AddField::Image),
            _ => None,
        }
    }

    pub fn balance_field(&self) -> Option<BalanceField> {
        match self {
            Focus::YouGave => Some(BalanceField::YouGave),
            Focus::FriendGave => Some(BalanceField::FriendGave),
            _ => None,
        }
    }
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, focus: Focus, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if focus.is_field() {
        handle_field_keys(key)
    } else {
        handle_list_keys(key)
    }
}

fn handle_list_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::HighlightPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::HighlightNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::SelectHighlighted),
        KeyCode::Char('a') => Some(UiEvent::ToggleComposer),
        KeyCode::Tab => Some(UiEvent::NextField),
        KeyCode::BackTab => Some(UiEvent::PrevField),
        _ => None,
    }
}

fn handle_field_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::FocusList),
        KeyCode::Tab => Some(UiEvent::NextField),
        KeyCode::BackTab => Some(UiEvent::PrevField),
        KeyCode::Enter => Some(UiEvent::Submit),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}
