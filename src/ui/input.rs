use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Char(char),
    Backspace,
    ClearInput,
    Submit,
    LeaveSearch,
    EnterSearch,
    ScrollUp,
    ScrollDown,
    OpenRepo,
    OpenProfile,
    Help,
    ClosePopup,
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Search,
    Browse,
}

pub fn map_key(key: KeyEvent, mode: InputMode) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match mode {
        InputMode::Search => match key.code {
            KeyCode::Enter => Action::Submit,
            KeyCode::Esc | KeyCode::Tab => Action::LeaveSearch,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::ClearInput
            }
            KeyCode::Char(c) => Action::Char(c),
            _ => Action::None,
        },
        InputMode::Browse => match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::Char('o') | KeyCode::Enter => Action::OpenRepo,
            KeyCode::Char('p') => Action::OpenProfile,
            KeyCode::Char('/') | KeyCode::Char('s') | KeyCode::Tab => Action::EnterSearch,
            KeyCode::Char('?') => Action::Help,
            KeyCode::Esc => Action::ClosePopup,
            _ => Action::None,
        },
    }
}
