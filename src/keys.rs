use crate::app::Screen;
use crate::state::messages::UserAction;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key press into what it means on `screen`.
///
/// While the search prompt is open every printable key is text, so only
/// `ctrl+c` keeps its global meaning.
pub fn map_key(key_event: KeyEvent, screen: Screen, searching: bool) -> Option<UserAction> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let code = key_event.code;
    let modifiers = key_event.modifiers;
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && code == Char('c') {
        return Some(UserAction::Quit);
    }

    if searching {
        return match code {
            KeyCode::Enter => Some(UserAction::SearchConfirm),
            KeyCode::Esc => Some(UserAction::SearchCancel),
            KeyCode::Backspace => Some(UserAction::SearchBackspace),
            Char(c) if !ctrl && !modifiers.contains(KeyModifiers::ALT) => {
                Some(UserAction::SearchInput(c))
            }
            _ => None,
        };
    }

    let action = match (screen, code, ctrl) {
        (_, Char('"'), false) => UserAction::ToggleLogs,
        (_, Char('w'), true) => UserAction::OpenInBrowser,

        (Screen::Scoreboard, Char('q') | KeyCode::Esc, false) => UserAction::Quit,
        (Screen::Scoreboard, KeyCode::Enter, _) => UserAction::Select,

        (Screen::Detail, KeyCode::Esc | KeyCode::Backspace, false) => UserAction::Back,
        (Screen::Detail, Char('/'), false) => UserAction::StartSearch,
        (Screen::Detail, Char('n'), false) => UserAction::NextMatch,
        (Screen::Detail, Char('N'), false) => UserAction::PrevMatch,
        (Screen::Detail, Char('s'), true) => UserAction::ToggleSide,
        (Screen::Detail, Char('q'), true) => UserAction::NextQuarter,
        (Screen::Detail, Char('b'), true) => UserAction::FocusBoxScore,
        (Screen::Detail, Char('l'), true) => UserAction::FocusGameLog,

        (_, Char('h') | KeyCode::Left, false) => UserAction::Left,
        (_, Char('l') | KeyCode::Right, false) => UserAction::Right,
        (_, Char('k') | KeyCode::Up, false) => UserAction::Up,
        (_, Char('j') | KeyCode::Down, false) => UserAction::Down,

        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for screen in [Screen::Scoreboard, Screen::Detail] {
            for searching in [false, true] {
                assert_eq!(map_key(ctrl('c'), screen, searching), Some(UserAction::Quit));
            }
        }
    }

    #[test]
    fn test_scoreboard_keys() {
        let s = Screen::Scoreboard;
        assert_eq!(map_key(key(Char('q')), s, false), Some(UserAction::Quit));
        assert_eq!(map_key(key(KeyCode::Esc), s, false), Some(UserAction::Quit));
        assert_eq!(map_key(key(KeyCode::Enter), s, false), Some(UserAction::Select));
        assert_eq!(map_key(ctrl('w'), s, false), Some(UserAction::OpenInBrowser));
        assert_eq!(map_key(key(Char('j')), s, false), Some(UserAction::Down));
        assert_eq!(map_key(key(KeyCode::Left), s, false), Some(UserAction::Left));
        assert_eq!(map_key(key(Char('/')), s, false), None);
    }

    #[test]
    fn test_detail_keys() {
        let d = Screen::Detail;
        assert_eq!(map_key(key(KeyCode::Esc), d, false), Some(UserAction::Back));
        assert_eq!(map_key(key(KeyCode::Backspace), d, false), Some(UserAction::Back));
        assert_eq!(map_key(key(Char('q')), d, false), None);
        assert_eq!(map_key(ctrl('q'), d, false), Some(UserAction::NextQuarter));
        assert_eq!(map_key(ctrl('s'), d, false), Some(UserAction::ToggleSide));
        assert_eq!(map_key(ctrl('b'), d, false), Some(UserAction::FocusBoxScore));
        assert_eq!(map_key(ctrl('l'), d, false), Some(UserAction::FocusGameLog));
        assert_eq!(map_key(key(Char('l')), d, false), Some(UserAction::Right));
        assert_eq!(map_key(key(Char('/')), d, false), Some(UserAction::StartSearch));
        assert_eq!(map_key(key(Char('n')), d, false), Some(UserAction::NextMatch));
        assert_eq!(
            map_key(KeyEvent::new(Char('N'), KeyModifiers::SHIFT), d, false),
            Some(UserAction::PrevMatch)
        );
        assert_eq!(map_key(key(Char('"')), d, false), Some(UserAction::ToggleLogs));
    }

    #[test]
    fn test_search_prompt_takes_text() {
        let d = Screen::Detail;
        assert_eq!(map_key(key(Char('q')), d, true), Some(UserAction::SearchInput('q')));
        assert_eq!(map_key(key(Char('"')), d, true), Some(UserAction::SearchInput('"')));
        assert_eq!(map_key(key(KeyCode::Enter), d, true), Some(UserAction::SearchConfirm));
        assert_eq!(map_key(key(KeyCode::Esc), d, true), Some(UserAction::SearchCancel));
        assert_eq!(map_key(key(KeyCode::Backspace), d, true), Some(UserAction::SearchBackspace));
        assert_eq!(map_key(ctrl('s'), d, true), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut event = key(Char('j'));
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(event, Screen::Scoreboard, false), None);
    }
}
