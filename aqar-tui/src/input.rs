//! Keyboard handling.
//!
//! The key map mirrors the nav bar: digits jump straight to a view, Tab and
//! the arrow keys cycle through them in nav order.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use aqar_core::nav::Route;

use crate::app::AppState;

/// Apply a key event to the application state.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Windows terminals report both Press and Release.
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            if let Some(route) = Route::from_index(idx) {
                app.navigate(route);
            }
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_route(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_route(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqar_core::registry::MarketData;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> AppState {
        AppState::new(MarketData::riyadh(), "/")
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app();
        handle_key(&mut app, release(KeyCode::Char('q')));
        assert!(app.running);
    }

    #[test]
    fn test_digits_jump_to_routes() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.path, "/predictions");
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.path, "/");
        handle_key(&mut app, press(KeyCode::Char('4')));
        assert_eq!(app.path, "/sources");
    }

    #[test]
    fn test_tab_and_backtab_cycle() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.path, "/analytics");
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.path, "/");
        // BackTab from the first route wraps to the last.
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.path, "/sources");
    }

    #[test]
    fn test_arrows_and_vim_keys_cycle() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.path, "/analytics");
        handle_key(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.path, "/predictions");
        handle_key(&mut app, press(KeyCode::Char('h')));
        assert_eq!(app.path, "/analytics");
        handle_key(&mut app, press(KeyCode::Left));
        assert_eq!(app.path, "/");
    }

    #[test]
    fn test_unmapped_keys_change_nothing() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('x')));
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Char('9')));
        assert_eq!(app.path, "/");
        assert!(app.running);
    }
}
