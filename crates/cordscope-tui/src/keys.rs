use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::App;

/// Key handling never touches the dataset, only the selection.
pub fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::BackTab => app.toggle_handle(),
        KeyCode::Char('h') | KeyCode::Left => app.nudge(-1),
        KeyCode::Char('l') | KeyCode::Right => app.nudge(1),
        // Coarse steps for wide year ranges.
        KeyCode::Char('H') | KeyCode::PageUp => app.nudge(-10),
        KeyCode::Char('L') | KeyCode::PageDown => app.nudge(10),
        KeyCode::Char('r') => app.reset_range(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn q_quits_even_without_a_dataset() {
        let mut app = App::new(PathBuf::from("definitely/not/here.csv"));
        assert!(app.load_error.is_some());
        handle_key(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn selector_keys_are_inert_without_years() {
        let mut app = App::new(PathBuf::from("definitely/not/here.csv"));
        handle_key(&mut app, KeyCode::Left, KeyModifiers::NONE);
        handle_key(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.selected, None);
        assert!(!app.should_quit);
    }
}
