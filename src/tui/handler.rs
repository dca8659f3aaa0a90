//! Event handler for the TUI
//!
//! Routes key presses to state changes on the App based on the input mode
//! and the active view.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveTab, App, InputMode, SearchField};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    if let Event::Key(key) = event {
        handle_key_event(app, key);
    }
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('1') => app.switch_tab(ActiveTab::Search),
        KeyCode::Char('2') => app.switch_tab(ActiveTab::Summary),
        KeyCode::Char('3') => app.switch_tab(ActiveTab::Export),
        KeyCode::Char('4') | KeyCode::Char('?') => app.switch_tab(ActiveTab::Help),
        KeyCode::Tab => app.switch_tab(app.active_tab.next()),
        KeyCode::BackTab => app.switch_tab(app.active_tab.prev()),
        _ => match app.active_tab {
            ActiveTab::Search => handle_search_key(app, key),
            ActiveTab::Export => handle_export_key(app, key),
            ActiveTab::Summary | ActiveTab::Help => {}
        },
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('i') | KeyCode::Char('/') | KeyCode::Enter => {
            app.edit_field(SearchField::Value)
        }
        KeyCode::Char('m') => app.toggle_search_mode(),
        KeyCode::Char('s') => app.edit_field(SearchField::StartDate),
        KeyCode::Char('e') => app.edit_field(SearchField::EndDate),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        _ => {}
    }
}

fn handle_export_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Char('d') | KeyCode::Enter) {
        app.export_results();
    }
}

/// Handle keys while the search form has focus
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.stop_editing(),
        KeyCode::Enter => app.request_search(),
        KeyCode::Tab | KeyCode::Down => app.focused_field = app.focused_field.next(),
        KeyCode::BackTab | KeyCode::Up => app.focused_field = app.focused_field.prev(),
        _ if app.focused_field == SearchField::Mode => {
            if matches!(
                key.code,
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
            ) {
                app.toggle_search_mode();
            }
        }
        code => {
            let Some(input) = app.focused_input_mut() else {
                return;
            };
            match code {
                KeyCode::Char(c) => input.insert(c),
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PortalPaths, Settings};
    use crate::models::SearchMode;
    use crate::query::CsvSource;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn parts() -> (CsvSource, Settings, PortalPaths) {
        let settings = Settings::default();
        (
            CsvSource::new("/nonexistent/extract.csv", settings.view.clone()),
            settings,
            PortalPaths::with_base_dir(std::env::temp_dir().join("statement-portal-handler")),
        )
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let (source, settings, paths) = parts();
        let mut app = App::new(&source, &settings, &paths);

        type_text(&mut app, "acme");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "2024-01-01");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "2024-12-31");

        assert_eq!(app.value_input.value(), "acme");
        assert_eq!(app.start_input.value(), "2024-01-01");
        assert_eq!(app.end_input.value(), "2024-12-31");
    }

    #[test]
    fn test_mode_field_toggles() {
        let (source, settings, paths) = parts();
        let mut app = App::new(&source, &settings, &paths);

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_field, SearchField::Mode);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.search_mode, SearchMode::CustomerName);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.search_mode, SearchMode::PolicyId);
    }

    #[test]
    fn test_q_types_while_editing_and_quits_in_normal_mode() {
        let (source, settings, paths) = parts();
        let mut app = App::new(&source, &settings, &paths);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.value_input.value(), "q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let (source, settings, paths) = parts();
        let mut app = App::new(&source, &settings, &paths);

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_switching_in_normal_mode() {
        let (source, settings, paths) = parts();
        let mut app = App::new(&source, &settings, &paths);
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_tab, ActiveTab::Summary);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, ActiveTab::Export);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_tab, ActiveTab::Help);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.focused_field, SearchField::StartDate);
    }

    #[test]
    fn test_enter_queues_search() {
        let (source, settings, paths) = parts();
        let mut app = App::new(&source, &settings, &paths);

        type_text(&mut app, "P1");
        press(&mut app, KeyCode::Enter);

        assert!(app.is_searching());
    }
}
