use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::app::constants::{NO_SELECTION_MESSAGE, WIZARD_STARTED_MESSAGE};
use crate::app::helpers::random_host;
use crate::app::list::FilterState;
use crate::app::wizard::WizardStep;
use crate::model::{AppEvent, Mode, Outcome};
use crate::ssh::{connection_target, default_ssh_config_path, import_ssh_config};
use crate::ui::constants::FRAME_VERTICAL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    CursorUp,
    CursorDown,
    BeginAdd,
    DeleteSelected,
    Save,
    Connect,
    Quit,
    BeginFilter,
    ClearFilter,
    Generate,
    Import,
    FilterInput(char),
    FilterBackspace,
    FilterCommit,
    FilterCancel,
    FieldInput(char),
    FieldBackspace,
    FieldCommit,
}

/// Key dispatch table. Each mode sees only its own bindings; Ctrl-C quits
/// from anywhere, including an unfinished wizard.
pub(crate) fn command_for(mode: Mode, key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    // AltGr arrives as Ctrl+Alt on Windows and still produces text.
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);
    if ctrl {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }
    match (mode, key.code) {
        (Mode::Browse, KeyCode::Up | KeyCode::Char('k')) => Some(Command::CursorUp),
        (Mode::Browse, KeyCode::Down | KeyCode::Char('j')) => Some(Command::CursorDown),
        (Mode::Browse, KeyCode::Char('a')) => Some(Command::BeginAdd),
        (Mode::Browse, KeyCode::Char('d')) => Some(Command::DeleteSelected),
        (Mode::Browse, KeyCode::Char('s')) => Some(Command::Save),
        (Mode::Browse, KeyCode::Enter | KeyCode::Char(' ')) => Some(Command::Connect),
        (Mode::Browse, KeyCode::Char('q')) => Some(Command::Quit),
        (Mode::Browse, KeyCode::Char('/')) => Some(Command::BeginFilter),
        (Mode::Browse, KeyCode::Esc) => Some(Command::ClearFilter),
        (Mode::Browse, KeyCode::Char('g')) => Some(Command::Generate),
        (Mode::Browse, KeyCode::Char('i')) => Some(Command::Import),
        (Mode::Browse, _) => None,

        (Mode::Filtering, KeyCode::Enter) => Some(Command::FilterCommit),
        (Mode::Filtering, KeyCode::Esc) => Some(Command::FilterCancel),
        (Mode::Filtering, KeyCode::Backspace) => Some(Command::FilterBackspace),
        (Mode::Filtering, KeyCode::Char(ch)) => Some(Command::FilterInput(ch)),
        (Mode::Filtering, _) => None,

        (Mode::Adding, KeyCode::Enter) => Some(Command::FieldCommit),
        (Mode::Adding, KeyCode::Backspace) => Some(Command::FieldBackspace),
        (Mode::Adding, KeyCode::Char(ch)) => Some(Command::FieldInput(ch)),
        (Mode::Adding, _) => None,
    }
}

impl App {
    pub(crate) fn handle_event(&mut self, event: AppEvent) -> Outcome {
        match event {
            AppEvent::Key(key) => match command_for(self.mode(), key) {
                Some(command) => self.apply(command),
                None => Outcome::Continue,
            },
            AppEvent::Resize(_, height) => {
                self.hosts.set_height(height.saturating_sub(FRAME_VERTICAL));
                Outcome::Continue
            }
            AppEvent::Tick => {
                self.hosts.expire_status(Instant::now());
                Outcome::Continue
            }
        }
    }

    pub(crate) fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Quit => {
                if self.dirty {
                    self.log_line("Quit with unsaved changes");
                }
                return Outcome::Quit;
            }
            Command::Connect => {
                let Some(host) = self.hosts.current_selection().cloned() else {
                    self.set_status(NO_SELECTION_MESSAGE);
                    return Outcome::Continue;
                };
                self.log_line(&format!("Connecting to {}", connection_target(&host)));
                return Outcome::Connect(host);
            }
            Command::CursorUp => self.hosts.move_up(),
            Command::CursorDown => self.hosts.move_down(),
            Command::BeginAdd => {
                self.wizard.begin();
                self.set_status(WIZARD_STARTED_MESSAGE);
            }
            Command::DeleteSelected => self.delete_selected(),
            Command::Save => self.save(),
            Command::BeginFilter => self.hosts.begin_filtering(),
            Command::ClearFilter => {
                if self.hosts.filter_state() == FilterState::Applied {
                    self.hosts.clear_filter();
                }
            }
            Command::Generate => {
                let host = random_host();
                let message = format!("Added {}", host.host);
                self.hosts.insert(host, 0);
                self.dirty = true;
                self.set_status(message);
            }
            Command::Import => self.import_ssh_config(),
            Command::FilterInput(ch) => self.hosts.push_filter_char(ch),
            Command::FilterBackspace => self.hosts.pop_filter_char(),
            Command::FilterCommit => self.hosts.commit_filter(),
            Command::FilterCancel => self.hosts.clear_filter(),
            Command::FieldInput(ch) => self.wizard.push_char(ch),
            Command::FieldBackspace => self.wizard.backspace(),
            Command::FieldCommit => {
                match self.wizard.commit_field() {
                    Some(WizardStep::Next(field)) => {
                        self.hosts
                            .post_status(format!("Enter {}", field.label()), Instant::now());
                    }
                    Some(WizardStep::Complete(host)) => {
                        let name = host.host.clone();
                        self.hosts.append(host);
                        self.log_line(&format!("Added {name}"));
                        self.save();
                    }
                    None => {}
                }
            }
        }
        Outcome::Continue
    }

    fn delete_selected(&mut self) {
        let Some(identity) = self.hosts.current_selection().map(|host| host.host.clone()) else {
            self.set_status(NO_SELECTION_MESSAGE);
            return;
        };
        if self.hosts.remove(&identity).is_some() {
            self.dirty = true;
            self.set_status(format!("Deleted {identity}"));
        }
    }

    fn import_ssh_config(&mut self) {
        let path = default_ssh_config_path();
        match import_ssh_config(&path) {
            Ok(found) => {
                let added = self.merge_imported(found);
                if added > 0 {
                    self.dirty = true;
                }
                self.set_status(format!("Imported {added} hosts from {}", path.display()));
            }
            Err(err) => self.set_status(format!("Import failed: {err:#}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{host, test_app};
    use crate::model::HostRecord;
    use crate::storage::load_hosts;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press(app: &mut App, code: KeyCode) -> Outcome {
        app.handle_event(key(code))
    }

    fn type_line(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
        press(app, KeyCode::Enter);
    }

    fn cleanup(app: &App) {
        let _ = std::fs::remove_dir_all(app.config_path.parent().unwrap());
    }

    #[test]
    fn browse_table_maps_bindings() {
        let table = [
            (KeyCode::Up, Command::CursorUp),
            (KeyCode::Char('k'), Command::CursorUp),
            (KeyCode::Down, Command::CursorDown),
            (KeyCode::Char('j'), Command::CursorDown),
            (KeyCode::Char('a'), Command::BeginAdd),
            (KeyCode::Char('d'), Command::DeleteSelected),
            (KeyCode::Char('s'), Command::Save),
            (KeyCode::Enter, Command::Connect),
            (KeyCode::Char(' '), Command::Connect),
            (KeyCode::Char('q'), Command::Quit),
            (KeyCode::Char('/'), Command::BeginFilter),
        ];
        for (code, expected) in table {
            let event = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(command_for(Mode::Browse, event), Some(expected), "{code:?}");
        }
    }

    #[test]
    fn filtering_suppresses_navigation_and_mutation() {
        for ch in ['j', 'k', 'a', 'd', 's', 'q'] {
            let event = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE);
            assert_eq!(command_for(Mode::Filtering, event), Some(Command::FilterInput(ch)));
        }
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(command_for(Mode::Filtering, up), None);
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [Mode::Browse, Mode::Filtering, Mode::Adding] {
            assert_eq!(command_for(mode, event), Some(Command::Quit));
        }
    }

    #[test]
    fn altgr_characters_reach_text_input() {
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        for ch in ['@', '\\', '{'] {
            let event = KeyEvent::new(KeyCode::Char(ch), altgr);
            assert_eq!(command_for(Mode::Adding, event), Some(Command::FieldInput(ch)));
            assert_eq!(command_for(Mode::Filtering, event), Some(Command::FilterInput(ch)));
        }
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(command_for(Mode::Adding, ctrl_x), None);
    }

    #[test]
    fn wizard_has_no_escape_hatch() {
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(command_for(Mode::Adding, esc), None);
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(command_for(Mode::Adding, q), Some(Command::FieldInput('q')));
    }

    #[test]
    fn add_wizard_appends_and_persists() {
        let mut app = test_app("wizard", vec![host("first")]);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode(), Mode::Adding);
        for value in ["box1", "1.2.3.4", "alice", "true", "dev,prod", "test box"] {
            type_line(&mut app, value);
        }
        assert_eq!(app.mode(), Mode::Browse);
        let expected = HostRecord {
            host: "box1".to_string(),
            hostname: "1.2.3.4".to_string(),
            user: "alice".to_string(),
            forward_agent: true,
            tags: vec!["dev".to_string(), "prod".to_string()],
            description: "test box".to_string(),
        };
        assert_eq!(app.hosts.records().last(), Some(&expected));
        assert_eq!(app.hosts.records()[0].host, "first");
        let stored = load_hosts(&app.config_path).unwrap();
        assert_eq!(stored, app.hosts.records());
        assert!(!app.dirty);
        cleanup(&app);
    }

    #[test]
    fn delete_marks_dirty_until_saved() {
        let mut app = test_app("delete", vec![host("a"), host("b")]);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.hosts.len(), 1);
        assert_eq!(app.hosts.records()[0].host, "a");
        assert!(app.dirty);
        assert_eq!(app.status_line(), "Deleted b");
        press(&mut app, KeyCode::Char('s'));
        assert!(!app.dirty);
        assert_eq!(load_hosts(&app.config_path).unwrap().len(), 1);
        cleanup(&app);
    }

    #[test]
    fn delete_on_empty_list_reports() {
        let mut app = test_app("delete-empty", vec![]);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.status_line(), NO_SELECTION_MESSAGE);
        assert!(!app.dirty);
        cleanup(&app);
    }

    #[test]
    fn connect_returns_selected_host() {
        let mut app = test_app("connect", vec![host("a"), host("b")]);
        press(&mut app, KeyCode::Down);
        assert_eq!(press(&mut app, KeyCode::Enter), Outcome::Connect(host("b")));
        cleanup(&app);
    }

    #[test]
    fn connect_without_selection_continues() {
        let mut app = test_app("connect-empty", vec![]);
        assert_eq!(press(&mut app, KeyCode::Char(' ')), Outcome::Continue);
        cleanup(&app);
    }

    #[test]
    fn filter_entry_then_commit_and_clear() {
        let mut app = test_app("filter", vec![host("alpha"), host("bravo")]);
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode(), Mode::Filtering);
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.hosts.len(), 2);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode(), Mode::Browse);
        assert_eq!(app.hosts.visible_len(), 1);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.hosts.visible_len(), 2);
        cleanup(&app);
    }

    #[test]
    fn quit_ends_session() {
        let mut app = test_app("quit", vec![]);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Outcome::Quit);
        cleanup(&app);
    }

    #[test]
    fn generate_inserts_at_front() {
        let mut app = test_app("generate", vec![host("a")]);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.hosts.len(), 2);
        assert_eq!(app.hosts.records()[1].host, "a");
        assert!(app.dirty);
        cleanup(&app);
    }

    #[test]
    fn resize_sets_list_page() {
        let mut app = test_app("resize", vec![]);
        app.handle_event(AppEvent::Resize(100, 40));
        assert_eq!(app.hosts.page_size(), (40 - 2 - 5) / 3);
        cleanup(&app);
    }
}
