use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, ViewMode};
use crate::docker::runtime::LifecycleAction;
use crate::types::SortKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
    Dispatch(LifecycleAction, Vec<String>),
}

fn action_for(key: KeyCode) -> Option<LifecycleAction> {
    match key {
        KeyCode::Char('k') => Some(LifecycleAction::Kill),
        KeyCode::Char('s') => Some(LifecycleAction::Start),
        KeyCode::Char('S') => Some(LifecycleAction::Stop),
        KeyCode::Char('r') => Some(LifecycleAction::Remove),
        KeyCode::Char('p') => Some(LifecycleAction::Pause),
        KeyCode::Char('P') => Some(LifecycleAction::Unpause),
        _ => None,
    }
}

/// Entry point for raw key events. Ctrl+C quits; any other Ctrl or Alt
/// chord is ignored so it can't reach the single-letter bindings.
pub fn handle_key(event: KeyEvent, app: &mut App) -> KeyOutcome {
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return KeyOutcome::Quit;
    }
    if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return KeyOutcome::Continue;
    }
    handle_key_events(event.code, app)
}

/// Applies one key press to the app. `q` quits from anywhere; sort keys
/// work in every mode; everything else depends on the current view.
pub fn handle_key_events(key: KeyCode, app: &mut App) -> KeyOutcome {
    if key == KeyCode::Char('q') {
        return KeyOutcome::Quit;
    }

    let mut outcome = KeyOutcome::Continue;
    match app.mode {
        ViewMode::List => {
            if let Some(action) = action_for(key) {
                let ids = app.operands();
                if !ids.is_empty() {
                    outcome = KeyOutcome::Dispatch(action, ids);
                }
            } else {
                match key {
                    KeyCode::Down => app.next(),
                    KeyCode::Up => app.previous(),
                    KeyCode::Char(' ') => app.toggle_select_and_advance(),
                    KeyCode::Char('u') => app.clear_selection(),
                    KeyCode::Char('a') => app.toggle_expand(),
                    KeyCode::Char('A') => app.toggle_show_all_processes(),
                    KeyCode::Char('h') => app.open_help(),
                    KeyCode::Char('i') => app.open_info(),
                    _ => {}
                }
            }
        }
        ViewMode::Help => {
            if key == KeyCode::Char('h') {
                app.back_to_list();
            }
        }
        ViewMode::Info => {
            if key == KeyCode::Char('i') {
                app.back_to_list();
            }
        }
        ViewMode::Confirm => {}
    }

    match key {
        KeyCode::Char('I') => app.toggle_reverse(),
        KeyCode::Char(c) => {
            if let Some(sort_key) = SortKey::from_digit(c) {
                app.set_sort_key(sort_key);
            }
        }
        _ => {}
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Snapshot;
    use crate::types::{AppConfig, ContainerRecord, ProcessRecord, SortDirection};

    fn container(id: &str, cpu: &str) -> ContainerRecord {
        ContainerRecord {
            id: id.into(),
            name: id.into(),
            status: "Up 2 hours".into(),
            cpu: cpu.into(),
            processes: vec![ProcessRecord::default()],
            ..Default::default()
        }
    }

    fn app() -> App {
        let mut app = App::new(&AppConfig::default());
        app.viewport_height = 20;
        app.replace_snapshot(Snapshot::new(vec![
            container("a1", "1.0"),
            ContainerRecord {
                status: "Exited".into(),
                ..container("b2", "0.0")
            },
        ]));
        app
    }

    fn press(app: &mut App, keys: &str) -> KeyOutcome {
        let mut last = KeyOutcome::Continue;
        for c in keys.chars() {
            last = handle_key_events(KeyCode::Char(c), app);
        }
        last
    }

    #[test]
    fn space_then_stop_targets_the_marked_container() {
        let mut app = app();
        let outcome = press(&mut app, " S");
        assert_eq!(app.cursor.active, 1);
        assert_eq!(
            outcome,
            KeyOutcome::Dispatch(LifecycleAction::Stop, vec!["a1".into()])
        );
    }

    #[test]
    fn cursor_fallback_only_without_selection() {
        let mut app = app();
        assert_eq!(
            press(&mut app, "k"),
            KeyOutcome::Dispatch(LifecycleAction::Kill, vec!["a1".into()])
        );

        // b2 marked earlier; the cursor then sits back on a1
        app.cursor.active = 1;
        press(&mut app, " ");
        handle_key_events(KeyCode::Up, &mut app);
        assert_eq!(app.cursor.active, 0);
        assert_eq!(
            press(&mut app, "r"),
            KeyOutcome::Dispatch(LifecycleAction::Remove, vec!["b2".into()])
        );
    }

    #[test]
    fn action_keys_map_to_lifecycle_commands() {
        for (key, action) in [
            ('k', LifecycleAction::Kill),
            ('s', LifecycleAction::Start),
            ('S', LifecycleAction::Stop),
            ('r', LifecycleAction::Remove),
            ('p', LifecycleAction::Pause),
            ('P', LifecycleAction::Unpause),
        ] {
            let mut app = app();
            assert_eq!(
                press(&mut app, &key.to_string()),
                KeyOutcome::Dispatch(action, vec!["a1".into()])
            );
        }
    }

    #[test]
    fn action_on_process_row_dispatches_nothing() {
        let mut app = app();
        press(&mut app, "A");
        handle_key_events(KeyCode::Down, &mut app);
        assert_eq!(press(&mut app, "S"), KeyOutcome::Continue);
    }

    #[test]
    fn help_toggles_and_blocks_list_keys() {
        let mut app = app();
        press(&mut app, "h");
        assert_eq!(app.mode, ViewMode::Help);

        assert_eq!(press(&mut app, " S"), KeyOutcome::Continue);
        handle_key_events(KeyCode::Down, &mut app);
        assert_eq!(app.cursor.active, 0);
        assert!(app.snapshot.selected_ids().is_empty());

        press(&mut app, "i");
        assert_eq!(app.mode, ViewMode::Help);
        press(&mut app, "h");
        assert_eq!(app.mode, ViewMode::List);
    }

    #[test]
    fn info_opens_on_container_and_closes_with_i() {
        let mut app = app();
        press(&mut app, "i");
        assert_eq!(app.mode, ViewMode::Info);
        assert_eq!(app.info.as_ref().unwrap().id, "a1");

        press(&mut app, "h");
        assert_eq!(app.mode, ViewMode::Info);
        press(&mut app, "i");
        assert_eq!(app.mode, ViewMode::List);
    }

    #[test]
    fn quit_from_every_mode() {
        for mode in [ViewMode::List, ViewMode::Help, ViewMode::Info, ViewMode::Confirm] {
            let mut app = app();
            app.mode = mode;
            assert_eq!(press(&mut app, "q"), KeyOutcome::Quit);
        }
    }

    #[test]
    fn sort_keys_apply_in_any_mode() {
        let mut app = app();
        press(&mut app, "h1");
        assert_eq!(app.sort.key, SortKey::Name);
        press(&mut app, "I");
        assert_eq!(app.sort.direction, SortDirection::Reversed);
        press(&mut app, "h8");
        assert_eq!(app.mode, ViewMode::List);
        assert_eq!(app.sort.key, SortKey::Ram);
    }

    #[test]
    fn selection_clear_and_expand_all() {
        let mut app = app();
        press(&mut app, "  ");
        assert_eq!(app.snapshot.selected_ids().len(), 2);
        press(&mut app, "u");
        assert!(app.snapshot.selected_ids().is_empty());

        press(&mut app, "A");
        assert_eq!(app.row_count(), 4);
        press(&mut app, "A");
        assert_eq!(app.row_count(), 2);
    }

    #[test]
    fn escape_is_ignored() {
        let mut app = app();
        press(&mut app, "h");
        assert_eq!(handle_key_events(KeyCode::Esc, &mut app), KeyOutcome::Continue);
        assert_eq!(app.mode, ViewMode::Help);
    }

    #[test]
    fn control_and_alt_chords_never_dispatch() {
        let mut app = app();
        for code in ['k', 's', 'S', 'r', 'p', 'P', 'u', '1'] {
            for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT] {
                let event = KeyEvent::new(KeyCode::Char(code), modifiers);
                assert_eq!(handle_key(event, &mut app), KeyOutcome::Continue);
            }
        }
        assert_eq!(app.sort.key, SortKey::Cpu);
    }

    #[test]
    fn ctrl_c_quits_and_shift_letters_still_work() {
        let mut app = app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_c, &mut app), KeyOutcome::Quit);

        let stop = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);
        assert_eq!(
            handle_key(stop, &mut app),
            KeyOutcome::Dispatch(LifecycleAction::Stop, vec!["a1".to_string()])
        );
    }
}
