use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::config::DurationBounds;
use crate::pomodoro::Mode;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Tick => {
            if state.pomodoro.is_active() {
                state.pomodoro.tick();
                state.dirty = true;
            }
            vec![]
        }
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Settings dialog captures all input when visible
    if state.settings.visible {
        return handle_settings_key(state, key);
    }

    match key.code {
        KeyCode::Char(' ') => {
            state.pomodoro.start_pause();
            vec![]
        }
        KeyCode::Char('r') => {
            state.pomodoro.reset();
            vec![]
        }
        KeyCode::Char('1') => {
            state.pomodoro.switch_mode(Mode::Work);
            vec![]
        }
        KeyCode::Char('2') => {
            state.pomodoro.switch_mode(Mode::ShortBreak);
            vec![]
        }
        KeyCode::Char('3') => {
            state.pomodoro.switch_mode(Mode::LongBreak);
            vec![]
        }
        KeyCode::Char('s') => {
            state.settings.visible = true;
            vec![]
        }
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_settings_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('q') => {
            state.settings.visible = false;
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.settings.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.settings.select_next();
            vec![]
        }
        KeyCode::Left | KeyCode::Char('h') => adjust_selected(state, false),
        KeyCode::Right | KeyCode::Char('l') => adjust_selected(state, true),
        _ => vec![],
    }
}

/// Step the selected duration up or down within its bounds. Each adjustment
/// applies immediately (including the live preview when the displayed mode
/// is paused) and is persisted by the main loop.
fn adjust_selected(state: &mut AppState, up: bool) -> Vec<Action> {
    let mode = state.settings.selected_mode();
    let bounds = DurationBounds::of(mode);
    let current = state.pomodoro.durations().get(mode);
    let target = if up {
        current.saturating_add(bounds.step)
    } else {
        current.saturating_sub(bounds.step)
    };
    if state.pomodoro.set_duration(mode, target) == current {
        // Already at the bound, nothing changed, nothing to persist.
        return vec![];
    }
    vec![Action::SaveDurations]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DurationConfig;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn state() -> AppState {
        AppState::new(DurationConfig::default())
    }

    #[test]
    fn test_space_toggles_activity() {
        let mut state = state();
        handle_event(&mut state, press(KeyCode::Char(' ')));
        assert!(state.pomodoro.is_active());
        handle_event(&mut state, press(KeyCode::Char(' ')));
        assert!(!state.pomodoro.is_active());
    }

    #[test]
    fn test_number_keys_switch_mode() {
        let mut state = state();
        handle_event(&mut state, press(KeyCode::Char('2')));
        assert_eq!(state.pomodoro.mode(), Mode::ShortBreak);
        handle_event(&mut state, press(KeyCode::Char('3')));
        assert_eq!(state.pomodoro.mode(), Mode::LongBreak);
        handle_event(&mut state, press(KeyCode::Char('1')));
        assert_eq!(state.pomodoro.mode(), Mode::Work);
    }

    #[test]
    fn test_tick_event_advances_only_while_active() {
        let mut state = state();
        handle_event(&mut state, AppEvent::Tick);
        assert_eq!(state.pomodoro.remaining(), (25, 0));
        handle_event(&mut state, press(KeyCode::Char(' ')));
        handle_event(&mut state, AppEvent::Tick);
        assert_eq!(state.pomodoro.remaining(), (24, 59));
    }

    #[test]
    fn test_quit_keys() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, press(KeyCode::Char('q'))), vec![Action::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn test_settings_dialog_captures_keys() {
        let mut state = state();
        handle_event(&mut state, press(KeyCode::Char('s')));
        assert!(state.settings.visible);
        // 'r' inside the dialog must not reset the timer
        state.pomodoro.start_pause();
        state.pomodoro.tick();
        handle_event(&mut state, press(KeyCode::Char('r')));
        assert_eq!(state.pomodoro.remaining(), (24, 59));
        handle_event(&mut state, press(KeyCode::Esc));
        assert!(!state.settings.visible);
    }

    #[test]
    fn test_settings_adjust_persists() {
        let mut state = state();
        handle_event(&mut state, press(KeyCode::Char('s')));
        // Work selected by default, step is 5
        let actions = handle_event(&mut state, press(KeyCode::Right));
        assert_eq!(actions, vec![Action::SaveDurations]);
        assert_eq!(state.pomodoro.durations().work, 30);
        // Live preview: paused on work mode
        assert_eq!(state.pomodoro.remaining(), (30, 0));
    }

    #[test]
    fn test_settings_adjust_at_bound_is_silent() {
        let mut state = state();
        handle_event(&mut state, press(KeyCode::Char('s')));
        handle_event(&mut state, press(KeyCode::Down)); // short break, bounds 3..=15
        for _ in 0..20 {
            handle_event(&mut state, press(KeyCode::Right));
        }
        assert_eq!(state.pomodoro.durations().short_break, 15);
        let actions = handle_event(&mut state, press(KeyCode::Right));
        assert!(actions.is_empty());
    }

    #[test]
    fn test_settings_selection_wraps() {
        let mut state = state();
        handle_event(&mut state, press(KeyCode::Char('s')));
        assert_eq!(state.settings.selected_mode(), Mode::Work);
        handle_event(&mut state, press(KeyCode::Up));
        assert_eq!(state.settings.selected_mode(), Mode::LongBreak);
        handle_event(&mut state, press(KeyCode::Down));
        assert_eq!(state.settings.selected_mode(), Mode::Work);
    }
}
