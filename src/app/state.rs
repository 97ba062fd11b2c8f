use crate::config::DurationConfig;
use crate::pomodoro::{Mode, Pomodoro};

/// Settings dialog state: whether the popup is open and which duration row
/// is selected. Row indices map onto [`Mode::ALL`].
#[derive(Debug)]
pub struct SettingsState {
    pub visible: bool,
    pub selected: usize,
}

impl SettingsState {
    pub fn new() -> Self {
        Self {
            visible: false,
            selected: 0,
        }
    }

    pub fn selected_mode(&self) -> Mode {
        Mode::ALL[self.selected]
    }

    pub fn select_prev(&mut self) {
        if self.selected == 0 {
            self.selected = Mode::ALL.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Mode::ALL.len();
    }
}

pub struct AppState {
    pub pomodoro: Pomodoro,
    pub settings: SettingsState,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(durations: DurationConfig) -> Self {
        Self {
            pomodoro: Pomodoro::new(durations),
            settings: SettingsState::new(),
            should_quit: false,
            dirty: true,
        }
    }
}
