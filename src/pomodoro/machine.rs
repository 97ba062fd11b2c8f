use crate::config::DurationConfig;

/// The three timer phases. The key set is closed, so durations are looked up
/// by matching on this enum rather than through an open-ended map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Work,
    ShortBreak,
    LongBreak,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Work, Mode::ShortBreak, Mode::LongBreak];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Work => "Focus",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }
}

/// Sessions per cycle: the 4th, 8th, 12th... completed work interval is
/// followed by a long break.
pub const SESSIONS_PER_CYCLE: u32 = 4;

/// The countdown machine. Owns its snapshot exclusively; the UI reads it
/// through the accessors and mutates it only through the five operations
/// below. Every operation is a total function, nothing here can fail.
///
/// Time advancement is driven externally: the owner calls [`tick`] once per
/// elapsed second while the machine is active. Tests drive ticks
/// synchronously, the main loop drives them from a tokio interval.
///
/// [`tick`]: Pomodoro::tick
#[derive(Debug, Clone)]
pub struct Pomodoro {
    mode: Mode,
    remaining_minutes: u16,
    remaining_seconds: u16,
    is_active: bool,
    completed_sessions: u32,
    durations: DurationConfig,
}

impl Pomodoro {
    pub fn new(durations: DurationConfig) -> Self {
        Self {
            mode: Mode::Work,
            remaining_minutes: durations.get(Mode::Work),
            remaining_seconds: 0,
            is_active: false,
            completed_sessions: 0,
            durations,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining(&self) -> (u16, u16) {
        (self.remaining_minutes, self.remaining_seconds)
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    pub fn durations(&self) -> &DurationConfig {
        &self.durations
    }

    /// Toggle running/paused. The owner is responsible for arming the 1 Hz
    /// tick source when this returns with the machine active and disarming
    /// it when paused.
    pub fn start_pause(&mut self) {
        self.is_active = !self.is_active;
    }

    /// Restore the current mode's full duration and pause. Completed
    /// sessions are kept.
    pub fn reset(&mut self) {
        self.remaining_minutes = self.durations.get(self.mode);
        self.remaining_seconds = 0;
        self.is_active = false;
    }

    /// Manual mode override. Valid at any time, including mid-countdown;
    /// current progress is discarded and the machine comes up paused.
    pub fn switch_mode(&mut self, new_mode: Mode) {
        self.mode = new_mode;
        self.remaining_minutes = self.durations.get(new_mode);
        self.remaining_seconds = 0;
        self.is_active = false;
    }

    /// Advance the countdown by one second. Gated on `is_active`: a tick
    /// that arrives after a pause (queued behind the pause key event) does
    /// nothing. A decrement that lands on 00:00 completes the interval in
    /// the same tick, so 00:00 is never left on screen.
    pub fn tick(&mut self) {
        if !self.is_active {
            return;
        }
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        } else if self.remaining_minutes > 0 {
            self.remaining_minutes -= 1;
            self.remaining_seconds = 59;
        }
        if self.remaining_minutes == 0 && self.remaining_seconds == 0 {
            self.complete();
        }
    }

    /// Interval finished: advance the mode. A completed work interval counts
    /// a session and leads into a break (the long one every
    /// [`SESSIONS_PER_CYCLE`]th session); a completed break leads back to
    /// work. The next interval does not auto-start.
    fn complete(&mut self) {
        let next = match self.mode {
            Mode::Work => {
                self.completed_sessions += 1;
                if self.completed_sessions % SESSIONS_PER_CYCLE == 0 {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                }
            }
            Mode::ShortBreak | Mode::LongBreak => Mode::Work,
        };
        self.mode = next;
        self.remaining_minutes = self.durations.get(next);
        self.remaining_seconds = 0;
        self.is_active = false;
    }

    /// Change a mode's configured duration, clamped to that mode's bounds.
    /// If the timer is paused and `mode` is the one on screen, the remaining
    /// time updates immediately (live preview); otherwise the new value
    /// takes effect the next time the mode is entered. Returns the clamped
    /// value actually applied. Persisting the updated config is the caller's
    /// job.
    pub fn set_duration(&mut self, mode: Mode, minutes: u16) -> u16 {
        let applied = self.durations.set(mode, minutes);
        if !self.is_active && self.mode == mode {
            self.remaining_minutes = applied;
            self.remaining_seconds = 0;
        }
        applied
    }

    pub fn total_seconds(&self) -> u32 {
        u32::from(self.durations.get(self.mode)) * 60
    }

    pub fn remaining_seconds_total(&self) -> u32 {
        u32::from(self.remaining_minutes) * 60 + u32::from(self.remaining_seconds)
    }

    /// Elapsed fraction in [0, 1], for the progress dial.
    pub fn progress(&self) -> f64 {
        let total = self.total_seconds();
        if total == 0 {
            return 0.0;
        }
        f64::from(total - self.remaining_seconds_total()) / f64::from(total)
    }

    pub fn completed_cycles(&self) -> u32 {
        self.completed_sessions / SESSIONS_PER_CYCLE
    }

    /// Total focused minutes across completed sessions.
    pub fn focus_minutes(&self) -> u32 {
        self.completed_sessions * u32::from(self.durations.get(Mode::Work))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> Pomodoro {
        Pomodoro::new(DurationConfig::default())
    }

    fn run_ticks(p: &mut Pomodoro, n: u32) {
        for _ in 0..n {
            p.tick();
        }
    }

    #[test]
    fn test_initial_state() {
        let p = machine();
        assert_eq!(p.mode(), Mode::Work);
        assert_eq!(p.remaining(), (25, 0));
        assert!(!p.is_active());
        assert_eq!(p.completed_sessions(), 0);
    }

    #[test]
    fn test_tick_while_paused_is_noop() {
        let mut p = machine();
        run_ticks(&mut p, 100);
        assert_eq!(p.remaining(), (25, 0));
        assert_eq!(p.mode(), Mode::Work);
        assert_eq!(p.completed_sessions(), 0);
    }

    #[test]
    fn test_tick_borrows_a_minute() {
        let mut p = machine();
        p.start_pause();
        p.tick();
        assert_eq!(p.remaining(), (24, 59));
        p.tick();
        assert_eq!(p.remaining(), (24, 58));
    }

    #[test]
    fn test_full_work_interval_transitions_to_short_break() {
        let mut p = machine();
        p.start_pause();
        run_ticks(&mut p, 25 * 60);
        assert_eq!(p.mode(), Mode::ShortBreak);
        assert_eq!(p.remaining(), (5, 0));
        assert_eq!(p.completed_sessions(), 1);
        assert!(!p.is_active());
    }

    #[test]
    fn test_zero_remaining_never_observable() {
        let mut p = machine();
        p.start_pause();
        for _ in 0..25 * 60 {
            p.tick();
            let (m, s) = p.remaining();
            assert!(m > 0 || s > 0);
            assert!(s < 60);
        }
    }

    #[test]
    fn test_break_completion_returns_to_work_without_counting() {
        let mut p = machine();
        p.switch_mode(Mode::ShortBreak);
        p.start_pause();
        run_ticks(&mut p, 5 * 60);
        assert_eq!(p.mode(), Mode::Work);
        assert_eq!(p.remaining(), (25, 0));
        assert_eq!(p.completed_sessions(), 0);
    }

    #[test]
    fn test_fourth_session_earns_long_break() {
        let mut p = machine();
        for session in 1..=4u32 {
            assert_eq!(p.mode(), Mode::Work);
            p.start_pause();
            run_ticks(&mut p, 25 * 60);
            assert_eq!(p.completed_sessions(), session);
            if session == 4 {
                assert_eq!(p.mode(), Mode::LongBreak);
                assert_eq!(p.remaining(), (15, 0));
            } else {
                assert_eq!(p.mode(), Mode::ShortBreak);
                // Skip the break without ticking through it.
                p.switch_mode(Mode::Work);
            }
        }
    }

    #[test]
    fn test_switch_mode_always_pauses() {
        let mut p = machine();
        p.start_pause();
        assert!(p.is_active());
        p.switch_mode(Mode::LongBreak);
        assert!(!p.is_active());
        assert_eq!(p.remaining(), (15, 0));
        p.switch_mode(Mode::Work);
        assert!(!p.is_active());
        assert_eq!(p.remaining(), (25, 0));
    }

    #[test]
    fn test_reset_restores_duration_keeps_sessions() {
        let mut p = machine();
        p.start_pause();
        run_ticks(&mut p, 25 * 60); // one completed session
        p.switch_mode(Mode::Work);
        p.start_pause();
        run_ticks(&mut p, 90);
        p.reset();
        assert_eq!(p.remaining(), (25, 0));
        assert!(!p.is_active());
        assert_eq!(p.completed_sessions(), 1);
    }

    #[test]
    fn test_set_duration_live_preview_on_displayed_mode() {
        let mut p = machine();
        p.switch_mode(Mode::ShortBreak);
        let applied = p.set_duration(Mode::ShortBreak, 10);
        assert_eq!(applied, 10);
        assert_eq!(p.remaining(), (10, 0));
    }

    #[test]
    fn test_set_duration_other_mode_leaves_display_alone() {
        let mut p = machine();
        p.set_duration(Mode::ShortBreak, 10);
        assert_eq!(p.mode(), Mode::Work);
        assert_eq!(p.remaining(), (25, 0));
        // Takes effect when the mode is entered.
        p.switch_mode(Mode::ShortBreak);
        assert_eq!(p.remaining(), (10, 0));
    }

    #[test]
    fn test_set_duration_while_running_does_not_touch_countdown() {
        let mut p = machine();
        p.start_pause();
        run_ticks(&mut p, 30);
        p.set_duration(Mode::Work, 50);
        assert_eq!(p.remaining(), (24, 30));
        // Reset picks up the new value.
        p.reset();
        assert_eq!(p.remaining(), (50, 0));
    }

    #[test]
    fn test_set_duration_clamps_to_bounds() {
        let mut p = machine();
        assert_eq!(p.set_duration(Mode::Work, 120), 60);
        assert_eq!(p.set_duration(Mode::Work, 1), 5);
        assert_eq!(p.set_duration(Mode::ShortBreak, 0), 3);
        assert_eq!(p.set_duration(Mode::LongBreak, 45), 30);
    }

    #[test]
    fn test_progress_fraction() {
        let mut p = machine();
        assert_eq!(p.progress(), 0.0);
        p.start_pause();
        run_ticks(&mut p, 25 * 30); // half of the work interval
        assert!((p.progress() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_stats_derivations() {
        let mut p = machine();
        for _ in 0..5 {
            p.switch_mode(Mode::Work);
            p.start_pause();
            run_ticks(&mut p, 25 * 60);
        }
        assert_eq!(p.completed_sessions(), 5);
        assert_eq!(p.completed_cycles(), 1);
        assert_eq!(p.focus_minutes(), 125);
    }
}
