use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// One second elapsed. Sent by the countdown ticker task, which only
    /// exists while the timer is active.
    Tick,
}
