/// Side effects requested by the event handler and executed by the main
/// loop. Keeping persistence out of the handler keeps it synchronous and
/// fully testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Write the current duration configuration to the store.
    SaveDurations,
    Quit,
}
