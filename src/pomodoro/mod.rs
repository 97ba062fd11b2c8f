//! The pomodoro countdown state machine: mode transitions, tick semantics,
//! and session/cycle accounting.

pub mod machine;

pub use machine::{Mode, Pomodoro};
