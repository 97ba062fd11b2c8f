use crate::pomodoro::Mode;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    /// Accent color per mode, mapped from the purple/cyan/orange palette.
    pub fn mode_color(mode: Mode) -> Color {
        match mode {
            Mode::Work => Color::Magenta,
            Mode::ShortBreak => Color::Cyan,
            Mode::LongBreak => Color::Yellow,
        }
    }

    pub fn mode_badge(mode: Mode) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::mode_color(mode))
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn dim() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn time_display() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn ring_background() -> Color {
        Color::DarkGray
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn stat_value(mode: Mode) -> Style {
        Style::default()
            .fg(Self::mode_color(mode))
            .add_modifier(Modifier::BOLD)
    }

    pub fn stat_label() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn running_indicator() -> Style {
        Style::default().fg(Color::Green).bg(Color::DarkGray)
    }

    pub fn paused_indicator() -> Style {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    }
}
