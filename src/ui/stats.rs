use crate::app::state::AppState;
use crate::pomodoro::Mode;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Sessions / total focus time / cycles, one column each.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let sessions = state.pomodoro.completed_sessions();
    let focus_hours = state.pomodoro.focus_minutes() / 60;
    let cycles = state.pomodoro.completed_cycles();

    render_stat(frame, columns[0], Mode::Work, &sessions.to_string(), "Sessions");
    render_stat(
        frame,
        columns[1],
        Mode::ShortBreak,
        &format!("{}h", focus_hours),
        "Total Focus",
    );
    render_stat(frame, columns[2], Mode::LongBreak, &cycles.to_string(), "Cycles");
}

fn render_stat(frame: &mut Frame, area: Rect, accent: Mode, value: &str, label: &str) {
    let lines = vec![
        Line::from(Span::styled(value.to_string(), Theme::stat_value(accent))),
        Line::from(Span::styled(label.to_string(), Theme::stat_label())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
