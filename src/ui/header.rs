use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mode = state.pomodoro.mode();
    let lines = vec![
        Line::from(vec![
            Span::styled("toma", Style::default().fg(Theme::mode_color(mode))),
            Span::styled("tui", Theme::title()),
        ]),
        Line::from(Span::styled(
            format!("  {}  ", mode.label()),
            Theme::mode_badge(mode),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
