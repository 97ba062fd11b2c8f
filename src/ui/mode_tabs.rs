use crate::app::state::AppState;
use crate::pomodoro::Mode;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// One tab per mode, with its switch key. The active mode is highlighted in
/// its accent color.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let active = state.pomodoro.mode();
    let mut spans: Vec<Span> = Vec::new();
    for (i, mode) in Mode::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let label = format!(" [{}] {} ", i + 1, mode.label());
        if *mode == active {
            spans.push(Span::styled(label, Theme::mode_badge(*mode)));
        } else {
            spans.push(Span::styled(label, Theme::tab_inactive()));
        }
    }
    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
