use crate::app::state::AppState;
use crate::ui::theme::Theme;
use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const KEY_HINTS: &str = "Space start/pause · r reset · 1/2/3 mode · s settings · q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if state.pomodoro.is_active() {
        parts.push(Span::styled(" ▶ RUNNING ", Theme::running_indicator()));
    } else {
        parts.push(Span::styled(" ⏸ PAUSED ", Theme::paused_indicator()));
    }

    parts.push(Span::styled(format!(" {} ", KEY_HINTS), Theme::status_bar()));

    // Wall clock on the right
    let clock = Local::now().format(" %H:%M ").to_string();
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + clock.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(clock, Theme::status_bar()));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
