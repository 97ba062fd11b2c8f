use crate::app::state::AppState;
use crate::config::DurationBounds;
use crate::pomodoro::Mode;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    if !state.settings.visible {
        return;
    }

    let area = frame.area();

    // Centered popup, min 44x10
    let popup_w = (area.width * 60 / 100)
        .max(44)
        .min(area.width.saturating_sub(4));
    let popup_h = 10u16.min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Settings — ↑/↓ select, ←/→ adjust, Esc close ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 5 || inner.width < 30 {
        return;
    }

    let mut lines: Vec<Line> = vec![Line::default()];
    for (i, mode) in Mode::ALL.iter().enumerate() {
        let selected = i == state.settings.selected;
        let bounds = DurationBounds::of(*mode);
        let minutes = state.pomodoro.durations().get(*mode);

        let marker = if selected { "❯ " } else { "  " };
        let label_style = if selected {
            Style::default()
                .fg(Theme::mode_color(*mode))
                .add_modifier(Modifier::BOLD)
        } else {
            Theme::tab_inactive()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{:<12}", mode.label()), label_style),
            Span::styled(format!("{:>3} min", minutes), label_style),
            Span::styled(
                format!("   ({}–{}, step {})", bounds.min, bounds.max, bounds.step),
                Theme::dim(),
            ),
        ]));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "Changes apply and save immediately",
        Theme::dim(),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    let padded = Rect::new(
        inner.x + 2,
        inner.y,
        inner.width.saturating_sub(4),
        inner.height,
    );
    frame.render_widget(paragraph, padded);
}
