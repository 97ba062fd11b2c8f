//! The circular progress dial: a braille-drawn ring with the elapsed arc in
//! the mode color and the remaining time overlaid in the center.

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::canvas::{Canvas, Circle, Points};
use ratatui::widgets::Paragraph;
use std::f64::consts::{FRAC_PI_2, TAU};

const RING_RADIUS: f64 = 1.0;
const ARC_SAMPLES: usize = 720;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mode = state.pomodoro.mode();
    let progress = state.pomodoro.progress();
    let color = Theme::mode_color(mode);

    let arc = arc_points(progress);
    let canvas = Canvas::default()
        .x_bounds([-1.3, 1.3])
        .y_bounds([-1.3, 1.3])
        .paint(|ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: RING_RADIUS,
                color: Theme::ring_background(),
            });
            ctx.draw(&Points {
                coords: &arc,
                color,
            });
        });
    frame.render_widget(canvas, area);

    render_center(frame, area, state);
}

/// Points along the elapsed arc, from 12 o'clock going clockwise, matching
/// the original dial's sweep direction.
fn arc_points(progress: f64) -> Vec<(f64, f64)> {
    let progress = progress.clamp(0.0, 1.0);
    let samples = (progress * ARC_SAMPLES as f64).round() as usize;
    (0..=samples)
        .map(|i| {
            let theta = FRAC_PI_2 - (i as f64 / ARC_SAMPLES as f64) * TAU;
            (RING_RADIUS * theta.cos(), RING_RADIUS * theta.sin())
        })
        .collect()
}

/// MM:SS and the session counter, centered inside the ring. The overlay
/// rect is kept narrow so it never paints over the ring itself.
fn render_center(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.height < 4 || area.width < 16 {
        return;
    }
    let (minutes, seconds) = state.pomodoro.remaining();
    let session = state.pomodoro.completed_sessions() + 1;

    let width = 14u16;
    let center = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height / 2 - 1,
        width,
        2,
    );
    let lines = vec![
        Line::from(Span::styled(
            format!("{:02}:{:02}", minutes, seconds),
            Theme::time_display(),
        )),
        Line::from(Span::styled(format!("Session {}", session), Theme::dim())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
}
