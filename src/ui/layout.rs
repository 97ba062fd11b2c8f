use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub dial: Rect,
    pub mode_tabs: Rect,
    pub stats: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + mode badge
            Constraint::Min(9),    // Progress dial
            Constraint::Length(1), // Mode tabs
            Constraint::Length(2), // Stats row
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        dial: chunks[1],
        mode_tabs: chunks[2],
        stats: chunks[3],
        status_bar: chunks[4],
    }
}
