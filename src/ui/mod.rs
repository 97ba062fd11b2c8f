mod dial;
mod header;
mod layout;
mod mode_tabs;
mod settings;
mod stats;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header, state);
    dial::render(frame, app_layout.dial, state);
    mode_tabs::render(frame, app_layout.mode_tabs, state);
    stats::render(frame, app_layout.stats, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // Popup renders last, over everything else
    settings::render(frame, state);
}
